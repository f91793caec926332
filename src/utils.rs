use crate::error::{Error, Result};
use url::Url;

/// Validate a social media link: http(s) scheme and a non-empty host
pub fn validate_social_link(link: &str) -> Result<()> {
    if link.trim().is_empty() {
        return Err(Error::InvalidRequest(
            "Social media link is required".to_string(),
        ));
    }

    let invalid = || Error::InvalidRequest(format!("Invalid social media link: {link}"));

    let parsed = Url::parse(link).map_err(|_| invalid())?;

    match parsed.scheme() {
        "http" | "https" => {}
        _ => return Err(invalid()),
    }

    match parsed.host_str() {
        Some(host) if !host.trim().is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::validate_social_link;
    use crate::ErrorKind;

    #[test]
    fn test_valid_links() {
        let links = [
            "https://example.com",
            "http://www.example.com",
            "https://www.example.com/path/to/content",
            "https://www.example.com/video?id=123&t=456",
            "https://www.example.com/page#section",
            "https://subdomain.example.com",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://twitter.com/username/status/123456789",
            "https://www.instagram.com/p/ABC123/",
            "https://www.tiktok.com/@username/video/123456789",
        ];

        for link in links {
            assert!(validate_social_link(link).is_ok(), "rejected {link}");
        }
    }

    #[test]
    fn test_invalid_links() {
        for link in [
            "example.com",
            "www.example.com",
            "ftp://x",
            "file:///path/to/file",
            "https://",
            "not a url",
            "javascript:alert(1)",
        ] {
            let err = validate_social_link(link).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidRequest, "{link}");
            assert_eq!(err.message(), format!("Invalid social media link: {link}"));
        }
    }

    #[test]
    fn test_empty_links() {
        for link in ["", "   ", "\t\n"] {
            let err = validate_social_link(link).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidRequest);
            assert_eq!(err.message(), "Social media link is required");
        }
    }
}
