use detection_client::file::{get_file_info, resolve_file_type};
use detection_client::utils::validate_social_link;
use detection_client::ErrorKind;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;

#[tokio::test]
async fn test_supported_extensions_resolve_mime_and_keep_bytes() {
    let cases = [
        ("mp4", "video/mp4"),
        ("mov", "video/quicktime"),
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("png", "image/png"),
        ("gif", "image/gif"),
        ("webp", "image/webp"),
        ("flac", "audio/flac"),
        ("wav", "audio/wav"),
        ("mp3", "audio/mpeg"),
        ("m4a", "audio/mp4"),
        ("aac", "audio/aac"),
        ("alac", "audio/alac"),
        ("ogg", "audio/ogg"),
        ("txt", "text/plain"),
    ];

    let dir = tempdir().unwrap();
    for (ext, expected_mime) in cases {
        let file_path = dir.path().join(format!("sample.{ext}"));
        let content = format!("content for {ext}").into_bytes();
        File::create(&file_path)
            .unwrap()
            .write_all(&content)
            .unwrap();

        let info = get_file_info(&file_path).await.unwrap();
        assert_eq!(info.filename, format!("sample.{ext}"));
        assert_eq!(info.content, content);
        assert_eq!(info.mime_type, expected_mime);
    }
}

#[tokio::test]
async fn test_unsupported_extension_is_invalid_file() {
    let dir = tempdir().unwrap();
    for name in ["test.unknown", "clip.avi", "no_extension"] {
        let file_path = dir.path().join(name);
        File::create(&file_path).unwrap().write_all(b"test").unwrap();

        let err = get_file_info(&file_path).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFile, "{name}");
    }
}

#[tokio::test]
async fn test_oversized_file_is_file_too_large() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("large.txt");
    let (_, limit) = resolve_file_type(&file_path).unwrap();
    File::create(&file_path)
        .unwrap()
        .write_all(&vec![b'x'; limit as usize + 1])
        .unwrap();

    let err = get_file_info(&file_path).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileTooLarge);
    assert!(err.message().contains("File too large"));
}

#[tokio::test]
async fn test_file_at_limit_is_accepted() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("exact.txt");
    let (_, limit) = resolve_file_type(Path::new("exact.txt")).unwrap();
    File::create(&file_path)
        .unwrap()
        .write_all(&vec![b'x'; limit as usize])
        .unwrap();

    let info = get_file_info(&file_path).await.unwrap();
    assert_eq!(info.content.len() as u64, limit);
}

#[test]
fn test_link_validation() {
    assert!(validate_social_link("https://example.com").is_ok());

    for link in ["example.com", "ftp://x", "", "   "] {
        let err = validate_social_link(link).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest, "{link:?}");
    }
}
