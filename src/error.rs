use thiserror::Error;

/// Custom result type for the client
pub type Result<T> = std::result::Result<T, Error>;

/// Machine-checkable classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Unauthorized,
    NotFound,
    InvalidRequest,
    ServerError,
    InvalidFile,
    FileTooLarge,
    UploadFailed,
    Timeout,
    UnknownError,
}

impl ErrorKind {
    /// Stable snake_case code for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidRequest => "invalid_request",
            ErrorKind::ServerError => "server_error",
            ErrorKind::InvalidFile => "invalid_file",
            ErrorKind::FileTooLarge => "file_too_large",
            ErrorKind::UploadFailed => "upload_failed",
            ErrorKind::Timeout => "timeout",
            ErrorKind::UnknownError => "unknown_error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by the detection client.
///
/// Every variant carries the full human-readable message; `Display` prints it
/// verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Credential missing or rejected
    #[error("{0}")]
    Unauthorized(String),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Request rejected by validation, locally or by the service
    #[error("{0}")]
    InvalidRequest(String),

    /// Service-side failure or transport fault
    #[error("{0}")]
    ServerError(String),

    /// File missing, unreadable or of an unsupported type
    #[error("{0}")]
    InvalidFile(String),

    /// File exceeds the limit for its media category
    #[error("{0}")]
    FileTooLarge(String),

    /// Upload failed
    #[error("{0}")]
    UploadFailed(String),

    /// Waiting for a result ran out of attempts or time
    #[error("{0}")]
    Timeout(String),

    /// Unknown error
    #[error("{0}")]
    UnknownError(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Unauthorized(_) => ErrorKind::Unauthorized,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::InvalidRequest(_) => ErrorKind::InvalidRequest,
            Error::ServerError(_) => ErrorKind::ServerError,
            Error::InvalidFile(_) => ErrorKind::InvalidFile,
            Error::FileTooLarge(_) => ErrorKind::FileTooLarge,
            Error::UploadFailed(_) => ErrorKind::UploadFailed,
            Error::Timeout(_) => ErrorKind::Timeout,
            Error::UnknownError(_) => ErrorKind::UnknownError,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Error::Unauthorized(msg)
            | Error::NotFound(msg)
            | Error::InvalidRequest(msg)
            | Error::ServerError(msg)
            | Error::InvalidFile(msg)
            | Error::FileTooLarge(msg)
            | Error::UploadFailed(msg)
            | Error::Timeout(msg)
            | Error::UnknownError(msg) => msg,
        }
    }
}

/// Transport-level faults (connection refused, timeout, DNS) are server errors.
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::ServerError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, ErrorKind};

    #[test]
    fn test_error_display() {
        let errors = [
            (
                Error::Unauthorized("Unauthorized: Invalid API key".to_string()),
                "Unauthorized: Invalid API key",
            ),
            (
                Error::NotFound("Resource not found".to_string()),
                "Resource not found",
            ),
            (
                Error::ServerError("API error: internal error".to_string()),
                "API error: internal error",
            ),
            (
                Error::InvalidFile("File not found: a.jpg".to_string()),
                "File not found: a.jpg",
            ),
            (
                Error::UploadFailed("Upload failed: connection error".to_string()),
                "Upload failed: connection error",
            ),
            (
                Error::InvalidRequest("Invalid request: missing parameter".to_string()),
                "Invalid request: missing parameter",
            ),
        ];

        for (error, expected_message) in errors {
            assert_eq!(error.to_string(), expected_message);
            assert_eq!(error.message(), expected_message);
        }
    }

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (Error::Unauthorized(String::new()), "unauthorized"),
            (Error::NotFound(String::new()), "not_found"),
            (Error::InvalidRequest(String::new()), "invalid_request"),
            (Error::ServerError(String::new()), "server_error"),
            (Error::InvalidFile(String::new()), "invalid_file"),
            (Error::FileTooLarge(String::new()), "file_too_large"),
            (Error::UploadFailed(String::new()), "upload_failed"),
            (Error::Timeout(String::new()), "timeout"),
            (Error::UnknownError(String::new()), "unknown_error"),
        ];

        for (error, code) in cases {
            assert_eq!(error.kind().as_str(), code);
            assert_eq!(error.kind().to_string(), code);
        }
    }

    #[test]
    fn test_kind_is_comparable() {
        let err = Error::Timeout("Polling timed out after 2 attempts".to_string());
        assert_eq!(err.kind(), ErrorKind::Timeout);
        assert_ne!(err.kind(), ErrorKind::NotFound);
    }
}
