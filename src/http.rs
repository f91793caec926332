use crate::config::Config;
use crate::error::{Error, Result};
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, ClientBuilder, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Constants for API paths
pub mod api_paths {
    /// Path for requesting a presigned upload URL
    pub const SIGNED_URL: &str = "/api/files/aws-presigned";
    /// Path for submitting a social media link
    pub const SOCIAL_MEDIA: &str = "/api/files/social";
    /// Path for retrieving a single media result
    pub const MEDIA_RESULT: &str = "/api/media/users";
    /// Path for retrieving pages of media results
    pub const ALL_MEDIA_RESULTS: &str = "/api/v2/media/users/pages";
}

/// Error code the service returns on 400 when the account tier lacks access
pub const FREE_TIER_ERROR_CODE: &str = "free-tier-not-allowed";

const USER_AGENT: &str = concat!("detection-client/", env!("CARGO_PKG_VERSION"));

/// A file attached to a multipart request
#[derive(Debug, Clone)]
pub struct FilePart {
    pub field: String,
    pub filename: String,
    pub content: Vec<u8>,
    pub mime_type: String,
}

/// HTTP client for making API requests.
///
/// The underlying session is created on first use and shared by every call
/// until [`HttpClient::close`].
pub struct HttpClient {
    session: Mutex<Option<ReqwestClient>>,
    config: Config,
    #[cfg(test)]
    sessions_built: std::sync::atomic::AtomicUsize,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            session: Mutex::new(None),
            config,
            #[cfg(test)]
            sessions_built: std::sync::atomic::AtomicUsize::new(0),
        })
    }

    /// Return the live session, creating it if needed.
    ///
    /// The lock is held only while building the session, never across I/O.
    fn ensure_session(&self) -> Result<ReqwestClient> {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(client) = session.as_ref() {
            return Ok(client.clone());
        }

        debug!("Creating HTTP session for {}", self.config.get_base_url());
        let client = ClientBuilder::new()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(self.config.get_timeout_seconds()))
            .build()?;
        #[cfg(test)]
        self.sessions_built
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        *session = Some(client.clone());
        Ok(client)
    }

    /// Whether a session is currently open
    pub fn has_session(&self) -> bool {
        self.session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Release the session. Closing an already closed client is a no-op.
    pub fn close(&self) {
        let closed = self
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if closed.is_some() {
            debug!("Closed HTTP session");
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.get_base_url(), path)
    }

    /// Make a GET request to the specified path
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_with_params(path, &[]).await
    }

    /// Make a GET request with query parameters
    pub async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let session = self.ensure_session()?;
        let mut request = session.get(self.url(path));
        if !params.is_empty() {
            request = request.query(params);
        }

        debug!("GET {path}");
        self.send(request).await
    }

    /// Make a POST request with an optional JSON body
    pub async fn post<T: DeserializeOwned, D: Serialize + ?Sized>(
        &self,
        path: &str,
        data: Option<&D>,
    ) -> Result<T> {
        let session = self.ensure_session()?;
        let mut request = session.post(self.url(path));
        if let Some(data) = data {
            request = request.json(data);
        }

        debug!("POST {path}");
        self.send(request).await
    }

    /// Make a multipart POST request carrying form fields and files
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, &str)],
        files: Vec<FilePart>,
    ) -> Result<T> {
        let session = self.ensure_session()?;

        let mut form = Form::new();
        for (name, value) in fields {
            form = form.text(name.to_string(), value.to_string());
        }
        for file in files {
            let part = Part::bytes(file.content)
                .file_name(file.filename)
                .mime_str(&file.mime_type)?;
            form = form.part(file.field, part);
        }

        debug!("POST {path} (multipart)");
        self.send(session.post(self.url(path)).multipart(form)).await
    }

    /// Make a PUT request to upload data to a URL (used for presigned URLs)
    pub async fn put(&self, url: &str, data: Vec<u8>, content_type: &str) -> Result<()> {
        let session = self.ensure_session()?;

        // No X-API-KEY: the signed URL carries its own authorization
        let response = session
            .put(url)
            .header("Content-Type", content_type)
            .body(data)
            .send()
            .await
            .map_err(|e| Error::UploadFailed(format!("Upload failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::UploadFailed(format!(
                "Upload failed: presigned URL returned {status}: {body}"
            )));
        }

        Ok(())
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request
            .header("X-API-KEY", &self.config.api_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let value = classify_response(status, &body)?;

        serde_json::from_value(value)
            .map_err(|e| Error::ServerError(format!("Invalid response from API: {e}")))
    }
}

/// Classify a response by status code and body.
///
/// Error bodies that are missing or malformed fall back to "Unknown error"
/// and are still classified by status code.
pub fn classify_response(status: StatusCode, body: &[u8]) -> Result<Value> {
    if status.is_success() {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        return serde_json::from_slice(body)
            .map_err(|e| Error::ServerError(format!("Invalid JSON response: {e}")));
    }

    let parsed = serde_json::from_slice::<Value>(body).ok();
    let field = |name: &str| {
        parsed
            .as_ref()
            .and_then(|v| v.get(name))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    let message = field("response").unwrap_or_else(|| "Unknown error".to_string());

    Err(match status {
        StatusCode::UNAUTHORIZED => Error::Unauthorized("Unauthorized: Invalid API key".to_string()),
        StatusCode::NOT_FOUND => Error::NotFound("Resource not found".to_string()),
        StatusCode::BAD_REQUEST => {
            if field("code").as_deref() == Some(FREE_TIER_ERROR_CODE) {
                Error::Unauthorized(message)
            } else {
                Error::InvalidRequest(format!("Invalid request: {message}"))
            }
        }
        _ => Error::ServerError(format!("API error: {message}")),
    })
}
