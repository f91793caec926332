use crate::config::Config;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::models::{
    DetectionResult, GetResultOptions, GetResultsOptions, ResultPage, UploadOptions,
    UploadResult, UploadSocialMediaOptions,
};
use crate::polling::{self, PollHandle, PollOutcome, PollingOptions};
use crate::{results, upload};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Client for interacting with the detection API.
///
/// Cloning is cheap; clones share one HTTP session.
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Create a new client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let http_client = HttpClient::new(config)?;
        Ok(Self {
            http_client: Arc::new(http_client),
        })
    }

    /// Upload a file for analysis
    pub async fn upload(&self, options: UploadOptions) -> Result<UploadResult> {
        upload::upload_file(&self.http_client, Path::new(&options.file_path)).await
    }

    /// Submit a social media link for analysis
    pub async fn upload_social_media(
        &self,
        options: UploadSocialMediaOptions,
    ) -> Result<UploadResult> {
        upload::upload_social_media_link(&self.http_client, &options.social_link).await
    }

    /// Get the analysis result for a specific request ID.
    ///
    /// Without options (or with zero attempts/interval) this is a single
    /// fetch; otherwise it waits for a terminal status.
    pub async fn get_result(
        &self,
        request_id: &str,
        options: Option<GetResultOptions>,
    ) -> Result<DetectionResult> {
        let opts = options.unwrap_or_default();
        match (opts.max_attempts, opts.polling_interval) {
            (Some(max_attempts), Some(interval)) if max_attempts > 0 && interval > 0 => {
                self.wait_for_result(
                    request_id,
                    PollingOptions {
                        polling_interval: Duration::from_millis(interval),
                        max_attempts,
                        ..Default::default()
                    },
                )
                .await
            }
            _ => polling::fetch_result(&self.http_client, request_id).await,
        }
    }

    /// Wait for a result to reach a terminal status
    pub async fn wait_for_result(
        &self,
        request_id: &str,
        options: PollingOptions,
    ) -> Result<DetectionResult> {
        let never_cancelled = CancellationToken::new();
        match polling::poll_until_complete(&self.http_client, request_id, &options, &never_cancelled)
            .await
        {
            PollOutcome::Complete(result) => Ok(result),
            PollOutcome::TimedOut(err) => Err(err),
            PollOutcome::Cancelled => Err(Error::UnknownError("Polling cancelled".to_string())),
        }
    }

    /// Poll for a result in the background.
    ///
    /// The returned handle yields exactly one notification (the result or a
    /// terminal error) unless it is cancelled first.
    pub fn poll_for_results(&self, request_id: &str, options: PollingOptions) -> PollHandle {
        let cancel = CancellationToken::new();
        let http_client = self.http_client.clone();
        let request_id = request_id.to_string();
        let token = cancel.clone();

        PollHandle::spawn(
            async move {
                polling::poll_until_complete(&http_client, &request_id, &options, &token).await
            },
            cancel,
        )
    }

    /// Get a paginated list of detection results with optional filters
    pub async fn get_results(&self, options: Option<GetResultsOptions>) -> Result<ResultPage> {
        let opts = options.unwrap_or_default();
        results::get_detection_results(&self.http_client, &opts).await
    }

    /// Upload a file and wait for its result
    pub async fn detect_file(&self, file_path: &str) -> Result<DetectionResult> {
        let upload_result = self
            .upload(UploadOptions {
                file_path: file_path.to_string(),
            })
            .await?;

        self.wait_for_result(&upload_result.request_id, PollingOptions::default())
            .await
    }

    /// Release the HTTP session. Safe to call more than once.
    pub fn close(&self) {
        self.http_client.close();
    }
}
