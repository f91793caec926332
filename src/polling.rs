//! Bounded waiting for an analysis job to reach a terminal status.
//!
//! The engine moves from polling to `Complete` or `TimedOut`, or stops with
//! `Cancelled` when its [`CancellationToken`] fires. Every failed fetch is
//! counted as an attempt, so the only failure it reports is a timeout. Spawned polls deliver
//! their outcome through a oneshot channel, so a caller observes exactly one
//! terminal notification, or none after cancellation.

use crate::error::{Error, Result};
use crate::http::{api_paths, HttpClient};
use crate::models::{AnalysisResult, DetectionResult};
use crate::normalize::normalize_result;
use log::{debug, warn};
use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Default wait between poll attempts
pub const DEFAULT_POLLING_INTERVAL: Duration = Duration::from_millis(2000);

/// Default number of poll attempts
pub const DEFAULT_MAX_ATTEMPTS: u32 = 150;

/// Default wall-clock budget for a whole poll sequence
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Polling parameters, passed explicitly per call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollingOptions {
    pub polling_interval: Duration,
    pub max_attempts: u32,
    /// Budget measured from the first attempt, not per request
    pub timeout: Duration,
}

impl Default for PollingOptions {
    fn default() -> Self {
        Self {
            polling_interval: DEFAULT_POLLING_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Terminal state of a poll sequence
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    Complete(DetectionResult),
    TimedOut(Error),
    Cancelled,
}

impl PollOutcome {
    /// The notification this outcome delivers; `None` for `Cancelled`
    pub fn into_notification(self) -> Option<Result<DetectionResult>> {
        match self {
            PollOutcome::Complete(result) => Some(Ok(result)),
            PollOutcome::TimedOut(err) => Some(Err(err)),
            PollOutcome::Cancelled => None,
        }
    }
}

/// Fetch and normalize one result without waiting
pub async fn fetch_result(http: &HttpClient, request_id: &str) -> Result<DetectionResult> {
    let path = format!("{}/{}", api_paths::MEDIA_RESULT, request_id);
    let raw: AnalysisResult = http.get(&path).await?;
    Ok(normalize_result(&raw))
}

/// Poll until the job reaches a terminal status, attempts run out, the
/// timeout elapses, or `cancel` fires.
///
/// Fetch errors of any kind count as failed attempts and are retried; when
/// the budget is exhausted the outcome is a `timeout` error, never the last
/// fetch error.
pub async fn poll_until_complete(
    http: &HttpClient,
    request_id: &str,
    options: &PollingOptions,
    cancel: &CancellationToken,
) -> PollOutcome {
    let started = Instant::now();
    let mut attempts = 0;

    loop {
        attempts += 1;
        debug!("Polling {request_id} (attempt {attempts}/{})", options.max_attempts);

        let fetched = tokio::select! {
            _ = cancel.cancelled() => return PollOutcome::Cancelled,
            fetched = fetch_result(http, request_id) => fetched,
        };

        match fetched {
            Ok(result) if result.status.is_terminal() => return PollOutcome::Complete(result),
            Ok(_) => {}
            Err(err) => warn!("Polling {request_id} failed on attempt {attempts}: {err}"),
        }

        if attempts >= options.max_attempts || started.elapsed() >= options.timeout {
            return PollOutcome::TimedOut(Error::Timeout(format!(
                "Timed out waiting for result {request_id} after {attempts} attempts ({} ms)",
                started.elapsed().as_millis()
            )));
        }

        tokio::select! {
            _ = cancel.cancelled() => return PollOutcome::Cancelled,
            _ = tokio::time::sleep(options.polling_interval) => {}
        }
    }
}

/// Handle to a poll running in the background
pub struct PollHandle {
    receiver: oneshot::Receiver<Result<DetectionResult>>,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl PollHandle {
    pub(crate) fn spawn<F>(poll: F, cancel: CancellationToken) -> Self
    where
        F: std::future::Future<Output = PollOutcome> + Send + 'static,
    {
        let (sender, receiver) = oneshot::channel();
        let task = tokio::spawn(async move {
            if let Some(notification) = poll.await.into_notification() {
                // The receiver may be gone if the caller dropped the handle
                let _ = sender.send(notification);
            }
        });

        Self {
            receiver,
            cancel,
            task,
        }
    }

    /// Stop polling; no notification is delivered afterwards
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Token that cancels this poll when fired
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Wait for the terminal notification; `None` if the poll was cancelled
    pub async fn outcome(self) -> Option<Result<DetectionResult>> {
        self.receiver.await.ok()
    }

    /// Whether the background task has finished
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
