//! # Detection Client
//!
//! Client runtime for a remote media-authenticity detection service. Files and
//! social media links are submitted for analysis, the analysis job is tracked
//! to completion, and the service's raw responses are normalized into stable
//! result types.
//!
//! ## Basic Usage Example
//!
//! ```no_run
//! use detection_client::{Client, Config, GetResultOptions, UploadOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(Config {
//!         api_key: std::env::var("REALITY_DEFENDER_API_KEY")?,
//!         ..Default::default()
//!     })?;
//!
//!     // Upload a file for analysis
//!     let upload_result = client.upload(UploadOptions {
//!         file_path: "./image.jpg".to_string(),
//!     }).await?;
//!
//!     // Wait for the analysis result
//!     let result = client
//!         .get_result(
//!             &upload_result.request_id,
//!             Some(GetResultOptions {
//!                 max_attempts: Some(30),
//!                 polling_interval: Some(2000),
//!             }),
//!         )
//!         .await?;
//!
//!     println!("Status: {}", result.status);
//!     if let Some(score) = result.score {
//!         println!("Score: {:.4} ({:.1}%)", score, score * 100.0);
//!     }
//!
//!     client.close();
//!     Ok(())
//! }
//! ```
//!
//! ## Background Polling
//!
//! ```no_run
//! use detection_client::{Client, Config, PollingOptions, UploadSocialMediaOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(Config {
//!         api_key: std::env::var("REALITY_DEFENDER_API_KEY")?,
//!         ..Default::default()
//!     })?;
//!
//!     let upload = client
//!         .upload_social_media(UploadSocialMediaOptions {
//!             social_link: "https://www.youtube.com/watch?v=6O0fySNw-Lw".to_string(),
//!         })
//!         .await?;
//!
//!     let handle = client.poll_for_results(&upload.request_id, PollingOptions::default());
//!     match handle.outcome().await {
//!         Some(Ok(result)) => println!("Status: {}", result.status),
//!         Some(Err(err)) => println!("Error: {} (Code: {})", err, err.kind()),
//!         None => println!("Polling cancelled"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Getting Results with Pagination
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use detection_client::{Client, Config, GetResultsOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(Config {
//!         api_key: std::env::var("REALITY_DEFENDER_API_KEY")?,
//!         ..Default::default()
//!     })?;
//!
//!     let options = GetResultsOptions {
//!         page_number: Some(0),
//!         size: Some(10),
//!         name: Some("test".to_string()),
//!         start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
//!         end_date: NaiveDate::from_ymd_opt(2024, 12, 31),
//!         ..Default::default()
//!     };
//!
//!     let results = client.get_results(Some(options)).await?;
//!
//!     println!("Total Results: {}", results.total_items);
//!     println!("Current Page: {} of {}", results.current_page + 1, results.total_pages);
//!
//!     for result in &results.items {
//!         println!("Status: {}", result.status);
//!         if let Some(score) = result.score {
//!             println!("Score: {:.4}", score);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
pub mod file;
pub mod http;
mod models;
pub mod normalize;
pub mod polling;
pub mod results;
pub mod upload;
pub mod utils;

// Re-exports
pub use client::Client;
pub use config::{
    Config, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS,
};
pub use error::{Error, ErrorKind, Result};
pub use models::{
    AnalysisResult, DetectionModel, DetectionResult, DetectionResultList, DetectionStatus,
    GetResultOptions, GetResultsOptions, ModelResult, Prediction, ResultPage, ResultsSummary,
    SignedUrlDetails, SignedUrlResponse, SocialUploadResponse, SummaryMetadata, UploadOptions,
    UploadResult, UploadSocialMediaOptions,
};
pub use polling::{PollHandle, PollOutcome, PollingOptions};
