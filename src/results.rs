use crate::error::{Error, Result};
use crate::http::{api_paths, HttpClient};
use crate::models::{DetectionResultList, GetResultsOptions, ResultPage};
use crate::normalize::format_result_list;
use log::{debug, warn};
use std::time::Duration;
use tokio::time::sleep;

/// Default page size
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Default number of listing attempts
pub const DEFAULT_LIST_ATTEMPTS: u32 = 5;

/// Default wait between listing attempts, in milliseconds
pub const DEFAULT_LIST_INTERVAL_MS: u64 = 2000;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Build query parameters; absent filters are omitted, not sent empty
fn query_params(options: &GetResultsOptions) -> Vec<(&'static str, String)> {
    let mut params = vec![(
        "size",
        options.size.unwrap_or(DEFAULT_PAGE_SIZE).to_string(),
    )];

    if let Some(ref name) = options.name {
        params.push(("name", name.clone()));
    }
    if let Some(start_date) = options.start_date {
        params.push(("startDate", start_date.format(DATE_FORMAT).to_string()));
    }
    if let Some(end_date) = options.end_date {
        params.push(("endDate", end_date.format(DATE_FORMAT).to_string()));
    }

    params
}

/// Fetch one raw page of media results
pub async fn get_media_results(
    http: &HttpClient,
    options: &GetResultsOptions,
) -> Result<DetectionResultList> {
    let page_number = options.page_number.unwrap_or(0);
    let path = format!("{}/{}", api_paths::ALL_MEDIA_RESULTS, page_number);

    let params = query_params(options);
    let param_refs: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();

    http.get_with_params(&path, &param_refs).await
}

/// Fetch and normalize a page of results, retrying transient failures.
///
/// After the last failed attempt the fault is reported as `unknown_error`.
pub async fn get_detection_results(
    http: &HttpClient,
    options: &GetResultsOptions,
) -> Result<ResultPage> {
    let max_attempts = options.max_attempts.unwrap_or(DEFAULT_LIST_ATTEMPTS).max(1);
    let interval = Duration::from_millis(
        options
            .polling_interval
            .unwrap_or(DEFAULT_LIST_INTERVAL_MS),
    );

    let mut attempt = 1;
    loop {
        match get_media_results(http, options).await {
            Ok(raw) => {
                debug!(
                    "Fetched results page {} ({} items)",
                    raw.current_page, raw.current_page_items_count
                );
                return Ok(format_result_list(&raw));
            }
            Err(err) if attempt >= max_attempts => {
                return Err(Error::UnknownError(format!(
                    "Failed to get detection results after {attempt} attempts: {err}"
                )));
            }
            Err(err) => {
                warn!("Fetching results failed (attempt {attempt}/{max_attempts}): {err}");
                attempt += 1;
                sleep(interval).await;
            }
        }
    }
}
