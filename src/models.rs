use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A plain JSON number, or `None` for any other shape
fn number_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_f64())
}

/// A JSON string, or `None` for any other shape
fn string_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn string_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(string_or_none(deserializer)?.unwrap_or_default())
}

/// Options for uploading a file
#[derive(Debug, Clone, Serialize)]
pub struct UploadOptions {
    /// Path to the file to upload
    pub file_path: String,
}

/// Options for submitting a social media link
#[derive(Debug, Clone, Serialize)]
pub struct UploadSocialMediaOptions {
    /// Public URL of the post to analyze
    #[serde(rename = "socialLink")]
    pub social_link: String,
}

/// Response to a signed upload URL request.
///
/// Every field is optional on the wire; the upload pipeline decides what is
/// required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignedUrlResponse {
    #[serde(rename = "requestId", default)]
    pub request_id: Option<String>,

    #[serde(rename = "mediaId", default)]
    pub media_id: Option<String>,

    #[serde(default)]
    pub response: Option<SignedUrlDetails>,
}

/// Details of the signed URL response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignedUrlDetails {
    /// The presigned URL for uploading
    #[serde(rename = "signedUrl", default)]
    pub signed_url: Option<String>,
}

/// Response to a social media link submission
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialUploadResponse {
    #[serde(rename = "requestId", default)]
    pub request_id: Option<String>,
}

/// Result of an upload operation
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UploadResult {
    /// Unique identifier for the analysis job
    pub request_id: String,

    /// Unique identifier for the media; absent for link submissions
    #[serde(default)]
    pub media_id: Option<String>,
}

/// Options for getting a single result
#[derive(Debug, Clone, Default)]
pub struct GetResultOptions {
    /// Maximum number of attempts to get results
    pub max_attempts: Option<u32>,

    /// How long to wait between attempts, in milliseconds
    pub polling_interval: Option<u64>,
}

/// A model's raw prediction: a number, or a structured "not evaluated" explanation
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Prediction {
    Number(f64),
    NotEvaluated(Value),
}

/// Model-specific detection entry as returned by the API.
///
/// Fields of an unexpected shape read as empty rather than failing the
/// whole payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetectionModel {
    /// Name of the model
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,

    /// Raw status (FAKE, AUTHENTIC, NOT_APPLICABLE, ...)
    #[serde(default, deserialize_with = "string_or_empty")]
    pub status: String,

    #[serde(rename = "predictionNumber", default)]
    pub prediction_number: Option<Prediction>,

    /// Model score on a 0-100 scale; `None` when not a plain number
    #[serde(rename = "finalScore", default, deserialize_with = "number_or_none")]
    pub final_score: Option<f64>,
}

/// Summary metadata; only the final score is read
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryMetadata {
    #[serde(rename = "finalScore", default, deserialize_with = "number_or_none")]
    pub final_score: Option<f64>,
}

/// Summary of analysis results
#[derive(Debug, Clone, Deserialize)]
pub struct ResultsSummary {
    /// Raw overall status
    #[serde(default, deserialize_with = "string_or_none")]
    pub status: Option<String>,

    #[serde(default)]
    pub metadata: Option<SummaryMetadata>,
}

/// Result of an analysis as returned by the API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "requestId", default)]
    pub request_id: Option<String>,

    #[serde(rename = "overallStatus", default, deserialize_with = "string_or_none")]
    pub overall_status: Option<String>,

    #[serde(rename = "finalScore", default, deserialize_with = "number_or_none")]
    pub final_score: Option<f64>,

    #[serde(default)]
    pub models: Vec<DetectionModel>,

    #[serde(rename = "resultsSummary", default)]
    pub results_summary: Option<ResultsSummary>,
}

/// One page of raw results
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetectionResultList {
    #[serde(rename = "totalItems", default)]
    pub total_items: u32,

    #[serde(rename = "totalPages", default)]
    pub total_pages: u32,

    #[serde(rename = "currentPage", default)]
    pub current_page: u32,

    #[serde(rename = "currentPageItemsCount", default)]
    pub current_page_items_count: u32,

    #[serde(rename = "mediaList", default)]
    pub items: Vec<AnalysisResult>,
}

/// Canonical detection status.
///
/// Raw values without a canonical counterpart are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DetectionStatus {
    Authentic,
    Manipulated,
    Analyzing,
    Error,
    Other(String),
}

impl DetectionStatus {
    /// Map a raw service status onto the canonical set
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "AUTHENTIC" => DetectionStatus::Authentic,
            "FAKE" | "MANIPULATED" => DetectionStatus::Manipulated,
            "ANALYZING" => DetectionStatus::Analyzing,
            "ERROR" => DetectionStatus::Error,
            other => DetectionStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DetectionStatus::Authentic => "AUTHENTIC",
            DetectionStatus::Manipulated => "MANIPULATED",
            DetectionStatus::Analyzing => "ANALYZING",
            DetectionStatus::Error => "ERROR",
            DetectionStatus::Other(raw) => raw,
        }
    }

    /// Whether the service has finished analysis
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DetectionStatus::Analyzing)
    }
}

impl fmt::Display for DetectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DetectionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Normalized per-model result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelResult {
    pub name: String,

    pub status: DetectionStatus,

    /// Detection score (0-1 range, None when the model did not evaluate)
    pub score: Option<f64>,
}

/// Normalized detection result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionResult {
    pub request_id: Option<String>,

    pub status: DetectionStatus,

    /// Confidence score (0-1 range, higher is more likely to be manipulated)
    pub score: Option<f64>,

    /// Results from individual detection models, in service order
    pub models: Vec<ModelResult>,
}

/// Options for getting results with pagination and filtering
#[derive(Debug, Clone, Default)]
pub struct GetResultsOptions {
    /// Page number (0-based)
    pub page_number: Option<u32>,

    /// Number of items per page
    pub size: Option<u32>,

    /// Filter by name
    pub name: Option<String>,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,

    /// Maximum number of fetch attempts
    pub max_attempts: Option<u32>,

    /// How long to wait between attempts, in milliseconds
    pub polling_interval: Option<u64>,
}

/// Normalized page of detection results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultPage {
    pub total_items: u32,
    pub total_pages: u32,
    /// Current page number (0-based)
    pub current_page: u32,
    pub current_page_items_count: u32,
    pub items: Vec<DetectionResult>,
}
