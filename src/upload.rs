use crate::error::{Error, Result};
use crate::file::{get_file_info, FileInfo};
use crate::http::{api_paths, HttpClient};
use crate::models::{SignedUrlResponse, SocialUploadResponse, UploadResult};
use crate::utils::validate_social_link;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::path::Path;

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Decode a response object; an empty or non-object body decodes as all
/// fields absent so the caller's required-field checks report it
fn decode_response<T: DeserializeOwned + Default>(
    response: Value,
) -> std::result::Result<T, serde_json::Error> {
    match response {
        Value::Object(_) => serde_json::from_value(response),
        _ => Ok(T::default()),
    }
}

/// Request a presigned upload destination for `file_name`
pub async fn get_signed_url(http: &HttpClient, file_name: &str) -> Result<SignedUrlResponse> {
    let payload = json!({ "fileName": file_name });
    let response: Value = http.post(api_paths::SIGNED_URL, Some(&payload)).await?;

    decode_response(response).map_err(|e| Error::UploadFailed(format!("Upload failed: {e}")))
}

/// Transfer the file's bytes to a presigned URL
pub async fn upload_to_signed_url(http: &HttpClient, signed_url: &str, file: FileInfo) -> Result<()> {
    debug!(
        "Uploading {} ({} bytes) to presigned URL",
        file.filename,
        file.content.len()
    );
    http.put(signed_url, file.content, file.mime_type).await
}

/// Upload a local file: validate, obtain a signed URL, then transfer the bytes
pub async fn upload_file(http: &HttpClient, file_path: &Path) -> Result<UploadResult> {
    let file = get_file_info(file_path).await?;

    let signed = get_signed_url(http, &file.filename).await?;
    let (request_id, media_id, signed_url) = match (
        non_empty(signed.request_id),
        non_empty(signed.media_id),
        non_empty(signed.response.and_then(|r| r.signed_url)),
    ) {
        (Some(request_id), Some(media_id), Some(signed_url)) => (request_id, media_id, signed_url),
        _ => return Err(Error::ServerError("Invalid response from API".to_string())),
    };

    upload_to_signed_url(http, &signed_url, file).await?;
    debug!("Uploaded {} as request {request_id}", file_path.display());

    Ok(UploadResult {
        request_id,
        media_id: Some(media_id),
    })
}

/// Submit a social media link for analysis; no bytes are transferred
pub async fn upload_social_media_link(http: &HttpClient, social_link: &str) -> Result<UploadResult> {
    validate_social_link(social_link)?;

    let payload = json!({ "socialLink": social_link });
    let response: Value = http.post(api_paths::SOCIAL_MEDIA, Some(&payload)).await?;
    let response: SocialUploadResponse = decode_response(response).map_err(|e| {
        Error::UploadFailed(format!("Social media link upload failed: {e}"))
    })?;

    let request_id = non_empty(response.request_id).ok_or_else(|| {
        Error::ServerError("Invalid response from API - missing requestId".to_string())
    })?;
    debug!("Submitted social media link as request {request_id}");

    Ok(UploadResult {
        request_id,
        media_id: None,
    })
}
