use crate::error::{Error, Result};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Media category of a supported extension, with its upload size limit
#[derive(Debug)]
pub struct FileTypeConfig {
    pub extensions: &'static [(&'static str, &'static str)],
    pub size_limit: u64,
}

/// Extension → MIME type table, grouped by size limit.
///
/// This is the only place MIME types are resolved; content is never sniffed.
pub const SUPPORTED_FILE_TYPES: &[FileTypeConfig] = &[
    FileTypeConfig {
        extensions: &[("mp4", "video/mp4"), ("mov", "video/quicktime")],
        size_limit: 262144000, // 250 MB
    },
    FileTypeConfig {
        extensions: &[
            ("jpg", "image/jpeg"),
            ("jpeg", "image/jpeg"),
            ("png", "image/png"),
            ("gif", "image/gif"),
            ("webp", "image/webp"),
        ],
        size_limit: 52428800, // 50 MB
    },
    FileTypeConfig {
        extensions: &[
            ("flac", "audio/flac"),
            ("wav", "audio/wav"),
            ("mp3", "audio/mpeg"),
            ("m4a", "audio/mp4"),
            ("aac", "audio/aac"),
            ("alac", "audio/alac"),
            ("ogg", "audio/ogg"),
        ],
        size_limit: 20971520, // 20 MB
    },
    FileTypeConfig {
        extensions: &[("txt", "text/plain")],
        size_limit: 5242880, // 5 MB
    },
];

/// A validated file, ready for transfer
#[derive(Debug, Clone, PartialEq)]
pub struct FileInfo {
    pub filename: String,
    pub content: Vec<u8>,
    pub mime_type: &'static str,
}

/// Look up the MIME type and size limit for a path's extension (case-insensitive)
pub fn resolve_file_type(path: &Path) -> Option<(&'static str, u64)> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();

    SUPPORTED_FILE_TYPES.iter().find_map(|config| {
        config
            .extensions
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, mime)| (*mime, config.size_limit))
    })
}

/// Read at most `limit + 1` bytes, so a file that grew after the size check
/// is detected without loading all of it
async fn read_bounded(path: &Path, limit: u64) -> std::io::Result<Vec<u8>> {
    let file = tokio::fs::File::open(path).await?;
    let mut content = Vec::new();
    file.take(limit.saturating_add(1))
        .read_to_end(&mut content)
        .await?;
    Ok(content)
}

/// Validate a local file and load it for upload.
///
/// The size limit is checked against file metadata before any bytes are read.
pub async fn get_file_info(path: &Path) -> Result<FileInfo> {
    let display = path.display();

    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|_| Error::InvalidFile(format!("File not found: {display}")))?;
    if !metadata.is_file() {
        return Err(Error::InvalidFile(format!("File not found: {display}")));
    }

    let (mime_type, size_limit) = resolve_file_type(path).ok_or_else(|| {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        Error::InvalidFile(format!("Unsupported file type: .{extension}"))
    })?;

    if metadata.len() > size_limit {
        return Err(Error::FileTooLarge(format!(
            "File too large: {} bytes exceeds the {} byte limit for this file type",
            metadata.len(),
            size_limit
        )));
    }

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::InvalidFile("Invalid file name".to_string()))?
        .to_string();

    let content = read_bounded(path, size_limit)
        .await
        .map_err(|e| Error::InvalidFile(format!("Failed to read file {display}: {e}")))?;
    if content.len() as u64 > size_limit {
        return Err(Error::FileTooLarge(format!(
            "File too large: {display} grew past the {size_limit} byte limit while being read"
        )));
    }

    if content.is_empty() {
        return Err(Error::InvalidFile(format!("File is empty: {display}")));
    }

    log::debug!("Validated {filename} ({} bytes, {mime_type})", content.len());

    Ok(FileInfo {
        filename,
        content,
        mime_type,
    })
}
