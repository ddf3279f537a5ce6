use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Size limit of the built-in constraints (25 MB)
pub const DEFAULT_MAX_FILE_SIZE_MB: u64 = 25;

/// Upload constraints served by `GET /upload/constraints`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UploadConstraints {
    /// Maximum accepted size in bytes
    #[serde(rename = "maxFileSize")]
    pub max_file_size: u64,

    /// The same limit in megabytes, for display only
    #[serde(rename = "maxFileSizeMB")]
    pub max_file_size_mb: u64,

    /// MIME types matched exactly against the declared type
    #[serde(rename = "acceptedTypes")]
    pub accepted_types: Vec<String>,

    /// Filename suffixes such as `.mp3`, matched against the lower-cased name
    #[serde(rename = "acceptedExtensions")]
    pub accepted_extensions: Vec<String>,
}

impl Default for UploadConstraints {
    /// Limits used when the backend cannot be reached
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE_MB * 1024 * 1024,
            max_file_size_mb: DEFAULT_MAX_FILE_SIZE_MB,
            accepted_types: vec![
                "audio/mpeg".to_string(),
                "audio/wav".to_string(),
                "audio/mp3".to_string(),
            ],
            accepted_extensions: vec![".mp3".to_string(), ".wav".to_string()],
        }
    }
}

impl UploadConstraints {
    /// Short hint for upload prompts, e.g. `MP3 / WAV • Max 25MB`
    pub fn format_hint(&self) -> String {
        let formats = self
            .accepted_extensions
            .iter()
            .map(|ext| ext.strip_prefix('.').unwrap_or(ext).to_uppercase())
            .collect::<Vec<_>>()
            .join(" / ");

        format!("{formats} • Max {}MB", self.max_file_size_mb)
    }

    /// Comma separated types and extensions, suitable for a file picker filter
    pub fn accept_list(&self) -> String {
        self.accepted_types
            .iter()
            .chain(self.accepted_extensions.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Serializable summary with a formatted size
    pub fn summary(&self) -> ConstraintsSummary {
        ConstraintsSummary {
            max_size: self.max_file_size,
            max_size_formatted: format!("{}MB", self.max_file_size_mb),
            accepted_types: self.accepted_types.clone(),
            accepted_extensions: self.accepted_extensions.clone(),
        }
    }
}

/// Constraints as presented to clients
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConstraintsSummary {
    #[serde(rename = "maxSize")]
    pub max_size: u64,

    #[serde(rename = "maxSizeFormatted")]
    pub max_size_formatted: String,

    #[serde(rename = "acceptedTypes")]
    pub accepted_types: Vec<String>,

    #[serde(rename = "acceptedExtensions")]
    pub accepted_extensions: Vec<String>,
}

/// A file the user wants to upload, before any transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Declared MIME type
    pub mime_type: String,

    /// File name as given by the user
    pub name: String,

    /// Size in bytes
    pub size: u64,
}

impl CandidateFile {
    pub fn new(mime_type: impl Into<String>, name: impl Into<String>, size: u64) -> Self {
        Self {
            mime_type: mime_type.into(),
            name: name.into(),
            size,
        }
    }

    /// Describe a local file. The MIME type is guessed from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path).await.map_err(|err| {
            Error::InvalidFile(format!("Cannot read {}: {err}", path.display()))
        })?;

        if !metadata.is_file() {
            return Err(Error::InvalidFile(format!(
                "Not a regular file: {}",
                path.display()
            )));
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::InvalidFile("Invalid file name".to_string()))?;

        Ok(Self::new(
            crate::utils::determine_content_type(path),
            name,
            metadata.len(),
        ))
    }
}
