use crate::error::{Error, Result};
use std::path::Path;

// Determine the content type of a file based on its extension
pub fn determine_content_type(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("flac") => "audio/flac",
        Some("ogg") => "audio/ogg",
        Some("m4a") => "audio/mp4",
        Some("aac") => "audio/aac",
        _ => "application/octet-stream",
    }
}

/// Validate a base URL
pub fn is_valid_url(url: &str) -> Result<()> {
    let parsed_url = match url::Url::parse(url) {
        Ok(url) => url,
        Err(_) => return Err(Error::InvalidConfig(format!("Invalid base URL: {url}"))),
    };

    // Check scheme - must be http or https
    match parsed_url.scheme() {
        "http" | "https" => {}
        _ => {
            return Err(Error::InvalidConfig(
                "Base URL must use http or https scheme".to_string(),
            ))
        }
    }

    match parsed_url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(Error::InvalidConfig(
            "Base URL must have a host".to_string(),
        )),
    }
}

/// Make an uploaded file name safe for storage.
///
/// Only the final path component is kept. Its stem keeps ASCII letters and
/// digits, everything else becomes `_`, and the result is lower-cased. The
/// extension is re-appended untouched.
pub fn sanitize_file_name(name: &str) -> String {
    let path = Path::new(name);
    let ext = path.extension().and_then(|ext| ext.to_str());
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(name);

    let safe_stem: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    match ext {
        Some(ext) => format!("{safe_stem}.{ext}"),
        None => safe_stem,
    }
}
