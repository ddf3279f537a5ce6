use crate::models::{CandidateFile, UploadConstraints};
use std::fmt;

/// Why a candidate file was turned away
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Neither the declared type nor the file name matched
    UnsupportedType { extensions: Vec<String> },

    /// The file is larger than `maxFileSize`
    TooLarge { max_mb: u64 },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::UnsupportedType { extensions } => {
                write!(f, "Only {} files supported", extensions.join(", ").to_uppercase())
            }
            Rejection::TooLarge { max_mb } => write!(f, "Max file size is {max_mb}MB"),
        }
    }
}

/// Check a candidate against the constraints.
///
/// The type check runs first, so a file that is both the wrong type and too
/// large is reported as the wrong type. Extensions in the constraints are
/// compared as given; only the file name is lower-cased.
pub fn check_file(file: &CandidateFile, constraints: &UploadConstraints) -> Option<Rejection> {
    let name = file.name.to_lowercase();
    let type_accepted = constraints.accepted_types.iter().any(|t| *t == file.mime_type)
        || constraints
            .accepted_extensions
            .iter()
            .any(|ext| name.ends_with(ext.as_str()));

    if !type_accepted {
        log::debug!(
            "rejecting {}: type {} not accepted",
            file.name,
            file.mime_type
        );
        return Some(Rejection::UnsupportedType {
            extensions: constraints.accepted_extensions.clone(),
        });
    }

    if file.size > constraints.max_file_size {
        log::debug!(
            "rejecting {}: {} bytes exceeds {}",
            file.name,
            file.size,
            constraints.max_file_size
        );
        return Some(Rejection::TooLarge {
            max_mb: constraints.max_file_size_mb,
        });
    }

    None
}

/// Validate a candidate, returning a human-readable reason when it is rejected
pub fn validate_file(file: &CandidateFile, constraints: &UploadConstraints) -> Option<String> {
    check_file(file, constraints).map(|rejection| rejection.to_string())
}
