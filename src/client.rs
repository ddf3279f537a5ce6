use crate::config::Config;
use crate::error::Result;
use crate::http::{api_paths, HttpClient};
use crate::models::{CandidateFile, UploadConstraints};
use crate::validation::validate_file;
use std::path::Path;

/// Client for the backend's upload constraints
pub struct Client {
    http_client: HttpClient,
}

impl Client {
    /// Create a new client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let http_client = HttpClient::new(config)?;
        Ok(Self { http_client })
    }

    /// Fetch the current upload constraints.
    ///
    /// One request per call; nothing is cached or retried. Field values are
    /// returned as served.
    pub async fn fetch_constraints(&self) -> Result<UploadConstraints> {
        self.http_client
            .get::<UploadConstraints>(api_paths::UPLOAD_CONSTRAINTS)
            .await
    }

    /// Fetch the constraints, using the built-in defaults if the fetch fails
    pub async fn fetch_constraints_or_default(&self) -> UploadConstraints {
        match self.fetch_constraints().await {
            Ok(constraints) => constraints,
            Err(err) => {
                log::warn!("Failed to fetch upload constraints, using defaults: {err}");
                UploadConstraints::default()
            }
        }
    }

    /// Validate a local file against freshly fetched constraints.
    ///
    /// Returns `Ok(None)` when the file is acceptable and `Ok(Some(reason))`
    /// when it is not.
    pub async fn validate_path(&self, path: impl AsRef<Path>) -> Result<Option<String>> {
        let constraints = self.fetch_constraints().await?;
        let file = CandidateFile::from_path(path).await?;
        Ok(validate_file(&file, &constraints))
    }
}
