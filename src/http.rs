use crate::config::Config;
use crate::error::{Error, Result};
use reqwest::{Client as ReqwestClient, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Constants for API paths
pub mod api_paths {
    /// Path serving the upload constraints
    pub const UPLOAD_CONSTRAINTS: &str = "/upload/constraints";
}

/// HTTP client for making API requests
pub struct HttpClient {
    client: ReqwestClient,
    config: Config,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let client = ClientBuilder::new()
            .user_agent(concat!("upload-constraints/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.get_timeout_seconds()))
            .build()?;

        Ok(Self { client, config })
    }

    /// Make a GET request to the specified endpoint
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.config.get_base_url(), endpoint);
        log::debug!("GET {url}");

        let request = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .build()?;

        let response = self.client.execute(request).await?;
        self.handle_response(response).await
    }

    /// Handle API responses and parse JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            log::debug!("request failed with HTTP {status}");
            // A body that cannot be read must not mask the status
            let body = response.text().await.unwrap_or_default();
            return Err(Error::FetchFailed { status, body });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|err| {
            Error::InvalidData(format!(
                "Failed to parse upload constraints response: {err}"
            ))
        })
    }
}
