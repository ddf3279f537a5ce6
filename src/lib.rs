//! # Upload Constraints
//!
//! Fetches the upload constraints published by the separation backend and
//! checks candidate audio files against them before any transfer starts.
//!
//! ## Basic Usage Example
//!
//! ```no_run
//! use upload_constraints::{validate_file, CandidateFile, Client, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(Config {
//!         base_url: Some(std::env::var("BACKEND_URL")?),
//!         ..Default::default()
//!     })?;
//!
//!     let constraints = client.fetch_constraints().await?;
//!     println!("Accepted: {}", constraints.format_hint());
//!
//!     let file = CandidateFile::new("audio/mpeg", "song.mp3", 5_000_000);
//!     match validate_file(&file, &constraints) {
//!         None => println!("Ready to upload"),
//!         Some(reason) => println!("Rejected: {reason}"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Falling Back to Built-in Limits
//!
//! ```no_run
//! use upload_constraints::{Client, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(Config::from_env()?)?;
//!
//!     // Never fails; logs a warning and returns the defaults when the backend is down
//!     let constraints = client.fetch_constraints_or_default().await;
//!     println!("Max {}MB", constraints.max_file_size_mb);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod http;
mod models;
pub mod utils;
mod validation;

// Re-exports
pub use client::Client;
pub use config::{Config, BASE_URL_ENV, DEFAULT_TIMEOUT_SECONDS, TIMEOUT_ENV};
pub use error::{Error, Result};
pub use models::{CandidateFile, ConstraintsSummary, UploadConstraints, DEFAULT_MAX_FILE_SIZE_MB};
pub use validation::{check_file, validate_file, Rejection};
