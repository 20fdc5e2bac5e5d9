use crate::http_client;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// The API answered with a non-success status.
    #[error("{api} returned {status}: {reason}")]
    Remote {
        api: &'static str,
        status: u16,
        reason: String,
    },

    /// The request never produced a response (DNS, TLS, connection, bad URI).
    #[error("Transport error: {0}")]
    Transport(#[from] http_client::Error),

    #[error("Failed to decode profile: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode profile: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid date style: {0}")]
    InvalidDateStyle(String),
}

pub type Result<T> = std::result::Result<T, ProfileError>;
