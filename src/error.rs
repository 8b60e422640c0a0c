use std::path::PathBuf;

/// Failures talking to the hosted language model.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("No API key configured. Run `akademik config set-key <KEY>` or set API_KEY.")]
    MissingApiKey,
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Model returned no choices")]
    EmptyResponse,
}

/// Failures of the durable key-value slot. Never shown to users; the
/// history store logs and swallows them.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Could not find data directory")]
    NoDataDir,
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
