use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtlasError {
    #[error("Failed to read divisions: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed divisions: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to fetch divisions: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unknown address level: {0}")]
    UnknownLevel(String),
}
