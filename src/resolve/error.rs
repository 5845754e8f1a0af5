use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
