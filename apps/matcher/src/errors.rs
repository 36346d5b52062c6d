use thiserror::Error;

/// Application-level error type for the I/O glue around the matching
/// core. The core itself never fails: malformed or missing posting
/// fields degrade to neutral defaults instead of erroring.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("PDF extraction error: {0}")]
    Pdf(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
