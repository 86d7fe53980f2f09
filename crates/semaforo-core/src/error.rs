use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SemaforoError {
    #[error("failed to load supplier directory from {path}: {reason}")]
    DirectoryLoad { path: PathBuf, reason: String },

    #[error("invalid supplier directory: {0}")]
    DirectoryInvalid(String),

    #[error("supplier '{code}' not found in the directory")]
    SupplierNotFound { code: String },

    #[error("supplier '{code}' is inactive and cannot receive new analyses")]
    SupplierInactive { code: String },

    #[error("failed to load limits from {path}: {reason}")]
    LimitsLoad { path: PathBuf, reason: String },

    #[error("invalid limits: {0}")]
    LimitsInvalid(String),

    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("record store failure: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
