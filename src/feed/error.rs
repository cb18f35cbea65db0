use thiserror::Error;

/// Error type for loading and validating feed descriptions
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A key that is neither `url`/`pattern` nor a `meta-` prefixed variant
    #[error("Feed '{feed}' has unknown key '{key}'")]
    UnknownKey { feed: String, key: String },

    /// A level between the deepest declared level and 0 lacks a key
    #[error("Feed '{feed}' is missing key '{key}'")]
    MissingKey { feed: String, key: String },

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
