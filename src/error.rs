use thiserror::Error;

/// Errors from the configurable surfaces around the formatter. Formatting a
/// pattern itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown name format: {0}")]
    UnknownFormat(String),

    #[error("unknown markup style: {0}")]
    UnknownMarkup(String),

    #[error("unknown name component: {0}")]
    UnknownComponent(String),

    #[cfg(feature = "serialization")]
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
