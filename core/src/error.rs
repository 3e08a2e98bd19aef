use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{0} not found")]
    MissingPage(String),

    #[error("invalid pattern for check '{check}': {source}")]
    InvalidPattern {
        check: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid suite: {0}")]
    InvalidSuite(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
