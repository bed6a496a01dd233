use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[cfg(feature = "json")]
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("{0}")]
    Message(String),
}

pub type Result<T> = core::result::Result<T, Error>;
