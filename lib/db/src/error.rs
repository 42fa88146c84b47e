use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    /// No row matched the given id.
    #[error("{0} not found")]
    NotFound(String),

    /// The remote service answered with a non-success status.
    #[error("remote error ({status}): {message}")]
    Remote { status: u16, message: String },

    /// The request never completed (DNS, connect, timeout, TLS).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// The client was constructed with an unusable endpoint or key.
    #[error("config error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for DbError {
    fn from(err: reqwest::Error) -> Self {
        DbError::Transport(err.to_string())
    }
}
