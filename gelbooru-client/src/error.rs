use gelbooru_common::error::DecodeError;
use thiserror::Error;

/// Boxed cause of a transport failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Enumerates the possible errors of a single listing call.
///
/// Nothing is retried: each variant is returned to the caller as soon as it happens.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The requested page size is above what the server accepts. Raised before any request is sent.
    #[error("Invalid limit {limit}, this server only supports a max of {max} items per page")]
    InvalidLimit { limit: u16, max: u16 },

    /// The server answered with a non-success HTTP status. The body is not decoded.
    #[error("Imageboard returned HTTP status {status}")]
    RequestError { status: u16 },

    /// The body did not match the expected envelope or record shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] DecodeError),

    /// DNS, connection, TLS or timeout failure in the underlying transport.
    #[error("Connection Error: {0}")]
    Transport(#[source] BoxError),
}

impl From<reqwest::Error> for ClientError {
    fn from(source: reqwest::Error) -> Self {
        Self::Transport(Box::new(source))
    }
}
