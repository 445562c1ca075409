use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuestError {
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, GuestError>;
