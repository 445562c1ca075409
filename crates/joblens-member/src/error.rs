use joblens_browser::{BrowserError, CookieStoreError};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MemberError {
    #[error("browser error: {0}")]
    Browser(#[from] BrowserError),

    #[error("cookie store error: {0}")]
    CookieStore(#[from] CookieStoreError),

    #[error("condition not met within {0:?}")]
    WaitTimeout(Duration),

    #[error("credentials not set: JOBLENS_USERNAME and JOBLENS_PASSWORD are required")]
    MissingCredentials,
}

pub type Result<T> = std::result::Result<T, MemberError>;
