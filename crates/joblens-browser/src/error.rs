use thiserror::Error;

pub type Result<T> = std::result::Result<T, BrowserError>;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("chromium error: {0}")]
    ChromiumError(String),

    #[error("navigation failed: {0}")]
    NavigationError(String),

    #[error("selector not found: {0}")]
    SelectorNotFound(String),

    #[error("timeout: {0}")]
    Timeout(String),

    #[error("cookie store error: {0}")]
    CookieStore(#[from] CookieStoreError),
}

/// Errors from the persisted cookie snapshot.
///
/// `NotFound` is its own variant so callers can treat a missing snapshot
/// as "not authenticated" instead of a failure.
#[derive(Debug, Error)]
pub enum CookieStoreError {
    #[error("no cookie snapshot at {path}")]
    NotFound { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed cookie snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}
