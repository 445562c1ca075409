//! Interactive browser session engine for the authenticated retrieval path.
//!
//! Provides chromiumoxide-backed session control behind the
//! [`BrowserActions`] capability trait, humanized interaction pacing,
//! a randomized client-identity pool, and cookie snapshot persistence.

pub mod actions;
pub mod cookies;
pub mod engine;
pub mod error;
pub mod humanize;
pub mod identity;

pub use actions::{BrowserActions, Viewport};
pub use cookies::{CookieJar, CookieSnapshot, StoredCookie};
pub use engine::{LaunchConfig, Session};
pub use error::{BrowserError, CookieStoreError, Result};
pub use identity::random_user_agent;
