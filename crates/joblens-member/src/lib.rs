//! Joblens Member - Authenticated browser-driven search.
//!
//! This crate drives the member site through a live browser session:
//! login-or-resume backed by a persisted cookie snapshot, keyword search
//! initiation with a UI-variant navigation fallback, and date-filter
//! customization gated on a poll-until-ready wait. Every step is paced
//! by the humanizer. The authenticated view is driven but never
//! scraped; listings come from the guest path.
//!
//! # Example
//!
//! ```rust,ignore
//! use joblens_member::{login_or_resume, search_jobs, Credentials};
//!
//! let credentials = Credentials::from_env()?;
//! login_or_resume(&mut session, &jar, &credentials).await?;
//! let outcome = search_jobs(&mut session, "rust engineer", Some(filter)).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod credentials;
#[allow(missing_docs)]
pub mod error;
pub mod login;
pub mod search;
pub mod selectors;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export commonly used types
pub use credentials::Credentials;
pub use error::{MemberError, Result};
pub use login::{login_or_resume, AuthOutcome};
pub use search::{search_jobs, FilterOutcome, FilterPanelState, MemberSearchOutcome, NavigationPath};
