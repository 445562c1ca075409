//! Joblens Core - Foundation crate for the joblens retrieval engine.
//!
//! This crate provides the shared query/listing types, the semantic filter
//! enums with their provider-code translation, configuration management,
//! and the core error types that all other joblens crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Core error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`filters`] - Semantic filter enums and provider-code translation
//! - [`types`] - `SearchQuery`, `JobListing`, `MarkupVariant`
//!
//! # Example
//!
//! ```rust
//! use joblens_core::{Arrangement, JobType, SearchQuery, TimePosted};
//! use std::collections::BTreeSet;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let arrangements: BTreeSet<Arrangement> =
//!     [Arrangement::Remote, Arrangement::OnSite].into_iter().collect();
//!
//! let query = SearchQuery::new(
//!     "site reliability engineer",
//!     "Mumbai",
//!     25,
//!     JobType::FullTime,
//!     TimePosted::PastWeek,
//!     arrangements,
//!     30,
//! )?;
//! assert_eq!(query.job_type().code(), 'F');
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod filters;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, BrowserConfig, GuestConfig, ServerConfig, SessionConfig};
pub use error::{ConfigError, ConfigResult, CoreError, Result};
pub use filters::{
    arrangement_code, translate_arrangements, Arrangement, DatePostedFilter, JobType, TimePosted,
};
pub use types::{JobListing, MarkupVariant, SearchQuery};
