//! Joblens Guest - Unauthenticated job search.
//!
//! This crate retrieves job listings through the public guest search
//! endpoint, which serves paginated result markup over plain HTTP. It
//! covers URL construction for both endpoint generations, the retrying
//! fetch-paginate loop with humanized pacing, and listing extraction
//! from both known markup variants.
//!
//! # Example
//!
//! ```rust,ignore
//! use joblens_core::{AppConfig, SearchQuery};
//! use joblens_guest::GuestFetcher;
//!
//! let config = AppConfig::load()?;
//! let fetcher = GuestFetcher::new(&config.guest)?;
//! let listings = fetcher.fetch_listings(&query).await;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

#[allow(missing_docs)]
pub mod error;
pub mod extract;
pub mod fetch;
pub mod url;

// Re-export commonly used types
pub use error::{GuestError, Result};
pub use extract::ListingExtractor;
pub use fetch::{GuestFetcher, HttpTransport, PageTransport};
pub use url::{PageRequest, GUEST_SEARCH_ENDPOINT, PAGE_SIZE};
