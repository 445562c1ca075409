//! Shared types used across the joblens crates.

use crate::error::CoreError;
use crate::filters::{Arrangement, JobType, TimePosted};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use url::Url;

/// A validated job search query.
///
/// Construction is the only validation point: a `SearchQuery` that exists
/// satisfies its invariants (distance within 1..=50, at least one work
/// arrangement), so the fields are private and read through getters.
/// There is deliberately no `Deserialize` impl; boundary layers parse
/// their own parameter schema and call [`SearchQuery::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    keywords: String,
    location: String,
    distance: u16,
    job_type: JobType,
    time_posted: TimePosted,
    arrangements: BTreeSet<Arrangement>,
    target_results: u32,
}

impl SearchQuery {
    /// Maximum accepted search radius in kilometers.
    pub const MAX_DISTANCE: u16 = 50;

    /// Create a new query, validating range and non-emptiness constraints.
    ///
    /// # Errors
    /// Returns a validation error if `distance` is outside 1..=50 or if
    /// `arrangements` is empty.
    pub fn new(
        keywords: impl Into<String>,
        location: impl Into<String>,
        distance: u16,
        job_type: JobType,
        time_posted: TimePosted,
        arrangements: BTreeSet<Arrangement>,
        target_results: u32,
    ) -> Result<Self, CoreError> {
        if distance == 0 || distance > Self::MAX_DISTANCE {
            return Err(CoreError::Validation(format!(
                "distance must be between 1 and {}, got {distance}",
                Self::MAX_DISTANCE
            )));
        }
        if arrangements.is_empty() {
            return Err(CoreError::Validation(
                "at least one work arrangement is required".to_string(),
            ));
        }

        Ok(Self {
            keywords: keywords.into(),
            location: location.into(),
            distance,
            job_type,
            time_posted,
            arrangements,
            target_results,
        })
    }

    /// Free-text search keywords.
    #[must_use]
    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    /// Location the search is centered on.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Search radius in kilometers (1..=50).
    #[must_use]
    pub fn distance(&self) -> u16 {
        self.distance
    }

    /// Employment type filter.
    #[must_use]
    pub fn job_type(&self) -> JobType {
        self.job_type
    }

    /// Recency window filter.
    #[must_use]
    pub fn time_posted(&self) -> TimePosted {
        self.time_posted
    }

    /// Requested work arrangements (never empty).
    #[must_use]
    pub fn arrangements(&self) -> &BTreeSet<Arrangement> {
        &self.arrangements
    }

    /// Number of listings the caller wants overall.
    #[must_use]
    pub fn target_results(&self) -> u32 {
        self.target_results
    }
}

/// One extracted job listing.
///
/// Serialization uses the wire names the listing API always responded
/// with, so downstream consumers keep working unchanged. `url` is absent
/// in the legacy markup variant, which exposes no permalink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    /// Job title
    #[serde(rename = "job_title")]
    pub title: String,
    /// Absolute permalink to the posting, where the markup exposes one
    #[serde(rename = "job_url")]
    pub url: Option<Url>,
    /// Hiring company name
    #[serde(rename = "company_name")]
    pub company: String,
    /// Listed job location
    pub location: String,
    /// Hiring-status badge text (e.g. "Actively Hiring")
    pub hiring_status: String,
    /// Relative posting time as displayed (e.g. "2 days ago")
    pub posting_time: String,
}

/// The two observed result-markup variants of the guest search endpoint.
///
/// They differ in how a listing's container is recognized (an exact class
/// on an inner info panel vs. a class pattern on the whole card), in
/// whether a permalink anchor exists, and in how the endpoint expects its
/// query parameters laid out. Neither supersedes the other in the wild,
/// so the active variant is configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkupVariant {
    /// Current markup: whole-card containers with a permalink anchor
    #[default]
    FullCard,
    /// Legacy markup: exact-class info panels, no permalink
    InfoCard,
}

impl MarkupVariant {
    /// The config-file spelling of this variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullCard => "full-card",
            Self::InfoCard => "info-card",
        }
    }
}

impl std::fmt::Display for MarkupVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
