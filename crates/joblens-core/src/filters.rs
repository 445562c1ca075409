//! Semantic search filters and their provider query-string codes.
//!
//! The job board encodes filters as short codes in its query strings
//! (`f_JT`, `f_TPR`, `f_WT`). This module defines the semantic enums a
//! caller works with and the translation to those codes. Parsing a filter
//! from a string is strict: an unknown spelling is a fatal configuration
//! error. The one deliberate exception is [`translate_arrangements`],
//! which mirrors the provider's lenient list handling and silently drops
//! tokens it does not recognize.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Employment type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JobType {
    /// Full-time positions
    FullTime,
    /// Part-time positions
    PartTime,
    /// Contract positions
    Contractual,
    /// Internships
    Internships,
    /// Volunteer positions
    Volunteer,
}

impl JobType {
    /// Provider code for the `f_JT` query parameter.
    #[must_use]
    pub fn code(&self) -> char {
        match self {
            Self::FullTime => 'F',
            Self::PartTime => 'P',
            Self::Contractual => 'C',
            Self::Internships => 'I',
            Self::Volunteer => 'V',
        }
    }

    /// The wire spelling used in query parameters and config files.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "fullTime",
            Self::PartTime => "partTime",
            Self::Contractual => "contractual",
            Self::Internships => "internships",
            Self::Volunteer => "volunteer",
        }
    }
}

impl FromStr for JobType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fullTime" => Ok(Self::FullTime),
            "partTime" => Ok(Self::PartTime),
            "contractual" => Ok(Self::Contractual),
            "internships" => Ok(Self::Internships),
            "volunteer" => Ok(Self::Volunteer),
            other => Err(CoreError::UnknownJobType(other.to_string())),
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recency window filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimePosted {
    /// Posted within the last 24 hours
    PastDay,
    /// Posted within the last 7 days
    PastWeek,
    /// Posted within the last 30 days
    PastMonth,
}

impl TimePosted {
    /// Provider code for the `f_TPR` query parameter.
    ///
    /// The code is the window length in seconds prefixed with `r`
    /// (relative): one day is `r86400`, one week `r604800`, one month
    /// `r2592000`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::PastDay => "r86400",
            Self::PastWeek => "r604800",
            Self::PastMonth => "r2592000",
        }
    }

    /// The wire spelling used in query parameters and config files.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PastDay => "pastDay",
            Self::PastWeek => "pastWeek",
            Self::PastMonth => "pastMonth",
        }
    }
}

impl FromStr for TimePosted {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pastDay" => Ok(Self::PastDay),
            "pastWeek" => Ok(Self::PastWeek),
            "pastMonth" => Ok(Self::PastMonth),
            other => Err(CoreError::UnknownTimePosted(other.to_string())),
        }
    }
}

impl fmt::Display for TimePosted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Work arrangement filter.
///
/// The derive order matters: `Ord` follows the declaration order, which is
/// the provider's fixed priority order (on-site, then hybrid, then remote),
/// so a `BTreeSet<Arrangement>` always iterates in code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Arrangement {
    /// Work from the employer's site
    OnSite,
    /// Mixed on-site and remote work
    Hybrid,
    /// Fully remote work
    Remote,
}

impl Arrangement {
    /// Provider token for the `f_WT` query parameter.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::OnSite => "1",
            Self::Hybrid => "2",
            Self::Remote => "3",
        }
    }

    /// The wire spelling used in query parameters and config files.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnSite => "onSite",
            Self::Hybrid => "hybrid",
            Self::Remote => "remote",
        }
    }
}

impl FromStr for Arrangement {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "onSite" => Ok(Self::OnSite),
            "hybrid" => Ok(Self::Hybrid),
            "remote" => Ok(Self::Remote),
            other => Err(CoreError::UnknownArrangement(other.to_string())),
        }
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Date-posted option in the authenticated search's filter panel.
///
/// The variants are listed in panel order (top to bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePostedFilter {
    /// No recency restriction
    AnyTime,
    /// Posted within the last month
    PastMonth,
    /// Posted within the last week
    PastWeek,
    /// Posted within the last 24 hours
    PastDay,
}

impl DatePostedFilter {
    /// The wire spelling used in CLI arguments and config files.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AnyTime => "any_time",
            Self::PastMonth => "past_month",
            Self::PastWeek => "past_week",
            Self::PastDay => "past_day",
        }
    }
}

impl FromStr for DatePostedFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any_time" => Ok(Self::AnyTime),
            "past_month" => Ok(Self::PastMonth),
            "past_week" => Ok(Self::PastWeek),
            "past_day" => Ok(Self::PastDay),
            other => Err(CoreError::UnknownDateFilter(other.to_string())),
        }
    }
}

impl fmt::Display for DatePostedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Join a set of arrangements into the comma-separated `f_WT` code list.
///
/// The set's ordering guarantees the fixed on-site < hybrid < remote token
/// order no matter how the caller assembled it.
#[must_use]
pub fn arrangement_code(arrangements: &BTreeSet<Arrangement>) -> String {
    arrangements
        .iter()
        .map(Arrangement::code)
        .collect::<Vec<_>>()
        .join(",")
}

/// Lenient string-level arrangement translation.
///
/// Recognized tokens are translated and ordered canonically; unrecognized
/// tokens are dropped without error, matching the provider's tolerant list
/// handling. The result is empty if nothing survives, so callers that
/// require at least one arrangement must check for themselves.
#[must_use]
pub fn translate_arrangements<S: AsRef<str>>(tokens: &[S]) -> String {
    let recognized: BTreeSet<Arrangement> = tokens
        .iter()
        .filter_map(|t| t.as_ref().parse().ok())
        .collect();
    arrangement_code(&recognized)
}
