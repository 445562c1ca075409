//! Search initiation and filter customization in the authenticated view.
//!
//! Every UI-variant hazard is modeled as a visible outcome instead of an
//! implicit catch: which navigation path reached the jobs view, and
//! whether the date filter was applied, degraded or never requested.
//! Only driver-level failures propagate.

use crate::error::{MemberError, Result};
use crate::selectors::{
    date_option, ALL_RESULTS_DROPDOWN, DATE_POSTED_BUTTON, DROPDOWN_JOBS_OPTION, JOBS_BUTTON,
    SEARCH_BOX, SHOW_RESULTS_BUTTON,
};
use joblens_browser::{humanize, BrowserActions, BrowserError};
use joblens_core::{DatePostedFilter, JobListing};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Duration;

/// Bounded wait for the filter panel's result-count label.
const FILTER_POLL_TIMEOUT: Duration = Duration::from_secs(5);
/// Interval between label polls.
const FILTER_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// How the jobs-results view was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationPath {
    /// The jobs tab on the filter bar was present and clicked.
    Primary,
    /// The tab was absent; the all-results dropdown path was used.
    Fallback,
}

/// What happened to the requested date filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FilterOutcome {
    /// Filter applied; the panel reported this many results.
    Applied {
        /// Count parsed from the show-results control's label.
        result_count: u32,
    },
    /// Panel missing or never became ready; search ran unfiltered.
    Skipped,
    /// No filter was requested.
    NotRequested,
}

/// Result of driving one authenticated search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberSearchOutcome {
    /// Always empty: the authenticated view is driven but never scraped.
    pub listings: Vec<JobListing>,
    /// Path taken to the jobs-results view.
    pub navigation: NavigationPath,
    /// Filter customization outcome.
    pub filters: FilterOutcome,
}

/// Transient panel state during filter customization; the poll is
/// satisfied once a numeric result count has been observed.
#[derive(Debug, Default)]
pub struct FilterPanelState {
    result_count: Option<u32>,
}

impl FilterPanelState {
    /// Feeds one observed label value; the first parseable count sticks.
    pub fn observe(&mut self, label: Option<&str>) {
        if self.result_count.is_none() {
            self.result_count = label.and_then(parse_result_count);
        }
    }

    /// The parsed result count, once available.
    #[must_use]
    pub fn result_count(&self) -> Option<u32> {
        self.result_count
    }
}

fn parse_result_count(label: &str) -> Option<u32> {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    let digits = DIGITS.get_or_init(|| Regex::new(r"[\d,]+").expect("valid regex"));
    digits
        .find(label)
        .and_then(|m| m.as_str().replace(',', "").parse().ok())
}

/// Runs a keyword search in the authenticated session, reaching the
/// jobs view and applying the date filter when one is requested.
///
/// A missing filter control or a panel that never becomes ready
/// degrades to an unfiltered search; both are reported through
/// [`FilterOutcome`], not as errors.
///
/// # Errors
/// Propagates driver failures outside the tolerated filter boundary.
pub async fn search_jobs<S>(
    session: &mut S,
    keywords: &str,
    date_filter: Option<DatePostedFilter>,
) -> Result<MemberSearchOutcome>
where
    S: BrowserActions + Send + ?Sized,
{
    tracing::info!("Searching the member view for '{}'", keywords);

    session.type_into(SEARCH_BOX, keywords).await?;
    humanize::pause(2.0, 5.0).await;
    session.press_enter(SEARCH_BOX).await?;
    humanize::scroll_bursts(session, 5).await?;

    let navigation = open_jobs_view(session).await?;
    humanize::pause(2.0, 5.0).await;
    humanize::move_chains(session, 1, 3, 1, 3).await?;

    let filters = match customize_filters(session, date_filter).await {
        Ok(outcome) => outcome,
        Err(MemberError::WaitTimeout(timeout)) => {
            tracing::warn!(
                "Filter panel not ready within {:?}, continuing unfiltered",
                timeout
            );
            FilterOutcome::Skipped
        }
        Err(MemberError::Browser(BrowserError::SelectorNotFound(selector))) => {
            tracing::warn!("Filter control not found ({}), continuing unfiltered", selector);
            FilterOutcome::Skipped
        }
        Err(err) => return Err(err),
    };
    humanize::pause(2.0, 4.0).await;

    // The authenticated view is never extracted from; listing retrieval
    // happens on the guest path.
    Ok(MemberSearchOutcome {
        listings: Vec::new(),
        navigation,
        filters,
    })
}

/// Reaches the jobs-results view, falling back to the all-results
/// dropdown when the jobs tab is absent.
async fn open_jobs_view<S>(session: &mut S) -> Result<NavigationPath>
where
    S: BrowserActions + Send + ?Sized,
{
    match session.click(JOBS_BUTTON).await {
        Ok(()) => Ok(NavigationPath::Primary),
        Err(BrowserError::SelectorNotFound(_)) => {
            tracing::warn!("Jobs tab absent, taking the all-results dropdown");
            session.click(ALL_RESULTS_DROPDOWN).await?;
            session.click(DROPDOWN_JOBS_OPTION).await?;
            Ok(NavigationPath::Fallback)
        }
        Err(err) => Err(err.into()),
    }
}

/// Opens the date-posted panel and, when a filter was requested,
/// selects the option and clicks the show-results control once its
/// label reports a result count.
///
/// The panel is opened even when no filter was requested, mirroring the
/// production flow.
async fn customize_filters<S>(
    session: &mut S,
    filter: Option<DatePostedFilter>,
) -> Result<FilterOutcome>
where
    S: BrowserActions + Send + ?Sized,
{
    session.click(DATE_POSTED_BUTTON).await?;
    humanize::scroll_bursts(session, 2).await?;

    let Some(filter) = filter else {
        return Ok(FilterOutcome::NotRequested);
    };

    session.click(&date_option(filter)).await?;
    humanize::move_chains(session, 1, 2, 2, 5).await?;

    let result_count = wait_for_result_count(session).await?;
    session.click(SHOW_RESULTS_BUTTON).await?;
    tracing::info!("Date filter applied, panel reported {} results", result_count);
    Ok(FilterOutcome::Applied { result_count })
}

/// Polls the show-results control until its label carries a parseable
/// count.
///
/// The first lookup is strict so an absent control surfaces as
/// [`BrowserError::SelectorNotFound`]; later lookups tolerate absence
/// while the panel re-renders. Runs out as [`MemberError::WaitTimeout`].
async fn wait_for_result_count<S>(session: &mut S) -> Result<u32>
where
    S: BrowserActions + Send + ?Sized,
{
    let deadline = tokio::time::Instant::now() + FILTER_POLL_TIMEOUT;
    let mut panel = FilterPanelState::default();
    let mut first_probe = true;

    loop {
        let label = if first_probe {
            first_probe = false;
            session.attribute(SHOW_RESULTS_BUTTON, "aria-label").await?
        } else {
            match session.attribute(SHOW_RESULTS_BUTTON, "aria-label").await {
                Ok(label) => label,
                Err(BrowserError::SelectorNotFound(_)) => None,
                Err(err) => return Err(err.into()),
            }
        };

        panel.observe(label.as_deref());
        if let Some(result_count) = panel.result_count() {
            return Ok(result_count);
        }
        if tokio::time::Instant::now() >= deadline {
            return Err(MemberError::WaitTimeout(FILTER_POLL_TIMEOUT));
        }
        tokio::time::sleep(FILTER_POLL_INTERVAL).await;
    }
}
