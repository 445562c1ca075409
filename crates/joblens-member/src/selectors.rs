//! Page URLs and element selectors for the authenticated flow.
//!
//! All structural knowledge about the member site lives here so markup
//! drift is a one-file fix. Several selectors (the generated panel ids
//! in particular) track markup that changes between UI builds; lookups
//! downstream must stay tolerant of their absence.

use joblens_core::DatePostedFilter;

/// Login form page.
pub const LOGIN_URL: &str = "https://www.linkedin.com/login/";
/// Landing page of an authenticated session.
pub const FEED_URL: &str = "https://www.linkedin.com/feed/";

/// Username field on the login form.
pub const USERNAME_FIELD: &str = "#username";
/// Password field on the login form.
pub const PASSWORD_FIELD: &str = "#password";

/// Global search box; present only when the session is authenticated,
/// which is what makes it usable as the landing probe.
pub const SEARCH_BOX: &str = "#global-nav-typeahead input";

/// Primary "Jobs" tab on the search results filter bar.
pub const JOBS_BUTTON: &str = "#search-reusables__filters-bar ul li:first-child button";
/// Result-type dropdown, the fallback when the Jobs tab is absent.
pub const ALL_RESULTS_DROPDOWN: &str = "#navigational-filter_resultType";
/// "Jobs" entry inside the result-type dropdown.
pub const DROPDOWN_JOBS_OPTION: &str = "#ember6335";

/// Opens the date-posted filter panel.
pub const DATE_POSTED_BUTTON: &str = "#searchFilter_timePostedRange";
/// Apply button of the filter panel; its label carries the result count.
pub const SHOW_RESULTS_BUTTON: &str = "button[aria-label*=\"Apply current filter to show\"]";

/// Selector for one date-posted choice inside the hoverable panel.
///
/// The panel renders its four choices as a fixed-order list, so each
/// filter maps to a 1-based child position.
#[must_use]
pub fn date_option(filter: DatePostedFilter) -> String {
    let position = match filter {
        DatePostedFilter::AnyTime => 1,
        DatePostedFilter::PastMonth => 2,
        DatePostedFilter::PastWeek => 3,
        DatePostedFilter::PastDay => 4,
    };
    format!("div[id*=\"artdeco-hoverable-artdeco-gen\"] li:nth-child({position}) label")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_options_are_position_keyed() {
        assert!(date_option(DatePostedFilter::AnyTime).contains("li:nth-child(1)"));
        assert!(date_option(DatePostedFilter::PastMonth).contains("li:nth-child(2)"));
        assert!(date_option(DatePostedFilter::PastWeek).contains("li:nth-child(3)"));
        assert!(date_option(DatePostedFilter::PastDay).contains("li:nth-child(4)"));
    }
}
