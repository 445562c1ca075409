//! Guest search URL construction.
//!
//! The guest API serves results in fixed-size pages addressed by a
//! 1-based `start` offset. Each [`PageRequest`] renders one page of a
//! query as a fully encoded endpoint URL.

use joblens_core::{arrangement_code, MarkupVariant, SearchQuery};
use url::Url;

/// Public job search endpoint that answers without authentication.
pub const GUEST_SEARCH_ENDPOINT: &str =
    "https://in.linkedin.com/jobs-guest/jobs/api/seeMoreJobPostings/search";

/// Number of listings the endpoint returns per page.
pub const PAGE_SIZE: u32 = 10;

/// One page of a paginated guest search.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest<'a> {
    query: &'a SearchQuery,
    start: u32,
}

impl<'a> PageRequest<'a> {
    /// Builds the request for page `index` (0-based) of `query`.
    #[must_use]
    pub fn for_page(query: &'a SearchQuery, index: u32) -> Self {
        Self {
            query,
            start: index * PAGE_SIZE + 1,
        }
    }

    /// The 1-based, page-aligned offset sent as the `start` parameter.
    #[must_use]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Renders the request as an encoded endpoint URL.
    ///
    /// The parameter layout depends on the markup variant: the current
    /// endpoint carries the employment type code in `f_JT` and the
    /// arrangement code list in `f_WT`, while the legacy endpoint
    /// repeated the arrangement code list in both.
    #[must_use]
    pub fn url(&self, variant: MarkupVariant) -> Url {
        let query = self.query;
        let distance = query.distance().to_string();
        let job_type = query.job_type().code().to_string();
        let arrangements = arrangement_code(query.arrangements());
        let start = self.start.to_string();

        let f_jt = match variant {
            MarkupVariant::FullCard => job_type.as_str(),
            MarkupVariant::InfoCard => arrangements.as_str(),
        };

        let params = [
            ("keywords", query.keywords()),
            ("location", query.location()),
            ("distance", distance.as_str()),
            ("f_JT", f_jt),
            ("f_TPR", query.time_posted().code()),
            ("f_WT", arrangements.as_str()),
            ("start", start.as_str()),
        ];

        Url::parse_with_params(GUEST_SEARCH_ENDPOINT, &params)
            .expect("guest endpoint URL is valid")
    }
}
