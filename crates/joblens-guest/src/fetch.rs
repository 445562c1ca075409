//! Paginated retrieval from the guest search endpoint.
//!
//! The endpoint answers plain HTTP requests without authentication, but
//! intermittently serves pages with no listings in them. The fetch loop
//! retries such pages up to a configured ceiling with a fresh browser
//! identity per attempt, pauses like a person between requests, and
//! silently skips pages that stay empty.

use crate::error::{GuestError, Result};
use crate::extract::ListingExtractor;
use crate::url::{PageRequest, PAGE_SIZE};
use async_trait::async_trait;
use joblens_browser::{humanize, random_user_agent};
use joblens_core::{GuestConfig, JobListing, MarkupVariant, SearchQuery};
use scraper::Html;
use std::time::Duration;
use url::Url;

/// Pause range in seconds between attempts on the same page.
const RETRY_PAUSE: (f64, f64) = (0.5, 1.5);
/// Pause range in seconds between consecutive pages.
const PAGE_PAUSE: (f64, f64) = (1.0, 3.0);

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport used to fetch one result page.
///
/// The production implementation is [`HttpTransport`]; tests script
/// their own to exercise the loop without a network.
#[async_trait]
pub trait PageTransport {
    /// Fetches `url` and returns the response body.
    async fn fetch(&self, url: &Url, user_agent: &str) -> Result<String>;
}

/// [`PageTransport`] backed by a shared HTTP client.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Builds the HTTP client.
    ///
    /// # Errors
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(GuestError::Client)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageTransport for HttpTransport {
    async fn fetch(&self, url: &Url, user_agent: &str) -> Result<String> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::CONTENT_TYPE, "html")
            .header(reqwest::header::USER_AGENT, user_agent)
            .send()
            .await
            .map_err(|err| GuestError::Transport(err.to_string()))?;

        response
            .text()
            .await
            .map_err(|err| GuestError::Transport(err.to_string()))
    }
}

/// Fetches and extracts guest search results page by page.
pub struct GuestFetcher<T> {
    transport: T,
    extractor: ListingExtractor,
    variant: MarkupVariant,
    attempts_per_page: u32,
}

impl GuestFetcher<HttpTransport> {
    /// Builds a fetcher over a real HTTP client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &GuestConfig) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new()?, config))
    }
}

impl<T: PageTransport + Sync> GuestFetcher<T> {
    /// Builds a fetcher over an arbitrary transport.
    pub fn with_transport(transport: T, config: &GuestConfig) -> Self {
        Self {
            transport,
            extractor: ListingExtractor::new(config.variant),
            variant: config.variant,
            attempts_per_page: config.attempts_per_page,
        }
    }

    /// Fetches every page of `query` and returns the extracted listings.
    ///
    /// The page count is `target_results / 10`, so targets below ten
    /// fetch nothing. Pages that stay empty after the retry ceiling are
    /// skipped without failing the search, which makes the result a
    /// best-effort harvest rather than an exact count.
    pub async fn fetch_listings(&self, query: &SearchQuery) -> Vec<JobListing> {
        let page_count = query.target_results() / PAGE_SIZE;
        tracing::info!(
            "Guest search for '{}' in '{}': {} pages",
            query.keywords(),
            query.location(),
            page_count
        );

        let mut pages: Vec<String> = Vec::new();
        for index in 0..page_count {
            if index > 0 {
                humanize::pause(PAGE_PAUSE.0, PAGE_PAUSE.1).await;
            }

            let request = PageRequest::for_page(query, index);
            match self.fetch_page(&request).await {
                Some(body) => pages.push(body),
                None => tracing::warn!(
                    "Page at start {} still empty after {} attempts, skipping",
                    request.start(),
                    self.attempts_per_page
                ),
            }
        }

        let listings: Vec<JobListing> = pages
            .iter()
            .flat_map(|body| self.extractor.extract_page(body))
            .collect();
        tracing::info!(
            "Extracted {} listings from {} of {} pages",
            listings.len(),
            pages.len(),
            page_count
        );
        listings
    }

    /// Fetches one page, retrying until it contains listing blocks or
    /// the attempt ceiling is reached.
    async fn fetch_page(&self, request: &PageRequest<'_>) -> Option<String> {
        let url = request.url(self.variant);

        for attempt in 0..self.attempts_per_page {
            if attempt > 0 {
                humanize::pause(RETRY_PAUSE.0, RETRY_PAUSE.1).await;
            }

            let user_agent = random_user_agent();
            match self.transport.fetch(&url, user_agent).await {
                Ok(body) => {
                    // Parse in a block so the document is gone before
                    // the next await.
                    let blocks = {
                        let document = Html::parse_document(&body);
                        self.extractor.blocks(&document).len()
                    };
                    if blocks > 0 {
                        tracing::debug!(
                            "Got {} blocks at start {} (attempt {}/{})",
                            blocks,
                            request.start(),
                            attempt + 1,
                            self.attempts_per_page
                        );
                        return Some(body);
                    }
                    tracing::debug!(
                        "No blocks at start {} (attempt {}/{})",
                        request.start(),
                        attempt + 1,
                        self.attempts_per_page
                    );
                }
                Err(err) => {
                    tracing::warn!(
                        "Fetch at start {} failed (attempt {}/{}): {}",
                        request.start(),
                        attempt + 1,
                        self.attempts_per_page,
                        err
                    );
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use joblens_core::{Arrangement, JobType, TimePosted};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct FakeTransport {
        script: Mutex<VecDeque<Result<String>>>,
        seen: Mutex<Vec<(Url, String)>>,
    }

    impl FakeTransport {
        fn new(script: Vec<Result<String>>) -> Self {
            Self {
                script: Mutex::new(script.into_iter().collect()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<(Url, String)> {
            self.seen.lock().expect("lock seen").clone()
        }
    }

    #[async_trait]
    impl PageTransport for FakeTransport {
        async fn fetch(&self, url: &Url, user_agent: &str) -> Result<String> {
            self.seen
                .lock()
                .expect("lock seen")
                .push((url.clone(), user_agent.to_string()));
            self.script
                .lock()
                .expect("lock script")
                .pop_front()
                .unwrap_or_else(|| Ok(String::new()))
        }
    }

    fn page_with(titles: &[&str]) -> String {
        let cards: String = titles
            .iter()
            .map(|title| {
                format!(
                    r#"<div class="base-card relative job-search-card">
                      <a class="base-card__full-link" href="https://in.linkedin.com/jobs/view/1">v</a>
                      <h3 class="base-search-card__title">{title}</h3>
                      <h4 class="base-search-card__subtitle">Acme</h4>
                      <span class="job-search-card__location">Pune</span>
                      <span class="job-posting-benefits__text">Actively Hiring</span>
                      <time class="job-search-card__listdate--new">1 day ago</time>
                    </div>"#
                )
            })
            .collect();
        format!("<ul>{cards}</ul>")
    }

    fn config(attempts_per_page: u32) -> GuestConfig {
        GuestConfig {
            variant: MarkupVariant::FullCard,
            attempts_per_page,
        }
    }

    fn query(target_results: u32) -> SearchQuery {
        SearchQuery::new(
            "rust",
            "Pune",
            25,
            JobType::FullTime,
            TimePosted::PastWeek,
            [Arrangement::Remote].into_iter().collect(),
            target_results,
        )
        .expect("valid query")
    }

    fn start_param(url: &Url) -> String {
        url.query_pairs()
            .find(|(key, _)| key == "start")
            .map(|(_, value)| value.into_owned())
            .expect("start param present")
    }

    #[tokio::test(start_paused = true)]
    async fn test_target_below_page_size_makes_no_requests() {
        let fetcher = GuestFetcher::with_transport(FakeTransport::new(Vec::new()), &config(15));

        let listings = fetcher.fetch_listings(&query(7)).await;

        assert!(listings.is_empty());
        assert!(fetcher.transport.seen().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pages_fetched_at_aligned_offsets_in_order() {
        let transport = FakeTransport::new(vec![
            Ok(page_with(&["First", "Second"])),
            Ok(page_with(&["Third"])),
        ]);
        let fetcher = GuestFetcher::with_transport(transport, &config(15));

        let listings = fetcher.fetch_listings(&query(25)).await;

        let seen = fetcher.transport.seen();
        assert_eq!(seen.len(), 2);
        assert_eq!(start_param(&seen[0].0), "1");
        assert_eq!(start_param(&seen[1].0), "11");

        let titles: Vec<&str> = listings.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_page_retried_until_blocks_appear() {
        let transport = FakeTransport::new(vec![
            Ok("<html><body>nothing here</body></html>".to_string()),
            Err(GuestError::Transport("connection reset".to_string())),
            Ok(page_with(&["Eventually"])),
        ]);
        let fetcher = GuestFetcher::with_transport(transport, &config(5));

        let listings = fetcher.fetch_listings(&query(10)).await;

        assert_eq!(fetcher.transport.seen().len(), 3);
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "Eventually");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stubborn_page_skipped_without_failing_search() {
        let transport = FakeTransport::new(vec![
            Ok(String::new()),
            Ok(String::new()),
            Ok(page_with(&["Survivor"])),
        ]);
        let fetcher = GuestFetcher::with_transport(transport, &config(2));

        let listings = fetcher.fetch_listings(&query(20)).await;

        // Page one burns both attempts, page two succeeds first try.
        assert_eq!(fetcher.transport.seen().len(), 3);
        let titles: Vec<&str> = listings.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, ["Survivor"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_attempt_carries_a_desktop_user_agent() {
        let transport = FakeTransport::new(vec![
            Ok(String::new()),
            Ok(String::new()),
            Ok(String::new()),
        ]);
        let fetcher = GuestFetcher::with_transport(transport, &config(3));

        fetcher.fetch_listings(&query(10)).await;

        let seen = fetcher.transport.seen();
        assert_eq!(seen.len(), 3);
        for (url, user_agent) in &seen {
            assert_eq!(start_param(url), "1");
            assert!(user_agent.starts_with("Mozilla/5.0"));
        }
    }
}
