//! Listing extraction from guest search result markup.
//!
//! A result page is a flat sequence of listing blocks. How a block is
//! recognized depends on the markup variant: the current markup wraps
//! each listing in a card `div` whose class attribute matches a known
//! pattern, while the legacy markup is located by an exact class on the
//! inner info panel. Extraction itself is the same for both, except
//! that only the current markup exposes a permalink anchor.

use joblens_core::{JobListing, MarkupVariant};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;
use url::Url;

const INFO_PANEL_CLASS: &str = "div.base-search-card__info";
const TITLE: &str = "h3.base-search-card__title";
const PERMALINK: &str = "a.base-card__full-link";
const COMPANY: &str = "h4.base-search-card__subtitle";
const LOCATION: &str = "span.job-search-card__location";
const HIRING_STATUS: &str = "span.job-posting-benefits__text";
const POSTING_TIME: &str = "time.job-search-card__listdate--new";

fn card_class_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("base-card relative").expect("valid regex"))
}

/// Extracts [`JobListing`]s from result-page markup.
pub struct ListingExtractor {
    variant: MarkupVariant,
    info_panel: Selector,
    div: Selector,
    title: Selector,
    permalink: Selector,
    company: Selector,
    location: Selector,
    hiring_status: Selector,
    posting_time: Selector,
}

impl ListingExtractor {
    /// Builds an extractor for the given markup variant.
    #[must_use]
    pub fn new(variant: MarkupVariant) -> Self {
        Self {
            variant,
            info_panel: Selector::parse(INFO_PANEL_CLASS).expect("valid selector"),
            div: Selector::parse("div").expect("valid selector"),
            title: Selector::parse(TITLE).expect("valid selector"),
            permalink: Selector::parse(PERMALINK).expect("valid selector"),
            company: Selector::parse(COMPANY).expect("valid selector"),
            location: Selector::parse(LOCATION).expect("valid selector"),
            hiring_status: Selector::parse(HIRING_STATUS).expect("valid selector"),
            posting_time: Selector::parse(POSTING_TIME).expect("valid selector"),
        }
    }

    /// The markup variant this extractor recognizes.
    #[must_use]
    pub fn variant(&self) -> MarkupVariant {
        self.variant
    }

    /// Returns every listing block in the document, in document order.
    ///
    /// An empty result means the page carried no listings at all, which
    /// callers treat as a failed fetch rather than an empty search.
    #[must_use]
    pub fn blocks<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        match self.variant {
            MarkupVariant::InfoCard => document.select(&self.info_panel).collect(),
            MarkupVariant::FullCard => {
                let pattern = card_class_pattern();
                document
                    .select(&self.div)
                    .filter(|el| {
                        el.value()
                            .attr("class")
                            .is_some_and(|class| pattern.is_match(class))
                    })
                    .collect()
            }
        }
    }

    /// Extracts one listing from a block, or `None` if any required
    /// field is absent. Incomplete blocks are dropped without affecting
    /// their siblings.
    #[must_use]
    pub fn extract(&self, block: ElementRef<'_>) -> Option<JobListing> {
        let title = self.required_text(block, &self.title, "title")?;
        let url = self.permalink_of(block)?;
        let company = self.required_text(block, &self.company, "company")?;
        let location = self.required_text(block, &self.location, "location")?;
        let hiring_status = self.required_text(block, &self.hiring_status, "hiring status")?;
        let posting_time = self.required_text(block, &self.posting_time, "posting time")?;

        Some(JobListing {
            title,
            url,
            company,
            location,
            hiring_status,
            posting_time,
        })
    }

    /// Parses a whole page and extracts every complete listing.
    #[must_use]
    pub fn extract_page(&self, body: &str) -> Vec<JobListing> {
        let document = Html::parse_document(body);
        self.blocks(&document)
            .into_iter()
            .filter_map(|block| self.extract(block))
            .collect()
    }

    // `Some(None)` is a listing without a permalink (legacy markup);
    // outer `None` drops the block.
    fn permalink_of(&self, block: ElementRef<'_>) -> Option<Option<Url>> {
        match self.variant {
            MarkupVariant::InfoCard => Some(None),
            MarkupVariant::FullCard => {
                let href = block
                    .select(&self.permalink)
                    .next()
                    .and_then(|el| el.value().attr("href"));
                let Some(href) = href else {
                    tracing::debug!("Skipping result block missing permalink");
                    return None;
                };
                match Url::parse(href) {
                    Ok(url) => Some(Some(url)),
                    Err(err) => {
                        tracing::debug!("Skipping result block with bad permalink: {}", err);
                        None
                    }
                }
            }
        }
    }

    fn required_text(
        &self,
        block: ElementRef<'_>,
        selector: &Selector,
        field: &str,
    ) -> Option<String> {
        let text = block
            .select(selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string());
        if text.is_none() {
            tracing::debug!("Skipping result block missing {}", field);
        }
        text
    }
}
