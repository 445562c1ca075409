//! Scripted session fake shared by the login and search tests.

use crate::selectors::SHOW_RESULTS_BUTTON;
use async_trait::async_trait;
use joblens_browser::{BrowserActions, BrowserError, Result, StoredCookie, Viewport};
use std::collections::{HashSet, VecDeque};

/// Records every interaction and answers lookups from a script.
#[derive(Default)]
pub struct FakeSession {
    pub navigated: Vec<String>,
    pub typed: Vec<(String, String)>,
    pub clicked: Vec<String>,
    pub submitted: Vec<String>,
    pub pointer_moves: usize,
    pub scrolls: usize,

    /// Selectors the fake treats as absent from the page.
    pub missing: HashSet<String>,
    /// Successive `aria-label` values of the show-results control.
    pub result_labels: VecDeque<Option<String>>,

    /// Cookie set `export_cookies` hands back.
    pub cookies: Vec<StoredCookie>,
    pub imported: Vec<StoredCookie>,
    pub cleared_cookies: bool,
}

impl FakeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without(mut self, selector: &str) -> Self {
        self.missing.insert(selector.to_string());
        self
    }
}

#[async_trait]
impl BrowserActions for FakeSession {
    fn viewport(&self) -> Viewport {
        Viewport {
            width: 1280,
            height: 800,
        }
    }

    async fn navigate(&mut self, url: &str) -> Result<()> {
        self.navigated.push(url.to_string());
        Ok(())
    }

    async fn exists(&mut self, selector: &str) -> Result<bool> {
        Ok(!self.missing.contains(selector))
    }

    async fn click(&mut self, selector: &str) -> Result<()> {
        if self.missing.contains(selector) {
            return Err(BrowserError::SelectorNotFound(selector.to_string()));
        }
        self.clicked.push(selector.to_string());
        Ok(())
    }

    async fn type_into(&mut self, selector: &str, text: &str) -> Result<()> {
        if self.missing.contains(selector) {
            return Err(BrowserError::SelectorNotFound(selector.to_string()));
        }
        self.typed.push((selector.to_string(), text.to_string()));
        Ok(())
    }

    async fn press_enter(&mut self, selector: &str) -> Result<()> {
        if self.missing.contains(selector) {
            return Err(BrowserError::SelectorNotFound(selector.to_string()));
        }
        self.submitted.push(selector.to_string());
        Ok(())
    }

    async fn attribute(&mut self, selector: &str, name: &str) -> Result<Option<String>> {
        if self.missing.contains(selector) {
            return Err(BrowserError::SelectorNotFound(selector.to_string()));
        }
        if selector == SHOW_RESULTS_BUTTON && name == "aria-label" {
            return Ok(self.result_labels.pop_front().unwrap_or(None));
        }
        Ok(None)
    }

    async fn try_move_pointer(&mut self, _dx: i64, _dy: i64) -> Result<bool> {
        self.pointer_moves += 1;
        Ok(true)
    }

    async fn scroll_by(&mut self, _delta_y: i64) -> Result<()> {
        self.scrolls += 1;
        Ok(())
    }

    async fn export_cookies(&mut self) -> Result<Vec<StoredCookie>> {
        Ok(self.cookies.clone())
    }

    async fn import_cookies(&mut self, cookies: &[StoredCookie]) -> Result<()> {
        self.imported = cookies.to_vec();
        Ok(())
    }

    async fn clear_cookies(&mut self) -> Result<()> {
        self.cleared_cookies = true;
        Ok(())
    }
}

/// A plausible persisted cookie for round-trip assertions.
pub fn sample_cookie() -> StoredCookie {
    StoredCookie {
        name: "li_at".to_string(),
        value: "AQEDAxyz".to_string(),
        domain: ".linkedin.com".to_string(),
        path: "/".to_string(),
        expires: 1_900_000_000.0,
        secure: true,
        http_only: true,
        session: false,
    }
}
