use crate::actions::{BrowserActions, Viewport};
use crate::cookies::StoredCookie;
use crate::error::{BrowserError, Result};
use crate::identity;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::input::{
    DispatchMouseEventParams, DispatchMouseEventType,
};
use chromiumoxide::cdp::browser_protocol::network::{
    ClearBrowserCookiesParams, Cookie, CookieParam, TimeSinceEpoch,
};
use chromiumoxide::{Element, Page};
use futures_util::stream::StreamExt;
use std::time::Duration;

/// Launch settings for an interactive session.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    pub headless: bool,
    pub window_width: u32,
    pub window_height: u32,
    pub navigation_timeout: Duration,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1920,
            window_height: 1080,
            navigation_timeout: Duration::from_secs(30),
        }
    }
}

/// The single interactive browser session.
///
/// Owns the chromium process, the active page, and the virtual pointer
/// position that bounds-checks relative moves. There is exactly one
/// session per flow; it is passed around by `&mut` and lives until the
/// process exits.
pub struct Session {
    #[allow(dead_code)]
    browser: Browser,
    page: Page,
    viewport: Viewport,
    pointer: (i64, i64),
    navigation_timeout: Duration,
}

impl Session {
    /// Launch a browser with a randomized client identity and open an
    /// empty page.
    pub async fn launch(config: LaunchConfig) -> Result<Self> {
        let user_agent = identity::random_user_agent();
        tracing::debug!("Launching browser session as '{}'", user_agent);

        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .window_size(config.window_width, config.window_height)
            .arg(format!("--user-agent={user_agent}"));
        if !config.headless {
            builder = builder.with_head();
        }
        let browser_config = builder.build().map_err(BrowserError::ChromiumError)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))?;

        // Spawn browser handler
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))?;

        Ok(Self {
            browser,
            page,
            viewport: Viewport {
                width: config.window_width,
                height: config.window_height,
            },
            pointer: (0, 0),
            navigation_timeout: config.navigation_timeout,
        })
    }

    async fn find(&self, selector: &str) -> Result<Element> {
        self.page
            .find_element(selector)
            .await
            .map_err(|_| BrowserError::SelectorNotFound(selector.to_string()))
    }
}

#[async_trait::async_trait]
impl BrowserActions for Session {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    async fn navigate(&mut self, url: &str) -> Result<()> {
        tracing::debug!("Navigating to {}", url);
        let navigation = async {
            self.page
                .goto(url)
                .await
                .map_err(|e| BrowserError::NavigationError(e.to_string()))?;
            self.page
                .wait_for_navigation()
                .await
                .map_err(|e| BrowserError::NavigationError(e.to_string()))?;
            Ok(())
        };

        tokio::time::timeout(self.navigation_timeout, navigation)
            .await
            .map_err(|_| BrowserError::Timeout(format!("navigation to {url} timed out")))?
    }

    async fn exists(&mut self, selector: &str) -> Result<bool> {
        Ok(self.page.find_element(selector).await.is_ok())
    }

    async fn click(&mut self, selector: &str) -> Result<()> {
        let element = self.find(selector).await?;
        element
            .click()
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))?;
        Ok(())
    }

    async fn type_into(&mut self, selector: &str, text: &str) -> Result<()> {
        let element = self.find(selector).await?;
        element
            .focus()
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))?;
        element
            .type_str(text)
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))?;
        Ok(())
    }

    async fn press_enter(&mut self, selector: &str) -> Result<()> {
        let element = self.find(selector).await?;
        element
            .press_key("Enter")
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))?;
        Ok(())
    }

    async fn attribute(&mut self, selector: &str, name: &str) -> Result<Option<String>> {
        let element = self.find(selector).await?;
        element
            .attribute(name)
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))
    }

    async fn try_move_pointer(&mut self, dx: i64, dy: i64) -> Result<bool> {
        let x = self.pointer.0 + dx;
        let y = self.pointer.1 + dy;
        if x < 0 || y < 0 || x >= i64::from(self.viewport.width) || y >= i64::from(self.viewport.height)
        {
            return Ok(false);
        }

        let params = DispatchMouseEventParams::builder()
            .r#type(DispatchMouseEventType::MouseMoved)
            .x(x as f64)
            .y(y as f64)
            .build()
            .map_err(BrowserError::ChromiumError)?;
        self.page
            .execute(params)
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))?;

        self.pointer = (x, y);
        Ok(true)
    }

    async fn scroll_by(&mut self, delta_y: i64) -> Result<()> {
        self.page
            .evaluate(format!("window.scrollBy(0, {delta_y})"))
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))?;
        Ok(())
    }

    async fn export_cookies(&mut self) -> Result<Vec<StoredCookie>> {
        let cookies = self
            .page
            .get_cookies()
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))?;
        Ok(cookies.iter().map(stored_from_cookie).collect())
    }

    async fn import_cookies(&mut self, cookies: &[StoredCookie]) -> Result<()> {
        let params = cookies
            .iter()
            .map(cookie_param)
            .collect::<Result<Vec<_>>>()?;
        self.page
            .set_cookies(params)
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))?;
        Ok(())
    }

    async fn clear_cookies(&mut self) -> Result<()> {
        self.page
            .execute(ClearBrowserCookiesParams::default())
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))?;
        Ok(())
    }
}

fn stored_from_cookie(cookie: &Cookie) -> StoredCookie {
    StoredCookie {
        name: cookie.name.clone(),
        value: cookie.value.clone(),
        domain: cookie.domain.clone(),
        path: cookie.path.clone(),
        expires: cookie.expires,
        secure: cookie.secure,
        http_only: cookie.http_only,
        session: cookie.session,
    }
}

fn cookie_param(cookie: &StoredCookie) -> Result<CookieParam> {
    let mut builder = CookieParam::builder()
        .name(cookie.name.clone())
        .value(cookie.value.clone())
        .domain(cookie.domain.clone())
        .path(cookie.path.clone())
        .secure(cookie.secure)
        .http_only(cookie.http_only);
    // Session cookies carry no expiry
    if !cookie.session {
        builder = builder.expires(TimeSinceEpoch::new(cookie.expires));
    }
    builder.build().map_err(BrowserError::ChromiumError)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(session: bool) -> StoredCookie {
        StoredCookie {
            name: "li_at".to_string(),
            value: "AQEDA...".to_string(),
            domain: ".linkedin.com".to_string(),
            path: "/".to_string(),
            expires: 1_900_000_000.0,
            secure: true,
            http_only: true,
            session,
        }
    }

    #[test]
    fn test_cookie_param_carries_attributes() {
        let param = cookie_param(&stored(false)).expect("build cookie param");
        assert_eq!(param.name, "li_at");
        assert_eq!(param.value, "AQEDA...");
        assert_eq!(param.domain, Some(".linkedin.com".to_string()));
        assert_eq!(param.path, Some("/".to_string()));
        assert_eq!(param.secure, Some(true));
        assert_eq!(param.http_only, Some(true));
        assert!(param.expires.is_some());
    }

    #[test]
    fn test_session_cookie_param_has_no_expiry() {
        let param = cookie_param(&stored(true)).expect("build cookie param");
        assert!(param.expires.is_none());
    }

    #[test]
    fn test_default_launch_config() {
        let config = LaunchConfig::default();
        assert!(config.headless);
        assert_eq!(config.window_width, 1920);
        assert_eq!(config.navigation_timeout, Duration::from_secs(30));
    }
}
