use crate::cookies::StoredCookie;
use crate::error::Result;

/// Viewport dimensions of the active browser window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Capability trait over the interactive browser session.
///
/// Flows take `&mut impl BrowserActions` instead of the concrete driver so
/// the search state machine and the humanizer can be exercised against a
/// scripted fake. Methods take `&mut self` to keep the session
/// single-owner: exactly one control flow drives it at a time.
#[async_trait::async_trait]
pub trait BrowserActions {
    /// Viewport of the session's window
    fn viewport(&self) -> Viewport;

    /// Navigate to a URL and wait for the load to settle
    async fn navigate(&mut self, url: &str) -> Result<()>;

    /// Probe for an element without failing when it is absent
    async fn exists(&mut self, selector: &str) -> Result<bool>;

    /// Click an element by selector
    async fn click(&mut self, selector: &str) -> Result<()>;

    /// Focus a field by selector and type text into it
    async fn type_into(&mut self, selector: &str, text: &str) -> Result<()>;

    /// Send the return key to an element by selector
    async fn press_enter(&mut self, selector: &str) -> Result<()>;

    /// Read an attribute of an element by selector
    async fn attribute(&mut self, selector: &str, name: &str) -> Result<Option<String>>;

    /// Attempt a relative pointer move.
    ///
    /// Returns `Ok(false)` when the target would leave the viewport; the
    /// move is skipped and the pointer stays where it was. Every other
    /// failure is an error.
    async fn try_move_pointer(&mut self, dx: i64, dy: i64) -> Result<bool>;

    /// Scroll the page vertically by a pixel delta (negative scrolls up)
    async fn scroll_by(&mut self, delta_y: i64) -> Result<()>;

    /// Export the session's current cookie set
    async fn export_cookies(&mut self) -> Result<Vec<StoredCookie>>;

    /// Restore a previously exported cookie set
    async fn import_cookies(&mut self, cookies: &[StoredCookie]) -> Result<()>;

    /// Drop all cookies held by the session
    async fn clear_cookies(&mut self) -> Result<()>;
}
