//! The seam to the external browser-driving/extraction layer.
//!
//! The pipeline never drives a browser itself; it consumes facts produced
//! by an implementation of [`PageDriver`]. A real implementation would sit
//! on CDP or Playwright; tests use a hand-rolled mock.

use async_trait::async_trait;
use thiserror::Error;

use crate::element::{ElementFacts, ViewportInfo};
use crate::snapshot::PageFacts;

/// Opaque handle to a loaded page, issued and owned by the driver.
pub type PageId = String;

/// Errors from the browser-driving layer.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Page evaluation failed: {0}")]
    EvaluationFailed(String),

    #[error("Screenshot failed: {0}")]
    ScreenshotFailed(String),

    #[error("Browser not connected")]
    NotConnected,
}

/// The browser-driving and fact-extraction layer the pipeline consumes.
///
/// Each loaded page is owned by one analysis; implementations may run
/// independent pages concurrently.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Load a URL at the given viewport and return a page handle.
    ///
    /// Implementations should fall back to a looser load-completion
    /// condition before reporting [`DriverError::NavigationFailed`].
    async fn load_page(&self, url: &str, viewport: ViewportInfo) -> Result<PageId, DriverError>;

    /// Walk the rendered page with a combined CSS selector and return raw
    /// per-element facts, capped at `cap` elements.
    async fn extract_elements(
        &self,
        page: &PageId,
        combined_selector: &str,
        cap: usize,
    ) -> Result<Vec<ElementFacts>, DriverError>;

    /// Collect the page-wide fact bundle in one pass.
    async fn extract_page_facts(&self, page: &PageId) -> Result<PageFacts, DriverError>;

    /// Document title.
    async fn page_title(&self, page: &PageId) -> Result<String, DriverError>;

    /// Capture a PNG screenshot, optionally highlighting elements matched
    /// by `highlight_selector` first.
    async fn capture_screenshot(
        &self,
        page: &PageId,
        full_page: bool,
        highlight_selector: Option<&str>,
    ) -> Result<Vec<u8>, DriverError>;

    /// Accessibility tree snapshot as text.
    async fn accessibility_tree(&self, page: &PageId) -> Result<String, DriverError>;

    /// Simplified DOM outline down to `max_depth` levels.
    async fn dom_outline(&self, page: &PageId, max_depth: usize) -> Result<String, DriverError>;

    /// Release the page and its context.
    async fn close_page(&self, page: &PageId) -> Result<(), DriverError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_error_display() {
        let err = DriverError::NavigationFailed("timeout".to_string());
        assert!(err.to_string().contains("Navigation failed"));
        assert!(err.to_string().contains("timeout"));
        assert_eq!(DriverError::NotConnected.to_string(), "Browser not connected");
    }
}
