//! Shared mock driver for manager and tool tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use uilens_protocols::{
    BoundingBox, DriverError, ElementFacts, PageDriver, PageFacts, PageId, StyleFacts,
    ViewportInfo,
};

/// Canned-data driver. Failure flags turn individual facets into errors
/// so degraded paths can be exercised.
#[derive(Default)]
pub(crate) struct MockDriver {
    pub elements: Vec<ElementFacts>,
    pub page_facts: PageFacts,
    pub fail_navigation: bool,
    pub fail_accessibility: bool,
    pub fail_screenshot: bool,
    pub(crate) opened: AtomicUsize,
    pub(crate) closed: AtomicUsize,
    pub(crate) last_selector: Mutex<String>,
    pub(crate) last_highlight: Mutex<Option<String>>,
}

impl MockDriver {
    pub fn closed_pages(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn last_selector(&self) -> String {
        self.last_selector.lock().unwrap().clone()
    }

    pub fn last_highlight(&self) -> Option<String> {
        self.last_highlight.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageDriver for MockDriver {
    async fn load_page(&self, url: &str, _viewport: ViewportInfo) -> Result<PageId, DriverError> {
        if self.fail_navigation {
            return Err(DriverError::NavigationFailed(format!("cannot reach {url}")));
        }
        let n = self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(format!("page-{n}"))
    }

    async fn extract_elements(
        &self,
        _page: &PageId,
        combined_selector: &str,
        cap: usize,
    ) -> Result<Vec<ElementFacts>, DriverError> {
        *self.last_selector.lock().unwrap() = combined_selector.to_string();
        Ok(self.elements.iter().take(cap).cloned().collect())
    }

    async fn extract_page_facts(&self, _page: &PageId) -> Result<PageFacts, DriverError> {
        Ok(self.page_facts.clone())
    }

    async fn page_title(&self, _page: &PageId) -> Result<String, DriverError> {
        Ok("Example Page".to_string())
    }

    async fn capture_screenshot(
        &self,
        _page: &PageId,
        _full_page: bool,
        highlight_selector: Option<&str>,
    ) -> Result<Vec<u8>, DriverError> {
        *self.last_highlight.lock().unwrap() = highlight_selector.map(str::to_string);
        if self.fail_screenshot {
            return Err(DriverError::ScreenshotFailed("target crashed".to_string()));
        }
        Ok(vec![0x89, b'P', b'N', b'G'])
    }

    async fn accessibility_tree(&self, _page: &PageId) -> Result<String, DriverError> {
        if self.fail_accessibility {
            return Err(DriverError::EvaluationFailed("aria snapshot failed".to_string()));
        }
        Ok("- navigation:\n  - link \"Home\"".to_string())
    }

    async fn dom_outline(&self, _page: &PageId, _max_depth: usize) -> Result<String, DriverError> {
        Ok("body\n  nav.main\n  main#content".to_string())
    }

    async fn close_page(&self, _page: &PageId) -> Result<(), DriverError> {
        self.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// A navbar that spills past a 1920px viewport and scrolls horizontally.
pub(crate) fn navbar_overflowing() -> ElementFacts {
    let mut facts = ElementFacts::new("nav", "nav.main");
    facts.classes = vec!["main".to_string()];
    facts.bounding_box = Some(BoundingBox {
        x: 0.0,
        y: 0.0,
        width: 2100.0,
        height: 64.0,
    });
    facts.scroll_width = Some(2100.0);
    facts.client_width = Some(1920.0);
    facts.styles = Some(StyleFacts {
        position: Some("static".to_string()),
        overflow_x: Some("visible".to_string()),
        ..Default::default()
    });
    facts.children_count = 4;
    facts.text_content = Some("Home About Contact".to_string());
    facts
}

/// A well-behaved labelled button.
pub(crate) fn plain_button() -> ElementFacts {
    let mut facts = ElementFacts::new("button", "button.cta");
    facts.classes = vec!["cta".to_string()];
    facts.bounding_box = Some(BoundingBox {
        x: 100.0,
        y: 200.0,
        width: 120.0,
        height: 40.0,
    });
    facts.text_content = Some("Sign up".to_string());
    facts.children_count = 0;
    facts
}
