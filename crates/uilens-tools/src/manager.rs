//! Analysis orchestration over the page-driver seam.

use std::sync::Arc;

use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use uilens_analysis::{
    broad_selector, classify_all, combined_selector, detect_issues, interpret_query, summarize,
    synthesize_fixes,
};
use uilens_protocols::{
    ClassifiedElement, DriverError, ElementType, FixPlan, PageAnalysis, PageDriver, PageId,
    Snapshot, TechStackResult, ViewportInfo, ViewportReport,
};

/// Upper bound on elements extracted per operation.
pub const MAX_ELEMENTS: usize = 50;

/// Default nesting depth for DOM outlines.
pub const DEFAULT_DOM_DEPTH: usize = 5;

/// One named viewport size for responsive comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportSpec {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl ViewportSpec {
    /// The standard mobile/tablet/desktop trio.
    pub fn defaults() -> Vec<ViewportSpec> {
        vec![
            ViewportSpec {
                name: "mobile".to_string(),
                width: 375,
                height: 667,
            },
            ViewportSpec {
                name: "tablet".to_string(),
                width: 768,
                height: 1024,
            },
            ViewportSpec {
                name: "desktop".to_string(),
                width: 1920,
                height: 1080,
            },
        ]
    }
}

/// Runs the analysis pipeline against pages loaded through a
/// [`PageDriver`].
///
/// Every operation owns its page for exactly one load/close cycle; the
/// manager holds no per-page state between calls.
pub struct AnalysisManager {
    driver: Arc<dyn PageDriver>,
}

impl AnalysisManager {
    pub fn new(driver: Arc<dyn PageDriver>) -> Self {
        Self { driver }
    }

    /// Full page analysis: elements, issues, accessibility tree, DOM
    /// outline, and optionally a screenshot.
    ///
    /// Auxiliary facets (accessibility tree, outline, screenshot) degrade
    /// to empty values with a note instead of failing the whole analysis.
    pub async fn analyze_page(
        &self,
        url: &str,
        viewport: ViewportInfo,
        query: Option<&str>,
        include_screenshot: bool,
    ) -> Result<PageAnalysis, DriverError> {
        let page = self.driver.load_page(url, viewport.clone()).await?;
        let result = self
            .analyze_inner(&page, url, viewport, query, include_screenshot)
            .await;
        self.close_quietly(&page).await;
        result
    }

    async fn analyze_inner(
        &self,
        page: &PageId,
        url: &str,
        viewport: ViewportInfo,
        query: Option<&str>,
        include_screenshot: bool,
    ) -> Result<PageAnalysis, DriverError> {
        let interpretation = query.filter(|q| !q.trim().is_empty()).map(interpret_query);
        let target_types: &[ElementType] = interpretation
            .as_ref()
            .map(|i| i.element_types.as_slice())
            .unwrap_or(&[]);

        let selector = combined_selector(target_types);
        let facts = self
            .driver
            .extract_elements(page, &selector, MAX_ELEMENTS)
            .await?;
        let page_title = self.driver.page_title(page).await?;

        let mut analysis_notes = Vec::new();
        if let Some(interp) = &interpretation {
            analysis_notes.push(interp.interpreted_meaning.clone());
        }

        let accessibility_tree = match self.driver.accessibility_tree(page).await {
            Ok(tree) => tree,
            Err(e) => {
                warn!(url, error = %e, "accessibility tree extraction failed");
                analysis_notes.push(format!("Accessibility tree unavailable: {e}"));
                String::new()
            }
        };

        let dom_outline = match self.driver.dom_outline(page, DEFAULT_DOM_DEPTH).await {
            Ok(outline) => outline,
            Err(e) => {
                warn!(url, error = %e, "DOM outline extraction failed");
                analysis_notes.push(format!("DOM outline unavailable: {e}"));
                String::new()
            }
        };

        let screenshot_base64 = if include_screenshot {
            match self.driver.capture_screenshot(page, true, None).await {
                Ok(bytes) => Some(base64::engine::general_purpose::STANDARD.encode(bytes)),
                Err(e) => {
                    warn!(url, error = %e, "screenshot capture failed");
                    analysis_notes.push(format!("Screenshot unavailable: {e}"));
                    None
                }
            }
        } else {
            None
        };

        let snapshot = Snapshot {
            url: url.to_string(),
            page_title: page_title.clone(),
            viewport: viewport.clone(),
            elements: facts,
            page: Default::default(),
        };
        let issues = detect_issues(&snapshot);
        let elements = classify_all(snapshot.elements);
        let elements_summary = summarize(&elements);

        debug!(
            url,
            elements = elements.len(),
            issues = issues.len(),
            "page analysis complete"
        );

        Ok(PageAnalysis {
            url: url.to_string(),
            page_title,
            viewport,
            elements_summary,
            elements,
            issues,
            accessibility_tree,
            dom_outline,
            screenshot_base64,
            analysis_notes,
        })
    }

    /// Classified details for every element of one type.
    pub async fn element_details(
        &self,
        url: &str,
        element_type: ElementType,
        viewport: ViewportInfo,
    ) -> Result<Vec<ClassifiedElement>, DriverError> {
        let page = self.driver.load_page(url, viewport).await?;
        let selector = combined_selector(&[element_type]);
        let result = self
            .driver
            .extract_elements(&page, &selector, MAX_ELEMENTS)
            .await
            .map(classify_all);
        self.close_quietly(&page).await;
        result
    }

    /// Turn a vague complaint into a prioritized fix plan.
    pub async fn fix_plan(
        &self,
        url: &str,
        complaint: &str,
        viewport: ViewportInfo,
    ) -> Result<FixPlan, DriverError> {
        let page = self.driver.load_page(url, viewport.clone()).await?;
        let result = self.fix_plan_inner(&page, url, complaint, viewport).await;
        self.close_quietly(&page).await;
        result
    }

    async fn fix_plan_inner(
        &self,
        page: &PageId,
        url: &str,
        complaint: &str,
        viewport: ViewportInfo,
    ) -> Result<FixPlan, DriverError> {
        let interpretation = interpret_query(complaint);
        let selector = combined_selector(&interpretation.element_types);
        let facts = self
            .driver
            .extract_elements(page, &selector, MAX_ELEMENTS)
            .await?;

        let snapshot = Snapshot {
            url: url.to_string(),
            page_title: String::new(),
            viewport,
            elements: facts,
            page: Default::default(),
        };
        let issues = detect_issues(&snapshot);
        let elements = classify_all(snapshot.elements);

        Ok(synthesize_fixes(url, complaint, &elements, &issues))
    }

    /// PNG screenshot bytes, optionally with matched elements outlined
    /// first.
    pub async fn screenshot(
        &self,
        url: &str,
        viewport: ViewportInfo,
        full_page: bool,
        highlight_selector: Option<&str>,
    ) -> Result<Vec<u8>, DriverError> {
        let page = self.driver.load_page(url, viewport).await?;
        let result = self
            .driver
            .capture_screenshot(&page, full_page, highlight_selector)
            .await;
        self.close_quietly(&page).await;
        result
    }

    /// Accessibility tree snapshot as text.
    pub async fn accessibility_snapshot(
        &self,
        url: &str,
        viewport: ViewportInfo,
    ) -> Result<String, DriverError> {
        let page = self.driver.load_page(url, viewport).await?;
        let result = self.driver.accessibility_tree(&page).await;
        self.close_quietly(&page).await;
        result
    }

    /// Simplified DOM outline down to `max_depth` levels.
    pub async fn dom_outline(
        &self,
        url: &str,
        viewport: ViewportInfo,
        max_depth: usize,
    ) -> Result<String, DriverError> {
        let page = self.driver.load_page(url, viewport).await?;
        let result = self.driver.dom_outline(&page, max_depth).await;
        self.close_quietly(&page).await;
        result
    }

    /// Render the page once per viewport and report element visibility
    /// at each size.
    pub async fn compare_viewports(
        &self,
        url: &str,
        viewports: &[ViewportSpec],
        include_screenshots: bool,
    ) -> Result<Vec<ViewportReport>, DriverError> {
        let mut reports = Vec::with_capacity(viewports.len());

        for spec in viewports {
            let viewport = ViewportInfo::new(spec.width, spec.height);
            let page = self.driver.load_page(url, viewport).await?;
            let report = self
                .viewport_report_inner(&page, spec, include_screenshots)
                .await;
            self.close_quietly(&page).await;
            reports.push(report?);
        }

        Ok(reports)
    }

    async fn viewport_report_inner(
        &self,
        page: &PageId,
        spec: &ViewportSpec,
        include_screenshot: bool,
    ) -> Result<ViewportReport, DriverError> {
        let facts = self
            .driver
            .extract_elements(page, broad_selector(), MAX_ELEMENTS)
            .await?;
        let visible_elements = facts.iter().filter(|f| f.is_visible).count();

        let screenshot_base64 = if include_screenshot {
            let bytes = self.driver.capture_screenshot(page, false, None).await?;
            Some(base64::engine::general_purpose::STANDARD.encode(bytes))
        } else {
            None
        };

        Ok(ViewportReport {
            name: spec.name.clone(),
            width: spec.width,
            height: spec.height,
            visible_elements,
            total_elements: facts.len(),
            screenshot_base64,
        })
    }

    /// Fingerprint the page's technology stack.
    pub async fn tech_stack(
        &self,
        url: &str,
        viewport: ViewportInfo,
    ) -> Result<TechStackResult, DriverError> {
        let page = self.driver.load_page(url, viewport).await?;
        let result = self.driver.extract_page_facts(&page).await;
        self.close_quietly(&page).await;
        Ok(uilens_techstack::fingerprint(&result?))
    }

    /// Pages must be released even when the operation failed; a close
    /// failure is logged, never surfaced.
    async fn close_quietly(&self, page: &PageId) {
        if let Err(e) = self.driver.close_page(page).await {
            warn!(page = %page, error = %e, "failed to close page");
        }
    }
}
