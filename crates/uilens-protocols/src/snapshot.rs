//! Page-wide facts and the full snapshot/analysis envelopes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::element::{ClassifiedElement, ElementFacts, ViewportInfo};
use crate::issue::Issue;

/// A meta tag seen in the document head.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaTag {
    /// The `name` (or `property`) attribute.
    pub name: String,
    /// The `content` attribute.
    pub content: String,
}

/// Page-wide facts collected in one pass over the rendered document.
///
/// Everything defaults to empty so a partially failed extraction still
/// deserializes into a usable (degraded) bundle.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PageFacts {
    /// External script URLs (`script[src]`).
    #[serde(default)]
    pub script_urls: Vec<String>,

    /// Stylesheet hrefs (`link[rel="stylesheet"]`).
    #[serde(default)]
    pub stylesheet_urls: Vec<String>,

    /// Meta tags with a name or property attribute.
    #[serde(default)]
    pub meta_tags: Vec<MetaTag>,

    /// Names of well-known global symbols found on `window`.
    #[serde(default)]
    pub global_symbols: Vec<String>,

    /// Framework-specific attribute names seen anywhere in the DOM
    /// (e.g. `ng-version`, `v-cloak`, `data-reactroot`).
    #[serde(default)]
    pub framework_attributes: Vec<String>,

    /// All distinct `data-*` attribute names seen.
    #[serde(default)]
    pub data_attributes: Vec<String>,

    /// Sampled corpus of distinct class names.
    #[serde(default)]
    pub class_names: Vec<String>,

    /// Number of elements carrying an inline `style` attribute.
    #[serde(default)]
    pub inline_style_count: usize,

    /// CSS custom property names defined on the document root.
    #[serde(default)]
    pub css_variable_names: Vec<String>,

    /// Structural hint flags such as `react_root`, `nextjs_root`,
    /// `nuxt_data`, `angular_version`, `astro_island`.
    #[serde(default)]
    pub structural_hints: Vec<String>,
}

impl PageFacts {
    /// Whether a well-known global symbol was seen.
    pub fn has_global(&self, name: &str) -> bool {
        self.global_symbols.iter().any(|g| g == name)
    }

    /// Whether a structural hint flag was recorded.
    pub fn has_hint(&self, hint: &str) -> bool {
        self.structural_hints.iter().any(|h| h == hint)
    }
}

/// The complete set of facts captured from one rendered page at one
/// viewport size. Lifetime is one analysis call; never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// URL the snapshot was taken from.
    pub url: String,

    /// Document title.
    #[serde(default)]
    pub page_title: String,

    /// Viewport the page was rendered at.
    #[serde(default)]
    pub viewport: ViewportInfo,

    /// Per-element facts.
    #[serde(default)]
    pub elements: Vec<ElementFacts>,

    /// Page-wide facts.
    #[serde(default)]
    pub page: PageFacts,
}

impl Snapshot {
    /// Create an empty snapshot for a URL at a viewport.
    pub fn new(url: impl Into<String>, viewport: ViewportInfo) -> Self {
        Self {
            url: url.into(),
            page_title: String::new(),
            viewport,
            elements: Vec::new(),
            page: PageFacts::default(),
        }
    }
}

/// Complete result of analyzing a webpage UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageAnalysis {
    /// URL that was analyzed.
    pub url: String,

    /// Page title from the document.
    pub page_title: String,

    /// Viewport used for the analysis.
    pub viewport: ViewportInfo,

    /// Count of each element type found, keyed by type name.
    #[serde(default)]
    pub elements_summary: BTreeMap<String, usize>,

    /// All identified UI elements.
    #[serde(default)]
    pub elements: Vec<ClassifiedElement>,

    /// Detected UI issues.
    #[serde(default)]
    pub issues: Vec<Issue>,

    /// Accessibility tree snapshot, empty when extraction failed.
    #[serde(default)]
    pub accessibility_tree: String,

    /// Simplified DOM outline, empty when extraction failed.
    #[serde(default)]
    pub dom_outline: String,

    /// Base64-encoded PNG screenshot, when requested and captured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot_base64: Option<String>,

    /// Additional observations about the UI.
    #[serde(default)]
    pub analysis_notes: Vec<String>,
}

/// How a page renders at one viewport size, for responsive comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportReport {
    /// Viewport label (mobile, tablet, desktop, ...).
    pub name: String,
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Number of elements visible at this size.
    pub visible_elements: usize,
    /// Total number of identified elements.
    pub total_elements: usize,
    /// Base64-encoded PNG screenshot of the visible viewport.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot_base64: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_facts_lookups() {
        let facts = PageFacts {
            global_symbols: vec!["React".to_string(), "jQuery".to_string()],
            structural_hints: vec!["nextjs_root".to_string()],
            ..Default::default()
        };
        assert!(facts.has_global("React"));
        assert!(!facts.has_global("Vue"));
        assert!(facts.has_hint("nextjs_root"));
        assert!(!facts.has_hint("nuxt_root"));
    }

    #[test]
    fn test_degraded_page_facts_deserialize() {
        // A failed extraction facet reports an empty object.
        let facts: PageFacts = serde_json::from_str("{}").unwrap();
        assert!(facts.script_urls.is_empty());
        assert_eq!(facts.inline_style_count, 0);
    }

    #[test]
    fn test_snapshot_new_is_empty() {
        let snap = Snapshot::new("https://example.com", ViewportInfo::new(375, 667));
        assert_eq!(snap.viewport.width, 375);
        assert!(snap.elements.is_empty());
        assert!(snap.page_title.is_empty());
    }
}
