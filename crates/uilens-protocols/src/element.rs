//! Per-element facts extracted from a rendered page, and the semantic
//! element categories derived from them.

use serde::{Deserialize, Serialize};

/// Viewport information for coordinate calculations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportInfo {
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Device pixel ratio.
    pub device_pixel_ratio: f64,
}

impl Default for ViewportInfo {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            device_pixel_ratio: 1.0,
        }
    }
}

impl ViewportInfo {
    /// Create a viewport with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio: 1.0,
        }
    }
}

/// Bounding box for an element, in device pixels.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// X coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if a point is inside this bounding box.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Get the center point of this bounding box.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if this box intersects with another.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Computed CSS style subset for an element.
///
/// Every field is optional: the extractor reports what it can resolve and
/// the pipeline treats absent values as "no signal".
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StyleFacts {
    pub background_color: Option<String>,
    pub color: Option<String>,
    pub font_size: Option<String>,
    pub font_family: Option<String>,
    pub padding: Option<String>,
    pub margin: Option<String>,
    pub border: Option<String>,
    pub display: Option<String>,
    pub position: Option<String>,
    pub z_index: Option<String>,
    pub flex_direction: Option<String>,
    pub justify_content: Option<String>,
    pub align_items: Option<String>,
    pub gap: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub overflow_x: Option<String>,
    pub cursor: Option<String>,
}

/// Raw facts about one element, produced once per element per snapshot.
///
/// Immutable after creation; owned by the [`crate::Snapshot`] that
/// created it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementFacts {
    /// Tag name (lowercase).
    pub tag_name: String,

    /// Best-effort unique CSS selector for this element.
    pub selector: String,

    /// XPath selector for precise targeting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xpath: Option<String>,

    /// Visible text content, truncated by the extractor if long.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,

    /// Position and size on the page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,

    /// ARIA role attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_role: Option<String>,

    /// ARIA label attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,

    /// Alt text, for images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,

    /// CSS class names, in DOM order.
    #[serde(default)]
    pub classes: Vec<String>,

    /// HTML id attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,

    /// Computed style subset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleFacts>,

    /// Number of direct child elements.
    #[serde(default)]
    pub children_count: usize,

    /// Whether the element is visible on the page.
    #[serde(default = "default_visible")]
    pub is_visible: bool,

    /// Horizontal scroll width, if measured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_width: Option<f64>,

    /// Horizontal client width, if measured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_width: Option<f64>,
}

fn default_visible() -> bool {
    true
}

impl ElementFacts {
    /// Create minimal facts for a tag + selector pair. Everything else
    /// defaults to "no signal".
    pub fn new(tag_name: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            selector: selector.into(),
            xpath: None,
            text_content: None,
            bounding_box: None,
            aria_role: None,
            aria_label: None,
            alt_text: None,
            classes: Vec::new(),
            element_id: None,
            styles: None,
            children_count: 0,
            is_visible: true,
            scroll_width: None,
            client_width: None,
        }
    }

    /// Trimmed text content, or empty string when absent.
    pub fn trimmed_text(&self) -> &str {
        self.text_content.as_deref().map(str::trim).unwrap_or("")
    }

    /// Resolved integer z-index, if the computed style carries one.
    pub fn z_index(&self) -> Option<i64> {
        self.styles
            .as_ref()
            .and_then(|s| s.z_index.as_deref())
            .and_then(|z| z.parse().ok())
    }
}

/// Closed semantic category assigned to a DOM element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Button,
    Link,
    Heading,
    Navbar,
    Header,
    Footer,
    Hero,
    Form,
    Input,
    Image,
    Section,
    Card,
    Modal,
    Dropdown,
    Sidebar,
    Container,
    Other,
}

impl ElementType {
    /// Snake-case name matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Button => "button",
            ElementType::Link => "link",
            ElementType::Heading => "heading",
            ElementType::Navbar => "navbar",
            ElementType::Header => "header",
            ElementType::Footer => "footer",
            ElementType::Hero => "hero",
            ElementType::Form => "form",
            ElementType::Input => "input",
            ElementType::Image => "image",
            ElementType::Section => "section",
            ElementType::Card => "card",
            ElementType::Modal => "modal",
            ElementType::Dropdown => "dropdown",
            ElementType::Sidebar => "sidebar",
            ElementType::Container => "container",
            ElementType::Other => "other",
        }
    }

    /// All members, in declaration order.
    pub const ALL: [ElementType; 17] = [
        ElementType::Button,
        ElementType::Link,
        ElementType::Heading,
        ElementType::Navbar,
        ElementType::Header,
        ElementType::Footer,
        ElementType::Hero,
        ElementType::Form,
        ElementType::Input,
        ElementType::Image,
        ElementType::Section,
        ElementType::Card,
        ElementType::Modal,
        ElementType::Dropdown,
        ElementType::Sidebar,
        ElementType::Container,
        ElementType::Other,
    ];
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Element facts plus the derived semantic type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedElement {
    /// Semantic type of the element.
    pub element_type: ElementType,

    /// The raw facts the type was derived from.
    pub facts: ElementFacts,
}
