//! Selector catalogue: ordered CSS selector lists per element type.
//!
//! Used for bulk DOM queries and highlighting. Declaration order is
//! semantic: earlier selectors win the dedup when building a combined
//! query. The catalogue and the classifier keyword table in
//! [`crate::classify`] are independent structures that must stay
//! semantically consistent (cross-validated in tests).

use once_cell::sync::Lazy;
use uilens_protocols::ElementType;

/// Upper bound on selectors joined into one bulk query.
pub const MAX_COMBINED_SELECTORS: usize = 30;

/// Ordered selector lists per element type.
static CATALOG: &[(ElementType, &[&str])] = &[
    (
        ElementType::Navbar,
        &[
            "nav",
            "[role='navigation']",
            ".navbar",
            ".nav",
            "#navbar",
            "#nav",
            ".navigation",
            "header nav",
        ],
    ),
    (
        ElementType::Header,
        &[
            "header",
            "[role='banner']",
            ".header",
            "#header",
            ".site-header",
            ".page-header",
        ],
    ),
    (
        ElementType::Footer,
        &[
            "footer",
            "[role='contentinfo']",
            ".footer",
            "#footer",
            ".site-footer",
            ".page-footer",
        ],
    ),
    (
        ElementType::Hero,
        &[
            ".hero",
            ".hero-section",
            "[data-section='hero']",
            ".banner",
            ".jumbotron",
            ".masthead",
            "section:first-of-type",
            ".intro",
            ".landing",
        ],
    ),
    (
        ElementType::Button,
        &[
            "button",
            "[role='button']",
            "input[type='submit']",
            "input[type='button']",
            ".btn",
            ".button",
            "a.btn",
            "a.button",
        ],
    ),
    (ElementType::Link, &["a[href]", "[role='link']"]),
    (
        ElementType::Heading,
        &["h1", "h2", "h3", "h4", "h5", "h6", "[role='heading']"],
    ),
    (ElementType::Form, &["form", "[role='form']", ".form"]),
    (
        ElementType::Input,
        &[
            "input:not([type='hidden'])",
            "textarea",
            "select",
            "[role='textbox']",
            "[role='combobox']",
        ],
    ),
    (
        ElementType::Card,
        &[".card", ".card-container", "[class*='card']", ".tile", ".panel"],
    ),
    (
        ElementType::Sidebar,
        &["aside", "[role='complementary']", ".sidebar", "#sidebar", ".side-nav"],
    ),
    (
        ElementType::Modal,
        &["[role='dialog']", ".modal", ".dialog", ".popup", "[aria-modal='true']"],
    ),
    (
        ElementType::Dropdown,
        &["[role='menu']", "[role='listbox']", ".dropdown", ".dropdown-menu", "select"],
    ),
    (
        ElementType::Image,
        &["img", "[role='img']", "picture", "svg", ".image"],
    ),
    (
        ElementType::Section,
        &["section", "[role='region']", ".section", "main > div"],
    ),
    (
        ElementType::Container,
        &[".container", ".wrapper", ".content", "main", "[role='main']"],
    ),
];

/// Broad sweep of significant elements, used when no specific type is
/// requested for a full-page pass.
static BROAD_SELECTORS: &[&str] = &[
    "header",
    "nav",
    "main",
    "section",
    "article",
    "aside",
    "footer",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "button",
    "a[href]",
    "form",
    "input",
    "textarea",
    "select",
    "img",
    "picture",
    "svg",
    "div[class]",
    "div[id]",
    "[role]",
];

static BROAD_SELECTOR: Lazy<String> = Lazy::new(|| BROAD_SELECTORS.join(", "));

/// Ordered selector list for one element type. Empty for types without a
/// catalogue entry (`other`).
pub fn selectors_for(element_type: ElementType) -> &'static [&'static str] {
    CATALOG
        .iter()
        .find(|(ty, _)| *ty == element_type)
        .map(|(_, selectors)| *selectors)
        .unwrap_or(&[])
}

/// Build a combined bulk-query selector for the given types.
///
/// Selectors keep first-seen order, duplicates are dropped, and the join
/// is capped at [`MAX_COMBINED_SELECTORS`]. With no types, the whole
/// catalogue contributes.
pub fn combined_selector(types: &[ElementType]) -> String {
    let mut seen: Vec<&str> = Vec::new();

    let mut push_all = |selectors: &'static [&'static str]| {
        for &sel in selectors {
            if seen.len() >= MAX_COMBINED_SELECTORS {
                break;
            }
            if !seen.contains(&sel) {
                seen.push(sel);
            }
        }
    };

    if types.is_empty() {
        for (_, selectors) in CATALOG {
            push_all(selectors);
        }
    } else {
        for ty in types {
            push_all(selectors_for(*ty));
        }
    }

    seen.join(", ")
}

/// Combined selector for the broad significant-element sweep.
pub fn broad_selector() -> &'static str {
    &BROAD_SELECTOR
}
