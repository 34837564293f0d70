//! Element-type classification.
//!
//! Precedence is fixed: tag, then ARIA role, then class-name keyword
//! substrings, then id keyword substrings, then `other`. Tag semantics
//! are the least ambiguous signal, so they win outright; the keyword
//! table is checked in declaration order, so earlier keywords shadow
//! later ones when a class contains several (a class with both "nav" and
//! "card" resolves to navbar). Reordering these tables is a behavior
//! change, not a cleanup.

use std::collections::BTreeMap;

use uilens_protocols::{ClassifiedElement, ElementFacts, ElementType};

/// Exact tag-name to type mapping.
static TAG_TYPES: &[(&str, ElementType)] = &[
    ("nav", ElementType::Navbar),
    ("header", ElementType::Header),
    ("footer", ElementType::Footer),
    ("button", ElementType::Button),
    ("form", ElementType::Form),
    ("input", ElementType::Input),
    ("textarea", ElementType::Input),
    ("select", ElementType::Input),
    ("img", ElementType::Image),
    ("picture", ElementType::Image),
    ("svg", ElementType::Image),
    ("aside", ElementType::Sidebar),
    ("section", ElementType::Section),
    ("main", ElementType::Container),
    ("h1", ElementType::Heading),
    ("h2", ElementType::Heading),
    ("h3", ElementType::Heading),
    ("h4", ElementType::Heading),
    ("h5", ElementType::Heading),
    ("h6", ElementType::Heading),
    ("a", ElementType::Link),
];

/// Exact ARIA role to type mapping.
static ROLE_TYPES: &[(&str, ElementType)] = &[
    ("navigation", ElementType::Navbar),
    ("banner", ElementType::Header),
    ("contentinfo", ElementType::Footer),
    ("button", ElementType::Button),
    ("link", ElementType::Link),
    ("form", ElementType::Form),
    ("textbox", ElementType::Input),
    ("dialog", ElementType::Modal),
    ("menu", ElementType::Dropdown),
    ("heading", ElementType::Heading),
    ("img", ElementType::Image),
    ("complementary", ElementType::Sidebar),
    ("main", ElementType::Container),
    ("region", ElementType::Section),
];

/// Keyword substrings checked against class names and ids, in
/// declaration order. Must stay semantically consistent with the
/// selector catalogue in [`crate::catalog`].
static CLASS_KEYWORDS: &[(&str, ElementType)] = &[
    ("hero", ElementType::Hero),
    ("navbar", ElementType::Navbar),
    ("nav", ElementType::Navbar),
    ("navigation", ElementType::Navbar),
    ("header", ElementType::Header),
    ("footer", ElementType::Footer),
    ("card", ElementType::Card),
    ("btn", ElementType::Button),
    ("button", ElementType::Button),
    ("sidebar", ElementType::Sidebar),
    ("modal", ElementType::Modal),
    ("dialog", ElementType::Modal),
    ("dropdown", ElementType::Dropdown),
    ("menu", ElementType::Dropdown),
    ("form", ElementType::Form),
    ("container", ElementType::Container),
    ("wrapper", ElementType::Container),
];

/// Derive the semantic type of one element from its raw facts.
///
/// Total function: never fails, unknown cases resolve to
/// [`ElementType::Other`].
pub fn classify(facts: &ElementFacts) -> ElementType {
    let tag = facts.tag_name.to_lowercase();
    if let Some((_, ty)) = TAG_TYPES.iter().find(|(t, _)| *t == tag) {
        return *ty;
    }

    if let Some(role) = facts.aria_role.as_deref() {
        let role = role.to_lowercase();
        if let Some((_, ty)) = ROLE_TYPES.iter().find(|(r, _)| *r == role) {
            return *ty;
        }
    }

    // Classes in DOM order; keywords in table order within each class.
    for class in &facts.classes {
        let class = class.to_lowercase();
        for (keyword, ty) in CLASS_KEYWORDS {
            if class.contains(keyword) {
                return *ty;
            }
        }
    }

    if let Some(id) = facts.element_id.as_deref() {
        let id = id.to_lowercase();
        for (keyword, ty) in CLASS_KEYWORDS {
            if id.contains(keyword) {
                return *ty;
            }
        }
    }

    ElementType::Other
}

/// Classify a whole element list, preserving order.
pub fn classify_all(elements: Vec<ElementFacts>) -> Vec<ClassifiedElement> {
    elements
        .into_iter()
        .map(|facts| ClassifiedElement {
            element_type: classify(&facts),
            facts,
        })
        .collect()
}

/// Count elements per type name, with deterministic key order.
pub fn summarize(elements: &[ClassifiedElement]) -> BTreeMap<String, usize> {
    let mut summary = BTreeMap::new();
    for el in elements {
        *summary.entry(el.element_type.as_str().to_string()).or_insert(0) += 1;
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn facts(tag: &str) -> ElementFacts {
        ElementFacts::new(tag, tag)
    }

    #[test]
    fn test_tag_beats_class() {
        let mut el = facts("nav");
        el.classes = vec!["card".to_string()];
        assert_eq!(classify(&el), ElementType::Navbar);
    }

    #[test]
    fn test_role_beats_class() {
        let mut el = facts("div");
        el.aria_role = Some("dialog".to_string());
        el.classes = vec!["card".to_string()];
        assert_eq!(classify(&el), ElementType::Modal);
    }

    #[test]
    fn test_class_keyword_declaration_order() {
        // "hero" is declared before "header": a class containing both
        // resolves to hero.
        let mut el = facts("div");
        el.classes = vec!["hero-header".to_string()];
        assert_eq!(classify(&el), ElementType::Hero);
    }

    #[test]
    fn test_class_order_beats_later_class() {
        let mut el = facts("div");
        el.classes = vec!["site-footer".to_string(), "navbar".to_string()];
        assert_eq!(classify(&el), ElementType::Footer);
    }

    #[test]
    fn test_id_fallback() {
        let mut el = facts("div");
        el.element_id = Some("mainSidebar".to_string());
        assert_eq!(classify(&el), ElementType::Sidebar);
    }

    #[test]
    fn test_case_insensitive() {
        let mut el = facts("DIV");
        el.tag_name = "NAV".to_string();
        assert_eq!(classify(&el), ElementType::Navbar);

        let mut el = facts("div");
        el.classes = vec!["Dropdown-Menu".to_string()];
        assert_eq!(classify(&el), ElementType::Dropdown);
    }

    #[test]
    fn test_bare_div_is_other() {
        assert_eq!(classify(&facts("div")), ElementType::Other);
    }

    #[test]
    fn test_total_over_all_signals_absent() {
        let el = ElementFacts::new("custom-element", "custom-element");
        assert_eq!(classify(&el), ElementType::Other);
    }

    #[test]
    fn test_classify_all_and_summarize() {
        let classified = classify_all(vec![facts("nav"), facts("a"), facts("a"), facts("div")]);
        let summary = summarize(&classified);
        assert_eq!(summary.get("navbar"), Some(&1));
        assert_eq!(summary.get("link"), Some(&2));
        assert_eq!(summary.get("other"), Some(&1));
    }

    /// The catalogue and the keyword table are independent structures;
    /// each catalogue type whose dominant class selector carries a
    /// keyword must classify back to the catalogue's own type.
    #[test]
    fn test_catalog_keyword_consistency() {
        for ty in [
            ElementType::Navbar,
            ElementType::Header,
            ElementType::Footer,
            ElementType::Hero,
            ElementType::Card,
            ElementType::Sidebar,
            ElementType::Modal,
            ElementType::Dropdown,
            ElementType::Form,
            ElementType::Container,
        ] {
            let dominant = catalog::selectors_for(ty)
                .iter()
                .find_map(|sel| sel.strip_prefix('.'))
                .unwrap_or_else(|| panic!("no class selector for {ty}"));
            let mut el = ElementFacts::new("div", format!("div.{dominant}"));
            el.classes = vec![dominant.to_string()];
            assert_eq!(classify(&el), ty, "catalogue class {dominant} drifted");
        }
    }
}
