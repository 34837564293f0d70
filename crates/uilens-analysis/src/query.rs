//! Free-text complaint interpretation.
//!
//! Maps a vague user query ("the navbar is broken") to the element types
//! and issue families it implicates. All matches accumulate: a later,
//! more specific keyword never removes an earlier match. This is a
//! union-of-signals policy, not first-match.

use tracing::debug;
use uilens_protocols::{ElementType, IssueHint, QueryInterpretation};

/// Query keywords implicating element types.
static TYPE_KEYWORDS: &[(ElementType, &[&str])] = &[
    (
        ElementType::Navbar,
        &["navbar", "navigation", "nav", "menu", "top bar", "topbar", "main menu"],
    ),
    (
        ElementType::Header,
        &["header", "top", "banner", "head", "title area"],
    ),
    (ElementType::Footer, &["footer", "bottom", "foot", "copyright"]),
    (
        ElementType::Hero,
        &[
            "hero",
            "banner",
            "splash",
            "intro",
            "landing",
            "main banner",
            "first section",
            "top section",
        ],
    ),
    (
        ElementType::Button,
        &["button", "btn", "cta", "call to action", "click", "submit"],
    ),
    (
        ElementType::Form,
        &["form", "input", "field", "textbox", "login", "signup", "register", "contact form"],
    ),
    (ElementType::Card, &["card", "tile", "box", "panel", "item"]),
    (
        ElementType::Sidebar,
        &["sidebar", "side bar", "side menu", "aside", "left menu", "right menu"],
    ),
    (
        ElementType::Modal,
        &["modal", "popup", "dialog", "overlay", "lightbox"],
    ),
    (
        ElementType::Heading,
        &["heading", "title", "h1", "h2", "headline"],
    ),
    (
        ElementType::Image,
        &["image", "img", "picture", "photo", "icon", "logo"],
    ),
    (
        ElementType::Section,
        &["section", "area", "part", "block", "div"],
    ),
];

/// Query keywords implicating issue families.
static HINT_KEYWORDS: &[(IssueHint, &[&str])] = &[
    (
        IssueHint::Broken,
        &["broken", "messed up", "messed", "wrong", "bad", "ugly", "terrible"],
    ),
    (
        IssueHint::Alignment,
        &["aligned", "alignment", "align", "center", "centered", "left", "right", "off"],
    ),
    (
        IssueHint::Spacing,
        &["spacing", "space", "gap", "margin", "padding", "too close", "too far", "crowded"],
    ),
    (
        IssueHint::Overlap,
        &["overlap", "overlapping", "on top of", "behind", "in front"],
    ),
    (
        IssueHint::Size,
        &["too big", "too small", "size", "width", "height", "narrow", "wide"],
    ),
    (
        IssueHint::Visibility,
        &["hidden", "invisible", "can't see", "not showing", "missing", "disappeared"],
    ),
    (
        IssueHint::Color,
        &["color", "colour", "dark", "light", "contrast", "faded", "bright"],
    ),
    (
        IssueHint::Responsive,
        &["mobile", "phone", "tablet", "responsive", "screen size", "shrink", "breakpoint", "viewport"],
    ),
    (
        IssueHint::Layout,
        &["layout", "grid", "flex", "row", "column", "side by side", "stacked"],
    ),
    (
        IssueHint::Text,
        &["text", "font", "readable", "unreadable", "too small", "too big"],
    ),
    (
        IssueHint::Position,
        &["position", "moved", "shifted", "wrong place", "top", "bottom"],
    ),
];

/// Interpret a free-text complaint.
///
/// Pure, case-insensitive, total. Element types and issue hints keep
/// first-seen order with no duplicates.
pub fn interpret_query(query: &str) -> QueryInterpretation {
    let lowered = query.to_lowercase();

    let mut element_types: Vec<ElementType> = Vec::new();
    for (ty, keywords) in TYPE_KEYWORDS {
        if keywords.iter().any(|kw| lowered.contains(kw)) && !element_types.contains(ty) {
            element_types.push(*ty);
        }
    }

    let mut issue_hints: Vec<IssueHint> = Vec::new();
    for (hint, keywords) in HINT_KEYWORDS {
        if keywords.iter().any(|kw| lowered.contains(kw)) && !issue_hints.contains(hint) {
            issue_hints.push(*hint);
        }
    }

    let types_str = if element_types.is_empty() {
        "general UI".to_string()
    } else {
        element_types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let hints_str = if issue_hints.is_empty() {
        "unknown issues".to_string()
    } else {
        issue_hints
            .iter()
            .map(|h| h.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let interpreted_meaning = format!("User is reporting {hints_str} with the {types_str}");
    debug!(query, %interpreted_meaning, "interpreted user query");

    QueryInterpretation {
        element_types,
        issue_hints,
        interpreted_meaning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_broken() {
        let interp = interpret_query("the navbar is broken");
        assert!(interp.element_types.contains(&ElementType::Navbar));
        assert!(interp.issue_hints.contains(&IssueHint::Broken));
        assert_eq!(
            interp.interpreted_meaning,
            "User is reporting broken with the navbar"
        );
    }

    #[test]
    fn test_buttons_not_aligned() {
        let interp = interpret_query("buttons are not aligned");
        assert!(interp.element_types.contains(&ElementType::Button));
        assert!(interp.issue_hints.contains(&IssueHint::Alignment));
    }

    #[test]
    fn test_duplicate_keywords_dedup() {
        let interp = interpret_query("navbar navbar navbar");
        assert_eq!(interp.element_types, vec![ElementType::Navbar]);
    }

    #[test]
    fn test_union_of_signals() {
        // "menu" implicates navbar; "dropdown"-family words do not remove it.
        let interp = interpret_query("the menu dropdown overlaps the header");
        assert!(interp.element_types.contains(&ElementType::Navbar));
        assert!(interp.element_types.contains(&ElementType::Header));
        assert!(interp.issue_hints.contains(&IssueHint::Overlap));
    }

    #[test]
    fn test_case_insensitive() {
        let interp = interpret_query("The FOOTER is Messed Up");
        assert!(interp.element_types.contains(&ElementType::Footer));
        assert!(interp.issue_hints.contains(&IssueHint::Broken));
    }

    #[test]
    fn test_empty_query_falls_back() {
        let interp = interpret_query("");
        assert!(interp.element_types.is_empty());
        assert!(interp.issue_hints.is_empty());
        assert_eq!(
            interp.interpreted_meaning,
            "User is reporting unknown issues with the general UI"
        );
    }

    #[test]
    fn test_insertion_order_preserved() {
        let interp = interpret_query("the footer and the navbar");
        assert_eq!(
            interp.element_types,
            vec![ElementType::Navbar, ElementType::Footer]
        );
    }

    #[test]
    fn test_responsive_and_layout_hints() {
        let interp = interpret_query("the grid looks wrong on mobile");
        assert!(interp.issue_hints.contains(&IssueHint::Responsive));
        assert!(interp.issue_hints.contains(&IssueHint::Layout));
        assert!(interp.issue_hints.contains(&IssueHint::Broken));
    }

    #[test]
    fn test_idempotent() {
        let a = interpret_query("spacing is off near the hero");
        let b = interpret_query("spacing is off near the hero");
        assert_eq!(a.element_types, b.element_types);
        assert_eq!(a.issue_hints, b.issue_hints);
        assert_eq!(a.interpreted_meaning, b.interpreted_meaning);
    }
}
