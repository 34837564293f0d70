//! Rule-based issue detection over a snapshot.
//!
//! Rules run per element and independently; one element may trigger
//! several issues. Absent optional facts are "no signal" and simply keep
//! a rule from firing.

use tracing::debug;
use uilens_protocols::{
    ElementFacts, ElementType, Issue, IssueKind, Severity, Snapshot, ViewportInfo,
};

use crate::classify::classify;

/// Hard cap on issues returned per snapshot.
pub const MAX_ISSUES: usize = 20;

/// Z-index values above this are treated as stacking hazards.
const Z_INDEX_CEILING: i64 = 9999;

/// Containers shorter than this are spacer elements, not flagged.
const EMPTY_CONTAINER_MIN_HEIGHT: f64 = 50.0;

/// Structural container tags eligible for the empty-container rule.
static CONTAINER_TAGS: &[&str] = &["div", "section", "main", "article"];

/// Scan a snapshot for rule-violating patterns.
///
/// Returns at most [`MAX_ISSUES`] issues, in element order then rule
/// order, each with a generated suggested fix.
pub fn detect_issues(snapshot: &Snapshot) -> Vec<Issue> {
    let mut issues = Vec::new();

    for facts in &snapshot.elements {
        if issues.len() >= MAX_ISSUES {
            break;
        }
        check_element(facts, &snapshot.viewport, &mut issues);
    }

    issues.truncate(MAX_ISSUES);
    debug!(count = issues.len(), url = %snapshot.url, "detected issues");
    issues
}

fn check_element(facts: &ElementFacts, viewport: &ViewportInfo, issues: &mut Vec<Issue>) {
    if let Some(issue) = check_overflow(facts, viewport) {
        issues.push(issue);
    }
    if let Some(issue) = check_z_index(facts) {
        issues.push(issue);
    }
    if let Some(issue) = check_empty_container(facts) {
        issues.push(issue);
    }
    if let Some(issue) = check_accessible_name(facts) {
        issues.push(issue);
    }
}

/// Element spills past the right viewport edge with unconstrained
/// horizontal overflow.
fn check_overflow(facts: &ElementFacts, viewport: &ViewportInfo) -> Option<Issue> {
    let bbox = facts.bounding_box.as_ref()?;
    if bbox.right() <= viewport.width as f64 {
        return None;
    }

    let position = facts.styles.as_ref().and_then(|s| s.position.as_deref());
    if position == Some("fixed") {
        return None;
    }

    let (scroll, client) = (facts.scroll_width?, facts.client_width?);
    if scroll <= client {
        return None;
    }

    let overflow_x = facts.styles.as_ref().and_then(|s| s.overflow_x.as_deref());
    if matches!(overflow_x, Some("hidden" | "scroll" | "auto" | "clip")) {
        return None;
    }

    Some(issue(
        facts,
        IssueKind::OverflowHidden,
        "Element extends beyond viewport causing horizontal scroll".to_string(),
    ))
}

/// Extreme z-index values cause stacking conflicts.
fn check_z_index(facts: &ElementFacts) -> Option<Issue> {
    let z = facts.z_index()?;
    if z <= Z_INDEX_CEILING {
        return None;
    }

    let mut found = issue(
        facts,
        IssueKind::ZIndexConflict,
        format!("Element has extremely high z-index ({z}) which may cause stacking issues"),
    );
    found.css_property = Some("z-index".to_string());
    found.current_value = Some(z.to_string());
    Some(found)
}

/// Structural container with no children, no text, and real height.
fn check_empty_container(facts: &ElementFacts) -> Option<Issue> {
    if !CONTAINER_TAGS.contains(&facts.tag_name.to_lowercase().as_str()) {
        return None;
    }
    if facts.children_count > 0 || !facts.trimmed_text().is_empty() {
        return None;
    }
    let height = facts.bounding_box.as_ref()?.height;
    if height <= EMPTY_CONTAINER_MIN_HEIGHT {
        return None;
    }

    let mut found = issue(
        facts,
        IssueKind::EmptyContainer,
        "Empty container taking up space".to_string(),
    );
    found.element_type = ElementType::Container;
    Some(found)
}

/// Images and interactive elements must carry an accessible name.
fn check_accessible_name(facts: &ElementFacts) -> Option<Issue> {
    let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
    if present(&facts.aria_label) {
        return None;
    }

    match facts.tag_name.to_lowercase().as_str() {
        "img" => {
            if present(&facts.alt_text) {
                return None;
            }
            let mut found = issue(
                facts,
                IssueKind::AccessibilityMissing,
                "Image missing alt text".to_string(),
            );
            found.element_type = ElementType::Image;
            Some(found)
        }
        tag @ ("button" | "a") if facts.trimmed_text().is_empty() => {
            let mut found = issue(
                facts,
                IssueKind::AccessibilityMissing,
                "Interactive element missing accessible name".to_string(),
            );
            found.element_type = if tag == "button" {
                ElementType::Button
            } else {
                ElementType::Link
            };
            Some(found)
        }
        _ => None,
    }
}

fn issue(facts: &ElementFacts, kind: IssueKind, description: String) -> Issue {
    Issue {
        severity: Severity::Warning,
        selector: facts.selector.clone(),
        element_type: classify(facts),
        kind,
        description,
        suggested_fix: fix_suggestion(kind, &facts.selector),
        css_property: None,
        current_value: None,
        recommended_value: None,
        code_snippet: None,
    }
}

/// Generate a human-readable fix suggestion for an issue kind.
///
/// Unknown kinds fall back to a generic review template rather than
/// failing.
pub fn fix_suggestion(kind: IssueKind, selector: &str) -> String {
    match kind {
        IssueKind::OverflowHidden => format!(
            "Add 'overflow-x: hidden' to the parent container or 'max-width: 100%' to {selector}"
        ),
        IssueKind::ZIndexConflict => format!(
            "Reduce z-index on {selector} to a reasonable value (10-100 for most UI elements)"
        ),
        IssueKind::EmptyContainer => {
            format!("Remove the empty {selector} element or add content to it")
        }
        IssueKind::AccessibilityMissing => {
            format!("Add appropriate alt text or aria-label to {selector}")
        }
        IssueKind::ElementOverlap => {
            format!("Adjust position or z-index of {selector} to prevent overlap")
        }
        IssueKind::SpacingInconsistent => {
            format!("Standardize padding/margin values on {selector}")
        }
        other => format!("Review and fix the {other} issue on {selector}"),
    }
}
