//! Detected UI issues and interpreted user complaints.

use serde::{Deserialize, Serialize};

use crate::element::ElementType;

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Closed category of detectable UI issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    LayoutBroken,
    OverflowHidden,
    ZIndexConflict,
    SpacingInconsistent,
    AlignmentOff,
    ResponsiveIssue,
    AccessibilityMissing,
    ContrastLow,
    ElementOverlap,
    InvisibleElement,
    EmptyContainer,
    OrphanedElement,
    StyleInconsistency,
    MissingHoverState,
    BrokenFlexbox,
    BrokenGrid,
    FontIssue,
    ColorIssue,
    SizeIssue,
    PositionIssue,
    Other,
}

impl IssueKind {
    /// Snake-case name matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::LayoutBroken => "layout_broken",
            IssueKind::OverflowHidden => "overflow_hidden",
            IssueKind::ZIndexConflict => "z_index_conflict",
            IssueKind::SpacingInconsistent => "spacing_inconsistent",
            IssueKind::AlignmentOff => "alignment_off",
            IssueKind::ResponsiveIssue => "responsive_issue",
            IssueKind::AccessibilityMissing => "accessibility_missing",
            IssueKind::ContrastLow => "contrast_low",
            IssueKind::ElementOverlap => "element_overlap",
            IssueKind::InvisibleElement => "invisible_element",
            IssueKind::EmptyContainer => "empty_container",
            IssueKind::OrphanedElement => "orphaned_element",
            IssueKind::StyleInconsistency => "style_inconsistency",
            IssueKind::MissingHoverState => "missing_hover_state",
            IssueKind::BrokenFlexbox => "broken_flexbox",
            IssueKind::BrokenGrid => "broken_grid",
            IssueKind::FontIssue => "font_issue",
            IssueKind::ColorIssue => "color_issue",
            IssueKind::SizeIssue => "size_issue",
            IssueKind::PositionIssue => "position_issue",
            IssueKind::Other => "other",
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected UI defect with a suggested remedy.
///
/// Created by the issue detector; consumed, never mutated, by the fix
/// synthesizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Issue severity level.
    pub severity: Severity,

    /// CSS selector of the affected element.
    pub selector: String,

    /// Semantic type of the affected element.
    pub element_type: ElementType,

    /// Category of the issue.
    pub kind: IssueKind,

    /// Human-readable description of the issue.
    pub description: String,

    /// Specific code change or CSS fix to resolve the issue.
    pub suggested_fix: String,

    /// The CSS property that needs to be changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_property: Option<String>,

    /// Current value of the problematic property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<String>,

    /// Recommended value to fix the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_value: Option<String>,

    /// Example code snippet showing the fix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,
}

/// Coarse issue-family hint vocabulary interpreted from user complaints.
///
/// Deliberately coarser than [`IssueKind`]: a complaint maps to a family
/// of issues, not to one detector rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueHint {
    Broken,
    Alignment,
    Spacing,
    Overlap,
    Size,
    Visibility,
    Color,
    Responsive,
    Layout,
    Text,
    Position,
}

impl IssueHint {
    /// Snake-case name matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueHint::Broken => "broken",
            IssueHint::Alignment => "alignment",
            IssueHint::Spacing => "spacing",
            IssueHint::Overlap => "overlap",
            IssueHint::Size => "size",
            IssueHint::Visibility => "visibility",
            IssueHint::Color => "color",
            IssueHint::Responsive => "responsive",
            IssueHint::Layout => "layout",
            IssueHint::Text => "text",
            IssueHint::Position => "position",
        }
    }
}

impl std::fmt::Display for IssueHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interpretation of a free-text user complaint.
///
/// Pure function of the query text; stateless, recomputed per call.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QueryInterpretation {
    /// Implicated element types, insertion-ordered and unique.
    #[serde(default)]
    pub element_types: Vec<ElementType>,

    /// Implicated issue-family hints, insertion-ordered and unique.
    #[serde(default)]
    pub issue_hints: Vec<IssueHint>,

    /// Natural-language restatement of the complaint.
    #[serde(default)]
    pub interpreted_meaning: String,
}
