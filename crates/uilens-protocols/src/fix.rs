//! Concrete fix instructions synthesized from issues and query hints.

use serde::{Deserialize, Serialize};

use crate::element::ClassifiedElement;

/// Type of change a fix instruction performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixAction {
    ModifyCss,
    AddCss,
    RemoveCss,
    ModifyHtml,
    AddHtml,
    RemoveHtml,
    WrapElement,
    UnwrapElement,
    MoveElement,
    AddClass,
    RemoveClass,
    Restructure,
}

/// One CSS property assignment. Kept as a pair list on the instruction so
/// emission order is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyChange {
    /// CSS property name.
    pub property: String,
    /// New value for the property.
    pub value: String,
}

impl PropertyChange {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// One prioritized, concrete style/markup change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixInstruction {
    /// Priority order for applying fixes (1 = highest, strictly
    /// increasing across a plan).
    pub priority: usize,

    /// Human description of what element to target.
    pub target_description: String,

    /// CSS selector to find the element.
    pub selector: String,

    /// Likely source location for this element, when one can be guessed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_hint: Option<String>,

    /// Type of action to take.
    pub action: FixAction,

    /// CSS properties to change, insertion-ordered with unique keys.
    #[serde(default)]
    pub property_changes: Vec<PropertyChange>,

    /// Example of the current problematic code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_code: Option<String>,

    /// Example of the corrected code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_code: Option<String>,

    /// Why this change fixes the issue.
    pub explanation: String,
}

impl FixInstruction {
    /// Append a property change, ignoring duplicate property names so the
    /// list stays unique in insertion order.
    pub fn push_property(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        if !self.property_changes.iter().any(|p| p.property == property) {
            self.property_changes.push(PropertyChange {
                property,
                value: value.into(),
            });
        }
    }
}

/// Complete set of fix instructions for resolving UI issues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixPlan {
    /// URL that was analyzed.
    pub url: String,

    /// Original user query/complaint about the UI.
    pub user_query: String,

    /// How the pipeline interpreted the user's vague query.
    pub interpreted_problem: String,

    /// Elements identified as related to the problem.
    #[serde(default)]
    pub affected_elements: Vec<ClassifiedElement>,

    /// Ordered list of fix instructions to apply.
    #[serde(default)]
    pub fix_instructions: Vec<FixInstruction>,

    /// Brief summary of all changes needed.
    pub summary: String,

    /// Complete CSS changes as a code block.
    #[serde(default)]
    pub css_changes: String,

    /// HTML structure changes, if needed.
    #[serde(default)]
    pub html_changes: String,

    /// Extra suggestions for improving the UI.
    #[serde(default)]
    pub additional_recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementType;

    fn instruction() -> FixInstruction {
        FixInstruction {
            priority: 1,
            target_description: "Fix overflow on container".to_string(),
            selector: ".content".to_string(),
            file_hint: None,
            action: FixAction::ModifyCss,
            property_changes: Vec::new(),
            before_code: None,
            after_code: None,
            explanation: "Constrain width".to_string(),
        }
    }

    #[test]
    fn test_push_property_preserves_order_and_uniqueness() {
        let mut fix = instruction();
        fix.push_property("overflow-x", "hidden");
        fix.push_property("max-width", "100%");
        fix.push_property("overflow-x", "scroll"); // duplicate key, ignored
        assert_eq!(fix.property_changes.len(), 2);
        assert_eq!(fix.property_changes[0].property, "overflow-x");
        assert_eq!(fix.property_changes[0].value, "hidden");
        assert_eq!(fix.property_changes[1].property, "max-width");
    }

    #[test]
    fn test_fix_action_serde() {
        assert_eq!(
            serde_json::to_string(&FixAction::RemoveHtml).unwrap(),
            "\"remove_html\""
        );
    }

    #[test]
    fn test_fix_plan_round_trip() {
        let plan = FixPlan {
            url: "https://example.com".to_string(),
            user_query: "navbar broken".to_string(),
            interpreted_problem: "User is reporting broken with the navbar".to_string(),
            affected_elements: vec![ClassifiedElement {
                element_type: ElementType::Navbar,
                facts: crate::element::ElementFacts::new("nav", "nav.main"),
            }],
            fix_instructions: vec![instruction()],
            summary: "Found 1 fixes to apply".to_string(),
            css_changes: String::new(),
            html_changes: String::new(),
            additional_recommendations: Vec::new(),
        };
        let json = serde_json::to_string(&plan).unwrap();
        let back: FixPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back.fix_instructions.len(), 1);
        assert_eq!(back.affected_elements[0].element_type, ElementType::Navbar);
    }
}
