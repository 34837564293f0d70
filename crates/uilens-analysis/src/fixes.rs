//! Fix-instruction synthesis.
//!
//! Combines detected issues and interpreted query hints into a
//! prioritized plan of concrete style/markup changes. Issue-derived
//! instructions always precede hint-derived fallbacks, both in stable
//! input order, and priorities are gapless from 1.

use tracing::debug;
use uilens_protocols::{
    ClassifiedElement, ElementType, FixAction, FixInstruction, FixPlan, Issue, IssueHint,
    IssueKind, QueryInterpretation,
};

use crate::query::interpret_query;

/// How many elements stand in for "the page" when a query implicates no
/// specific type.
const FALLBACK_ELEMENT_COUNT: usize = 10;

/// How many affected elements receive a generic spacing/alignment fix.
const HINT_FIX_COUNT: usize = 3;

/// How many affected elements receive a generic layout fix.
const LAYOUT_FIX_COUNT: usize = 2;

/// Action taken for each issue kind; `modify_css` for everything not
/// listed.
static ACTION_TABLE: &[(IssueKind, FixAction)] = &[
    (IssueKind::LayoutBroken, FixAction::ModifyCss),
    (IssueKind::OverflowHidden, FixAction::ModifyCss),
    (IssueKind::ZIndexConflict, FixAction::ModifyCss),
    (IssueKind::SpacingInconsistent, FixAction::ModifyCss),
    (IssueKind::AlignmentOff, FixAction::ModifyCss),
    (IssueKind::ElementOverlap, FixAction::ModifyCss),
    (IssueKind::BrokenFlexbox, FixAction::ModifyCss),
    (IssueKind::BrokenGrid, FixAction::ModifyCss),
    (IssueKind::AccessibilityMissing, FixAction::ModifyHtml),
    (IssueKind::EmptyContainer, FixAction::RemoveHtml),
];

fn action_for(kind: IssueKind) -> FixAction {
    ACTION_TABLE
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, action)| *action)
        .unwrap_or(FixAction::ModifyCss)
}

/// Synthesize a fix plan from the original complaint, the classified
/// element list, and the detected issues.
///
/// Deterministic given identical inputs. No instruction is emitted for an
/// element type absent from both the issue list and the affected set.
pub fn synthesize_fixes(
    url: &str,
    user_query: &str,
    elements: &[ClassifiedElement],
    issues: &[Issue],
) -> FixPlan {
    let interpretation = interpret_query(user_query);
    let target_types = &interpretation.element_types;

    let affected_elements: Vec<ClassifiedElement> = if target_types.is_empty() {
        elements.iter().take(FALLBACK_ELEMENT_COUNT).cloned().collect()
    } else {
        elements
            .iter()
            .filter(|el| target_types.contains(&el.element_type))
            .cloned()
            .collect()
    };

    let mut fix_instructions: Vec<FixInstruction> = Vec::new();
    let mut css_blocks: Vec<String> = Vec::new();
    let mut priority = 1;

    // Issue-derived instructions come first, in issue order.
    for issue in issues {
        if !target_types.is_empty() && !target_types.contains(&issue.element_type) {
            continue;
        }
        let instruction = instruction_from_issue(issue, priority);
        if !instruction.property_changes.is_empty() {
            css_blocks.push(css_rule(&issue.selector, &instruction));
        }
        fix_instructions.push(instruction);
        priority += 1;
    }

    // Generic fallbacks from query hints continue the priority counter.
    for hint in &interpretation.issue_hints {
        match hint {
            IssueHint::Spacing => {
                for el in affected_elements.iter().take(HINT_FIX_COUNT) {
                    let mut fix = base_instruction(
                        priority,
                        format!("Adjust spacing on {}", el.element_type),
                        &el.facts.selector,
                        format!(
                            "Standardize spacing on the {} element to fix layout issues",
                            el.element_type
                        ),
                    );
                    fix.push_property("padding", "1rem");
                    fix.push_property("margin", "0 auto");
                    fix.push_property("gap", "1rem");
                    fix_instructions.push(fix);
                    priority += 1;
                }
            }
            IssueHint::Alignment => {
                for el in affected_elements.iter().take(HINT_FIX_COUNT) {
                    let mut fix = base_instruction(
                        priority,
                        format!("Fix alignment on {}", el.element_type),
                        &el.facts.selector,
                        format!(
                            "Use flexbox to properly align content within {}",
                            el.element_type
                        ),
                    );
                    fix.push_property("display", "flex");
                    fix.push_property("align-items", "center");
                    fix.push_property("justify-content", "center");
                    fix_instructions.push(fix);
                    priority += 1;
                }
            }
            IssueHint::Layout => {
                for el in affected_elements.iter().take(LAYOUT_FIX_COUNT) {
                    let mut fix = base_instruction(
                        priority,
                        format!("Fix layout on {}", el.element_type),
                        &el.facts.selector,
                        format!("Apply proper flexbox layout to {}", el.element_type),
                    );
                    fix.push_property("display", "flex");
                    fix.push_property("flex-direction", "row");
                    fix.push_property("flex-wrap", "wrap");
                    fix.push_property("gap", "1rem");
                    fix_instructions.push(fix);
                    priority += 1;
                }
            }
            _ => {}
        }
    }

    let mut summary_parts = Vec::new();
    if !fix_instructions.is_empty() {
        summary_parts.push(format!("Found {} fixes to apply", fix_instructions.len()));
    }
    if !affected_elements.is_empty() {
        summary_parts.push(format!("Affects {} elements", affected_elements.len()));
    }
    let summary = if summary_parts.is_empty() {
        "No specific fixes identified".to_string()
    } else {
        summary_parts.join(". ")
    };

    let additional_recommendations = recommendations(&interpretation, elements);

    debug!(
        fixes = fix_instructions.len(),
        affected = affected_elements.len(),
        "synthesized fix plan"
    );

    FixPlan {
        url: url.to_string(),
        user_query: user_query.to_string(),
        interpreted_problem: interpretation.interpreted_meaning.clone(),
        affected_elements,
        fix_instructions,
        summary,
        css_changes: css_blocks.join("\n\n"),
        html_changes: String::new(),
        additional_recommendations,
    }
}

fn base_instruction(
    priority: usize,
    target_description: String,
    selector: &str,
    explanation: String,
) -> FixInstruction {
    FixInstruction {
        priority,
        target_description,
        selector: selector.to_string(),
        file_hint: None,
        action: FixAction::ModifyCss,
        property_changes: Vec::new(),
        before_code: None,
        after_code: None,
        explanation,
    }
}

/// Build one instruction from a detected issue.
///
/// Property changes prefer the issue's explicit property/recommended
/// value; otherwise the kind's fixed template; otherwise none.
fn instruction_from_issue(issue: &Issue, priority: usize) -> FixInstruction {
    let mut fix = base_instruction(
        priority,
        format!("Fix {} on {}", issue.kind, issue.element_type),
        &issue.selector,
        issue.suggested_fix.clone(),
    );
    fix.action = action_for(issue.kind);
    fix.after_code = issue.code_snippet.clone();

    if let (Some(property), Some(value)) = (&issue.css_property, &issue.recommended_value) {
        fix.push_property(property.clone(), value.clone());
    } else {
        match issue.kind {
            IssueKind::OverflowHidden => {
                fix.push_property("overflow-x", "hidden");
                fix.push_property("max-width", "100%");
            }
            IssueKind::ZIndexConflict => {
                fix.push_property("z-index", "10");
            }
            IssueKind::SpacingInconsistent => {
                fix.push_property("padding", "1rem");
                fix.push_property("margin", "0");
            }
            _ => {}
        }
    }

    fix
}

fn css_rule(selector: &str, instruction: &FixInstruction) -> String {
    let mut rule = format!("{selector} {{\n");
    for change in &instruction.property_changes {
        rule.push_str(&format!("    {}: {};\n", change.property, change.value));
    }
    rule.push('}');
    rule
}

/// Extra suggestions derived from the page as a whole.
fn recommendations(
    interpretation: &QueryInterpretation,
    elements: &[ClassifiedElement],
) -> Vec<String> {
    let mut recs = Vec::new();

    let has_type = |ty: ElementType| elements.iter().any(|el| el.element_type == ty);

    if !has_type(ElementType::Navbar) {
        recs.push(
            "Consider adding a proper <nav> element with role='navigation' for better accessibility"
                .to_string(),
        );
    }
    if !has_type(ElementType::Footer) {
        recs.push("Consider adding a <footer> element for site information and links".to_string());
    }

    if interpretation.issue_hints.contains(&IssueHint::Responsive) {
        recs.push("Add CSS media queries to handle different screen sizes".to_string());
        recs.push(
            "Use relative units (rem, %, vw) instead of fixed pixels for better responsiveness"
                .to_string(),
        );
    }
    if interpretation.issue_hints.contains(&IssueHint::Layout) {
        recs.push("Consider using CSS Grid or Flexbox for complex layouts".to_string());
        recs.push("Use a consistent spacing system (e.g., 0.5rem, 1rem, 2rem)".to_string());
    }

    recs
}

#[cfg(test)]
mod tests {
    use super::*;
    use uilens_protocols::{ElementFacts, Severity};

    fn element(ty: ElementType, selector: &str) -> ClassifiedElement {
        ClassifiedElement {
            element_type: ty,
            facts: ElementFacts::new("div", selector),
        }
    }

    fn issue(kind: IssueKind, ty: ElementType, selector: &str) -> Issue {
        Issue {
            severity: Severity::Warning,
            selector: selector.to_string(),
            element_type: ty,
            kind,
            description: "test issue".to_string(),
            suggested_fix: "fix it".to_string(),
            css_property: None,
            current_value: None,
            recommended_value: None,
            code_snippet: None,
        }
    }

    #[test]
    fn test_priorities_strictly_increasing_and_gapless() {
        let elements = vec![
            element(ElementType::Navbar, "nav.main"),
            element(ElementType::Navbar, "nav.sub"),
        ];
        let issues = vec![
            issue(IssueKind::OverflowHidden, ElementType::Navbar, "nav.main"),
            issue(IssueKind::ZIndexConflict, ElementType::Navbar, "nav.sub"),
        ];
        let plan = synthesize_fixes("https://x.test", "navbar spacing is off", &elements, &issues);
        assert!(!plan.fix_instructions.is_empty());
        for (i, fix) in plan.fix_instructions.iter().enumerate() {
            assert_eq!(fix.priority, i + 1);
        }
    }

    #[test]
    fn test_issue_fixes_precede_hint_fixes() {
        let elements = vec![element(ElementType::Button, "button.cta")];
        let issues = vec![issue(
            IssueKind::AccessibilityMissing,
            ElementType::Button,
            "button.cta",
        )];
        let plan = synthesize_fixes("https://x.test", "buttons are not aligned", &elements, &issues);

        assert_eq!(plan.fix_instructions[0].action, FixAction::ModifyHtml);
        assert!(plan.fix_instructions[1..]
            .iter()
            .all(|f| f.target_description.starts_with("Fix alignment")));
    }

    #[test]
    fn test_issue_filter_by_interpreted_type() {
        let elements = vec![element(ElementType::Navbar, "nav.main")];
        let issues = vec![
            issue(IssueKind::OverflowHidden, ElementType::Navbar, "nav.main"),
            issue(IssueKind::EmptyContainer, ElementType::Container, "div.empty"),
        ];
        let plan = synthesize_fixes("https://x.test", "the navbar is broken", &elements, &issues);
        // Only the navbar issue survives the filter.
        assert_eq!(plan.fix_instructions.len(), 1);
        assert_eq!(plan.fix_instructions[0].selector, "nav.main");
    }

    #[test]
    fn test_unparseable_query_takes_all_issues_and_first_elements() {
        let elements: Vec<ClassifiedElement> = (0..15)
            .map(|i| element(ElementType::Other, &format!("div.e{i}")))
            .collect();
        let issues = vec![issue(
            IssueKind::EmptyContainer,
            ElementType::Container,
            "div.empty",
        )];
        let plan = synthesize_fixes("https://x.test", "qwzx", &elements, &issues);
        assert_eq!(plan.affected_elements.len(), 10);
        assert_eq!(plan.fix_instructions.len(), 1);
        assert_eq!(plan.fix_instructions[0].action, FixAction::RemoveHtml);
    }

    #[test]
    fn test_property_template_for_overflow() {
        let elements = vec![element(ElementType::Navbar, "nav.main")];
        let issues = vec![issue(IssueKind::OverflowHidden, ElementType::Navbar, "nav.main")];
        let plan = synthesize_fixes("https://x.test", "the navbar is broken", &elements, &issues);

        let changes = &plan.fix_instructions[0].property_changes;
        assert_eq!(changes[0].property, "overflow-x");
        assert_eq!(changes[0].value, "hidden");
        assert_eq!(changes[1].property, "max-width");
        assert!(plan.css_changes.contains("nav.main {"));
        assert!(plan.css_changes.contains("    overflow-x: hidden;"));
    }

    #[test]
    fn test_explicit_issue_property_wins_over_template() {
        let elements = vec![element(ElementType::Navbar, "nav.main")];
        let mut z_issue = issue(IssueKind::ZIndexConflict, ElementType::Navbar, "nav.main");
        z_issue.css_property = Some("z-index".to_string());
        z_issue.recommended_value = Some("50".to_string());
        let plan = synthesize_fixes("https://x.test", "the navbar is broken", &elements, &[z_issue]);

        let changes = &plan.fix_instructions[0].property_changes;
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].value, "50");
    }

    #[test]
    fn test_hint_fix_counts() {
        let elements: Vec<ClassifiedElement> = (0..5)
            .map(|i| element(ElementType::Card, &format!("div.card{i}")))
            .collect();
        let plan = synthesize_fixes("https://x.test", "card spacing", &elements, &[]);
        // Spacing hint caps at three target elements.
        assert_eq!(plan.fix_instructions.len(), 3);
        assert!(plan.fix_instructions[0]
            .property_changes
            .iter()
            .any(|p| p.property == "padding"));
    }

    #[test]
    fn test_multiple_hints_each_emit_their_group() {
        let elements: Vec<ClassifiedElement> = (0..5)
            .map(|i| element(ElementType::Card, &format!("div.card{i}")))
            .collect();
        // "off" implicates alignment alongside spacing; both hint groups
        // emit their own capped run of instructions.
        let plan = synthesize_fixes("https://x.test", "card spacing is off", &elements, &[]);
        assert_eq!(plan.fix_instructions.len(), 6);
        let spacing = plan
            .fix_instructions
            .iter()
            .filter(|f| f.target_description.starts_with("Adjust spacing"))
            .count();
        let alignment = plan
            .fix_instructions
            .iter()
            .filter(|f| f.target_description.starts_with("Fix alignment"))
            .count();
        assert_eq!(spacing, 3);
        assert_eq!(alignment, 3);
        let priorities: Vec<usize> = plan.fix_instructions.iter().map(|f| f.priority).collect();
        assert_eq!(priorities, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_layout_hint_caps_at_two() {
        let elements: Vec<ClassifiedElement> = (0..5)
            .map(|i| element(ElementType::Section, &format!("section.s{i}")))
            .collect();
        let plan = synthesize_fixes(
            "https://x.test",
            "the section grid is stacked wrong",
            &elements,
            &[],
        );
        let layout_fixes = plan
            .fix_instructions
            .iter()
            .filter(|f| f.target_description.starts_with("Fix layout"))
            .count();
        assert_eq!(layout_fixes, 2);
    }

    #[test]
    fn test_missing_navbar_footer_recommendations() {
        let elements = vec![element(ElementType::Button, "button.a")];
        let plan = synthesize_fixes("https://x.test", "button is broken", &elements, &[]);
        assert!(plan
            .additional_recommendations
            .iter()
            .any(|r| r.contains("<nav>")));
        assert!(plan
            .additional_recommendations
            .iter()
            .any(|r| r.contains("<footer>")));
    }

    #[test]
    fn test_responsive_recommendations() {
        let elements = vec![element(ElementType::Navbar, "nav.main")];
        let plan = synthesize_fixes("https://x.test", "navbar breaks on mobile", &elements, &[]);
        assert!(plan
            .additional_recommendations
            .iter()
            .any(|r| r.contains("media queries")));
    }

    #[test]
    fn test_empty_everything_yields_no_fixes_summary() {
        let plan = synthesize_fixes("https://x.test", "qwzx", &[], &[]);
        assert_eq!(plan.summary, "No specific fixes identified");
        assert!(plan.fix_instructions.is_empty());
        assert!(plan.css_changes.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let elements = vec![element(ElementType::Navbar, "nav.main")];
        let issues = vec![issue(IssueKind::OverflowHidden, ElementType::Navbar, "nav.main")];
        let a = synthesize_fixes("https://x.test", "navbar spacing", &elements, &issues);
        let b = synthesize_fixes("https://x.test", "navbar spacing", &elements, &issues);
        assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    }
}
