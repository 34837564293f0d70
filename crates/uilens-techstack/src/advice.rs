//! Human-readable stack summaries and fix-approach guidance.

use uilens_protocols::TechStackResult;

/// One-line stack description ("Meta Framework: Next.js | CSS: Tailwind
/// CSS | ...").
pub fn summarize_stack(result: &TechStackResult) -> String {
    let mut parts = Vec::new();

    if let Some(meta) = &result.meta_framework {
        parts.push(format!("Meta Framework: {meta}"));
    } else if !result.primary_framework.is_empty() {
        parts.push(format!("JS Framework: {}", result.primary_framework));
    }

    if !result.css_approach.is_empty() {
        let css_name = match result.css_approach.as_str() {
            "tailwind" => "Tailwind CSS",
            "bootstrap" => "Bootstrap",
            "component-library" => "Component Library CSS",
            "css-modules" => "CSS Modules",
            "inline-styles" => "Inline Styles",
            "traditional-css" => "Traditional CSS",
            other => other,
        };
        parts.push(format!("CSS: {css_name}"));
    }

    let mut ui_libs = Vec::new();
    if result.has_shadcn {
        ui_libs.push("shadcn/ui");
    }
    if result.has_material_ui {
        ui_libs.push("Material UI");
    }
    if result.has_chakra_ui {
        ui_libs.push("Chakra UI");
    }
    if result.has_ant_design {
        ui_libs.push("Ant Design");
    }
    if !ui_libs.is_empty() {
        parts.push(format!("UI Library: {}", ui_libs.join(", ")));
    }

    if result.uses_css_variables {
        parts.push("Uses CSS Variables".to_string());
    }

    if parts.is_empty() {
        "Standard HTML/CSS/JS".to_string()
    } else {
        parts.join(" | ")
    }
}

/// Where and how styling changes should land for this stack.
///
/// Framework guidance, CSS-framework guidance, and UI-library guidance
/// each contribute at most one paragraph.
pub fn fix_approach(result: &TechStackResult) -> String {
    let mut approaches: Vec<&str> = Vec::new();

    if result.has_nextjs {
        approaches.push(
            "Next.js: Use className prop for styling. Check globals.css for base styles. \
             Component files are typically in /components or /app directories. \
             For Tailwind issues, check tailwind.config.js for theme customization.",
        );
    } else if result.has_nuxt {
        approaches.push(
            "Nuxt: Check <style scoped> sections in .vue files. \
             Global styles in assets/css or nuxt.config styles array. \
             Use Nuxt DevTools to inspect component hierarchy.",
        );
    } else if result.has_react {
        approaches.push(
            "React: Styles can be in CSS files, CSS modules (.module.css), \
             styled-components, or inline style objects. Check the component file imports.",
        );
    } else if result.has_vue {
        approaches.push(
            "Vue: Check <style> or <style scoped> in .vue files. \
             Scoped styles only affect current component.",
        );
    } else if result.has_angular {
        approaches.push(
            "Angular: Check component.css/scss files alongside component.ts. \
             Use ::ng-deep for child component styling (deprecated but common).",
        );
    } else if result.has_svelte {
        approaches.push(
            "Svelte: Styles are scoped by default in <style> tags. \
             Use :global() for unscoped styles.",
        );
    }

    if result.has_tailwind {
        approaches.push(
            "Tailwind: Modify classes directly in JSX/HTML. \
             For custom values, use arbitrary values like w-[200px] or \
             extend theme in tailwind.config.js. \
             Use @apply in CSS for reusable class combinations.",
        );
    } else if result.has_bootstrap {
        approaches.push(
            "Bootstrap: Use Bootstrap utility classes for quick fixes. \
             Override in custom CSS with higher specificity. \
             Check Bootstrap version for available classes.",
        );
    }

    if result.has_shadcn {
        approaches.push(
            "shadcn/ui: Components are in /components/ui. \
             Modify the component source directly or override with className. \
             Theme colors defined in globals.css CSS variables.",
        );
    } else if result.has_material_ui {
        approaches.push(
            "Material UI: Use sx prop for inline styles or styled() API. \
             Theme customization in ThemeProvider. \
             Use MUI system props like m, p, display.",
        );
    } else if result.has_chakra_ui {
        approaches.push(
            "Chakra UI: Use style props directly on components. \
             Theme in ChakraProvider. Supports responsive arrays.",
        );
    }

    if approaches.is_empty() {
        "Standard CSS: Edit stylesheets directly. \
         Use browser DevTools to identify the exact CSS rules to modify. \
         Check for !important rules that might override changes."
            .to_string()
    } else {
        approaches.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prefers_meta_framework() {
        let result = TechStackResult {
            primary_framework: "Next.js".to_string(),
            meta_framework: Some("Next.js".to_string()),
            css_approach: "tailwind".to_string(),
            ..Default::default()
        };
        let summary = summarize_stack(&result);
        assert!(summary.starts_with("Meta Framework: Next.js"));
        assert!(summary.contains("CSS: Tailwind CSS"));
        assert!(!summary.contains("JS Framework"));
    }

    #[test]
    fn test_summary_lists_ui_libraries() {
        let result = TechStackResult {
            primary_framework: "React".to_string(),
            css_approach: "component-library".to_string(),
            has_material_ui: true,
            has_chakra_ui: true,
            ..Default::default()
        };
        let summary = summarize_stack(&result);
        assert!(summary.contains("UI Library: Material UI, Chakra UI"));
    }

    #[test]
    fn test_fix_approach_vanilla_fallback() {
        let result = TechStackResult::default();
        assert!(fix_approach(&result).starts_with("Standard CSS"));
    }

    #[test]
    fn test_fix_approach_nextjs_shadows_react() {
        let result = TechStackResult {
            has_nextjs: true,
            has_react: true,
            ..Default::default()
        };
        let approach = fix_approach(&result);
        assert!(approach.contains("Next.js:"));
        assert!(!approach.contains("React: Styles"));
    }

    #[test]
    fn test_fix_approach_combines_sections() {
        let result = TechStackResult {
            has_react: true,
            has_tailwind: true,
            has_shadcn: true,
            ..Default::default()
        };
        let approach = fix_approach(&result);
        assert!(approach.contains("React:"));
        assert!(approach.contains("Tailwind:"));
        assert!(approach.contains("shadcn/ui:"));
    }
}
