//! Technology stack fingerprinting result types.

use serde::{Deserialize, Serialize};

/// Ordinal detection strength. Treat as a coarse signal, not a
/// calibrated probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        })
    }
}

/// Category of a detected technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechCategory {
    JsFramework,
    MetaFramework,
    CssFramework,
    UiLibrary,
    BuildTool,
    Other,
}

/// Information about one detected framework or library.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrameworkInfo {
    /// Display name (e.g. "Next.js", "Tailwind CSS").
    pub name: String,
    /// Technology category.
    pub category: TechCategory,
    /// Detection confidence.
    pub confidence: Confidence,
    /// Signals that triggered the detection.
    #[serde(default)]
    pub indicators: Vec<String>,
}

/// Complete technology stack detection result.
///
/// Every boolean flag is explicitly resolved; a missing technology is
/// `false`, never undetermined.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TechStackResult {
    /// Resolved primary framework name, "Vanilla JS/HTML" when none.
    pub primary_framework: String,

    /// Resolved meta framework, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_framework: Option<String>,

    /// Resolved CSS approach (tailwind, bootstrap, component-library,
    /// css-modules, inline-styles, traditional-css).
    pub css_approach: String,

    /// All detected technologies, in detection order.
    #[serde(default)]
    pub frameworks: Vec<FrameworkInfo>,

    // JS frameworks
    #[serde(default)]
    pub has_react: bool,
    #[serde(default)]
    pub has_vue: bool,
    #[serde(default)]
    pub has_angular: bool,
    #[serde(default)]
    pub has_svelte: bool,
    #[serde(default)]
    pub has_jquery: bool,
    #[serde(default)]
    pub has_vanilla_js: bool,

    // Meta frameworks
    #[serde(default)]
    pub has_nextjs: bool,
    #[serde(default)]
    pub has_nuxt: bool,
    #[serde(default)]
    pub has_remix: bool,
    #[serde(default)]
    pub has_astro: bool,
    #[serde(default)]
    pub has_gatsby: bool,
    #[serde(default)]
    pub has_vite: bool,

    // CSS frameworks and UI libraries
    #[serde(default)]
    pub has_tailwind: bool,
    #[serde(default)]
    pub has_bootstrap: bool,
    #[serde(default)]
    pub has_material_ui: bool,
    #[serde(default)]
    pub has_chakra_ui: bool,
    #[serde(default)]
    pub has_shadcn: bool,
    #[serde(default)]
    pub has_ant_design: bool,
    #[serde(default)]
    pub has_bulma: bool,
    #[serde(default)]
    pub has_foundation: bool,

    // CSS technique flags
    #[serde(default)]
    pub uses_css_modules: bool,
    #[serde(default)]
    pub uses_inline_styles: bool,
    #[serde(default)]
    pub uses_css_variables: bool,

    /// Bundler hints (e.g. "Vite").
    #[serde(default)]
    pub bundler_hints: Vec<String>,

    /// Human-readable summary of the stack.
    #[serde(default)]
    pub summary: String,

    /// Framework-specific fix-approach guidance.
    #[serde(default)]
    pub fix_approach: String,
}
