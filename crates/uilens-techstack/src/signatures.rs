//! Static detection signatures.
//!
//! One signature per JS/meta framework, matched against page facts by
//! [`crate::detect`]. A signature matches when ANY of its signal lists
//! hits; globals and structural hints are the strong signals. Slice
//! order is the order frameworks appear in the result.

use uilens_protocols::TechCategory;

/// Signals identifying one JS or meta framework.
pub struct FrameworkSignature {
    /// Display name used in results.
    pub name: &'static str,
    pub category: TechCategory,
    /// Window globals whose presence is near-conclusive.
    pub globals: &'static [&'static str],
    /// Document structure hints recorded at extraction time.
    pub structural_hints: &'static [&'static str],
    /// Substrings matched case-insensitively against script URLs.
    pub script_hints: &'static [&'static str],
    /// Prefixes matched against framework-specific attribute names.
    pub attribute_prefixes: &'static [&'static str],
    /// Prefixes matched against `data-*` attribute names.
    pub data_attribute_prefixes: &'static [&'static str],
}

/// JS frameworks, in result order.
pub static JS_FRAMEWORKS: &[FrameworkSignature] = &[
    FrameworkSignature {
        name: "React",
        category: TechCategory::JsFramework,
        globals: &["React", "ReactDOM", "__REACT_DEVTOOLS_GLOBAL_HOOK__"],
        structural_hints: &["react_root"],
        script_hints: &["react"],
        attribute_prefixes: &[],
        data_attribute_prefixes: &["data-reactroot", "data-reactid"],
    },
    FrameworkSignature {
        name: "Vue.js",
        category: TechCategory::JsFramework,
        globals: &["Vue", "__VUE__", "__VUE_DEVTOOLS_GLOBAL_HOOK__"],
        structural_hints: &[],
        script_hints: &["vue"],
        attribute_prefixes: &["v-"],
        data_attribute_prefixes: &["data-v-"],
    },
    FrameworkSignature {
        name: "Angular",
        category: TechCategory::JsFramework,
        globals: &["ng", "Zone", "getAllAngularRootElements"],
        structural_hints: &["angular_version"],
        script_hints: &["angular", "zone.js"],
        attribute_prefixes: &["ng-", "_ng"],
        data_attribute_prefixes: &[],
    },
    FrameworkSignature {
        name: "Svelte",
        category: TechCategory::JsFramework,
        globals: &["Svelte"],
        structural_hints: &[],
        script_hints: &["svelte"],
        attribute_prefixes: &[],
        data_attribute_prefixes: &[],
    },
];

/// Meta frameworks, in result order. Result order is also the primary
/// framework precedence.
pub static META_FRAMEWORKS: &[FrameworkSignature] = &[
    FrameworkSignature {
        name: "Next.js",
        category: TechCategory::MetaFramework,
        globals: &["__NEXT_DATA__", "__NEXT_LOADED_PAGES__"],
        structural_hints: &["nextjs_data", "nextjs_root"],
        script_hints: &["_next/"],
        attribute_prefixes: &[],
        data_attribute_prefixes: &["data-nscript", "data-next-font"],
    },
    FrameworkSignature {
        name: "Nuxt",
        category: TechCategory::MetaFramework,
        globals: &["__NUXT__", "$nuxt"],
        structural_hints: &["nuxt_data", "nuxt_root"],
        script_hints: &["_nuxt/"],
        attribute_prefixes: &[],
        data_attribute_prefixes: &["data-n-head", "data-nuxt"],
    },
    FrameworkSignature {
        name: "Remix",
        category: TechCategory::MetaFramework,
        globals: &["__remixContext", "__remixManifest"],
        structural_hints: &["remix_data"],
        script_hints: &["@remix-run"],
        attribute_prefixes: &[],
        data_attribute_prefixes: &[],
    },
    FrameworkSignature {
        name: "Gatsby",
        category: TechCategory::MetaFramework,
        globals: &["___gatsby", "___loader"],
        structural_hints: &["gatsby_data"],
        script_hints: &[],
        attribute_prefixes: &[],
        data_attribute_prefixes: &["data-gatsby"],
    },
    FrameworkSignature {
        name: "Astro",
        category: TechCategory::MetaFramework,
        globals: &[],
        structural_hints: &["astro_island"],
        script_hints: &[],
        attribute_prefixes: &[],
        data_attribute_prefixes: &["data-astro"],
    },
];

/// jQuery is detected separately from the modern frameworks but counts
/// against the vanilla-JS fallback.
pub static JQUERY: FrameworkSignature = FrameworkSignature {
    name: "jQuery",
    category: TechCategory::JsFramework,
    globals: &["jQuery", "$"],
    structural_hints: &[],
    script_hints: &["jquery"],
    attribute_prefixes: &[],
    data_attribute_prefixes: &[],
};

/// Tailwind utility class fragments. Ten distinct fragments make a
/// detection, fifteen make it high confidence.
pub static TAILWIND_CLASS_PATTERNS: &[&str] = &[
    "flex",
    "grid",
    "hidden",
    "block",
    "inline-flex",
    "items-center",
    "justify-center",
    "space-x-",
    "space-y-",
    "gap-",
    "rounded-",
    "bg-",
    "text-",
    "font-",
    "p-",
    "m-",
    "px-",
    "py-",
    "mx-",
    "my-",
    "w-",
    "h-",
    "min-",
    "max-",
    "border-",
    "shadow-",
    "hover:",
    "focus:",
    "sm:",
    "md:",
    "lg:",
    "xl:",
    "dark:",
];

pub const TAILWIND_MIN_PATTERNS: usize = 10;
pub const TAILWIND_HIGH_PATTERNS: usize = 15;

/// Bootstrap class fragments. Five make a detection, eight make it high
/// confidence; a bootstrap script or stylesheet URL is also sufficient.
pub static BOOTSTRAP_CLASS_PATTERNS: &[&str] = &[
    "container",
    "container-fluid",
    "row",
    "col-",
    "btn",
    "btn-",
    "navbar",
    "nav-",
    "card",
    "modal",
    "form-control",
    "table-",
];

pub const BOOTSTRAP_MIN_PATTERNS: usize = 5;
pub const BOOTSTRAP_HIGH_PATTERNS: usize = 8;

/// Bulma class fragments; three make a detection.
pub static BULMA_CLASS_PATTERNS: &[&str] =
    &["column", "columns", "is-", "has-text-", "has-background-"];

/// Foundation class fragments; three make a detection.
pub static FOUNDATION_CLASS_PATTERNS: &[&str] =
    &["grid-x", "grid-y", "cell", "small-", "medium-", "large-"];

pub const BULMA_MIN_PATTERNS: usize = 3;
pub const FOUNDATION_MIN_PATTERNS: usize = 3;

/// Distinct MUI/emotion classes needed to call Material UI.
pub const MUI_MIN_CLASSES: usize = 5;

/// Distinct `ant-`/`anticon` classes needed to call Ant Design.
pub const ANT_MIN_CLASSES: usize = 3;

/// CSS custom properties on `:root` beyond which the page counts as
/// using CSS variables.
pub const CSS_VARIABLE_THRESHOLD: usize = 5;

/// Inline `style` attributes beyond which inline styling counts as the
/// page's CSS approach.
pub const INLINE_STYLE_THRESHOLD: usize = 20;
