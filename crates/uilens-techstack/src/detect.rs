//! Signature matching against page facts.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use uilens_protocols::{Confidence, FrameworkInfo, PageFacts, TechCategory, TechStackResult};

use crate::advice;
use crate::signatures::{
    self, FrameworkSignature, ANT_MIN_CLASSES, BOOTSTRAP_HIGH_PATTERNS, BOOTSTRAP_MIN_PATTERNS,
    BULMA_MIN_PATTERNS, CSS_VARIABLE_THRESHOLD, FOUNDATION_MIN_PATTERNS, INLINE_STYLE_THRESHOLD,
    MUI_MIN_CLASSES, TAILWIND_HIGH_PATTERNS, TAILWIND_MIN_PATTERNS,
};

/// Svelte compiles component styles to `svelte-<hash>` scoped classes.
static SVELTE_SCOPED_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^svelte-[0-9a-zA-Z]+$").expect("static pattern"));

/// Emotion/MUI runtime-generated class names (`css-1a2b3c`).
static HASHED_CSS_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^css-[0-9a-zA-Z]+$").expect("static pattern"));

/// Match one signature against the page facts.
///
/// Globals and structural hints are strong signals (high confidence);
/// script URLs and attribute names alone only reach medium.
fn signature_match(page: &PageFacts, sig: &FrameworkSignature) -> Option<(Confidence, Vec<String>)> {
    let mut indicators = Vec::new();
    let mut strong = false;

    for global in sig.globals {
        if page.has_global(global) {
            strong = true;
            indicators.push(format!("window global `{global}` present"));
        }
    }
    for hint in sig.structural_hints {
        if page.has_hint(hint) {
            strong = true;
            indicators.push(format!("document hint `{hint}`"));
        }
    }
    for fragment in sig.script_hints {
        if page
            .script_urls
            .iter()
            .any(|url| url.to_lowercase().contains(fragment))
        {
            indicators.push(format!("script URL containing `{fragment}`"));
        }
    }
    for prefix in sig.attribute_prefixes {
        if page
            .framework_attributes
            .iter()
            .any(|attr| attr.starts_with(prefix))
        {
            indicators.push(format!("`{prefix}*` attributes present"));
        }
    }
    for prefix in sig.data_attribute_prefixes {
        if page
            .data_attributes
            .iter()
            .any(|attr| attr.starts_with(prefix))
        {
            indicators.push(format!("`{prefix}*` attributes present"));
        }
    }

    if indicators.is_empty() {
        None
    } else {
        let confidence = if strong { Confidence::High } else { Confidence::Medium };
        Some((confidence, indicators))
    }
}

/// Fingerprint the technology stack from one page's facts.
///
/// Pure and total: an empty `PageFacts` yields the vanilla-JS baseline,
/// never an error.
pub fn fingerprint(page: &PageFacts) -> TechStackResult {
    let mut result = TechStackResult::default();
    let mut frameworks: Vec<FrameworkInfo> = Vec::new();

    // JS frameworks.
    for sig in signatures::JS_FRAMEWORKS {
        let mut matched = signature_match(page, sig);

        // Svelte leaves scoped classes even when no global survives
        // bundling.
        if sig.name == "Svelte" {
            let scoped = page
                .class_names
                .iter()
                .filter(|c| SVELTE_SCOPED_CLASS.is_match(c))
                .count();
            if scoped > 0 {
                let mut indicators = matched.map(|(_, i)| i).unwrap_or_default();
                indicators.push(format!("found {scoped} Svelte-scoped classes"));
                matched = Some((Confidence::High, indicators));
            }
        }

        if let Some((confidence, indicators)) = matched {
            match sig.name {
                "React" => result.has_react = true,
                "Vue.js" => result.has_vue = true,
                "Angular" => result.has_angular = true,
                "Svelte" => result.has_svelte = true,
                _ => {}
            }
            frameworks.push(FrameworkInfo {
                name: sig.name.to_string(),
                category: sig.category,
                confidence,
                indicators,
            });
        }
    }

    // Meta frameworks; each implies its underlying renderer.
    for sig in signatures::META_FRAMEWORKS {
        if let Some((confidence, indicators)) = signature_match(page, sig) {
            match sig.name {
                "Next.js" => {
                    result.has_nextjs = true;
                    result.has_react = true;
                }
                "Nuxt" => {
                    result.has_nuxt = true;
                    result.has_vue = true;
                }
                "Remix" => {
                    result.has_remix = true;
                    result.has_react = true;
                }
                "Gatsby" => {
                    result.has_gatsby = true;
                    result.has_react = true;
                }
                "Astro" => result.has_astro = true,
                _ => {}
            }
            frameworks.push(FrameworkInfo {
                name: sig.name.to_string(),
                category: sig.category,
                confidence,
                indicators,
            });
        }
    }

    // Vite is a bundler hint, not a framework entry.
    if page.has_global("__vite__")
        || page
            .script_urls
            .iter()
            .any(|url| url.contains("@vite"))
    {
        result.has_vite = true;
        result.bundler_hints.push("Vite".to_string());
    }

    if let Some((confidence, indicators)) = signature_match(page, &signatures::JQUERY) {
        result.has_jquery = true;
        frameworks.push(FrameworkInfo {
            name: "jQuery".to_string(),
            category: TechCategory::JsFramework,
            confidence,
            indicators,
        });
    }

    detect_css_stack(page, &mut result, &mut frameworks);

    result.uses_css_variables = page.css_variable_names.len() > CSS_VARIABLE_THRESHOLD;

    // No renderer at all means plain scripts (or none).
    if !(result.has_react
        || result.has_vue
        || result.has_angular
        || result.has_svelte
        || result.has_jquery)
    {
        result.has_vanilla_js = true;
        frameworks.push(FrameworkInfo {
            name: "Vanilla JavaScript".to_string(),
            category: TechCategory::JsFramework,
            confidence: Confidence::Low,
            indicators: vec!["no major JS framework detected".to_string()],
        });
    }

    result.frameworks = frameworks;
    resolve_primary(&mut result);

    result.summary = advice::summarize_stack(&result);
    result.fix_approach = advice::fix_approach(&result);

    debug!(
        primary = %result.primary_framework,
        css = %result.css_approach,
        detections = result.frameworks.len(),
        "fingerprinted tech stack"
    );
    result
}

/// Count how many of the fragments appear in at least one class name.
fn pattern_hits(class_names: &[String], patterns: &[&str]) -> usize {
    patterns
        .iter()
        .filter(|p| class_names.iter().any(|c| c.contains(*p)))
        .count()
}

fn detect_css_stack(
    page: &PageFacts,
    result: &mut TechStackResult,
    frameworks: &mut Vec<FrameworkInfo>,
) {
    let classes = &page.class_names;

    let tailwind_hits = pattern_hits(classes, signatures::TAILWIND_CLASS_PATTERNS);
    if tailwind_hits >= TAILWIND_MIN_PATTERNS {
        result.has_tailwind = true;
        frameworks.push(FrameworkInfo {
            name: "Tailwind CSS".to_string(),
            category: TechCategory::CssFramework,
            confidence: if tailwind_hits >= TAILWIND_HIGH_PATTERNS {
                Confidence::High
            } else {
                Confidence::Medium
            },
            indicators: vec![format!("found {tailwind_hits} Tailwind utility class patterns")],
        });
    }

    let bootstrap_hits = pattern_hits(classes, signatures::BOOTSTRAP_CLASS_PATTERNS);
    let bootstrap_asset = page
        .script_urls
        .iter()
        .chain(page.stylesheet_urls.iter())
        .any(|url| url.to_lowercase().contains("bootstrap"));
    if bootstrap_hits >= BOOTSTRAP_MIN_PATTERNS || bootstrap_asset {
        result.has_bootstrap = true;
        frameworks.push(FrameworkInfo {
            name: "Bootstrap".to_string(),
            category: TechCategory::CssFramework,
            confidence: if bootstrap_hits >= BOOTSTRAP_HIGH_PATTERNS {
                Confidence::High
            } else {
                Confidence::Medium
            },
            indicators: vec![format!("found {bootstrap_hits} Bootstrap class patterns")],
        });
    }

    let mui_classes = classes
        .iter()
        .filter(|c| c.starts_with("Mui") || HASHED_CSS_CLASS.is_match(c))
        .count();
    if mui_classes >= MUI_MIN_CLASSES {
        result.has_material_ui = true;
        frameworks.push(FrameworkInfo {
            name: "Material UI".to_string(),
            category: TechCategory::UiLibrary,
            confidence: Confidence::High,
            indicators: vec![format!("found {mui_classes} MUI classes")],
        });
    }

    let chakra = classes.iter().any(|c| c.starts_with("chakra-"))
        || page.data_attributes.iter().any(|a| a.contains("data-chakra"));
    if chakra {
        result.has_chakra_ui = true;
        frameworks.push(FrameworkInfo {
            name: "Chakra UI".to_string(),
            category: TechCategory::UiLibrary,
            confidence: Confidence::High,
            indicators: vec!["Chakra UI classes detected".to_string()],
        });
    }

    // shadcn/ui has no marker of its own; Radix primitives plus
    // Tailwind is the strongest available signal.
    let radix_attrs = page.data_attributes.iter().any(|a| {
        a.contains("data-state") || a.contains("data-radix") || a.contains("data-side")
    });
    if radix_attrs && result.has_tailwind {
        result.has_shadcn = true;
        frameworks.push(FrameworkInfo {
            name: "shadcn/ui".to_string(),
            category: TechCategory::UiLibrary,
            confidence: Confidence::Medium,
            indicators: vec!["Radix UI primitives plus Tailwind detected".to_string()],
        });
    }

    let ant_classes = classes
        .iter()
        .filter(|c| c.starts_with("ant-") || c.starts_with("anticon"))
        .count();
    if ant_classes >= ANT_MIN_CLASSES {
        result.has_ant_design = true;
        frameworks.push(FrameworkInfo {
            name: "Ant Design".to_string(),
            category: TechCategory::UiLibrary,
            confidence: Confidence::High,
            indicators: vec![format!("found {ant_classes} Ant Design classes")],
        });
    }

    if pattern_hits(classes, signatures::BULMA_CLASS_PATTERNS) >= BULMA_MIN_PATTERNS {
        result.has_bulma = true;
        frameworks.push(FrameworkInfo {
            name: "Bulma".to_string(),
            category: TechCategory::CssFramework,
            confidence: Confidence::Medium,
            indicators: vec!["Bulma class patterns detected".to_string()],
        });
    }

    if pattern_hits(classes, signatures::FOUNDATION_CLASS_PATTERNS) >= FOUNDATION_MIN_PATTERNS {
        result.has_foundation = true;
        frameworks.push(FrameworkInfo {
            name: "Foundation".to_string(),
            category: TechCategory::CssFramework,
            confidence: Confidence::Medium,
            indicators: vec!["Foundation class patterns detected".to_string()],
        });
    }

    // CSS approach precedence: utility frameworks beat component
    // libraries beat hashed classes beat inline styles.
    result.css_approach = if result.has_tailwind {
        "tailwind"
    } else if result.has_bootstrap {
        "bootstrap"
    } else if result.has_material_ui || result.has_chakra_ui || result.has_ant_design {
        "component-library"
    } else if classes.iter().any(|c| HASHED_CSS_CLASS.is_match(c)) {
        result.uses_css_modules = true;
        "css-modules"
    } else if page.inline_style_count > INLINE_STYLE_THRESHOLD {
        result.uses_inline_styles = true;
        "inline-styles"
    } else {
        "traditional-css"
    }
    .to_string();
}

/// Primary framework precedence: meta frameworks first, then renderers,
/// then the vanilla baseline.
fn resolve_primary(result: &mut TechStackResult) {
    let (primary, meta) = if result.has_nextjs {
        ("Next.js", Some("Next.js"))
    } else if result.has_nuxt {
        ("Nuxt", Some("Nuxt"))
    } else if result.has_remix {
        ("Remix", Some("Remix"))
    } else if result.has_gatsby {
        ("Gatsby", Some("Gatsby"))
    } else if result.has_astro {
        ("Astro", Some("Astro"))
    } else if result.has_react {
        ("React", None)
    } else if result.has_vue {
        ("Vue.js", None)
    } else if result.has_angular {
        ("Angular", None)
    } else if result.has_svelte {
        ("Svelte", None)
    } else {
        ("Vanilla JS/HTML", None)
    };
    result.primary_framework = primary.to_string();
    result.meta_framework = meta.map(str::to_string);
}
