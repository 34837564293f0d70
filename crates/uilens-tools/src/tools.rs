//! UI analysis tools.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use uilens_analysis::selectors_for;
use uilens_protocols::{
    ElementType, Tool, ToolContext, ToolDefinition, ToolError, ToolResult, ViewportInfo,
};

use crate::manager::{AnalysisManager, ViewportSpec, DEFAULT_DOM_DEPTH};

fn default_viewport_width() -> u32 {
    1920
}

fn default_viewport_height() -> u32 {
    1080
}

fn default_true() -> bool {
    true
}

fn default_dom_depth() -> usize {
    DEFAULT_DOM_DEPTH
}

fn invalid_params(e: serde_json::Error) -> ToolError {
    ToolError::ExecutionFailed(format!("Invalid params: {e}"))
}

fn to_structured<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ToolError> {
    serde_json::to_value(value).map_err(|e| ToolError::ExecutionFailed(e.to_string()))
}

// ============================================================================
// Analyze Page Tool
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AnalyzePageParams {
    pub url: String,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: u32,
    #[serde(default = "default_true")]
    pub include_screenshot: bool,
}

/// Full-page UI analysis tool.
///
/// Identifies the major UI components of a page, detects layout and
/// accessibility issues, and returns the accessibility tree and DOM
/// outline alongside an optional screenshot.
pub struct AnalyzePageTool {
    definition: ToolDefinition,
    manager: Arc<AnalysisManager>,
}

impl AnalyzePageTool {
    pub fn new(manager: Arc<AnalysisManager>) -> Self {
        let definition = ToolDefinition::new(
            "ui_analyze",
            "Analyze Page UI",
            "Analyze a webpage UI: identify elements (navbar, header, hero, buttons, ...), \
             detect layout/overflow/accessibility issues, and return structure overviews. \
             Pass an optional vague query like 'the navbar is broken' to focus the analysis.",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "url": { "type": "string", "description": "URL of the page to analyze (localhost allowed)" },
                "query": { "type": "string", "description": "Optional user complaint to focus the analysis" },
                "viewport_width": { "type": "integer", "default": 1920 },
                "viewport_height": { "type": "integer", "default": 1080 },
                "include_screenshot": { "type": "boolean", "default": true }
            },
            "required": ["url"]
        }));
        Self { definition, manager }
    }
}

#[async_trait]
impl Tool for AnalyzePageTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: AnalyzePageParams = serde_json::from_value(params).map_err(invalid_params)?;

        let analysis = self
            .manager
            .analyze_page(
                &params.url,
                ViewportInfo::new(params.viewport_width, params.viewport_height),
                params.query.as_deref(),
                params.include_screenshot,
            )
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        debug!(
            url = %params.url,
            elements = analysis.elements.len(),
            issues = analysis.issues.len(),
            "ui_analyze complete"
        );

        let content = format!(
            "Analyzed {}: {} elements, {} issues",
            params.url,
            analysis.elements.len(),
            analysis.issues.len()
        );
        let structured = to_structured(&analysis)?;
        Ok(ToolResult::success_json(content, structured)
            .with_metadata("issue_count", serde_json::json!(analysis.issues.len())))
    }
}

// ============================================================================
// Element Details Tool
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ElementDetailsParams {
    pub url: String,
    pub element_type: ElementType,
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: u32,
}

/// Detailed facts for every element of one type.
pub struct ElementDetailsTool {
    definition: ToolDefinition,
    manager: Arc<AnalysisManager>,
}

impl ElementDetailsTool {
    pub fn new(manager: Arc<AnalysisManager>) -> Self {
        let definition = ToolDefinition::new(
            "ui_element_details",
            "Element Details",
            "Get selectors, positions, and computed styles for all elements of one type \
             (navbar, header, footer, hero, button, form, card, ...).",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "url": { "type": "string" },
                "element_type": {
                    "type": "string",
                    "enum": ElementType::ALL.iter().map(|t| t.as_str()).collect::<Vec<_>>()
                },
                "viewport_width": { "type": "integer", "default": 1920 },
                "viewport_height": { "type": "integer", "default": 1080 }
            },
            "required": ["url", "element_type"]
        }));
        Self { definition, manager }
    }
}

#[async_trait]
impl Tool for ElementDetailsTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: ElementDetailsParams = serde_json::from_value(params).map_err(invalid_params)?;

        let elements = self
            .manager
            .element_details(
                &params.url,
                params.element_type,
                ViewportInfo::new(params.viewport_width, params.viewport_height),
            )
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        let content = format!(
            "Found {} {} elements on {}",
            elements.len(),
            params.element_type,
            params.url
        );
        let structured = to_structured(&elements)?;
        Ok(ToolResult::success_json(content, structured))
    }
}

// ============================================================================
// Fix Instructions Tool
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct FixInstructionsParams {
    pub url: String,
    pub user_complaint: String,
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: u32,
}

/// Turn a vague UI complaint into a prioritized fix plan.
pub struct FixInstructionsTool {
    definition: ToolDefinition,
    manager: Arc<AnalysisManager>,
}

impl FixInstructionsTool {
    pub fn new(manager: Arc<AnalysisManager>) -> Self {
        let definition = ToolDefinition::new(
            "ui_fix_instructions",
            "Fix Instructions",
            "Interpret a vague complaint ('the navbar is broken', 'spacing is off') and \
             generate ordered, concrete CSS/HTML fix instructions for the affected elements.",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "url": { "type": "string" },
                "user_complaint": { "type": "string", "description": "The user's description of the problem, can be vague" },
                "viewport_width": { "type": "integer", "default": 1920 },
                "viewport_height": { "type": "integer", "default": 1080 }
            },
            "required": ["url", "user_complaint"]
        }));
        Self { definition, manager }
    }
}

#[async_trait]
impl Tool for FixInstructionsTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: FixInstructionsParams =
            serde_json::from_value(params).map_err(invalid_params)?;

        let plan = self
            .manager
            .fix_plan(
                &params.url,
                &params.user_complaint,
                ViewportInfo::new(params.viewport_width, params.viewport_height),
            )
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        debug!(
            url = %params.url,
            instructions = plan.fix_instructions.len(),
            "ui_fix_instructions complete"
        );

        let content = plan.summary.clone();
        let structured = to_structured(&plan)?;
        Ok(ToolResult::success_json(content, structured).with_metadata(
            "instruction_count",
            serde_json::json!(plan.fix_instructions.len()),
        ))
    }
}

// ============================================================================
// Screenshot Tool
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ScreenshotParams {
    pub url: String,
    #[serde(default)]
    pub highlight_selector: Option<String>,
    #[serde(default)]
    pub element_type: Option<ElementType>,
    #[serde(default = "default_true")]
    pub full_page: bool,
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: u32,
}

/// Screenshot tool with optional element highlighting.
pub struct ScreenshotTool {
    definition: ToolDefinition,
    manager: Arc<AnalysisManager>,
}

impl ScreenshotTool {
    pub fn new(manager: Arc<AnalysisManager>) -> Self {
        let definition = ToolDefinition::new(
            "ui_screenshot",
            "UI Screenshot",
            "Capture a PNG screenshot of a page. Highlight problem areas with a CSS \
             selector or a known element type (navbar, hero, footer, ...).",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "url": { "type": "string" },
                "highlight_selector": { "type": "string", "description": "CSS selector of elements to outline in red" },
                "element_type": { "type": "string", "description": "Element type to highlight when no selector is given" },
                "full_page": { "type": "boolean", "default": true },
                "viewport_width": { "type": "integer", "default": 1920 },
                "viewport_height": { "type": "integer", "default": 1080 }
            },
            "required": ["url"]
        }));
        Self { definition, manager }
    }
}

#[async_trait]
impl Tool for ScreenshotTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: ScreenshotParams = serde_json::from_value(params).map_err(invalid_params)?;

        // An explicit selector wins; otherwise the element type's
        // catalogue selectors are highlighted.
        let highlight = params.highlight_selector.clone().or_else(|| {
            params.element_type.and_then(|ty| {
                let selectors = selectors_for(ty);
                if selectors.is_empty() {
                    None
                } else {
                    Some(selectors.join(", "))
                }
            })
        });

        let bytes = self
            .manager
            .screenshot(
                &params.url,
                ViewportInfo::new(params.viewport_width, params.viewport_height),
                params.full_page,
                highlight.as_deref(),
            )
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        use base64::Engine as _;
        let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);

        let content = format!("Captured screenshot of {} ({} bytes)", params.url, bytes.len());
        Ok(ToolResult::success_json(
            content,
            serde_json::json!({ "format": "png", "data_base64": encoded }),
        ))
    }
}

// ============================================================================
// Accessibility Tool
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AccessibilityParams {
    pub url: String,
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: u32,
}

/// Accessibility tree snapshot tool.
pub struct AccessibilityTool {
    definition: ToolDefinition,
    manager: Arc<AnalysisManager>,
}

impl AccessibilityTool {
    pub fn new(manager: Arc<AnalysisManager>) -> Self {
        let definition = ToolDefinition::new(
            "ui_accessibility",
            "Accessibility Snapshot",
            "Get the accessibility tree of a page as assistive technologies see it. \
             Useful for checking semantic structure and missing labels.",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "url": { "type": "string" },
                "viewport_width": { "type": "integer", "default": 1920 },
                "viewport_height": { "type": "integer", "default": 1080 }
            },
            "required": ["url"]
        }));
        Self { definition, manager }
    }
}

#[async_trait]
impl Tool for AccessibilityTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: AccessibilityParams = serde_json::from_value(params).map_err(invalid_params)?;

        let tree = self
            .manager
            .accessibility_snapshot(
                &params.url,
                ViewportInfo::new(params.viewport_width, params.viewport_height),
            )
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        Ok(ToolResult::success(tree))
    }
}

// ============================================================================
// DOM Outline Tool
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct DomOutlineParams {
    pub url: String,
    #[serde(default = "default_dom_depth")]
    pub max_depth: usize,
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: u32,
}

/// Simplified DOM hierarchy tool.
pub struct DomOutlineTool {
    definition: ToolDefinition,
    manager: Arc<AnalysisManager>,
}

impl DomOutlineTool {
    pub fn new(manager: Arc<AnalysisManager>) -> Self {
        let definition = ToolDefinition::new(
            "ui_dom_outline",
            "DOM Outline",
            "Get a simplified DOM hierarchy showing significant elements with their ids, \
             classes, and roles, down to a maximum nesting depth.",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "url": { "type": "string" },
                "max_depth": { "type": "integer", "default": 5 },
                "viewport_width": { "type": "integer", "default": 1920 },
                "viewport_height": { "type": "integer", "default": 1080 }
            },
            "required": ["url"]
        }));
        Self { definition, manager }
    }
}

#[async_trait]
impl Tool for DomOutlineTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: DomOutlineParams = serde_json::from_value(params).map_err(invalid_params)?;

        let outline = self
            .manager
            .dom_outline(
                &params.url,
                ViewportInfo::new(params.viewport_width, params.viewport_height),
                params.max_depth,
            )
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        Ok(ToolResult::success(outline))
    }
}

// ============================================================================
// Compare Viewports Tool
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CompareViewportsParams {
    pub url: String,
    #[serde(default)]
    pub viewports: Option<Vec<ViewportSpec>>,
    #[serde(default = "default_true")]
    pub include_screenshots: bool,
}

/// Responsive comparison tool.
pub struct CompareViewportsTool {
    definition: ToolDefinition,
    manager: Arc<AnalysisManager>,
}

impl CompareViewportsTool {
    pub fn new(manager: Arc<AnalysisManager>) -> Self {
        let definition = ToolDefinition::new(
            "ui_compare_viewports",
            "Compare Viewports",
            "Render a page at several viewport sizes and report element visibility at \
             each, with screenshots. Defaults to mobile (375x667), tablet (768x1024), \
             and desktop (1920x1080).",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "url": { "type": "string" },
                "viewports": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string" },
                            "width": { "type": "integer" },
                            "height": { "type": "integer" }
                        },
                        "required": ["name", "width", "height"]
                    }
                },
                "include_screenshots": { "type": "boolean", "default": true }
            },
            "required": ["url"]
        }));
        Self { definition, manager }
    }
}

#[async_trait]
impl Tool for CompareViewportsTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: CompareViewportsParams =
            serde_json::from_value(params).map_err(invalid_params)?;

        let viewports = params.viewports.unwrap_or_else(ViewportSpec::defaults);
        let reports = self
            .manager
            .compare_viewports(&params.url, &viewports, params.include_screenshots)
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        let content = format!(
            "Compared {} at {} viewport sizes",
            params.url,
            reports.len()
        );
        let structured = to_structured(&reports)?;
        Ok(ToolResult::success_json(content, structured))
    }
}

// ============================================================================
// Tech Stack Tool
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TechStackParams {
    pub url: String,
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: u32,
}

/// Technology stack fingerprinting tool.
pub struct TechStackTool {
    definition: ToolDefinition,
    manager: Arc<AnalysisManager>,
}

impl TechStackTool {
    pub fn new(manager: Arc<AnalysisManager>) -> Self {
        let definition = ToolDefinition::new(
            "ui_tech_stack",
            "Detect Tech Stack",
            "Detect the frameworks, CSS libraries, and styling approach a page is built \
             with (React/Vue/Angular/Svelte, Next.js/Nuxt/Remix/Gatsby/Astro, Tailwind, \
             Bootstrap, Material UI, ...), plus framework-specific fix guidance.",
        )
        .with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "url": { "type": "string" },
                "viewport_width": { "type": "integer", "default": 1920 },
                "viewport_height": { "type": "integer", "default": 1080 }
            },
            "required": ["url"]
        }));
        Self { definition, manager }
    }
}

#[async_trait]
impl Tool for TechStackTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: TechStackParams = serde_json::from_value(params).map_err(invalid_params)?;

        let stack = self
            .manager
            .tech_stack(
                &params.url,
                ViewportInfo::new(params.viewport_width, params.viewport_height),
            )
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        let content = stack.summary.clone();
        let structured = to_structured(&stack)?;
        Ok(ToolResult::success_json(content, structured)
            .with_metadata("primary_framework", serde_json::json!(stack.primary_framework)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{navbar_overflowing, plain_button, MockDriver};

    fn setup(driver: MockDriver) -> (Arc<AnalysisManager>, Arc<MockDriver>) {
        let driver = Arc::new(driver);
        (
            Arc::new(AnalysisManager::new(driver.clone())),
            driver,
        )
    }

    #[tokio::test]
    async fn test_analyze_tool_returns_structured_analysis() {
        let (manager, _) = setup(MockDriver {
            elements: vec![navbar_overflowing(), plain_button()],
            ..Default::default()
        });
        let tool = AnalyzePageTool::new(manager);

        let result = tool
            .execute(
                serde_json::json!({ "url": "https://example.com", "include_screenshot": false }),
                ToolContext::default(),
            )
            .await
            .unwrap();

        assert!(result.success);
        assert!(result.content.contains("2 elements"));
        let output = result.structured_output.unwrap();
        assert_eq!(output["url"], "https://example.com");
        assert!(output["elements_summary"]["navbar"].is_number());
    }

    #[tokio::test]
    async fn test_analyze_tool_invalid_params() {
        let (manager, _) = setup(MockDriver::default());
        let tool = AnalyzePageTool::new(manager);

        let result = tool
            .execute(serde_json::json!({ "query": "no url" }), ToolContext::default())
            .await;

        assert!(matches!(result, Err(ToolError::ExecutionFailed(msg)) if msg.contains("Invalid params")));
    }

    #[tokio::test]
    async fn test_element_details_tool_parses_type() {
        let (manager, driver) = setup(MockDriver {
            elements: vec![plain_button()],
            ..Default::default()
        });
        let tool = ElementDetailsTool::new(manager);

        let result = tool
            .execute(
                serde_json::json!({ "url": "https://example.com", "element_type": "button" }),
                ToolContext::default(),
            )
            .await
            .unwrap();

        assert!(result.content.contains("1 button elements"));
        assert!(driver.last_selector().starts_with("button"));
    }

    #[tokio::test]
    async fn test_fix_instructions_tool_summary_content() {
        let (manager, _) = setup(MockDriver {
            elements: vec![navbar_overflowing()],
            ..Default::default()
        });
        let tool = FixInstructionsTool::new(manager);

        let result = tool
            .execute(
                serde_json::json!({
                    "url": "https://example.com",
                    "user_complaint": "the navbar is broken"
                }),
                ToolContext::default(),
            )
            .await
            .unwrap();

        assert!(result.content.contains("fixes to apply"));
        let output = result.structured_output.unwrap();
        assert!(output["fix_instructions"].as_array().unwrap().len() >= 1);
        assert!(result.metadata.contains_key("instruction_count"));
    }

    #[tokio::test]
    async fn test_screenshot_tool_highlights_element_type() {
        let (manager, driver) = setup(MockDriver::default());
        let tool = ScreenshotTool::new(manager);

        let result = tool
            .execute(
                serde_json::json!({ "url": "https://example.com", "element_type": "navbar" }),
                ToolContext::default(),
            )
            .await
            .unwrap();

        assert!(result.success);
        let highlight = driver.last_highlight().unwrap();
        assert!(highlight.starts_with("nav, [role='navigation']"));
        let output = result.structured_output.unwrap();
        assert_eq!(output["format"], "png");
        assert!(!output["data_base64"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_screenshot_tool_explicit_selector_wins() {
        let (manager, driver) = setup(MockDriver::default());
        let tool = ScreenshotTool::new(manager);

        tool.execute(
            serde_json::json!({
                "url": "https://example.com",
                "highlight_selector": ".broken-thing",
                "element_type": "navbar"
            }),
            ToolContext::default(),
        )
        .await
        .unwrap();

        assert_eq!(driver.last_highlight().as_deref(), Some(".broken-thing"));
    }

    #[tokio::test]
    async fn test_accessibility_tool_returns_tree_text() {
        let (manager, _) = setup(MockDriver::default());
        let tool = AccessibilityTool::new(manager);

        let result = tool
            .execute(
                serde_json::json!({ "url": "https://example.com" }),
                ToolContext::default(),
            )
            .await
            .unwrap();

        assert!(result.content.contains("navigation"));
    }

    #[tokio::test]
    async fn test_compare_viewports_tool_custom_sizes() {
        let (manager, _) = setup(MockDriver {
            elements: vec![plain_button()],
            ..Default::default()
        });
        let tool = CompareViewportsTool::new(manager);

        let result = tool
            .execute(
                serde_json::json!({
                    "url": "https://example.com",
                    "viewports": [{ "name": "watch", "width": 272, "height": 340 }],
                    "include_screenshots": false
                }),
                ToolContext::default(),
            )
            .await
            .unwrap();

        let output = result.structured_output.unwrap();
        let reports = output.as_array().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0]["name"], "watch");
        assert_eq!(reports[0]["total_elements"], 1);
    }

    #[tokio::test]
    async fn test_tech_stack_tool_content_is_summary() {
        let mut driver = MockDriver::default();
        driver.page_facts.global_symbols = vec!["__NEXT_DATA__".to_string()];
        let (manager, _) = setup(driver);
        let tool = TechStackTool::new(manager);

        let result = tool
            .execute(
                serde_json::json!({ "url": "https://example.com" }),
                ToolContext::default(),
            )
            .await
            .unwrap();

        assert!(result.content.contains("Next.js"));
        assert_eq!(
            result.metadata.get("primary_framework"),
            Some(&serde_json::json!("Next.js"))
        );
    }

    #[tokio::test]
    async fn test_navigation_error_maps_to_execution_failed() {
        let (manager, _) = setup(MockDriver {
            fail_navigation: true,
            ..Default::default()
        });
        let tool = DomOutlineTool::new(manager);

        let result = tool
            .execute(
                serde_json::json!({ "url": "https://down.test" }),
                ToolContext::default(),
            )
            .await;

        assert!(matches!(result, Err(ToolError::ExecutionFailed(msg)) if msg.contains("Navigation failed")));
    }
}
