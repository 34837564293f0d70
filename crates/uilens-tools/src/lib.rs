//! The callable tool surface over the analysis pipeline.
//!
//! [`AnalysisManager`] owns the [`uilens_protocols::PageDriver`] seam and
//! runs one page lifecycle per operation: load, extract, analyze, close.
//! The tools in [`tools`] wrap the manager operations behind the
//! [`uilens_protocols::Tool`] protocol for host registration.

pub mod manager;
pub mod tools;

#[cfg(test)]
pub(crate) mod testutil;

use std::sync::Arc;

use uilens_protocols::Tool;

pub use manager::{AnalysisManager, ViewportSpec, DEFAULT_DOM_DEPTH, MAX_ELEMENTS};
pub use tools::{
    AccessibilityTool, AnalyzePageTool, CompareViewportsTool, DomOutlineTool, ElementDetailsTool,
    FixInstructionsTool, ScreenshotTool, TechStackTool,
};

/// All UI analysis tools over one shared manager, in registration order.
pub fn all_tools(manager: Arc<AnalysisManager>) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(AnalyzePageTool::new(manager.clone())),
        Arc::new(ElementDetailsTool::new(manager.clone())),
        Arc::new(FixInstructionsTool::new(manager.clone())),
        Arc::new(ScreenshotTool::new(manager.clone())),
        Arc::new(AccessibilityTool::new(manager.clone())),
        Arc::new(DomOutlineTool::new(manager.clone())),
        Arc::new(CompareViewportsTool::new(manager.clone())),
        Arc::new(TechStackTool::new(manager)),
    ]
}
