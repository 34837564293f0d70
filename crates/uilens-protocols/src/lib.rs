//! # UILens Protocols
//!
//! Shared data model and protocol definitions for the UILens pipeline.
//! Contains the fact types produced by the external DOM extractor, the
//! semantic judgment types produced by the analysis pipeline, and the
//! trait seams the pipeline consumes and exposes.
//!
//! ## Core Types
//!
//! - [`ElementFacts`] / [`Snapshot`] - raw per-element and page-wide facts
//! - [`ElementType`] / [`ClassifiedElement`] - semantic element categories
//! - [`Issue`] / [`IssueKind`] - detected UI defects
//! - [`FixInstruction`] / [`FixPlan`] - proposed style/markup changes
//! - [`TechStackResult`] - fingerprinted framework/library stack
//!
//! ## Traits
//!
//! - [`PageDriver`] - the external browser-driving/extraction layer
//! - [`Tool`] - the callable command surface

pub mod driver;
pub mod element;
pub mod fix;
pub mod issue;
pub mod snapshot;
pub mod tech;
pub mod tool;

pub use driver::{DriverError, PageDriver, PageId};
pub use element::{
    BoundingBox, ClassifiedElement, ElementFacts, ElementType, StyleFacts, ViewportInfo,
};
pub use fix::{FixAction, FixInstruction, FixPlan, PropertyChange};
pub use issue::{Issue, IssueHint, IssueKind, QueryInterpretation, Severity};
pub use snapshot::{MetaTag, PageAnalysis, PageFacts, Snapshot, ViewportReport};
pub use tech::{Confidence, FrameworkInfo, TechCategory, TechStackResult};
pub use tool::{Tool, ToolContext, ToolDefinition, ToolError, ToolResult};
