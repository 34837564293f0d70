//! # UILens Analysis
//!
//! The heuristic semantic-analysis pipeline. Turns raw DOM/CSS facts
//! ([`uilens_protocols::Snapshot`]) into semantic judgments:
//!
//! - [`classify`] - element-type classification (tag > role > class > id)
//! - [`interpret_query`] - free-text complaint interpretation
//! - [`detect_issues`] - rule-based issue detection
//! - [`synthesize_fixes`] - prioritized fix-instruction synthesis
//!
//! Plus the read-only selector [`catalog`] used for bulk DOM queries.
//!
//! Every function here is pure, synchronous, and total: malformed or
//! partial facts are "no signal", unknown cases resolve to `other`, and
//! nothing panics or blocks.

pub mod catalog;
pub mod classify;
pub mod fixes;
pub mod issues;
pub mod query;

pub use catalog::{broad_selector, combined_selector, selectors_for, MAX_COMBINED_SELECTORS};
pub use classify::{classify, classify_all, summarize};
pub use fixes::synthesize_fixes;
pub use issues::{detect_issues, fix_suggestion, MAX_ISSUES};
pub use query::interpret_query;
