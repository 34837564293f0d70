//! Technology stack fingerprinting.
//!
//! Turns the page-wide facts of a snapshot (script URLs, window globals,
//! attribute names, sampled class names) into a [`TechStackResult`]:
//! which JS framework renders the page, which meta framework wraps it,
//! how the CSS is authored, and how fixes should be applied for that
//! stack. Detection is signature-driven and purely offline; no signal
//! means no detection, never an error.

pub mod advice;
pub mod detect;
pub mod signatures;

pub use detect::fingerprint;
pub use uilens_protocols::{Confidence, FrameworkInfo, TechCategory, TechStackResult};
