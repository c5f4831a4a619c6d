//! Report rendering.
//!
//! One backend: human-readable terminal text. The harness defines no
//! machine-readable output format; embedders wanting structured export can
//! serialize [`crate::SummaryStatistics`] themselves.

mod terminal;

pub use terminal::format_report;
