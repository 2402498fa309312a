//! Advisor Core: directory analysis engine and report derivation.
//!
//! This crate contains all measurement logic with zero terminal dependencies.
//! It never modifies the filesystem: every operation is a read-only inspection.
//!
//! # Modules
//!
//! - [`model`]: The `ScanResult` aggregate and byte/count formatting.
//! - [`scanner`]: Error-tolerant recursive directory scan.
//! - [`analysis`]: Pure report derivation (ranked extensions, deletion summary).
pub mod analysis;
pub mod model;
pub mod scanner;

pub use analysis::{top_extensions, DeletionReport, ExtensionCount, LargestFile};
pub use model::{format_count, format_size, ScanResult, NO_EXTENSION};
pub use scanner::{scan, ScanError, ScanErrorKind};
