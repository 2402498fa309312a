//! Data model for a directory scan.
//!
//! Re-exports the scan aggregate and the display formatting helpers.
pub mod scan_result;
pub mod size;

pub use scan_result::{extension_label, ScanResult, NO_EXTENSION};
pub use size::{format_count, format_size};
