//! Analysis modules: pure derivations over a finished [`ScanResult`](crate::model::ScanResult).

pub mod file_types;
pub mod report;

pub use file_types::top_extensions;
pub use report::{DeletionReport, ExtensionCount, LargestFile, DEFAULT_TOP_EXTENSIONS};
