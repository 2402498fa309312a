//! Deletion summary: the renderable view of a [`ScanResult`].
//!
//! Holds every field the frontends print, with sizes already formatted, so
//! renderers do no arithmetic of their own.
use super::file_types::top_extensions;
use crate::model::{format_size, ScanResult};
use compact_str::CompactString;
use serde::Serialize;

/// Number of extensions listed in the default report.
pub const DEFAULT_TOP_EXTENSIONS: usize = 10;

/// The single largest file found by a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LargestFile {
    pub path: String,
    pub size: u64,
    pub size_display: String,
}

/// One ranked row of the extension histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionCount {
    pub extension: CompactString,
    pub count: u64,
}

/// What a recursive removal of the scanned root would destroy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionReport {
    pub total_files: u64,
    pub total_directories: u64,
    pub total_size: u64,
    pub total_size_display: String,
    /// `None` when the scan found no files.
    pub largest_file: Option<LargestFile>,
    pub top_extensions: Vec<ExtensionCount>,
}

impl DeletionReport {
    /// Build the report, keeping at most `limit` extensions.
    pub fn from_scan(result: &ScanResult, limit: usize) -> Self {
        let largest_file = (result.total_files > 0).then(|| LargestFile {
            path: result.largest_file_path.clone(),
            size: result.largest_file_size,
            size_display: format_size(result.largest_file_size),
        });

        let top_extensions = top_extensions(&result.file_types, limit)
            .into_iter()
            .map(|(extension, count)| ExtensionCount { extension, count })
            .collect();

        Self {
            total_files: result.total_files,
            total_directories: result.total_directories,
            total_size: result.total_size,
            total_size_display: format_size(result.total_size),
            largest_file,
            top_extensions,
        }
    }
}

impl From<&ScanResult> for DeletionReport {
    fn from(result: &ScanResult) -> Self {
        Self::from_scan(result, DEFAULT_TOP_EXTENSIONS)
    }
}
