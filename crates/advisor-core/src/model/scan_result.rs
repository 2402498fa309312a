//! The aggregate produced by one directory scan.
//!
//! A `ScanResult` starts empty, is folded over every entry of a single
//! traversal, and is then handed off read-only to the analysis layer.
use compact_str::CompactString;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// Histogram label for files whose name contains no `.`.
pub const NO_EXTENSION: &str = "[no extension]";

/// Totals gathered from one scan.
///
/// Invariants maintained by the `record_*` methods:
/// - `total_files == file_types.values().sum()`
/// - `largest_file_size <= total_size`
/// - `largest_file_path` is empty iff no file was recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    /// Regular files visited.
    pub total_files: u64,
    /// Directories visited below the root (the root itself is not counted).
    pub total_directories: u64,
    /// Sum of all regular file sizes, in bytes.
    pub total_size: u64,
    /// Size of the first file that reached the maximum size.
    pub largest_file_size: u64,
    /// Full path of that file, or `""` when no file was seen.
    pub largest_file_path: String,
    /// Extension label → number of files carrying it.
    pub file_types: HashMap<CompactString, u64>,
}

impl ScanResult {
    /// Fold one regular file into the totals.
    ///
    /// The first file always claims the largest-file slot; afterwards it is
    /// only replaced on a strictly greater size, so among equally sized files
    /// the first one recorded is kept.
    pub fn record_file(&mut self, path: &Path, size: u64) {
        let first = self.total_files == 0;
        self.total_files += 1;
        self.total_size = self.total_size.saturating_add(size);

        if first || size > self.largest_file_size {
            self.largest_file_size = size;
            self.largest_file_path = path.to_string_lossy().into_owned();
        }

        let label = path
            .file_name()
            .map(|n| extension_label(&n.to_string_lossy()))
            .unwrap_or_else(|| CompactString::new(NO_EXTENSION));
        *self.file_types.entry(label).or_insert(0) += 1;
    }

    /// Fold one directory into the totals.
    pub fn record_directory(&mut self) {
        self.total_directories += 1;
    }
}

/// Extension label for a file name: the suffix from the last `.` (dot
/// included, case preserved), or [`NO_EXTENSION`] when there is no dot.
pub fn extension_label(file_name: &str) -> CompactString {
    match file_name.rfind('.') {
        Some(dot) => CompactString::new(&file_name[dot..]),
        None => CompactString::new(NO_EXTENSION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── extension_label ──────────────────────────────────────────────────

    #[test]
    fn label_uses_last_dot() {
        assert_eq!(extension_label("archive.tar.gz"), ".gz");
        assert_eq!(extension_label("main.rs"), ".rs");
    }

    #[test]
    fn label_without_dot_is_sentinel() {
        assert_eq!(extension_label("README"), NO_EXTENSION);
        assert_eq!(extension_label("Makefile"), NO_EXTENSION);
    }

    /// Case is preserved, so ".JPG" and ".jpg" are separate buckets.
    #[test]
    fn label_preserves_case() {
        assert_eq!(extension_label("IMG_0001.JPG"), ".JPG");
        assert_ne!(extension_label("a.JPG"), extension_label("a.jpg"));
    }

    #[test]
    fn label_for_dotfile_and_trailing_dot() {
        assert_eq!(extension_label(".bashrc"), ".bashrc");
        assert_eq!(extension_label("notes."), ".");
    }

    // ── record_file / record_directory ───────────────────────────────────

    #[test]
    fn default_is_empty() {
        let r = ScanResult::default();
        assert_eq!(r.total_files, 0);
        assert_eq!(r.total_directories, 0);
        assert_eq!(r.largest_file_size, 0);
        assert_eq!(r.largest_file_path, "");
        assert!(r.file_types.is_empty());
    }

    #[test]
    fn record_file_updates_all_counters() {
        let mut r = ScanResult::default();
        r.record_file(Path::new("/t/a.txt"), 100);
        r.record_file(Path::new("/t/b.txt"), 300);
        r.record_file(Path::new("/t/README"), 50);

        assert_eq!(r.total_files, 3);
        assert_eq!(r.total_size, 450);
        assert_eq!(r.largest_file_size, 300);
        assert_eq!(r.largest_file_path, "/t/b.txt");
        assert_eq!(r.file_types.get(".txt"), Some(&2));
        assert_eq!(r.file_types.get(NO_EXTENSION), Some(&1));
        assert_eq!(r.file_types.values().sum::<u64>(), r.total_files);
    }

    /// Equal sizes never displace the first file holding the maximum.
    #[test]
    fn largest_file_first_wins_on_tie() {
        let mut r = ScanResult::default();
        r.record_file(Path::new("/t/first.bin"), 64);
        r.record_file(Path::new("/t/second.bin"), 64);
        assert_eq!(r.largest_file_path, "/t/first.bin");
    }

    /// A lone empty file still fills the largest-file path.
    #[test]
    fn zero_byte_file_claims_empty_slot() {
        let mut r = ScanResult::default();
        r.record_file(Path::new("/t/empty.log"), 0);
        assert_eq!(r.total_files, 1);
        assert_eq!(r.largest_file_size, 0);
        assert_eq!(r.largest_file_path, "/t/empty.log");

        r.record_file(Path::new("/t/also-empty.log"), 0);
        assert_eq!(r.largest_file_path, "/t/empty.log");
    }

    #[test]
    fn record_directory_counts_only_directories() {
        let mut r = ScanResult::default();
        r.record_directory();
        r.record_directory();
        assert_eq!(r.total_directories, 2);
        assert_eq!(r.total_files, 0);
    }
}
