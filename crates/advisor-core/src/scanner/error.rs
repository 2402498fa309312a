//! Failures that escape a scan.
//!
//! Only root-level problems are surfaced here. Per-entry failures inside
//! the tree are absorbed by the walk and never become a `ScanError`.
use std::io;
use std::path::{Path, PathBuf};

/// A scan that could not produce a result.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The root path does not exist.
    #[error("path does not exist: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The root path exists but is not a directory.
    #[error("not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    /// Traversal could not start or continue at the root.
    #[error("scan of {} aborted: {source}", .path.display())]
    ScanAborted {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Fieldless mirror of [`ScanError`] for matching on the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanErrorKind {
    NotFound,
    NotADirectory,
    /// An entry below the root could not be read. Never returned from
    /// [`scan`](super::scan); used to classify skipped entries in logs.
    EntryUnreadable,
    ScanAborted,
}

impl ScanError {
    pub(crate) fn aborted(path: &Path, source: io::Error) -> Self {
        Self::ScanAborted {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The failure class of this error.
    pub fn kind(&self) -> ScanErrorKind {
        match self {
            Self::NotFound { .. } => ScanErrorKind::NotFound,
            Self::NotADirectory { .. } => ScanErrorKind::NotADirectory,
            Self::ScanAborted { .. } => ScanErrorKind::ScanAborted,
        }
    }

    /// The root path the scan was asked to inspect.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::NotADirectory { path } => path,
            Self::ScanAborted { path, .. } => path,
        }
    }
}
