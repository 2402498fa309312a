//! Scanner module: read-only recursive measurement of a directory tree.
//!
//! [`scan`] checks the root preconditions, then folds a serial `jwalk`
//! traversal into a [`ScanResult`]. Entry-level failures never escape;
//! see [`walk`] for the skip policy.
pub mod error;
mod walk;

pub use error::{ScanError, ScanErrorKind};

use crate::model::ScanResult;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Scan the directory tree rooted at `root`.
///
/// # Errors
///
/// - [`ScanError::NotFound`] if `root` does not exist.
/// - [`ScanError::NotADirectory`] if `root` is not a directory.
/// - [`ScanError::ScanAborted`] if the root cannot be inspected or listed.
pub fn scan(root: impl AsRef<Path>) -> Result<ScanResult, ScanError> {
    let root = root.as_ref();

    let meta = match fs::metadata(root) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ScanError::NotFound {
                path: root.to_path_buf(),
            })
        }
        Err(e) => return Err(ScanError::aborted(root, e)),
    };
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    info!("Starting scan of {}", root.display());
    let start = Instant::now();

    let tally = walk::walk(root)?;

    info!(
        files = tally.result.total_files,
        dirs = tally.result.total_directories,
        bytes = tally.result.total_size,
        skipped = tally.skipped,
        "Scan of {} complete in {:?}",
        root.display(),
        start.elapsed()
    );

    Ok(tally.result)
}
