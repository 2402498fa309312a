//! Serial directory walker using `jwalk`: folds every reachable entry into
//! one [`ScanResult`].
//!
//! The walk never follows symlinks and runs on the calling thread
//! (`Parallelism::Serial`) with sorted siblings, so traversal order is
//! deterministic for a given tree.
//!
//! # Failure policy
//!
//! - An entry whose metadata cannot be read is skipped. It contributes to no
//!   counter.
//! - A directory that cannot be listed is still counted in
//!   `total_directories`: its parent listed it, so it is a visited entry. Its
//!   subtree is never explored, so nothing below it is counted.
//! - Only a failure at the root aborts the fold with
//!   [`ScanError::ScanAborted`].
//!
//! The fold itself only sees the [`WalkEntry`] view of an entry, so the
//! policy can be exercised without a real unreadable directory.
use super::error::{ScanError, ScanErrorKind};
use crate::model::ScanResult;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

type Entry = jwalk::DirEntry<((), ())>;

/// Accumulator threaded through the fold.
#[derive(Debug, Default)]
pub(super) struct Tally {
    pub result: ScanResult,
    /// Entries dropped by the failure policy. Diagnostic only.
    pub skipped: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Directory,
    File,
    /// Symlinks, devices, sockets, FIFOs.
    Other,
}

/// What the fold needs to know about one yielded entry.
trait WalkEntry {
    fn entry_depth(&self) -> usize;
    fn full_path(&self) -> PathBuf;
    fn kind(&self) -> EntryKind;
    /// Set when the entry is a directory whose children could not be read.
    fn children_error(&self) -> Option<io::Error>;
    fn size(&self) -> io::Result<u64>;
}

/// An item the walker yielded as an error instead of an entry.
#[derive(Debug)]
struct WalkFailure {
    depth: usize,
    path: Option<PathBuf>,
    error: io::Error,
}

impl WalkEntry for Entry {
    fn entry_depth(&self) -> usize {
        self.depth
    }

    fn full_path(&self) -> PathBuf {
        self.path()
    }

    fn kind(&self) -> EntryKind {
        let file_type = self.file_type();
        if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }

    fn children_error(&self) -> Option<io::Error> {
        self.read_children_error.as_ref().map(to_io)
    }

    fn size(&self) -> io::Result<u64> {
        self.metadata().map(|m| m.len()).map_err(|e| to_io(&e))
    }
}

impl From<jwalk::Error> for WalkFailure {
    fn from(err: jwalk::Error) -> Self {
        Self {
            depth: err.depth(),
            path: err.path().map(Path::to_path_buf),
            error: to_io(&err),
        }
    }
}

/// Classification of a single yielded entry.
enum Visit {
    Root,
    File { path: PathBuf, size: u64 },
    Directory,
    /// Listed by its parent but its own children could not be read.
    UnreadableDirectory,
    Other,
    Skipped,
}

/// Walk `root` and fold every entry into a [`Tally`].
pub(super) fn walk(root: &Path) -> Result<Tally, ScanError> {
    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial);

    fold_entries(
        walker.into_iter().map(|r| r.map_err(WalkFailure::from)),
        root,
    )
}

fn fold_entries<E, I>(entries: I, root: &Path) -> Result<Tally, ScanError>
where
    E: WalkEntry,
    I: IntoIterator<Item = Result<E, WalkFailure>>,
{
    entries
        .into_iter()
        .try_fold(Tally::default(), |mut tally, entry| {
            match visit(entry, root)? {
                Visit::File { path, size } => tally.result.record_file(&path, size),
                Visit::Directory => tally.result.record_directory(),
                Visit::UnreadableDirectory => {
                    tally.result.record_directory();
                    tally.skipped += 1;
                }
                Visit::Skipped => tally.skipped += 1,
                Visit::Root | Visit::Other => {}
            }
            Ok(tally)
        })
}

fn visit<E: WalkEntry>(entry: Result<E, WalkFailure>, root: &Path) -> Result<Visit, ScanError> {
    let entry = match entry {
        Ok(e) => e,
        Err(failure) if failure.depth == 0 || failure.path.as_deref() == Some(root) => {
            return Err(ScanError::aborted(root, failure.error))
        }
        Err(failure) => {
            log_skip(failure.path.as_deref().unwrap_or(root), &failure.error);
            return Ok(Visit::Skipped);
        }
    };

    if entry.entry_depth() == 0 {
        // An unlistable root aborts the whole scan.
        return match entry.children_error() {
            Some(err) => Err(ScanError::aborted(root, err)),
            None => Ok(Visit::Root),
        };
    }

    match entry.kind() {
        EntryKind::Directory => Ok(match entry.children_error() {
            Some(err) => {
                log_skip(&entry.full_path(), &err);
                Visit::UnreadableDirectory
            }
            None => Visit::Directory,
        }),
        EntryKind::Other => Ok(Visit::Other),
        EntryKind::File => {
            let path = entry.full_path();
            match entry.size() {
                Ok(size) => Ok(Visit::File { path, size }),
                Err(err) => {
                    log_skip(&path, &err);
                    Ok(Visit::Skipped)
                }
            }
        }
    }
}

fn log_skip(path: &Path, err: &io::Error) {
    debug!(
        kind = ?ScanErrorKind::EntryUnreadable,
        "skipping {}: {err}",
        path.display()
    );
}

fn to_io(err: &jwalk::Error) -> io::Error {
    let kind = err.io_error().map_or(io::ErrorKind::Other, io::Error::kind);
    io::Error::new(kind, err.to_string())
}
