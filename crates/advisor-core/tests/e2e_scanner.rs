//! End-to-end scanner integration tests.
//!
//! These tests run the real `scan` entry point against temporary directory
//! trees, covering the root preconditions, the per-entry skip policy and the
//! aggregate invariants of `ScanResult`.
use advisor_core::{scan, DeletionReport, ScanErrorKind, NO_EXTENSION};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// ```text
/// root/
///   alpha/
///     a.txt          (100 bytes)
///     b.rs           (200 bytes)
///   beta/
///     c.png          (300 bytes)
///     gamma/
///       archive.tar.gz (50 bytes)
///   d.zip            (400 bytes)
///   README           (10 bytes)
/// ```
///
/// Total file bytes: 1 060.
fn build_test_tree(root: &Path) {
    let alpha = root.join("alpha");
    let gamma = root.join("beta").join("gamma");
    fs::create_dir_all(&alpha).unwrap();
    fs::create_dir_all(&gamma).unwrap();

    write_bytes(&alpha.join("a.txt"), 100);
    write_bytes(&alpha.join("b.rs"), 200);
    write_bytes(&root.join("beta").join("c.png"), 300);
    write_bytes(&gamma.join("archive.tar.gz"), 50);
    write_bytes(&root.join("d.zip"), 400);
    write_bytes(&root.join("README"), 10);
}

fn write_bytes(path: &Path, n: usize) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![0u8; n]).unwrap();
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn scan_counts_files_directories_and_bytes() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());

    let r = scan(tmp.path()).expect("scan should succeed");

    assert_eq!(r.total_files, 6);
    // alpha, beta, gamma: the root itself is not counted.
    assert_eq!(r.total_directories, 3);
    assert_eq!(r.total_size, 1_060);
    assert_eq!(r.largest_file_size, 400);
    assert!(r.largest_file_path.ends_with("d.zip"));
}

#[test]
fn scan_buckets_extensions() {
    let tmp = TempDir::new().unwrap();
    build_test_tree(tmp.path());

    let r = scan(tmp.path()).unwrap();

    assert_eq!(r.file_types.get(".gz"), Some(&1));
    assert_eq!(r.file_types.get(".tar"), None);
    assert_eq!(r.file_types.get(NO_EXTENSION), Some(&1));
    assert_eq!(r.file_types.values().sum::<u64>(), r.total_files);
    assert!(r.largest_file_size <= r.total_size);
}

#[test]
fn scan_empty_directory() {
    let tmp = TempDir::new().unwrap();

    let r = scan(tmp.path()).unwrap();

    assert_eq!(r.total_files, 0);
    assert_eq!(r.total_directories, 0);
    assert_eq!(r.total_size, 0);
    assert_eq!(r.largest_file_size, 0);
    assert_eq!(r.largest_file_path, "");
    assert!(r.file_types.is_empty());
}

#[test]
fn scan_nonexistent_path_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("does-not-exist");

    let err = scan(&missing).unwrap_err();
    assert_eq!(err.kind(), ScanErrorKind::NotFound);
    assert_eq!(err.path(), missing.as_path());
}

#[test]
fn scan_regular_file_is_not_a_directory() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("plain.txt");
    write_bytes(&file, 5);

    let err = scan(&file).unwrap_err();
    assert_eq!(err.kind(), ScanErrorKind::NotADirectory);
}

/// Siblings are visited in name order, so `a.bin` is seen before `b.bin`
/// and must keep the largest-file slot on a size tie.
#[test]
fn largest_file_tie_keeps_first_visited() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("a.bin"), 128);
    write_bytes(&tmp.path().join("b.bin"), 128);
    write_bytes(&tmp.path().join("c.bin"), 64);

    let r = scan(tmp.path()).unwrap();

    assert_eq!(r.largest_file_size, 128);
    assert!(
        r.largest_file_path.ends_with("a.bin"),
        "expected a.bin, got {}",
        r.largest_file_path
    );
}

#[test]
fn scan_result_feeds_report() {
    let tmp = TempDir::new().unwrap();
    build_test_tree(tmp.path());

    let report = DeletionReport::from(&scan(tmp.path()).unwrap());

    assert_eq!(report.total_size_display, "1.04 KB");
    assert_eq!(report.top_extensions.len(), 6);
    assert!(report.largest_file.is_some());
}

#[cfg(unix)]
#[test]
fn symlinks_are_neither_files_nor_directories() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("target");
    fs::create_dir(&target).unwrap();
    write_bytes(&target.join("inside.txt"), 10);
    std::os::unix::fs::symlink(&target, tmp.path().join("dir-link")).unwrap();
    std::os::unix::fs::symlink(target.join("inside.txt"), tmp.path().join("file-link")).unwrap();

    let r = scan(tmp.path()).unwrap();

    assert_eq!(r.total_files, 1, "only the real file is counted");
    assert_eq!(r.total_directories, 1, "links are not followed");
}

/// An unreadable subdirectory is skipped without failing the scan.
#[cfg(unix)]
#[test]
fn permission_denied_subdirectory_is_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    let locked = tmp.path().join("locked");
    fs::create_dir(&locked).unwrap();
    write_bytes(&locked.join("hidden.txt"), 1_000);
    write_bytes(&tmp.path().join("visible.txt"), 10);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can still list the directory. The skip policy is
    // covered independently of privileges by the walker's unit tests.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        eprintln!("note: mode 000 directory still readable (privileged user), skipping");
        return;
    }

    let result = scan(tmp.path());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let r = result.expect("scan must tolerate an unreadable subdirectory");
    assert_eq!(r.total_files, 1);
    assert_eq!(r.total_size, 10);
    assert!(r.largest_file_path.ends_with("visible.txt"));
    // `locked` itself is still a visited directory.
    assert_eq!(r.total_directories, 1);
}

/// A root that cannot be listed at all aborts the scan.
#[cfg(unix)]
#[test]
fn unreadable_root_aborts_scan() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("root");
    fs::create_dir(&root).unwrap();
    fs::set_permissions(&root, fs::Permissions::from_mode(0o000)).unwrap();

    if fs::read_dir(&root).is_ok() {
        fs::set_permissions(&root, fs::Permissions::from_mode(0o755)).unwrap();
        eprintln!("note: mode 000 directory still readable (privileged user), skipping");
        return;
    }

    let result = scan(&root);
    fs::set_permissions(&root, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(result.unwrap_err().kind(), ScanErrorKind::ScanAborted);
}

#[test]
fn scan_result_serialises_to_json() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("one.log"), 3);

    let r = scan(tmp.path()).unwrap();
    let json = serde_json::to_value(&r).unwrap();

    assert_eq!(json["total_files"], 1);
    assert_eq!(json["file_types"][".log"], 1);
}
