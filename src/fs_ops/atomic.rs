//! Atomic rename helper.
//! - One rename per call; cross-filesystem moves fail instead of falling back to copy.
//! - On Unix, best-effort fsync of the destination directory after rename.

use std::fs;
use std::path::Path;

use crate::errors::RelocationError;

/// Move `src` to `dst` with a single rename.
///
/// Atomicity is whatever the filesystem gives `rename(2)` within one volume.
/// Any failure, including `EXDEV`, is returned with both paths attached.
pub fn relocate(src: &Path, dst: &Path) -> Result<(), RelocationError> {
    fs::rename(src, dst).map_err(|e| RelocationError::new(src, dst, e))?;

    #[cfg(unix)]
    if let Some(parent) = dst.parent().filter(|p| !p.as_os_str().is_empty()) {
        // A failed fsync must not turn a completed rename into a failure.
        let _ = fsync_dir(parent);
    }

    Ok(())
}

#[cfg(unix)]
fn fsync_dir(dir: &Path) -> std::io::Result<()> {
    fs::File::open(dir)?.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use std::io;

    #[test]
    fn relocate_moves_file_and_keeps_content() {
        let temp = assert_fs::TempDir::new().unwrap();
        let src = temp.child("in").child("a.txt");
        src.write_str("hello").unwrap();
        let out = temp.child("out");
        out.create_dir_all().unwrap();
        let dst = out.child("a.txt");

        relocate(src.path(), dst.path()).expect("same-volume rename should succeed");

        assert!(!src.path().exists());
        assert_eq!(fs::read_to_string(dst.path()).unwrap(), "hello");
    }

    #[test]
    fn relocate_reports_missing_source() {
        let temp = assert_fs::TempDir::new().unwrap();
        let src = temp.child("missing.txt");
        let dst = temp.child("dest.txt");

        let err = relocate(src.path(), dst.path()).unwrap_err();
        assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
        assert_eq!(err.source_path, src.path());
        assert_eq!(err.dest_path, dst.path());
    }

    #[test]
    fn relocate_reports_missing_destination_dir() {
        let temp = assert_fs::TempDir::new().unwrap();
        let src = temp.child("a.txt");
        src.write_str("x").unwrap();
        let dst = temp.child("no_such_dir").child("a.txt");

        let err = relocate(src.path(), dst.path()).unwrap_err();
        assert_eq!(err.code(), "not_found");
        // Source untouched on failure.
        assert!(src.path().exists());
    }
}
