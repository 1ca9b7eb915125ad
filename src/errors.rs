//! Typed error definitions for file_mover.
//! Relocation failures carry both paths and the OS error so a single log line
//! says what went wrong and where.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::fs_ops::hint_for;

#[derive(Debug, Error)]
#[error("move failed ({} -> {}): {source}{}", .source_path.display(), .dest_path.display(), hint_suffix(.source))]
pub struct RelocationError {
    pub source_path: PathBuf,
    pub dest_path: PathBuf,
    #[source]
    pub source: io::Error,
}

fn hint_suffix(e: &io::Error) -> String {
    hint_for(e).map(|h| format!(" ({h})")).unwrap_or_default()
}

impl RelocationError {
    pub fn new(source_path: impl Into<PathBuf>, dest_path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            source_path: source_path.into(),
            dest_path: dest_path.into(),
            source,
        }
    }

    /// Stable machine-friendly classification for structured logs.
    pub fn code(&self) -> &'static str {
        #[cfg(unix)]
        if let Some(code) = self.source.raw_os_error() {
            match code {
                libc::EXDEV => return "cross_device",
                libc::EACCES | libc::EPERM => return "permission_denied",
                libc::ENOENT => return "not_found",
                libc::EEXIST | libc::ENOTEMPTY => return "destination_exists",
                libc::EISDIR | libc::ENOTDIR => return "wrong_type",
                libc::EROFS => return "read_only",
                _ => {}
            }
        }
        match self.source.kind() {
            io::ErrorKind::NotFound => "not_found",
            io::ErrorKind::PermissionDenied => "permission_denied",
            io::ErrorKind::AlreadyExists => "destination_exists",
            _ => "io",
        }
    }

    /// True when the rename crossed filesystems (no copy fallback is attempted).
    pub fn is_cross_device(&self) -> bool {
        crate::fs_ops::is_cross_device(&self.source)
    }
}

/// The mover's receiving side is gone; nothing sent now would be processed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("mover is no longer accepting {0}")]
pub struct MoverClosed(pub &'static str);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_paths_and_cause() {
        let err = RelocationError::new(
            "/tmp/in/a.txt",
            "/nowhere/a.txt",
            io::Error::from(io::ErrorKind::NotFound),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/in/a.txt"), "{msg}");
        assert!(msg.contains("/nowhere/a.txt"), "{msg}");
        assert_eq!(err.code(), "not_found");
        assert!(!err.is_cross_device());
    }

    #[cfg(unix)]
    #[test]
    fn exdev_is_classified_as_cross_device() {
        let err = RelocationError::new("a", "b", io::Error::from_raw_os_error(libc::EXDEV));
        assert_eq!(err.code(), "cross_device");
        assert!(err.is_cross_device());
        assert!(err.to_string().contains("cross-filesystem"));
    }
}
