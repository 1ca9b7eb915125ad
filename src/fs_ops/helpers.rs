//! I/O error hints.
//!
//! Maps raw OS error codes to a short, actionable hint for relocation diagnostics.

use std::io;

/// Platform-aware hint for an I/O error, if one applies.
pub fn hint_for(e: &io::Error) -> Option<&'static str> {
    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            let hint = match code {
                libc::EACCES | libc::EPERM => {
                    Some("permission denied; check ownership and write permissions")
                }
                libc::EXDEV => Some("cross-filesystem; atomic rename not possible"),
                libc::EBUSY => Some("resource busy; ensure no other process is writing"),
                libc::ENOENT => Some("path not found; verify source and destination directory exist"),
                libc::EEXIST | libc::ENOTEMPTY => Some("destination already exists"),
                libc::EISDIR => Some("destination is a directory"),
                libc::ENOTDIR => Some("a path component is not a directory"),
                libc::ENOSPC => Some("insufficient space on device"),
                libc::EROFS => Some("read-only filesystem; cannot write here"),
                libc::ENAMETOOLONG => Some("filename or path too long"),
                _ => None,
            };
            if hint.is_some() {
                return hint;
            }
        }
        #[cfg(windows)]
        {
            let hint = match code {
                5 => Some("access denied; check permissions"), // ERROR_ACCESS_DENIED
                17 => Some("cross-filesystem; atomic rename not possible"), // ERROR_NOT_SAME_DEVICE
                32 => Some("sharing violation; file is in use"), // ERROR_SHARING_VIOLATION
                2 | 3 => Some("path not found; verify source and destination directory exist"),
                80 | 183 => Some("destination already exists"),
                _ => None,
            };
            if hint.is_some() {
                return hint;
            }
        }
    }

    match e.kind() {
        io::ErrorKind::PermissionDenied => {
            Some("permission denied; check ownership and write permissions")
        }
        io::ErrorKind::NotFound => Some("path not found; verify source and destination directory exist"),
        io::ErrorKind::AlreadyExists => Some("destination already exists"),
        _ => None,
    }
}

/// Detect EXDEV / ERROR_NOT_SAME_DEVICE; std has no stable ErrorKind for it.
pub fn is_cross_device(e: &io::Error) -> bool {
    match e.raw_os_error() {
        #[cfg(unix)]
        Some(code) => code == libc::EXDEV,
        #[cfg(windows)]
        Some(code) => code == 17,
        #[cfg(not(any(unix, windows)))]
        Some(_) => false,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_fallback_gives_hint() {
        let e = io::Error::from(io::ErrorKind::PermissionDenied);
        assert!(hint_for(&e).unwrap().contains("permission"));
    }

    #[test]
    fn unknown_kind_has_no_hint() {
        let e = io::Error::other("boom");
        assert!(hint_for(&e).is_none());
        assert!(!is_cross_device(&e));
    }
}
