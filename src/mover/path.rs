//! Destination path derivation.

/// Separator used when deriving destination paths. Paths are treated as text.
pub const SEPARATOR: char = '/';

/// Derive where `source` lands inside `dest_dir`.
///
/// - No separator in `source`: `dest_dir + "/" + source`, or `dest_dir + source`
///   when `dest_dir` already ends with a separator.
/// - Separator in `source`: `dest_dir` followed by the tail of `source` starting
///   at its last separator. No separator is inserted, so a `dest_dir` with a
///   trailing separator yields a doubled one (`/out/` + `/in/a` -> `/out//a`).
///   POSIX resolves the doubled form to the same file.
pub fn destination_path(source: &str, dest_dir: &str) -> String {
    match source.rfind(SEPARATOR) {
        Some(pos) => format!("{dest_dir}{}", &source[pos..]),
        None if dest_dir.ends_with(SEPARATOR) => format!("{dest_dir}{source}"),
        None => format!("{dest_dir}{SEPARATOR}{source}"),
    }
}
