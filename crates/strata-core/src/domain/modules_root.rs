//! Resolution of the `modules` root for a target directory.
//!
//! Pure path arithmetic: nothing here touches the filesystem and nothing
//! here can fail.

use std::path::{Component, Path, PathBuf};

use crate::domain::layout::MODULES_DIR;

/// Rebuild `path` from its components.
///
/// Drops trailing separators (and redundant separators or `.` segments in
/// between), so `/a/b/` and `/a//b` both become `/a/b`.
pub fn normalize(path: impl AsRef<Path>) -> PathBuf {
    path.as_ref().components().collect()
}

/// Whether the last segment of `path` is literally `modules`.
pub fn is_modules_dir(path: impl AsRef<Path>) -> bool {
    matches!(
        path.as_ref().components().next_back(),
        Some(Component::Normal(last)) if last == MODULES_DIR
    )
}

/// Decide which `modules` directory a new module belongs in.
///
/// If `current_directory` already is a `modules` directory it is returned
/// (normalized); otherwise `modules` is appended. Applying this twice gives
/// the same result as applying it once.
pub fn resolve_modules_root(current_directory: impl AsRef<Path>) -> PathBuf {
    let normalized = normalize(current_directory);

    if is_modules_dir(&normalized) {
        normalized
    } else {
        normalized.join(MODULES_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_modules_to_plain_directory() {
        assert_eq!(
            resolve_modules_root("/project"),
            PathBuf::from("/project/modules")
        );
    }

    #[test]
    fn trailing_separator_is_dropped() {
        assert_eq!(resolve_modules_root("/a/b/"), PathBuf::from("/a/b/modules"));
    }

    #[test]
    fn modules_directory_is_returned_unchanged() {
        assert_eq!(
            resolve_modules_root("/a/b/modules"),
            PathBuf::from("/a/b/modules")
        );
    }

    #[test]
    fn modules_directory_with_trailing_separator_is_not_nested() {
        let resolved = resolve_modules_root("/a/b/modules/");
        assert_eq!(resolved, PathBuf::from("/a/b/modules"));
        assert!(!resolved.ends_with("modules/modules"));
    }

    #[test]
    fn root_only_path_does_not_panic() {
        assert_eq!(resolve_modules_root("/"), PathBuf::from("/modules"));
    }

    #[test]
    fn segment_merely_containing_modules_is_not_a_modules_dir() {
        assert_eq!(
            resolve_modules_root("/a/my_modules"),
            PathBuf::from("/a/my_modules/modules")
        );
        assert_eq!(
            resolve_modules_root("/a/Modules"),
            PathBuf::from("/a/Modules/modules")
        );
    }

    #[test]
    fn modules_earlier_in_path_does_not_count() {
        assert_eq!(
            resolve_modules_root("/modules/feature"),
            PathBuf::from("/modules/feature/modules")
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        for path in ["/", "/a", "/a/b/", "/a/modules", "/a/modules/", "/x/y/z"] {
            let once = resolve_modules_root(path);
            let twice = resolve_modules_root(&once);
            assert_eq!(once, twice, "not idempotent for {path}");
        }
    }

    #[test]
    fn non_modules_paths_get_exactly_one_segment_appended() {
        for path in ["/a", "/a/b/", "/srv/app/lib"] {
            assert_eq!(resolve_modules_root(path), normalize(path).join("modules"));
        }
    }

    #[test]
    fn normalize_collapses_redundant_separators() {
        assert_eq!(normalize("/a//b/"), PathBuf::from("/a/b"));
    }

    #[test]
    fn is_modules_dir_checks_last_segment_only() {
        assert!(is_modules_dir("/a/modules"));
        assert!(is_modules_dir("/a/modules/"));
        assert!(!is_modules_dir("/modules/a"));
        assert!(!is_modules_dir("/"));
    }
}
