//! Filesystem path normalization.

use std::path::{Path, PathBuf};

/// Normalize a path to absolute form.
///
/// Tries `canonicalize()` first. Falls back to the path itself when
/// absolute, or joined onto the current directory when relative.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve `path` against `base` unless it is already absolute.
///
/// Config values like `readme.path` are relative to the directory holding
/// `automd.toml`, not to the current directory.
#[inline]
pub fn resolve_from(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return normalize_path(path);
    }
    normalize_path(&base.join(path))
}

/// Display `path` relative to `base` when possible.
pub fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_path_absolute() {
        let normalized = normalize_path(Path::new("/absolute/path/README.md"));
        assert_eq!(normalized, PathBuf::from("/absolute/path/README.md"));
    }

    #[test]
    fn test_normalize_path_relative() {
        assert!(normalize_path(Path::new("relative/README.md")).is_absolute());
    }

    #[test]
    fn test_resolve_from() {
        assert_eq!(
            resolve_from(Path::new("/base"), Path::new("/abs/README.md")),
            PathBuf::from("/abs/README.md")
        );
        assert_eq!(
            resolve_from(Path::new("/base"), Path::new("docs/README.md")),
            PathBuf::from("/base/docs/README.md")
        );
    }

    #[test]
    fn test_resolve_from_existing() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("README.md"), "").unwrap();
        let resolved = resolve_from(dir.path(), Path::new("./README.md"));
        assert_eq!(resolved, dir.path().canonicalize().unwrap().join("README.md"));
    }

    #[test]
    fn test_display_relative() {
        assert_eq!(
            display_relative(Path::new("/root/crate/README.md"), Path::new("/root/crate")),
            "README.md"
        );
        assert_eq!(
            display_relative(Path::new("/other/README.md"), Path::new("/root/crate")),
            "/other/README.md"
        );
    }
}
