//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find `config_name` in `start` or any of its ancestors.
///
/// An absolute `config_name` is returned as-is when it exists.
///
/// ```text
/// /home/user/my-crate/src/bin/   ← start
/// /home/user/my-crate/automd.toml ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_in_ancestor() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("src/bin");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("automd.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("automd.toml")).unwrap();
        assert_eq!(found, dir.path().join("automd.toml"));
    }

    #[test]
    fn test_absolute_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        assert_eq!(find_config_file(dir.path(), &path), None);

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(Path::new("/"), &path), Some(path));
    }

    #[test]
    fn test_directory_is_not_config() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("automd.toml")).unwrap();
        assert_eq!(
            find_config_file(dir.path(), Path::new("automd.toml")),
            None
        );
    }
}
