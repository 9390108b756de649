//! Configuration file discovery and path helpers

use crate::error::Result;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Name of the configuration file searched for in every ancestor directory
pub const CONFIG_FILE_NAME: &str = ".iconify.ini";

/// Lexically normalize a path: drop `.` components and resolve `..`
/// against the preceding component. Symlinks are not resolved.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

fn contains_config_file(dir: &Path) -> bool {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .any(|entry| entry.file_name() == CONFIG_FILE_NAME),
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "Skipping unreadable directory");
            false
        }
    }
}

/// Walk upward from `start` and return the first [`CONFIG_FILE_NAME`] found.
///
/// The search stops at the filesystem root and returns `Ok(None)` when no
/// directory on the way contains the file.
pub fn find_nearest_config_file(start: &Path) -> Result<Option<PathBuf>> {
    let mut dir = normalize_path(&std::path::absolute(start)?);

    loop {
        debug!(dir = %dir.display(), "Looking for {}", CONFIG_FILE_NAME);
        if contains_config_file(&dir) {
            return Ok(Some(dir.join(CONFIG_FILE_NAME)));
        }

        match dir.parent() {
            Some(parent) => dir = parent.to_path_buf(),
            None => return Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path(Path::new("/project/./icons")),
            PathBuf::from("/project/icons")
        );
        assert_eq!(
            normalize_path(Path::new("/project/sub/../icons")),
            PathBuf::from("/project/icons")
        );
        assert_eq!(normalize_path(Path::new("/../icons")), PathBuf::from("/icons"));
        assert_eq!(normalize_path(Path::new("../icons")), PathBuf::from("../icons"));
    }

    #[test]
    fn test_find_config_in_start_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();

        let found = find_nearest_config_file(dir.path()).unwrap();
        assert_eq!(found, Some(dir.path().join(CONFIG_FILE_NAME)));
    }

    #[test]
    fn test_find_config_in_ancestor() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("c");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("a").join(CONFIG_FILE_NAME), "").unwrap();

        let found = find_nearest_config_file(&nested).unwrap();
        assert_eq!(found, Some(dir.path().join("a").join(CONFIG_FILE_NAME)));
    }

    #[test]
    fn test_nearest_config_wins() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();
        std::fs::write(nested.join(CONFIG_FILE_NAME), "").unwrap();

        let found = find_nearest_config_file(&nested).unwrap();
        assert_eq!(found, Some(nested.join(CONFIG_FILE_NAME)));
    }

    #[test]
    fn test_search_stops_at_root() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("x").join("y");
        std::fs::create_dir_all(&nested).unwrap();

        // Assumes no stray config file in the temp dir's ancestors
        let found = find_nearest_config_file(&nested).unwrap();
        assert_eq!(found, None);
    }
}
