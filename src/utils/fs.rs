use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use walkdir::WalkDir;

use crate::utils::error::BoxResult;

/// Check if a path exists and is a directory
pub fn is_directory<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_dir()
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    Ok(fs::read_to_string(path.as_ref())?)
}

/// Write a string to a file, replacing whatever was there
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    fs::write(path.as_ref(), contents)?;
    Ok(())
}

/// List the immediate subdirectories of `dir`, sorted by name.
///
/// A missing `dir` yields an empty list; callers check for it beforehand
/// when they need to report the absence. Entries that cannot be read, such
/// as dangling symlinks, are logged and skipped.
pub fn list_subdirectories<P: AsRef<Path>>(dir: P) -> BoxResult<Vec<PathBuf>> {
    let mut dirs = Vec::new();

    if !dir.as_ref().is_dir() {
        return Ok(dirs);
    }

    let walker = WalkDir::new(dir.as_ref())
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.as_ref().display(), e);
                continue;
            }
        };
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        }
    }

    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_subdirectories_skips_files() {
        let td = TempDir::new().unwrap();
        fs::create_dir(td.path().join("2 - B")).unwrap();
        fs::create_dir(td.path().join("1 - A")).unwrap();
        fs::write(td.path().join("notes.txt"), "x").unwrap();

        let dirs = list_subdirectories(td.path()).unwrap();
        let names: Vec<_> = dirs
            .iter()
            .map(|d| d.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["1 - A", "2 - B"]);
    }

    #[test]
    fn test_list_subdirectories_missing_dir() {
        let td = TempDir::new().unwrap();
        let dirs = list_subdirectories(td.path().join("nope")).unwrap();
        assert!(dirs.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_list_subdirectories_skips_dangling_symlink() {
        let td = TempDir::new().unwrap();
        fs::create_dir(td.path().join("1 - A")).unwrap();
        std::os::unix::fs::symlink(td.path().join("nowhere"), td.path().join("dangling")).unwrap();

        let dirs = list_subdirectories(td.path()).unwrap();
        assert_eq!(dirs, vec![td.path().join("1 - A")]);
    }
}
