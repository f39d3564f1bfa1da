use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

/// Source of directory listings for case resolution
pub trait DirectoryLister {
    /// Entry names of `dir`, in listing order
    fn list(&self, dir: &Path) -> io::Result<Vec<String>>;
}

/// Lists directories on the real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            // Non UTF-8 names can never match a segment taken from text
            if let Ok(name) = entry?.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names)
    }
}

/// Corrects the casing of relative paths against what is on disk.
///
/// When several entries match a segment case-insensitively, the first one
/// in listing order wins. Listing order is whatever the lister reports, so
/// with [`FsLister`] the choice between `Img` and `IMG` is not stable.
#[derive(Debug, Clone, Default)]
pub struct CaseResolver<L = FsLister> {
    lister: L,
}

impl<L: DirectoryLister> CaseResolver<L> {
    pub fn new(lister: L) -> Self {
        CaseResolver { lister }
    }

    /// Resolve `rel_path` segment by segment starting at `base_dir`.
    ///
    /// Returns `None` as soon as a directory along the way cannot be
    /// listed. Segments without a match are kept as written.
    pub fn resolve(&self, rel_path: &str, base_dir: &Path) -> Option<String> {
        let mut current_dir = PathBuf::from(base_dir);
        let mut corrected = Vec::new();

        for part in rel_path.split('/').filter(|p| !p.is_empty()) {
            let entries = match self.lister.list(&current_dir) {
                Ok(entries) => entries,
                Err(e) => {
                    debug!("Cannot list {}: {}", current_dir.display(), e);
                    return None;
                }
            };

            let wanted = part.to_lowercase();
            let found = entries
                .into_iter()
                .find(|entry| entry.to_lowercase() == wanted)
                .unwrap_or_else(|| part.to_string());

            current_dir.push(&found);
            corrected.push(found);
        }

        Some(corrected.join("/"))
    }
}
