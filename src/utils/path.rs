use std::path::{Component, Path, PathBuf};

/// Normalize a path, resolving ".." and "." components
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                // Go up one level unless we're at the root
                if !result.as_os_str().is_empty() {
                    result.pop();
                }
            }
            Component::CurDir => {}
            _ => result.push(component),
        }
    }

    result
}

/// Absolute, normalized form of `path`, anchored at the working directory
/// when relative.
pub fn absolutize<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    normalize_path(absolute)
}

/// Compare two paths the way a case-insensitive filesystem would
pub fn same_file_path<P: AsRef<Path>, Q: AsRef<Path>>(a: P, b: Q) -> bool {
    let a = absolutize(a);
    let b = absolutize(b);
    a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
}

/// Slash-separated link for `path` relative to `root`.
///
/// Falls back to the path itself when it does not live under `root`.
pub fn site_link<P: AsRef<Path>, R: AsRef<Path>>(path: P, root: R) -> String {
    let path = path.as_ref();
    let relative = path.strip_prefix(root.as_ref()).unwrap_or(path);

    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// The `../` prefix leading from `dir` back up to `root`
pub fn root_prefix<P: AsRef<Path>, R: AsRef<Path>>(dir: P, root: R) -> String {
    let dir = dir.as_ref();
    let relative = dir.strip_prefix(root.as_ref()).unwrap_or(dir);
    let depth = relative
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count();

    "../".repeat(depth)
}
