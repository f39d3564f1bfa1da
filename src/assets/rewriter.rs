use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::assets::resolver::{CaseResolver, DirectoryLister, FsLister};

lazy_static! {
    // [label](path) and ![label](path)
    static ref MARKDOWN_LINK_REGEX: Regex =
        Regex::new(r"(?P<prefix>!?\[[^\]]*\]\()(?P<path>[^)]+)(?P<suffix>\))").unwrap();

    // src="path", href='path'
    static ref HTML_ATTR_REGEX: Regex =
        Regex::new(r#"(?P<prefix>(?:src|href)=["'])(?P<path>[^"']+)(?P<suffix>["'])"#).unwrap();
}

/// Prefixes of references that never point into the site tree
const EXTERNAL_PREFIXES: [&str; 4] = ["http://", "https://", "mailto:", "data:"];

/// Rewrites asset references so their casing matches the files on disk
pub struct AssetRewriter<L = FsLister> {
    resolver: CaseResolver<L>,
    site_root: PathBuf,
}

impl AssetRewriter<FsLister> {
    pub fn for_site<P: AsRef<Path>>(site_root: P) -> Self {
        AssetRewriter::new(CaseResolver::new(FsLister), site_root)
    }
}

impl<L: DirectoryLister> AssetRewriter<L> {
    pub fn new<P: AsRef<Path>>(resolver: CaseResolver<L>, site_root: P) -> Self {
        AssetRewriter {
            resolver,
            site_root: site_root.as_ref().to_path_buf(),
        }
    }

    /// Rewrite every local reference in `text`.
    ///
    /// Root-absolute paths resolve against the site root, anything else
    /// against `base_dir`.
    pub fn rewrite(&self, text: &str, base_dir: &Path) -> String {
        let text = MARKDOWN_LINK_REGEX.replace_all(text, |caps: &Captures| {
            self.correct_reference(caps, base_dir)
        });

        let text = HTML_ATTR_REGEX.replace_all(&text, |caps: &Captures| {
            self.correct_reference(caps, base_dir)
        });

        text.into_owned()
    }

    fn correct_reference(&self, caps: &Captures, base_dir: &Path) -> String {
        let path = &caps["path"];

        if EXTERNAL_PREFIXES.iter().any(|p| path.starts_with(p)) {
            return caps[0].to_string();
        }

        let corrected = self.correct_path(path, base_dir);
        format!("{}{}{}", &caps["prefix"], corrected, &caps["suffix"])
    }

    fn correct_path(&self, path: &str, base_dir: &Path) -> String {
        match path.strip_prefix('/') {
            Some(rel_path) => {
                let corrected = self
                    .resolver
                    .resolve(rel_path, &self.site_root)
                    .unwrap_or_else(|| rel_path.to_string());
                format!("/{}", corrected)
            }
            None => self
                .resolver
                .resolve(path, base_dir)
                .unwrap_or_else(|| path.to_string()),
        }
    }
}
