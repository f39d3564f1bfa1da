use std::path::Path;

use log::{debug, info, warn};

use crate::assets::AssetRewriter;
use crate::builder::page::{parse_dir_name, parse_numbered, Category, OrderKey, PageMetadata, ParsedName};
use crate::config::SiteConfig;
use crate::layout::{LayoutRenderer, PageContext};
use crate::markdown::{Flavor, MarkdownRenderer};
use crate::utils::error::BoxResult;
use crate::utils::{fs, path};

/// Converts one page directory into its `index.html`
pub struct PageConverter<'a> {
    site_root: &'a Path,
    config: &'a SiteConfig,
    layouts: &'a LayoutRenderer,
    rewriter: AssetRewriter,
    renderer: MarkdownRenderer,
}

impl<'a> PageConverter<'a> {
    pub fn new(site_root: &'a Path, config: &'a SiteConfig, layouts: &'a LayoutRenderer) -> Self {
        let flavor = if config.highlight {
            Flavor::CodeHilite
        } else {
            Flavor::FencedCode
        };

        PageConverter {
            site_root,
            config,
            layouts,
            rewriter: AssetRewriter::for_site(site_root),
            renderer: MarkdownRenderer::new(flavor),
        }
    }

    /// Convert the page in `page_dir`.
    ///
    /// Returns `Ok(None)` when the directory has no Markdown source.
    pub fn convert(&self, page_dir: &Path, category: Category) -> BoxResult<Option<PageMetadata>> {
        let source_path = page_dir.join(&self.config.source_file);
        if !source_path.is_file() {
            warn!("{} not found.", source_path.display());
            return Ok(None);
        }

        let markdown = fs::read_file(&source_path)?;
        let markdown = self.rewriter.rewrite(&markdown, page_dir);
        let body = self.renderer.render(&markdown);

        let name = self.page_name(page_dir, category);

        let html = self.layouts.render_page(&PageContext {
            title: &name.title,
            site_title: &self.config.title,
            root: path::root_prefix(page_dir, self.site_root),
            stylesheets: &self.config.stylesheets,
            body: &body,
        })?;

        let output_path = page_dir.join(&self.config.output_file);
        fs::write_file(&output_path, &html)?;

        let link = path::site_link(&output_path, self.site_root);
        info!("Converted {} {}", category.label(), link);

        let thumbnail = match category {
            Category::Program => Some(path::site_link(
                page_dir.join(&self.config.thumbnail),
                self.site_root,
            )),
            _ => None,
        };

        Ok(Some(PageMetadata {
            category,
            key: name.key,
            title: name.title,
            link,
            date_label: name.date_label,
            thumbnail,
        }))
    }

    fn page_name(&self, page_dir: &Path, category: Category) -> ParsedName {
        let dir_name = page_dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let name = match category {
            Category::Article => parse_dir_name(&dir_name, self.config.article_naming),
            Category::Program => parse_numbered(&dir_name),
            Category::About => ParsedName {
                key: OrderKey::unnumbered(),
                title: self.config.about_title.clone(),
                date_label: None,
            },
        };

        debug!("{} -> {:?}", dir_name, name);
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArticleNaming;
    use std::fs as stdfs;
    use tempfile::TempDir;

    fn page_dir(root: &Path, category: &str, name: &str, markdown: &str) -> std::path::PathBuf {
        let dir = root.join(category).join(name);
        stdfs::create_dir_all(&dir).unwrap();
        stdfs::write(dir.join("index.md"), markdown).unwrap();
        dir
    }

    #[test]
    fn test_convert_article() {
        let td = TempDir::new().unwrap();
        let config = SiteConfig::default();
        let layouts = LayoutRenderer::new().unwrap();
        let converter = PageConverter::new(td.path(), &config, &layouts);

        let dir = page_dir(td.path(), "Articles", "3 - Hello World", "# Hi\n\nText.\n");
        let meta = converter.convert(&dir, Category::Article).unwrap().unwrap();

        assert_eq!(meta.key, OrderKey::Number(3));
        assert_eq!(meta.title, "Hello World");
        assert_eq!(meta.link, "Articles/3 - Hello World/index.html");
        assert_eq!(meta.thumbnail, None);

        let html = stdfs::read_to_string(dir.join("index.html")).unwrap();
        assert!(html.contains("<title>Hello World</title>"));
        assert!(html.contains("href=\"../../style.css\""));
        assert!(html.contains("href=\"../../pygments.css\""));
        assert!(html.contains("<a href=\"../../index.html\""));
        assert!(html.contains("<h1>Hi</h1>"));
    }

    #[test]
    fn test_convert_fixes_asset_case() {
        let td = TempDir::new().unwrap();
        stdfs::create_dir(td.path().join("img")).unwrap();
        stdfs::write(td.path().join("img").join("a.png"), b"").unwrap();

        let config = SiteConfig::default();
        let layouts = LayoutRenderer::new().unwrap();
        let converter = PageConverter::new(td.path(), &config, &layouts);

        let dir = page_dir(td.path(), "Articles", "1 - Pics", "![a](/img/A.PNG)\n");
        stdfs::write(dir.join("Shot.JPG"), b"").unwrap();
        stdfs::write(dir.join("index.md"), "![a](/img/A.PNG)\n\n<img src=\"shot.jpg\">\n").unwrap();

        converter.convert(&dir, Category::Article).unwrap().unwrap();
        let html = stdfs::read_to_string(dir.join("index.html")).unwrap();

        assert!(html.contains("src=\"/img/a.png\""));
        assert!(html.contains("<img src=\"Shot.JPG\">"));
    }

    #[test]
    fn test_convert_program_has_thumbnail() {
        let td = TempDir::new().unwrap();
        let config = SiteConfig::default();
        let layouts = LayoutRenderer::new().unwrap();
        let converter = PageConverter::new(td.path(), &config, &layouts);

        let dir = page_dir(td.path(), "Programs", "2 - Game", "A game.\n");
        let meta = converter.convert(&dir, Category::Program).unwrap().unwrap();

        assert_eq!(meta.key, OrderKey::Number(2));
        assert_eq!(meta.thumbnail.as_deref(), Some("Programs/2 - Game/screenshot.jpg"));
    }

    #[test]
    fn test_convert_dated_article() {
        let td = TempDir::new().unwrap();
        let config = SiteConfig {
            article_naming: ArticleNaming::Dated,
            ..SiteConfig::default()
        };
        let layouts = LayoutRenderer::new().unwrap();
        let converter = PageConverter::new(td.path(), &config, &layouts);

        let dir = page_dir(td.path(), "Articles", "25 03 9 - Launch", "Go.\n");
        let meta = converter.convert(&dir, Category::Article).unwrap().unwrap();

        assert_eq!(meta.key, OrderKey::Date("2025-03-09".to_string()));
        assert_eq!(meta.title, "Launch");
        assert_eq!(meta.date_label.as_deref(), Some("March 9, 2025"));
    }

    #[test]
    fn test_convert_about_is_one_level_deep() {
        let td = TempDir::new().unwrap();
        let config = SiteConfig::default();
        let layouts = LayoutRenderer::new().unwrap();
        let converter = PageConverter::new(td.path(), &config, &layouts);

        let dir = td.path().join("About");
        stdfs::create_dir(&dir).unwrap();
        stdfs::write(dir.join("index.md"), "Me.\n").unwrap();

        let meta = converter.convert(&dir, Category::About).unwrap().unwrap();
        assert_eq!(meta.title, "About");
        assert_eq!(meta.link, "About/index.html");

        let html = stdfs::read_to_string(dir.join("index.html")).unwrap();
        assert!(html.contains("href=\"../style.css\""));
        assert!(html.contains("<a href=\"../index.html\""));
    }

    #[test]
    fn test_missing_source_is_skipped() {
        let td = TempDir::new().unwrap();
        let config = SiteConfig::default();
        let layouts = LayoutRenderer::new().unwrap();
        let converter = PageConverter::new(td.path(), &config, &layouts);

        let dir = td.path().join("Articles").join("1 - Empty");
        stdfs::create_dir_all(&dir).unwrap();

        assert_eq!(converter.convert(&dir, Category::Article).unwrap(), None);
        assert!(!dir.join("index.html").exists());
    }
}
