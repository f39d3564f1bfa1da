use std::path::{Path, PathBuf};

use log::info;

use crate::builder::page::PageMetadata;
use crate::config::SiteConfig;
use crate::layout::{AboutLink, ArticleEntry, IndexContext, LayoutRenderer, ProgramEntry};
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Render the root index listing programs, then articles.
///
/// Both listings are sorted in place. Returns the written path.
pub fn write_index(
    site_root: &Path,
    config: &SiteConfig,
    layouts: &LayoutRenderer,
    programs: &mut [PageMetadata],
    articles: &mut [PageMetadata],
    about: Option<&PageMetadata>,
) -> BoxResult<PathBuf> {
    programs.sort_by(PageMetadata::listing_order);
    articles.sort_by(PageMetadata::listing_order);

    let context = IndexContext {
        site_title: &config.title,
        stylesheets: &config.stylesheets,
        programs: programs
            .iter()
            .map(|p| ProgramEntry {
                title: &p.title,
                link: &p.link,
                thumbnail: p.thumbnail.as_deref().unwrap_or_default(),
            })
            .collect(),
        articles: articles
            .iter()
            .map(|a| ArticleEntry {
                title: &a.title,
                link: &a.link,
                date: a.date_label.as_deref(),
            })
            .collect(),
        about: about.map(|a| AboutLink {
            title: &a.title,
            link: &a.link,
        }),
    };

    let html = layouts.render_index(&context)?;
    let index_path = site_root.join(&config.output_file);
    fs::write_file(&index_path, &html)?;

    info!("Generated root {}", config.output_file);
    Ok(index_path)
}
