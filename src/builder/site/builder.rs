use std::path::Path;
use std::time::{Duration, Instant};

use log::{debug, error, info, warn};

use crate::builder::page::{Category, PageMetadata};
use crate::builder::site::converter::PageConverter;
use crate::builder::site::index::write_index;
use crate::config::SiteConfig;
use crate::layout::LayoutRenderer;
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Build statistics
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Number of articles converted
    pub articles_count: usize,
    /// Number of programs converted
    pub programs_count: usize,
    /// Whether the about page was converted
    pub about: bool,
    /// Page directories without a Markdown source
    pub skipped_count: usize,
    /// Pages that failed to convert
    pub errors_count: usize,
    /// Build duration
    pub duration: Duration,
}

/// Pages collected for one listing
#[derive(Default)]
struct Listing {
    pages: Vec<PageMetadata>,
    skipped: usize,
    errors: usize,
}

/// Build the whole site under `site_root`.
///
/// Pages are converted one at a time; a page that fails is logged and left
/// out of the index. The root index is written once, after all pages.
pub fn build_site(site_root: &Path, config: &SiteConfig) -> BoxResult<BuildReport> {
    let start_time = Instant::now();
    info!("Using site root: {}", site_root.display());

    let layouts = LayoutRenderer::new()?;
    let converter = PageConverter::new(site_root, config, &layouts);

    let about = convert_about(site_root, config, &converter);

    let articles_dir = site_root.join(&config.articles_dir);
    let mut articles = if fs::is_directory(&articles_dir) {
        convert_listing(&articles_dir, Category::Article, &converter)?
    } else {
        warn!("The directory '{}' does not exist.", config.articles_dir);
        Listing::default()
    };

    let programs_dir = site_root.join(&config.programs_dir);
    let mut programs = if fs::is_directory(&programs_dir) {
        convert_listing(&programs_dir, Category::Program, &converter)?
    } else {
        info!("The directory '{}' does not exist. Skipping program pages.", config.programs_dir);
        Listing::default()
    };

    write_index(
        site_root,
        config,
        &layouts,
        &mut programs.pages,
        &mut articles.pages,
        about.as_ref(),
    )?;

    let report = BuildReport {
        articles_count: articles.pages.len(),
        programs_count: programs.pages.len(),
        about: about.is_some(),
        skipped_count: articles.skipped + programs.skipped,
        errors_count: articles.errors + programs.errors,
        duration: start_time.elapsed(),
    };

    info!("Website build complete.");
    debug!("Build report: {:?}", report);
    Ok(report)
}

fn convert_about(site_root: &Path, config: &SiteConfig, converter: &PageConverter) -> Option<PageMetadata> {
    let about_dir = site_root.join(&config.about_dir);
    if !fs::is_directory(&about_dir) {
        debug!("No {} directory, skipping about page", config.about_dir);
        return None;
    }

    match converter.convert(&about_dir, Category::About) {
        Ok(page) => page,
        Err(e) => {
            error!("Failed to convert {}: {}", about_dir.display(), e);
            None
        }
    }
}

fn convert_listing(dir: &Path, category: Category, converter: &PageConverter) -> BoxResult<Listing> {
    let mut listing = Listing::default();

    for page_dir in fs::list_subdirectories(dir)? {
        match converter.convert(&page_dir, category) {
            Ok(Some(page)) => listing.pages.push(page),
            Ok(None) => listing.skipped += 1,
            Err(e) => {
                error!("Failed to convert {}: {}", page_dir.display(), e);
                listing.errors += 1;
            }
        }
    }

    Ok(listing)
}
