use log::info;
use std::path::Path;

use crate::builder;
use crate::config::{check_stylesheets, SiteConfig};
use crate::utils::error::BoxResult;

/// Handle the build command
pub fn handle_build_command(site_root: &Path, config: &SiteConfig) -> BoxResult<()> {
    info!("Building site...");
    check_stylesheets(config, site_root);
    let report = builder::build_site(site_root, config)?;

    info!(
        "Built {} articles and {} programs in {:.2?}",
        report.articles_count, report.programs_count, report.duration
    );
    if report.about {
        info!("About page converted");
    }
    if report.skipped_count > 0 || report.errors_count > 0 {
        info!(
            "{} page directories skipped, {} failed",
            report.skipped_count, report.errors_count
        );
    }

    Ok(())
}
