use std::path::Path;

use log::warn;

use crate::config::types::SiteConfig;
use crate::utils::error::{BoxResult, SiteError};
use crate::utils::fs;

/// Validate the configuration against the site root
pub fn validate_config(config: &SiteConfig, site_root: &Path) -> BoxResult<()> {
    validate_site_root(site_root)?;
    validate_names(config)?;

    if config.debounce_ms == 0 {
        return Err(SiteError::Config("debounce_ms must be greater than zero".to_string()).into());
    }

    Ok(())
}

fn validate_site_root(site_root: &Path) -> BoxResult<()> {
    if !fs::is_directory(site_root) {
        return Err(SiteError::Config(format!(
            "Site root is not a directory: {}", site_root.display()
        )).into());
    }
    Ok(())
}

fn validate_names(config: &SiteConfig) -> BoxResult<()> {
    let names = [
        ("title", &config.title),
        ("source_file", &config.source_file),
        ("output_file", &config.output_file),
        ("thumbnail", &config.thumbnail),
    ];

    for (key, value) in names {
        if value.trim().is_empty() {
            return Err(SiteError::Config(format!("{} must not be empty", key)).into());
        }
    }

    Ok(())
}

/// Warn about stylesheets missing from the site root.
///
/// Stylesheets are referenced, never generated. Returns the missing names.
pub fn check_stylesheets(config: &SiteConfig, site_root: &Path) -> Vec<String> {
    let missing: Vec<String> = config
        .stylesheets
        .iter()
        .filter(|sheet| !site_root.join(sheet).is_file())
        .cloned()
        .collect();

    for sheet in &missing {
        warn!("Stylesheet {} not found in {}", sheet, site_root.display());
    }

    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_zero_debounce_rejected() {
        let td = TempDir::new().unwrap();
        let config = SiteConfig { debounce_ms: 0, ..SiteConfig::default() };
        assert!(validate_config(&config, td.path()).is_err());
    }

    #[test]
    fn test_empty_source_file_rejected() {
        let td = TempDir::new().unwrap();
        let config = SiteConfig { source_file: " ".to_string(), ..SiteConfig::default() };
        assert!(validate_config(&config, td.path()).is_err());
    }

    #[test]
    fn test_missing_site_root_rejected() {
        let td = TempDir::new().unwrap();
        let config = SiteConfig::default();
        assert!(validate_config(&config, &td.path().join("missing")).is_err());
    }

    #[test]
    fn test_config_validation_ignores_stylesheets() {
        let td = TempDir::new().unwrap();
        assert!(validate_config(&SiteConfig::default(), td.path()).is_ok());
    }

    #[test]
    fn test_check_stylesheets_reports_missing() {
        let td = TempDir::new().unwrap();
        std::fs::write(td.path().join("style.css"), "body {}").unwrap();

        let missing = check_stylesheets(&SiteConfig::default(), td.path());
        assert_eq!(missing, vec!["pygments.css".to_string()]);
    }
}
