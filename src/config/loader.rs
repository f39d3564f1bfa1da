use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::types::SiteConfig;
use crate::config::validation;
use crate::utils::error::{BoxResult, SiteError};

/// Configuration file names to look for, in order
const CONFIG_FILES: [&str; 3] = ["_config.toml", "_config.yml", "_config.yaml"];

/// Load site configuration.
///
/// An explicit file must exist. Without one, the first default file found
/// in `site_root` is used, and defaults apply when there is none.
pub fn load_config<P: AsRef<Path>>(
    site_root: P,
    config_file: Option<PathBuf>,
) -> BoxResult<SiteConfig> {
    let site_root = site_root.as_ref();

    let config_path = match config_file {
        Some(path) => Some(path),
        None => find_default_config_file(site_root),
    };

    let config = match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            parse_config_file(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            SiteConfig::default()
        }
    };

    validation::validate_config(&config, site_root)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

fn find_default_config_file(site_root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| site_root.join(name))
        .find(|path| path.is_file())
}

/// Parse a configuration file based on its extension
fn parse_config_file(config_path: &Path) -> BoxResult<SiteConfig> {
    if !config_path.exists() {
        return Err(SiteError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )).into());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| SiteError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    let ext = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());

    match ext.as_deref() {
        Some("toml") => parse_toml_config(&content, config_path),
        Some("json") => parse_json_config(&content, config_path),
        // Assume YAML if no extension
        Some("yml") | Some("yaml") | None => parse_yaml_config(&content, config_path),
        Some(other) => Err(SiteError::Config(format!(
            "Unsupported configuration file format: {}", other
        )).into()),
    }
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> BoxResult<SiteConfig> {
    // An empty YAML document deserializes to unit, not a map
    if content.trim().is_empty() {
        return Ok(SiteConfig::default());
    }

    serde_yaml::from_str(content)
        .map_err(|e| SiteError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )).into())
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> BoxResult<SiteConfig> {
    toml::from_str(content)
        .map_err(|e| SiteError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        )).into())
}

/// Parse a JSON configuration file
fn parse_json_config(content: &str, path: &Path) -> BoxResult<SiteConfig> {
    serde_json::from_str(content)
        .map_err(|e| SiteError::Config(format!(
            "Failed to parse JSON configuration ({}): {}", path.display(), e
        )).into())
}
