use crate::config::types::ArticleNaming;

/// Default site title
pub fn default_site_title() -> String {
    "pod bay doors".to_string()
}

/// Default articles directory
pub fn default_articles_dir() -> String {
    "Articles".to_string()
}

/// Default programs directory
pub fn default_programs_dir() -> String {
    "Programs".to_string()
}

/// Default about directory
pub fn default_about_dir() -> String {
    "About".to_string()
}

pub fn default_about_title() -> String {
    "About".to_string()
}

/// Markdown source expected inside every page directory
pub fn default_source_file() -> String {
    "index.md".to_string()
}

pub fn default_output_file() -> String {
    "index.html".to_string()
}

/// Program thumbnail file name
pub fn default_thumbnail() -> String {
    "screenshot.jpg".to_string()
}

/// Stylesheets expected at the site root
pub fn default_stylesheets() -> Vec<String> {
    vec!["style.css".to_string(), "pygments.css".to_string()]
}

pub fn default_article_naming() -> ArticleNaming {
    ArticleNaming::Numbered
}

pub fn default_highlight() -> bool {
    true
}

/// Minimum delay between two watch conversions, in milliseconds
pub fn default_debounce_ms() -> u64 {
    1000
}

pub fn default_watch_stylesheet() -> String {
    "sakura.css".to_string()
}

pub fn default_watch_title() -> String {
    "Converted Markdown".to_string()
}
