use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Which directory-name grammar orders the article listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleNaming {
    /// `"<number> - <title>"`
    Numbered,
    /// `"<yy> <month> <day> - <title>"`
    Dated,
}

/// Site configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title, shown in every page header
    #[serde(default = "defaults::default_site_title")]
    pub title: String,

    /// Articles source directory, relative to the site root
    #[serde(default = "defaults::default_articles_dir")]
    pub articles_dir: String,

    /// Programs source directory, relative to the site root
    #[serde(default = "defaults::default_programs_dir")]
    pub programs_dir: String,

    /// About page directory, relative to the site root
    #[serde(default = "defaults::default_about_dir")]
    pub about_dir: String,

    #[serde(default = "defaults::default_about_title")]
    pub about_title: String,

    /// Markdown file name inside each page directory
    #[serde(default = "defaults::default_source_file")]
    pub source_file: String,

    /// HTML file name written beside each source
    #[serde(default = "defaults::default_output_file")]
    pub output_file: String,

    /// Program thumbnail file name
    #[serde(default = "defaults::default_thumbnail")]
    pub thumbnail: String,

    /// Stylesheets linked from every page, relative to the site root
    #[serde(default = "defaults::default_stylesheets")]
    pub stylesheets: Vec<String>,

    #[serde(default = "defaults::default_article_naming")]
    pub article_naming: ArticleNaming,

    /// Syntax-highlight fenced code on site pages
    #[serde(default = "defaults::default_highlight")]
    pub highlight: bool,

    /// Watch debounce interval in milliseconds
    #[serde(default = "defaults::default_debounce_ms")]
    pub debounce_ms: u64,

    /// Stylesheet linked from standalone watch output
    #[serde(default = "defaults::default_watch_stylesheet")]
    pub watch_stylesheet: String,

    #[serde(default = "defaults::default_watch_title")]
    pub watch_title: String,
}

impl SiteConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            title: defaults::default_site_title(),
            articles_dir: defaults::default_articles_dir(),
            programs_dir: defaults::default_programs_dir(),
            about_dir: defaults::default_about_dir(),
            about_title: defaults::default_about_title(),
            source_file: defaults::default_source_file(),
            output_file: defaults::default_output_file(),
            thumbnail: defaults::default_thumbnail(),
            stylesheets: defaults::default_stylesheets(),
            article_naming: defaults::default_article_naming(),
            highlight: defaults::default_highlight(),
            debounce_ms: defaults::default_debounce_ms(),
            watch_stylesheet: defaults::default_watch_stylesheet(),
            watch_title: defaults::default_watch_title(),
        }
    }
}
