use liquid::{Parser, Template};
use serde::Serialize;

use crate::layout::templates::{INDEX_TEMPLATE, PAGE_TEMPLATE, STANDALONE_TEMPLATE};
use crate::utils::error::{BoxResult, SiteError};

/// Variables for a converted page
#[derive(Debug, Serialize)]
pub struct PageContext<'a> {
    pub title: &'a str,
    pub site_title: &'a str,
    /// Relative path from the page back to the site root, e.g. `../../`
    pub root: String,
    pub stylesheets: &'a [String],
    pub body: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ProgramEntry<'a> {
    pub title: &'a str,
    pub link: &'a str,
    pub thumbnail: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ArticleEntry<'a> {
    pub title: &'a str,
    pub link: &'a str,
    pub date: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct AboutLink<'a> {
    pub title: &'a str,
    pub link: &'a str,
}

/// Variables for the root index
#[derive(Debug, Serialize)]
pub struct IndexContext<'a> {
    pub site_title: &'a str,
    pub stylesheets: &'a [String],
    pub programs: Vec<ProgramEntry<'a>>,
    pub articles: Vec<ArticleEntry<'a>>,
    pub about: Option<AboutLink<'a>>,
}

/// Variables for standalone watch output
#[derive(Debug, Serialize)]
pub struct StandaloneContext<'a> {
    pub title: &'a str,
    pub stylesheet: &'a str,
    pub body: &'a str,
}

/// Renders the built-in layouts
pub struct LayoutRenderer {
    page: Template,
    index: Template,
    standalone: Template,
}

impl LayoutRenderer {
    /// Parse the built-in templates
    pub fn new() -> BoxResult<Self> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| SiteError::Template(format!("Failed to create Liquid parser: {}", e)))?;

        Ok(LayoutRenderer {
            page: parse(&parser, "page", PAGE_TEMPLATE)?,
            index: parse(&parser, "index", INDEX_TEMPLATE)?,
            standalone: parse(&parser, "standalone", STANDALONE_TEMPLATE)?,
        })
    }

    pub fn render_page(&self, context: &PageContext) -> BoxResult<String> {
        render(&self.page, "page", context)
    }

    pub fn render_index(&self, context: &IndexContext) -> BoxResult<String> {
        render(&self.index, "index", context)
    }

    pub fn render_standalone(&self, context: &StandaloneContext) -> BoxResult<String> {
        render(&self.standalone, "standalone", context)
    }
}

fn parse(parser: &Parser, name: &str, source: &str) -> BoxResult<Template> {
    parser.parse(source).map_err(|e| {
        SiteError::Template(format!("Failed to parse layout {}: {}", name, e)).into()
    })
}

fn render<T: Serialize>(template: &Template, name: &str, context: &T) -> BoxResult<String> {
    let globals = liquid::to_object(context)
        .map_err(|e| SiteError::Template(format!("Invalid variables for layout {}: {}", name, e)))?;

    template.render(&globals).map_err(|e| {
        SiteError::Template(format!("Failed to render layout {}: {}", name, e)).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stylesheets() -> Vec<String> {
        vec!["style.css".to_string(), "pygments.css".to_string()]
    }

    #[test]
    fn test_page_layout() {
        let renderer = LayoutRenderer::new().unwrap();
        let sheets = stylesheets();
        let html = renderer.render_page(&PageContext {
            title: "Hello World",
            site_title: "pod bay doors",
            root: "../../".to_string(),
            stylesheets: &sheets,
            body: "<p>hi</p>",
        }).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Hello World</title>"));
        assert!(html.contains("  <title>Hello World</title>\n  <link rel=\"stylesheet\" href=\"../../style.css\">\n  <link rel=\"stylesheet\" href=\"../../pygments.css\">\n</head>"));
        assert!(html.contains("<a href=\"../../index.html\""));
        assert!(html.contains(">pod bay doors</a></h1>"));
        assert!(html.contains("\n<p>hi</p>\n"));
    }

    #[test]
    fn test_index_layout_lists() {
        let renderer = LayoutRenderer::new().unwrap();
        let sheets = stylesheets();
        let html = renderer.render_index(&IndexContext {
            site_title: "pod bay doors",
            stylesheets: &sheets,
            programs: vec![ProgramEntry {
                title: "Game",
                link: "Programs/1 - Game/index.html",
                thumbnail: "Programs/1 - Game/screenshot.jpg",
            }],
            articles: vec![
                ArticleEntry { title: "A", link: "Articles/1 - A/index.html", date: None },
                ArticleEntry { title: "B", link: "Articles/2 - B/index.html", date: Some("March 9, 2025") },
            ],
            about: None,
        }).unwrap();

        assert!(html.contains("<link rel=\"stylesheet\" href=\"style.css\">"));
        assert!(html.contains("<li class=\"post\"><a href=\"Programs/1 - Game/index.html\" class=\"program-thumb\"><img src=\"Programs/1 - Game/screenshot.jpg\" alt=\"Game\"></a></li>"));
        assert!(html.contains("<li class=\"post\"><a href=\"Articles/1 - A/index.html\">A</a></li>"));
        assert!(html.contains("<span class=\"post-date\">March 9, 2025</span> <a href=\"Articles/2 - B/index.html\">B</a>"));
        assert!(!html.contains("site-nav"));
    }

    #[test]
    fn test_index_about_link() {
        let renderer = LayoutRenderer::new().unwrap();
        let sheets = stylesheets();
        let html = renderer.render_index(&IndexContext {
            site_title: "pod bay doors",
            stylesheets: &sheets,
            programs: Vec::new(),
            articles: Vec::new(),
            about: Some(AboutLink { title: "About", link: "About/index.html" }),
        }).unwrap();

        assert!(html.contains("<nav class=\"site-nav\"><a href=\"About/index.html\">About</a></nav>"));
    }

    #[test]
    fn test_standalone_layout() {
        let renderer = LayoutRenderer::new().unwrap();
        let html = renderer.render_standalone(&StandaloneContext {
            title: "Converted Markdown",
            stylesheet: "sakura.css",
            body: "<h1>x</h1>",
        }).unwrap();

        assert!(html.contains("<title>Converted Markdown</title>"));
        assert!(html.contains("href=\"sakura.css\""));
        assert!(html.contains("<h1>x</h1>"));
    }
}
