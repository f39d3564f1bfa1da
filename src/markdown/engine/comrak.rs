use comrak::Options;

/// Extension set a page is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Fenced code blocks only
    FencedCode,
    /// Fenced code blocks plus syntax-highlighted output
    CodeHilite,
}

/// Create comrak options for a flavor.
///
/// Both flavors keep inline HTML, since sources embed raw `<img>` and
/// `<a>` tags next to Markdown.
pub fn create_comrak_options<'a>(flavor: Flavor) -> Options<'a> {
    let mut options = Options::default();

    // Render options
    options.render.unsafe_ = true;
    options.render.hardbreaks = false;

    // Highlighting reads the language from the code element class
    options.render.github_pre_lang = false;

    if flavor == Flavor::CodeHilite {
        options.parse.default_info_string = Some("text".to_string());
    }

    options
}

/// Render markdown to HTML using Comrak
pub fn render_markdown<'a>(content: &str, options: &Options<'a>) -> String {
    comrak::markdown_to_html(content, options)
}
