use lazy_static::lazy_static;
use regex::Regex;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::utils::error::BoxResult;

lazy_static! {
    static ref CODE_BLOCK_REGEX: Regex =
        Regex::new(r#"<pre><code(?: class="language-([^"]+)")?>([^<]*)</code></pre>"#).unwrap();
}

/// Highlights fenced code blocks with class-based markup.
///
/// Colors come from the site's `pygments.css`, so no theme is embedded.
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
}

impl SyntaxHighlighter {
    /// Create a new syntax highlighter with the default syntaxes
    pub fn new() -> Self {
        SyntaxHighlighter {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Process HTML content to add syntax highlighting to code blocks
    pub fn highlight_html(&self, html: &str) -> BoxResult<String> {
        let mut failure = None;

        let highlighted = CODE_BLOCK_REGEX.replace_all(html, |caps: &regex::Captures| {
            let lang = caps.get(1).map(|m| m.as_str()).unwrap_or("text");
            let code = html_escape::decode_html_entities(&caps[2]);

            match self.highlight_code(&code, lang) {
                Ok(block) => block,
                Err(e) => {
                    failure = Some(e);
                    caps[0].to_string()
                }
            }
        });

        match failure {
            Some(e) => Err(e),
            None => Ok(highlighted.into_owned()),
        }
    }

    /// Highlight a specific code block with specified language
    pub fn highlight_code(&self, code: &str, lang: &str) -> BoxResult<String> {
        let syntax = self.syntax_set.find_syntax_by_token(lang)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut html_generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::Spaced,
        );

        for line in LinesWithEndings::from(code) {
            html_generator.parse_html_for_line_which_includes_newline(line)?;
        }

        Ok(format!(
            "<div class=\"codehilite\"><pre class=\"language-{}\"><code>{}</code></pre></div>",
            lang,
            html_generator.finalize()
        ))
    }
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
