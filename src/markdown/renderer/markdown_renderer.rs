use crate::markdown::engine::{create_comrak_options, render_markdown, Flavor};
use crate::markdown::renderer::syntax::SyntaxHighlighter;

/// Markdown renderer for one flavor
pub struct MarkdownRenderer {
    flavor: Flavor,
    syntax_highlighter: Option<SyntaxHighlighter>,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer.
    ///
    /// Syntax sets are only loaded for the highlighting flavor.
    pub fn new(flavor: Flavor) -> Self {
        let syntax_highlighter = match flavor {
            Flavor::CodeHilite => Some(SyntaxHighlighter::new()),
            Flavor::FencedCode => None,
        };

        MarkdownRenderer {
            flavor,
            syntax_highlighter,
        }
    }

    /// Render Markdown content to an HTML fragment
    pub fn render(&self, content: &str) -> String {
        let options = create_comrak_options(self.flavor);
        let html = render_markdown(content, &options);

        let Some(highlighter) = &self.syntax_highlighter else {
            return html;
        };

        match highlighter.highlight_html(&html) {
            Ok(highlighted) => highlighted,
            Err(e) => {
                // If highlighting fails, just return the original HTML
                log::warn!("Syntax highlighting failed: {}", e);
                html
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_rendering() {
        let renderer = MarkdownRenderer::new(Flavor::FencedCode);

        let markdown = "# Hello, World!\n\nThis is a **bold** statement.";
        let html = renderer.render(markdown);

        assert!(html.contains("<h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_fenced_flavor_leaves_code_plain() {
        let renderer = MarkdownRenderer::new(Flavor::FencedCode);
        let html = renderer.render("```rust\nfn main() {}\n```");

        assert!(html.contains("<pre><code class=\"language-rust\">"));
        assert!(!html.contains("codehilite"));
    }

    #[test]
    fn test_syntax_highlighting() {
        let renderer = MarkdownRenderer::new(Flavor::CodeHilite);

        let markdown = "```rust\nfn main() {\n    println!(\"Hello, World!\");\n}\n```";
        let html = renderer.render(markdown);

        assert!(html.contains("<div class=\"codehilite\">"));
        assert!(html.contains("<pre class=\"language-rust\">"));
    }
}
