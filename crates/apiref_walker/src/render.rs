//! Documentation markup rendering.
//!
//! The walker hands every documentation section to a [`MarkupRenderer`].
//! Producing HTML is left to callers; [`PlainTextRenderer`] flattens
//! sections to text.

use apiref_model::{DocNode, DocSection};

/// Turns a documentation section into markup.
pub trait MarkupRenderer {
    /// Renders `section`. An empty string means the section has no content.
    fn render(&self, section: &DocSection) -> String;

    /// Renders `section`, mapping empty output to `None`.
    fn render_optional(&self, section: &DocSection) -> Option<String> {
        let markup = self.render(section);
        if markup.trim().is_empty() {
            None
        } else {
            Some(markup)
        }
    }
}

/// Renders sections as plain text.
///
/// Code spans are wrapped in backticks, links render as their text (or
/// their target when they have none), and paragraph breaks become blank
/// lines.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainTextRenderer;

impl MarkupRenderer for PlainTextRenderer {
    fn render(&self, section: &DocSection) -> String {
        let mut out = String::new();
        for node in &section.nodes {
            match node {
                DocNode::Text { text } => out.push_str(text),
                DocNode::Code { code } => {
                    out.push('`');
                    out.push_str(code);
                    out.push('`');
                }
                DocNode::Link { target, text } => {
                    out.push_str(text.as_deref().unwrap_or(target));
                }
                DocNode::Paragraph => {
                    let trimmed = out.trim_end().len();
                    out.truncate(trimmed);
                    out.push_str("\n\n");
                }
            }
        }
        out.trim().to_string()
    }
}
