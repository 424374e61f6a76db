use std::borrow::Cow;

use super::types::Block;

const PARAGRAPH_OPEN: &str = r#"<p class="mb-4">"#;
const ORDERED_OPEN: &str = r#"<ol class="list-decimal list-inside space-y-3 my-4 pl-4">"#;
const UNORDERED_OPEN: &str = r#"<ul class="list-disc list-inside space-y-3 my-4 pl-4">"#;
const ITEM_OPEN: &str = r#"<li class="text-sm leading-relaxed">"#;

/// How captured text is written into markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Escape {
    /// Text is inserted as-is. The rendering surface owns sanitization.
    #[default]
    Verbatim,
    /// Text is HTML-escaped before insertion.
    Html,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub escape: Escape,
}

impl RenderOptions {
    pub fn escaped() -> Self {
        Self {
            escape: Escape::Html,
        }
    }

    fn text<'a>(&self, s: &'a str) -> Cow<'a, str> {
        match self.escape {
            Escape::Verbatim => Cow::Borrowed(s),
            Escape::Html => html_escape::encode_text(s),
        }
    }
}

/// Renders blocks as concatenated HTML with no separators between blocks.
pub fn render_html(blocks: &[Block], options: &RenderOptions) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Paragraph(text) => {
                out.push_str(PARAGRAPH_OPEN);
                out.push_str(&options.text(text));
                out.push_str("</p>");
            }
            Block::OrderedList(items) => {
                out.push_str(ORDERED_OPEN);
                push_items(&mut out, items, options);
                out.push_str("</ol>");
            }
            Block::UnorderedList(items) => {
                out.push_str(UNORDERED_OPEN);
                push_items(&mut out, items, options);
                out.push_str("</ul>");
            }
        }
    }
    out
}

fn push_items(out: &mut String, items: &[String], options: &RenderOptions) {
    for item in items {
        out.push_str(ITEM_OPEN);
        out.push_str(&options.text(item));
        out.push_str("</li>");
    }
}

/// Renders blocks as plain text lines for terminal display.
///
/// Ordered items are numbered from 1 by position, unordered items get a `•`
/// marker, and consecutive blocks are separated by one empty line.
pub fn render_lines(blocks: &[Block]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        match block {
            Block::Paragraph(text) => lines.push(text.clone()),
            Block::OrderedList(items) => lines.extend(
                items
                    .iter()
                    .enumerate()
                    .map(|(n, item)| format!("{}. {}", n + 1, item)),
            ),
            Block::UnorderedList(items) => {
                lines.extend(items.iter().map(|item| format!("• {item}")))
            }
        }
    }
    lines
}
