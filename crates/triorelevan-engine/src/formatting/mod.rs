//! # Answer Formatting
//!
//! Turns free text (AI answers, document snippets) into paragraphs and
//! ordered/unordered lists.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each trimmed line becomes a
//!    `LineClass` (numbered item, bullet item, blank, plain text)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` state machine
//!    emits `Block`s as paragraphs and lists open and close
//!
//! 3. **Rendering** (`render`): blocks become HTML or terminal lines
//!
//! ## Key Invariants
//!
//! - Blocks come out in input order
//! - Consecutive items of one list kind share one list; a kind change,
//!   blank line or plain line closes it
//! - Consecutive plain lines share one paragraph, joined by single spaces
//! - Every input is accepted; nothing here fails or panics
//!
//! Captured text is not escaped unless `Escape::Html` is requested.

pub mod builder;
pub mod classify;
pub mod render;
pub mod types;

#[cfg(test)]
mod tests;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier};
pub use render::{Escape, RenderOptions, render_html, render_lines};
pub use types::{Block, ListKind};

pub fn parse_blocks(raw: &str) -> Vec<Block> {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    for line in raw.split('\n') {
        builder.push(classifier.classify(line));
    }

    builder.finish()
}

/// Formats free text as HTML, inserting captured text verbatim.
pub fn format_text(raw: &str) -> String {
    format_text_with(raw, &RenderOptions::default())
}

pub fn format_text_with(raw: &str, options: &RenderOptions) -> String {
    render_html(&parse_blocks(raw), options)
}
