pub mod formatting;
pub mod search;

// Re-export key types for easier usage
pub use formatting::{
    Block, Escape, ListKind, RenderOptions, format_text, format_text_with, parse_blocks,
};
pub use search::*;
