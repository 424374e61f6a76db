use serde::Serialize;

/// Which kind of list a run of item lines belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListKind {
    /// Numbered source lines (`1. text`).
    Ordered,
    /// Bulleted source lines (`- text`, `* text`, `• text`).
    Unordered,
}

/// One rendered unit of output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content")]
pub enum Block {
    /// Consecutive plain-text lines joined by single spaces.
    Paragraph(String),
    /// Item texts of consecutive numbered lines.
    OrderedList(Vec<String>),
    /// Item texts of consecutive bullet lines.
    UnorderedList(Vec<String>),
}

impl Block {
    pub fn list(kind: ListKind, items: Vec<String>) -> Self {
        match kind {
            ListKind::Ordered => Block::OrderedList(items),
            ListKind::Unordered => Block::UnorderedList(items),
        }
    }

    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            Block::Paragraph(_) => None,
            Block::OrderedList(_) => Some(ListKind::Ordered),
            Block::UnorderedList(_) => Some(ListKind::Unordered),
        }
    }
}
