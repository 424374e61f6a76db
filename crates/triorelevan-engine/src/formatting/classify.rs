use std::sync::LazyLock;

use regex::Regex;

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.\s+(.+)").expect("numbered item pattern is valid"));

static BULLET_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[•\-\*]\s+(.+)").expect("bullet item pattern is valid"));

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of formatting: each line is classified independently
/// without reference to surrounding lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// `N. text`. The number is dropped; lists are numbered by position.
    NumberedItem(String),
    /// `- text`, `* text` or `• text`.
    BulletItem(String),
    /// Empty or whitespace-only.
    Blank,
    /// Anything else, trimmed.
    PlainText(String),
}

/// Classifies individual lines for the block building phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a raw line (trailing `\r` and surrounding whitespace are trimmed first).
    ///
    /// Precedence: numbered item, bullet item, blank, plain text.
    pub fn classify(&self, line: &str) -> LineClass {
        let trimmed = line.trim();

        if let Some(caps) = NUMBERED_ITEM.captures(trimmed) {
            return LineClass::NumberedItem(caps[2].to_string());
        }
        if let Some(caps) = BULLET_ITEM.captures(trimmed) {
            return LineClass::BulletItem(caps[1].to_string());
        }
        if trimmed.is_empty() {
            return LineClass::Blank;
        }
        LineClass::PlainText(trimmed.to_string())
    }
}
