use super::{
    classify::LineClass,
    types::{Block, ListKind},
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Idle,
    InParagraph { text: String },
    InList { kind: ListKind, items: Vec<String> },
}

/// State machine turning classified lines into [`Block`]s.
///
/// Every transition emits at most one completed block. Paragraph and list
/// accumulation are mutually exclusive, so a single state covers both.
pub struct BlockBuilder {
    state: State,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            state: State::Idle,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: LineClass) {
        let prev = std::mem::replace(&mut self.state, State::Idle);

        let (next, done) = match (prev, line) {
            (State::Idle, LineClass::Blank) => (State::Idle, None),
            (State::Idle, LineClass::PlainText(text)) => (State::InParagraph { text }, None),
            (State::Idle, LineClass::NumberedItem(item)) => {
                (open_list(ListKind::Ordered, item), None)
            }
            (State::Idle, LineClass::BulletItem(item)) => {
                (open_list(ListKind::Unordered, item), None)
            }

            (State::InParagraph { mut text }, LineClass::PlainText(more)) => {
                text.push(' ');
                text.push_str(&more);
                (State::InParagraph { text }, None)
            }
            (State::InParagraph { text }, LineClass::Blank) => {
                (State::Idle, Some(Block::Paragraph(text)))
            }
            (State::InParagraph { text }, LineClass::NumberedItem(item)) => (
                open_list(ListKind::Ordered, item),
                Some(Block::Paragraph(text)),
            ),
            (State::InParagraph { text }, LineClass::BulletItem(item)) => (
                open_list(ListKind::Unordered, item),
                Some(Block::Paragraph(text)),
            ),

            (State::InList { kind, mut items }, LineClass::NumberedItem(item))
                if kind == ListKind::Ordered =>
            {
                items.push(item);
                (State::InList { kind, items }, None)
            }
            (State::InList { kind, mut items }, LineClass::BulletItem(item))
                if kind == ListKind::Unordered =>
            {
                items.push(item);
                (State::InList { kind, items }, None)
            }
            // Kind change: close the open list, start the other kind.
            (State::InList { kind, items }, LineClass::NumberedItem(item)) => (
                open_list(ListKind::Ordered, item),
                Some(Block::list(kind, items)),
            ),
            (State::InList { kind, items }, LineClass::BulletItem(item)) => (
                open_list(ListKind::Unordered, item),
                Some(Block::list(kind, items)),
            ),
            (State::InList { kind, items }, LineClass::Blank) => {
                (State::Idle, Some(Block::list(kind, items)))
            }
            (State::InList { kind, items }, LineClass::PlainText(text)) => (
                State::InParagraph { text },
                Some(Block::list(kind, items)),
            ),
        };

        self.out.extend(done);
        self.state = next;
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Idle => {}
            State::InParagraph { text } => self.out.push(Block::Paragraph(text)),
            State::InList { kind, items } => self.out.push(Block::list(kind, items)),
        }
        self.out
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn open_list(kind: ListKind, first: String) -> State {
    State::InList {
        kind,
        items: vec![first],
    }
}
