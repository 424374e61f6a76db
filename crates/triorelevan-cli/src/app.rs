use std::sync::LazyLock;

use crossterm::event::KeyCode;
use ratatui::widgets::ListState;
use regex::Regex;
use triorelevan_engine::formatting::{parse_blocks, render_lines};
use triorelevan_engine::search::{
    Document, SearchResponse,
    present::{confidence_label, expanded_terms_label, format_score, results_summary},
};

use crate::client::ClientError;

/// Number of results requested per search.
pub const RESULTS_PER_SEARCH: u32 = 10;

/// What the event loop should do after a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    None,
    Search(String),
    Quit,
}

pub struct App {
    pub query: String,
    pub results: Option<SearchResponse>,
    pub list_state: ListState,
    pub has_searched: bool,
    pub status: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            results: None,
            list_state: ListState::default(),
            has_searched: false,
            status: None,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Enter => {
                if self.query.trim().is_empty() {
                    Action::None
                } else {
                    self.has_searched = true;
                    self.status = Some("Searching...".to_string());
                    Action::Search(self.query.clone())
                }
            }
            KeyCode::Backspace => {
                self.query.pop();
                Action::None
            }
            KeyCode::Down => {
                self.next_result();
                Action::None
            }
            KeyCode::Up => {
                self.previous_result();
                Action::None
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    pub fn apply_result(&mut self, result: Result<SearchResponse, ClientError>) {
        match result {
            Ok(response) => {
                let selected = (!response.search_results.documents.is_empty()).then_some(0);
                self.list_state.select(selected);
                self.status = Some(results_summary(response.search_results.total_found));
                self.results = Some(response);
            }
            Err(e) => {
                self.results = None;
                self.list_state.select(None);
                self.status = Some(format!("Search failed: {e}"));
            }
        }
    }

    fn documents(&self) -> &[Document] {
        self.results
            .as_ref()
            .map(|r| r.search_results.documents.as_slice())
            .unwrap_or_default()
    }

    fn next_result(&mut self) {
        let len = self.documents().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous_result(&mut self) {
        let len = self.documents().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn selected_document(&self) -> Option<&Document> {
        self.list_state
            .selected()
            .and_then(|i| self.documents().get(i))
    }

    pub fn result_items(&self) -> Vec<String> {
        self.documents()
            .iter()
            .map(|d| {
                format!(
                    "#{} {} ({})",
                    d.rank,
                    strip_tags(&d.title),
                    format_score(d.score)
                )
            })
            .collect()
    }

    pub fn query_lines(&self) -> Vec<String> {
        match &self.results {
            Some(r) => vec![
                format!("Original: {}", r.query.original),
                format!(
                    "Expanded terms: {}",
                    expanded_terms_label(&r.query.expanded_terms)
                ),
                format!("Final query: {}", r.query.final_search_query),
            ],
            None => vec![],
        }
    }

    pub fn answer_lines(&self) -> Vec<String> {
        match &self.results {
            Some(r) => {
                let mut lines = vec![confidence_label(&r.rag_answer.confidence), String::new()];
                lines.extend(render_lines(&parse_blocks(&r.rag_answer.answer)));
                lines
            }
            None if self.has_searched => {
                vec!["No results found. Try a different search query.".to_string()]
            }
            None => vec![
                "Start Your Search".to_string(),
                "Enter keywords to find relevant documents from our collection".to_string(),
            ],
        }
    }

    pub fn detail_lines(&self) -> Vec<String> {
        let Some(doc) = self.selected_document() else {
            return vec![];
        };

        let mut lines = vec![
            doc.url.clone(),
            format!("{} Score | Rank #{}", format_score(doc.score), doc.rank),
            String::new(),
        ];
        lines.extend(render_lines(&parse_blocks(&strip_tags(&doc.snippet))));
        if let Some(timestamp) = &doc.timestamp {
            lines.push(String::new());
            lines.push(timestamp.clone());
        }
        lines
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z][^<>]*>").expect("tag pattern is valid"));

/// Drops highlight markup such as `<em>` and decodes entities for terminal
/// display. A `<` that does not open a tag is kept.
fn strip_tags(s: &str) -> String {
    html_escape::decode_html_entities(&TAG.replace_all(s, "")).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use triorelevan_engine::search::{SearchRequest, mock_response};

    fn app_with_results(k: u32) -> App {
        let mut app = App::new();
        app.apply_result(Ok(mock_response(&SearchRequest::new("fatigue", k))));
        app
    }

    #[test]
    fn typing_builds_query() {
        let mut app = App::new();
        for c in "flux".chars() {
            assert_eq!(app.handle_key(KeyCode::Char(c)), Action::None);
        }
        app.handle_key(KeyCode::Backspace);
        assert_eq!(app.query, "flu");
    }

    #[test]
    fn enter_with_blank_query_does_nothing() {
        let mut app = App::new();
        app.query = "   ".to_string();
        assert_eq!(app.handle_key(KeyCode::Enter), Action::None);
        assert!(!app.has_searched);
    }

    #[test]
    fn enter_requests_search() {
        let mut app = App::new();
        app.query = "flu".to_string();
        assert_eq!(app.handle_key(KeyCode::Enter), Action::Search("flu".into()));
        assert!(app.has_searched);
    }

    #[test]
    fn escape_quits() {
        assert_eq!(App::new().handle_key(KeyCode::Esc), Action::Quit);
    }

    #[test]
    fn results_select_first_and_wrap() {
        let mut app = app_with_results(3);
        assert_eq!(app.list_state.selected(), Some(0));

        app.handle_key(KeyCode::Up);
        assert_eq!(app.list_state.selected(), Some(2));
        app.handle_key(KeyCode::Down);
        assert_eq!(app.list_state.selected(), Some(0));
        app.handle_key(KeyCode::Down);
        assert_eq!(app.selected_document().map(|d| d.rank), Some(2));
    }

    #[test]
    fn answer_is_formatted_into_lines() {
        let app = app_with_results(1);
        let lines = app.answer_lines();

        assert_eq!(lines[0], "medium confidence");
        assert!(lines.contains(&"1. Early diagnosis relies on a combination of clinical history and laboratory tests.".to_string()));
        assert!(lines.contains(&"• Persistent fatigue".to_string()));
    }

    #[test]
    fn detail_shows_selected_document() {
        let app = app_with_results(1);
        assert_eq!(
            app.detail_lines(),
            vec![
                "https://example.org/guidelines/early-diagnosis",
                "12.84 Score | Rank #1",
                "",
                "Early diagnosis combines patient history with targeted tests.",
                "",
                "• Blood panel",
                "• Imaging when indicated",
                "",
                "2024-03-18",
            ]
        );
    }

    #[test]
    fn failed_search_shows_status_and_no_results() {
        let mut app = App::new();
        app.query = "flu".into();
        app.handle_key(KeyCode::Enter);
        app.apply_result(Err(ClientError::Api {
            status: 500,
            message: "Internal server error".into(),
        }));

        assert_eq!(
            app.status.as_deref(),
            Some("Search failed: Internal server error (500)")
        );
        assert_eq!(
            app.answer_lines(),
            vec!["No results found. Try a different search query."]
        );
        assert!(app.result_items().is_empty());
    }

    #[test]
    fn initial_state_prompts_for_search() {
        assert_eq!(App::new().answer_lines()[0], "Start Your Search");
    }

    #[test]
    fn strip_tags_removes_markup() {
        assert_eq!(strip_tags("<em>Heart</em> failure"), "Heart failure");
        assert_eq!(strip_tags("a > b"), "a > b");
        assert_eq!(
            strip_tags("Keep dose < 5 mg daily and recheck"),
            "Keep dose < 5 mg daily and recheck"
        );
        assert_eq!(strip_tags("x<y and <mark>z</mark>"), "x<y and z");
        assert_eq!(strip_tags("<b>Heart</b> &amp; lung"), "Heart & lung");
    }
}
