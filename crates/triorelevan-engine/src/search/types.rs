use serde::{Deserialize, Serialize};

/// Typed view of the retrieval backend response, read by the search page and
/// terminal UI. The API route relays the backend body as raw JSON instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: QueryInfo,
    pub search_results: SearchResults,
    pub rag_answer: RagAnswer,
}

/// How the backend expanded the user's query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryInfo {
    pub original: String,
    pub expanded_terms: Vec<String>,
    pub final_search_query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub total_found: u64,
    pub returned_count: u64,
    pub k_requested: u32,
    pub documents: Vec<Document>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub rank: u32,
    pub id: String,
    pub score: f64,
    /// May contain highlight markup from the backend.
    pub title: String,
    pub url: String,
    pub snippet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub highlights: Highlights,
}

/// Highlighted fragments, as HTML, for a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlights {
    pub main_text: String,
    pub title: String,
}

/// Generated answer over the retrieved documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RagAnswer {
    pub answer: String,
    pub confidence: String,
}

/// Body returned by the API route on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
