//! Canned search results for running the front-end without a backend.

use super::{
    request::SearchRequest,
    types::{Document, Highlights, QueryInfo, RagAnswer, SearchResponse, SearchResults},
};

const EXPANDED_TERMS: [&str; 3] = ["symptoms", "treatment", "diagnosis"];

const ANSWER: &str = "Based on the retrieved documents, the main points are:\n\
1. Early diagnosis relies on a combination of clinical history and laboratory tests.\n\
2. First-line treatment is usually lifestyle change, followed by medication if needed.\n\
3. Regular follow-up reduces the risk of complications.\n\
\n\
Common warning signs include:\n\
- Persistent fatigue\n\
- Unexplained weight change\n\
- Shortness of breath\n\
\n\
Consult a healthcare professional before acting on this summary.";

struct CannedDocument {
    id: &'static str,
    score: f64,
    title: &'static str,
    url: &'static str,
    snippet: &'static str,
    timestamp: Option<&'static str>,
}

const DOCUMENTS: [CannedDocument; 5] = [
    CannedDocument {
        id: "doc-001",
        score: 12.8431,
        title: "Clinical Guidelines for Early Diagnosis",
        url: "https://example.org/guidelines/early-diagnosis",
        snippet: "Early diagnosis combines patient history with targeted tests.\n\
- Blood panel\n\
- Imaging when indicated",
        timestamp: Some("2024-03-18"),
    },
    CannedDocument {
        id: "doc-002",
        score: 11.2057,
        title: "Lifestyle Interventions as First-Line Treatment",
        url: "https://example.org/research/lifestyle-interventions",
        snippet: "Diet and exercise programmes showed measurable benefit within twelve weeks.",
        timestamp: Some("2023-11-02"),
    },
    CannedDocument {
        id: "doc-003",
        score: 9.7712,
        title: "Medication Options and Side Effects",
        url: "https://example.org/reference/medication-options",
        snippet: "Treatment options ranked by evidence:\n\
1. First-line agents\n\
2. Combination therapy\n\
3. Specialist referral",
        timestamp: None,
    },
    CannedDocument {
        id: "doc-004",
        score: 8.0349,
        title: "Follow-up Schedules in Chronic Care",
        url: "https://example.org/care/follow-up",
        snippet: "Regular follow-up visits lowered complication rates across all cohorts.",
        timestamp: Some("2022-06-27"),
    },
    CannedDocument {
        id: "doc-005",
        score: 6.5120,
        title: "Recognising Warning Signs",
        url: "https://example.org/patients/warning-signs",
        snippet: "Patients should report persistent fatigue or sudden weight change.",
        timestamp: None,
    },
];

/// Builds the canned response for `request`, truncated to `request.k` documents.
pub fn mock_response(request: &SearchRequest) -> SearchResponse {
    let documents: Vec<Document> = DOCUMENTS
        .iter()
        .take(request.k as usize)
        .enumerate()
        .map(|(i, d)| Document {
            rank: i as u32 + 1,
            id: d.id.to_string(),
            score: d.score,
            title: d.title.to_string(),
            url: d.url.to_string(),
            snippet: d.snippet.to_string(),
            timestamp: d.timestamp.map(String::from),
            highlights: highlight(d),
        })
        .collect();

    let expanded_terms: Vec<String> = EXPANDED_TERMS.iter().map(|t| t.to_string()).collect();
    let final_search_query = std::iter::once(request.query.trim())
        .chain(EXPANDED_TERMS)
        .collect::<Vec<_>>()
        .join(" ");

    SearchResponse {
        query: QueryInfo {
            original: request.query.clone(),
            expanded_terms,
            final_search_query,
        },
        search_results: SearchResults {
            total_found: DOCUMENTS.len() as u64,
            returned_count: documents.len() as u64,
            k_requested: request.k,
            documents,
        },
        rag_answer: RagAnswer {
            answer: ANSWER.to_string(),
            confidence: "medium".to_string(),
        },
    }
}

fn highlight(d: &CannedDocument) -> Highlights {
    Highlights {
        main_text: mark_first_term(d.snippet),
        title: String::new(),
    }
}

/// Wraps the first expanded term found in `snippet` with `<mark>`, or returns
/// an empty string when none occurs.
fn mark_first_term(snippet: &str) -> String {
    // ASCII folding keeps byte offsets aligned with `snippet`.
    let folded = snippet.to_ascii_lowercase();
    EXPANDED_TERMS
        .iter()
        .find_map(|term| {
            folded.find(term).map(|at| {
                let end = at + term.len();
                format!(
                    "{}<mark>{}</mark>{}",
                    &snippet[..at],
                    &snippet[at..end],
                    &snippet[end..]
                )
            })
        })
        .unwrap_or_default()
}
