//! Server-rendered search page.
//!
//! Plain text from the backend (URLs, query info, confidence, timestamps) is
//! escaped. Titles and highlights arrive as highlight markup and are inserted
//! as-is; answers and snippets go through the formatter.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use triorelevan_engine::formatting::{RenderOptions, format_text_with};
use triorelevan_engine::search::{
    Document, SearchResponse,
    present::{confidence_label, expanded_terms_label, format_score, results_summary},
};

const STYLE: &str = "body{font-family:'Plus Jakarta Sans',sans-serif;margin:0;color:#111}\
header,footer{border-bottom:1px solid #e5e7eb;padding:1rem}\
footer{border-top:1px solid #e5e7eb;text-align:center;color:#6b7280;font-size:.875rem}\
main{max-width:56rem;margin:0 auto;padding:2rem 1rem}\
.card{border:1px solid #e5e7eb;border-radius:.5rem;padding:1rem;margin-bottom:1rem}\
.badge{display:inline-block;border:1px solid #d1d5db;border-radius:9999px;padding:0 .5rem;font-size:.75rem}\
.muted{color:#6b7280}.url{color:#16a34a;font-size:.875rem}mark{background:#fef08a}";

/// What the page shows below the search form.
#[derive(Debug, Clone, Copy)]
pub enum PageView<'a> {
    /// Nothing searched yet.
    Initial,
    /// A search was attempted but produced no response.
    NoResults,
    Results(&'a SearchResponse),
}

pub fn render_page(query: &str, view: PageView<'_>, options: &RenderOptions) -> String {
    let mut out = String::with_capacity(8 * 1024);

    out.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    out.push_str("<title>TrioRelevan - Information Retrieval System</title>");
    out.push_str("<meta name=\"description\" content=\"Advanced search engine for finding relevant documents and information with AI-powered summaries\">");
    let _ = write!(out, "<style>{STYLE}</style></head><body>");

    out.push_str("<header><h1>TrioRelevan</h1><div class=\"muted\">Your Medical Research Assistant</div></header><main>");

    let _ = write!(
        out,
        "<form method=\"get\" action=\"/\"><input type=\"text\" name=\"q\" placeholder=\"Enter your search query...\" value=\"{}\"><button type=\"submit\">Search</button></form>",
        attr(query)
    );

    match view {
        PageView::Initial => out.push_str(
            "<section class=\"initial\"><h2>Start Your Search</h2><p class=\"muted\">Enter keywords to find relevant documents from our collection</p></section>",
        ),
        PageView::NoResults => out.push_str(
            "<section class=\"card no-results\"><p class=\"muted\">No results found. Try a different search query.</p></section>",
        ),
        PageView::Results(resp) => push_results(&mut out, resp, options),
    }

    out.push_str("</main><footer><p>TrioRelevan - Information Retrieval System</p></footer></body></html>");
    out
}

fn push_results(out: &mut String, resp: &SearchResponse, options: &RenderOptions) {
    let _ = write!(
        out,
        "<div class=\"muted summary\">{}</div>",
        results_summary(resp.search_results.total_found)
    );

    let _ = write!(
        out,
        "<section class=\"card query-info\"><h3>Query Processing</h3>\
<p><strong>Original:</strong> {}</p>\
<p><strong>Expanded terms:</strong> {}</p>\
<p><strong>Final query:</strong> {}</p></section>",
        text(&resp.query.original),
        text(&expanded_terms_label(&resp.query.expanded_terms)),
        text(&resp.query.final_search_query),
    );

    let _ = write!(
        out,
        "<section class=\"card rag-answer\"><h3>AI Answer</h3>\
<p class=\"muted\">AI-generated answer based on search results <span class=\"badge\">{}</span></p>\
<div class=\"formatted-text\">{}</div></section><hr>",
        text(&confidence_label(&resp.rag_answer.confidence)),
        format_text_with(&resp.rag_answer.answer, options),
    );

    out.push_str("<section class=\"documents\">");
    for doc in &resp.search_results.documents {
        push_document(out, doc, options);
    }
    out.push_str("</section>");
}

fn push_document(out: &mut String, doc: &Document, options: &RenderOptions) {
    let _ = write!(
        out,
        "<article class=\"card document\"><h3><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></h3>\
<div class=\"url\">{}</div>\
<span class=\"badge\">{} Score</span> <span class=\"badge\">Rank #{}</span>\
<div class=\"formatted-text snippet\">{}</div>",
        attr(&doc.url),
        doc.title,
        text(&doc.url),
        format_score(doc.score),
        doc.rank,
        format_text_with(&doc.snippet, options),
    );

    if !doc.highlights.title.is_empty() {
        let _ = write!(
            out,
            "<div class=\"muted highlights\"><strong>Title highlights: </strong>{}</div>",
            doc.highlights.title
        );
    }
    if !doc.highlights.main_text.is_empty() {
        let _ = write!(
            out,
            "<div class=\"muted highlights\"><strong>Text highlights: </strong>{}</div>",
            doc.highlights.main_text
        );
    }
    if let Some(timestamp) = &doc.timestamp {
        let _ = write!(out, "<div class=\"muted timestamp\">{}</div>", text(timestamp));
    }

    out.push_str("</article>");
}
