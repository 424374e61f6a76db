//! # Search Wire Model
//!
//! Types exchanged with the retrieval backend and the helpers the API route
//! and user interfaces need around them.
//!
//! - **`types`**: backend response DTOs (`SearchResponse` and friends)
//! - **`request`**: query-string validation into a `SearchRequest`
//! - **`mock`**: canned responses for running without a backend
//! - **`present`**: display labels shared by the page and terminal UI

pub mod mock;
pub mod present;
pub mod request;
pub mod types;


pub use mock::mock_response;
pub use request::{SearchLimits, SearchParams, SearchRequest, SearchRequestError};
pub use types::{Document, ErrorBody, Highlights, QueryInfo, RagAnswer, SearchResponse, SearchResults};
