//! # TrioRelevan Server
//!
//! HTTP front-end for the search product.
//!
//! - **`api`**: axum router, `/api/search` pass-through route, `/` page, `/health`
//! - **`backend`**: retrieval backend client and the mock variant
//! - **`page`**: server-rendered search page
//! - **`error`**: API error to HTTP status mapping

pub mod api;
pub mod backend;
pub mod error;
pub mod page;

pub use api::{AppState, router};
pub use backend::{BackendError, RemoteBackend, SearchBackend};
pub use error::ApiError;
