use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_K: u32 = 5;
pub const MAX_K: u32 = 50;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchRequestError {
    #[error("Query parameter is required")]
    MissingQuery,

    #[error("Parameter k must be a positive integer, got {value:?}")]
    InvalidK { value: String },
}

/// Raw query-string parameters of a search request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub k: Option<String>,
}

/// Bounds applied when validating [`SearchParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub default_k: u32,
    pub max_k: u32,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            default_k: DEFAULT_K,
            max_k: MAX_K,
        }
    }
}

impl SearchLimits {
    /// Bounds `k` to `1..=max_k`, treating a zero `max_k` as one.
    pub fn clamp(&self, k: u32) -> u32 {
        k.clamp(1, self.max_k.max(1))
    }
}

/// A validated search: non-blank query and a result count in `1..=max_k`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub k: u32,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, k: u32) -> Self {
        Self {
            query: query.into(),
            k,
        }
    }

    pub fn from_params(
        params: &SearchParams,
        limits: SearchLimits,
    ) -> Result<Self, SearchRequestError> {
        let query = match params.q.as_deref() {
            Some(q) if !q.trim().is_empty() => q.to_string(),
            _ => return Err(SearchRequestError::MissingQuery),
        };

        let k = match params.k.as_deref().map(str::trim) {
            None | Some("") => limits.default_k,
            Some(raw) => match raw.parse::<u32>() {
                Ok(k) if k > 0 => k,
                _ => {
                    return Err(SearchRequestError::InvalidK {
                        value: raw.to_string(),
                    });
                }
            },
        };

        Ok(Self {
            query,
            k: limits.clamp(k),
        })
    }
}
