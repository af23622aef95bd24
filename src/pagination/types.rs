//! Pagination types
//!
//! The wire envelope for paginated responses and the cursor lifecycle state.

use serde::Deserialize;
use serde_json::Value;

/// Wire envelope returned by every Helix collection endpoint.
///
/// `data` is the ordered resource list; `pagination.cursor` is the opaque
/// continuation token; `total` is a count hint only some endpoints report.
/// Every field tolerates absence.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageEnvelope {
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Pagination {
    #[serde(default)]
    pub cursor: Option<String>,
}

/// Lifecycle state of a [`Cursor`](super::Cursor)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CursorState {
    /// No request issued yet; no continuation token held
    #[default]
    Fresh,
    /// At least one page fetched and more pages are believed to exist
    Advancing {
        /// The opaque continuation token from the last response
        token: String,
    },
    /// The last response carried no continuation token; terminal
    Exhausted,
}

impl CursorState {
    /// Derive the state following a response carrying `token`.
    ///
    /// An empty token and an absent one mean the same thing: exhausted.
    pub(crate) fn from_token(token: Option<String>) -> Self {
        match token.filter(|t| !t.is_empty()) {
            Some(token) => Self::Advancing { token },
            None => Self::Exhausted,
        }
    }

    /// Check whether the cursor is exhausted
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}
