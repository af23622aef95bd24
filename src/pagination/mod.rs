//! Pagination
//!
//! Unifies the two response shapes the API returns: flat lists fetched in a
//! single round trip, and cursor-paginated collections walked page by page
//! via an opaque continuation token.
//!
//! # Overview
//!
//! [`Cursor`] is the stateful half: `Fresh` until the first fetch, then
//! `Advancing` while the API keeps returning a token, then `Exhausted`.
//! Endpoints that never paginate go through the single-page fetcher instead.

mod cursor;
mod fetcher;
mod types;

pub use cursor::Cursor;
pub use types::CursorState;

pub(crate) use fetcher::fetch_page;
