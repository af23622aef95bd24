//! Cursor-based page walking
//!
//! A [`Cursor`] wraps one query against a paginated endpoint and walks the
//! collection page by page via the opaque continuation token the API returns.

use super::types::{CursorState, PageEnvelope};
use crate::error::Result;
use crate::http::HttpClient;
use crate::query::Query;
use crate::resources::decode_records;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tracing::debug;

/// Query parameter carrying the continuation token
const CURSOR_PARAM: &str = "after";

/// A stateful walk over one paginated collection.
///
/// Created per logical API call, in the `Fresh` state, without touching the
/// network; each [`next_page`](Cursor::next_page) call issues exactly one
/// request. A `Cursor` is advanced sequentially by one caller at a time;
/// independent cursors share no mutable state.
#[derive(Debug)]
pub struct Cursor<T> {
    http: HttpClient,
    query: Query,
    state: CursorState,
    total: Option<u64>,
    resource: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> Cursor<T> {
    pub(crate) fn new(http: HttpClient, query: Query) -> Self {
        Self {
            http,
            query,
            state: CursorState::Fresh,
            total: None,
            resource: PhantomData,
        }
    }

    /// The current lifecycle state
    pub fn state(&self) -> &CursorState {
        &self.state
    }

    /// Check whether all pages have been consumed
    pub fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }

    /// Total-count hint reported by the endpoint, once a page carried one
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// Fetch the next page and return its resources, in response order.
    ///
    /// On an exhausted cursor this returns an empty list without issuing a
    /// request. The held token is only replaced after the response decodes
    /// successfully, so a failed or abandoned call leaves the cursor in its
    /// prior state and the same page may be requested again.
    pub async fn next_page(&mut self) -> Result<Vec<T>> {
        let query = match &self.state {
            CursorState::Exhausted => {
                debug!("cursor for {} is exhausted, skipping request", self.query.path());
                return Ok(Vec::new());
            }
            CursorState::Fresh => self.query.clone(),
            CursorState::Advancing { token } => self.query.with_pair(CURSOR_PARAM, token),
        };

        let envelope: PageEnvelope = self.http.get_json(query.path(), query.pairs()).await?;

        // Decode everything before committing any state.
        let items = decode_records(envelope.data)?;

        if envelope.total.is_some() {
            self.total = envelope.total;
        }
        self.state = CursorState::from_token(envelope.pagination.and_then(|p| p.cursor));

        debug!(
            "fetched {} resources from {} (exhausted: {})",
            items.len(),
            self.query.path(),
            self.state.is_exhausted()
        );
        Ok(items)
    }

    /// Fetch every remaining page and concatenate the resources in page order.
    pub async fn fetch_all(mut self) -> Result<Vec<T>> {
        let mut all = Vec::new();
        while !self.is_exhausted() {
            let page = self.next_page().await?;
            all.extend(page);
        }
        Ok(all)
    }
}
