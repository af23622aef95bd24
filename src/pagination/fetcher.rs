//! Single-page fetching for endpoints that never paginate
//!
//! Some endpoints return their entire result set in one response with no
//! continuation token. This issues exactly one request and decodes the
//! resource list; transport failures propagate unchanged.

use super::types::PageEnvelope;
use crate::error::Result;
use crate::http::HttpClient;
use crate::query::Query;
use crate::resources::decode_records;
use serde::de::DeserializeOwned;

/// Issue one GET for `query` and decode the response's resource list.
pub(crate) async fn fetch_page<T: DeserializeOwned>(
    http: &HttpClient,
    query: &Query,
) -> Result<Vec<T>> {
    let envelope: PageEnvelope = http.get_json(query.path(), query.pairs()).await?;
    decode_records(envelope.data)
}
