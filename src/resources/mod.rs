//! Typed resource records
//!
//! Each record is populated from a raw JSON object. Decoding is tolerant:
//! missing fields default to absent/empty and unknown fields are ignored.

mod helix;
mod v5;

pub use helix::{Clip, Follow, Game, Stream, StreamMetadata, Tag, User, Video};
pub use v5::{Channel, Community, Team};

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode one raw JSON object into a typed record
pub(crate) fn decode_record<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| Error::decode(e.to_string()))
}

/// Decode a list of raw JSON objects, preserving order
pub(crate) fn decode_records<T: DeserializeOwned>(values: Vec<Value>) -> Result<Vec<T>> {
    values.into_iter().map(decode_record).collect()
}

/// Decode the list held under `key` in a v5 response body.
///
/// A missing or null entry decodes as an empty list; the v5 search endpoints
/// return `null` instead of `[]` when nothing matches.
pub(crate) fn decode_keyed_list<T: DeserializeOwned>(body: &Value, key: &str) -> Result<Vec<T>> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(values)) => decode_records(values.clone()),
        Some(other) => Err(Error::decode(format!(
            "expected an array under '{key}', got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests;
