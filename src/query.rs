//! Immutable query descriptions
//!
//! A [`Query`] captures one logical API call: the endpoint path plus the
//! serialized query pairs. Endpoint methods build a `Query` once; page
//! advancement derives a new one with the continuation parameter appended
//! rather than mutating the original.
//!
//! Serialization rules: `None`-valued parameters are omitted entirely, and
//! list-valued parameters serialize as repeated keys (`id=1&id=2`), not
//! comma-joined.

/// An immutable description of a single API request
#[derive(Debug, Clone)]
pub struct Query {
    path: String,
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Create a query against an endpoint path (relative to the client's base URL)
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            pairs: Vec::new(),
        }
    }

    /// Append a scalar parameter
    #[must_use]
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a scalar parameter, omitting it entirely when `None`
    #[must_use]
    pub fn opt_param<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Append a list parameter as repeated keys, omitting it when `None`
    #[must_use]
    pub fn list_param<S: AsRef<str>>(mut self, key: &str, values: Option<&[S]>) -> Self {
        if let Some(values) = values {
            for value in values {
                self.pairs.push((key.to_string(), value.as_ref().to_string()));
            }
        }
        self
    }

    /// The endpoint path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The serialized query pairs, in insertion order
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Derive a new query with one extra pair appended.
    ///
    /// The value is carried verbatim; continuation tokens in particular are
    /// never inspected or re-encoded here.
    pub(crate) fn with_pair(&self, key: &str, value: &str) -> Query {
        let mut derived = self.clone();
        derived.pairs.push((key.to_string(), value.to_string()));
        derived
    }
}
