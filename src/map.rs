//! Ordered field map for one sink.
//!
//! [`SinkRecord`] wraps an [`IndexMap`] so fields keep the order in which the
//! report listed them. A later duplicate key replaces the earlier value but
//! keeps its position.
//!
//! ## Examples
//!
//! ```rust
//! use pactl_sinks::{SinkRecord, Value};
//!
//! let mut record = SinkRecord::new();
//! record.insert("state".to_string(), Value::from("RUNNING"));
//! record.insert("name".to_string(), Value::from("alsa_output.pci"));
//!
//! let keys: Vec<_> = record.keys().cloned().collect();
//! assert_eq!(keys, vec!["state", "name"]);
//! ```

use crate::Value;
use indexmap::IndexMap;
use serde::Serialize;

/// The typed fields of one sink, in document order.
///
/// Serializes as a plain map of its fields; the sink id is not serialized.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct SinkRecord {
    #[serde(skip)]
    id: Option<u32>,
    fields: IndexMap<String, Value>,
}

impl SinkRecord {
    /// Creates an empty record with no sink id.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty record for the sink numbered `id` in its `Sink #<id>` header.
    #[must_use]
    pub fn with_id(id: Option<u32>) -> Self {
        SinkRecord {
            id,
            fields: IndexMap::new(),
        }
    }

    /// The number from the `Sink #<id>` header, if the header carried one.
    #[must_use]
    pub fn id(&self) -> Option<u32> {
        self.id
    }

    /// Inserts a field. If the key was present, the old value is returned.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.fields.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over the field names, in document order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.fields.keys()
    }

    /// Returns an iterator over the fields, in document order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.fields.iter()
    }
}

impl IntoIterator for SinkRecord {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl FromIterator<(String, Value)> for SinkRecord {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        SinkRecord {
            id: None,
            fields: IndexMap::from_iter(iter),
        }
    }
}
