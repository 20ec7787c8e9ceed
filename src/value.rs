//! Typed field values of a sink record.
//!
//! [`Value`] is the normalized form of one field. Most variants carry a small
//! payload struct that mirrors what `pactl` prints:
//!
//! - [`Volume`]: one `raw / percent% / decibel dB` reading
//! - [`ChannelVolumes`]: per-channel volumes plus the optional balance
//! - [`SampleSpec`]: sample format, channel count, and rate
//! - [`Latency`]: current and configured latency in seconds
//! - [`PortInfo`]: one entry of the `Ports` section
//! - [`PropertyTree`]: the `Properties` section with dotted keys expanded
//!
//! ## Examples
//!
//! ```rust
//! use pactl_sinks::{parse, Value};
//!
//! let report = "Sink #0\n\tMute: no\n\tOwner Module: 7\n";
//! let sinks = parse(report).unwrap();
//!
//! assert_eq!(sinks[0].get("mute"), Some(&Value::Boolean(false)));
//! assert_eq!(sinks[0].get("ownerModule").and_then(Value::as_i64), Some(7));
//! ```
//!
//! All types serialize with serde as plain JSON-like data: values are
//! untagged, channel volumes flatten next to `balance`, and property trees
//! become nested objects.

use indexmap::IndexMap;
use serde::Serialize;

/// A normalized field value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Integer(i64),
    Boolean(bool),
    Volume(Volume),
    ChannelVolumes(ChannelVolumes),
    SampleSpec(SampleSpec),
    Latency(Latency),
    StringList(Vec<String>),
    PropertyTree(PropertyTree),
    Ports(IndexMap<String, PortInfo>),
    FormatList(Vec<String>),
}

impl Value {
    /// Returns the text if this is a [`Value::Text`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_volume(&self) -> Option<&Volume> {
        match self {
            Value::Volume(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_channel_volumes(&self) -> Option<&ChannelVolumes> {
        match self {
            Value::ChannelVolumes(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_sample_spec(&self) -> Option<&SampleSpec> {
        match self {
            Value::SampleSpec(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_latency(&self) -> Option<&Latency> {
        match self {
            Value::Latency(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the items of a [`Value::StringList`] or [`Value::FormatList`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::StringList(items) | Value::FormatList(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_property_tree(&self) -> Option<&PropertyTree> {
        match self {
            Value::PropertyTree(tree) => Some(tree),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_ports(&self) -> Option<&IndexMap<String, PortInfo>> {
        match self {
            Value::Ports(ports) => Some(ports),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

/// One volume reading.
///
/// `value` is the percentage divided by 100, so 1.0 is nominal volume and
/// boosted volumes exceed it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Volume {
    pub raw: u32,
    pub value: f64,
    pub decibel: f64,
}

/// Per-channel volumes of the `Volume` field, keyed by channel name.
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
pub struct ChannelVolumes {
    #[serde(flatten)]
    pub channels: IndexMap<String, Volume>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
}

impl ChannelVolumes {
    /// Returns the volume of one channel, e.g. `front-left`.
    #[must_use]
    pub fn get(&self, channel: &str) -> Option<&Volume> {
        self.channels.get(channel)
    }
}

/// Sample format, channel count, and sample rate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SampleSpec {
    pub format: String,
    pub channels: u32,
    #[serde(rename = "frequency")]
    pub frequency_hz: u64,
}

/// Current and configured latency, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Latency {
    #[serde(rename = "current")]
    pub current_seconds: f64,
    #[serde(rename = "configured")]
    pub configured_seconds: f64,
}

/// One entry of the `Ports` section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PortInfo {
    pub name: String,
    pub priority: u32,
    /// True exactly when the entry carries the `, not available` suffix.
    pub available: bool,
}

/// A node of the expanded `Properties` section.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    Integer(i64),
    Boolean(bool),
    Tree(PropertyTree),
}

impl PropertyValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_tree(&self) -> Option<&PropertyTree> {
        match self {
            PropertyValue::Tree(tree) => Some(tree),
            _ => None,
        }
    }
}

/// Properties with dotted keys expanded into nested maps.
///
/// # Examples
///
/// ```rust
/// use pactl_sinks::{PropertyTree, PropertyValue};
///
/// let mut alsa = PropertyTree::new();
/// alsa.insert("card".to_string(), PropertyValue::Integer(0));
/// let mut root = PropertyTree::new();
/// root.insert("alsa".to_string(), PropertyValue::Tree(alsa));
///
/// assert_eq!(root.get_path("alsa.card").and_then(PropertyValue::as_i64), Some(0));
/// assert!(root.get_path("alsa.device").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct PropertyTree(IndexMap<String, PropertyValue>);

impl PropertyTree {
    #[must_use]
    pub fn new() -> Self {
        PropertyTree(IndexMap::new())
    }

    /// Inserts a child, returning the previous value under `key`.
    pub fn insert(&mut self, key: String, value: PropertyValue) -> Option<PropertyValue> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.0.get(key)
    }

    /// Looks up a dotted path such as `device.buffering.buffer_size`.
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&PropertyValue> {
        let mut segments = path.split('.');
        let mut current = self.get(segments.next()?)?;
        for segment in segments {
            current = current.as_tree()?.get(segment)?;
        }
        Some(current)
    }

    /// Returns the subtree under `key`, replacing any non-tree value there.
    pub(crate) fn subtree_mut(&mut self, key: &str) -> &mut PropertyTree {
        let slot = self
            .0
            .entry(key.to_string())
            .or_insert_with(|| PropertyValue::Tree(PropertyTree::new()));
        if !matches!(slot, PropertyValue::Tree(_)) {
            tracing::warn!(key, "property leaf replaced by a nested property group");
            *slot = PropertyValue::Tree(PropertyTree::new());
        }
        match slot {
            PropertyValue::Tree(tree) => tree,
            _ => unreachable!("slot was just set to a tree"),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, PropertyValue> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtree_mut_replaces_leaf() {
        let mut tree = PropertyTree::new();
        tree.insert("device".to_string(), PropertyValue::Text("x".to_string()));
        tree.subtree_mut("device")
            .insert("bus".to_string(), PropertyValue::Text("pci".to_string()));

        assert_eq!(
            tree.get_path("device.bus").and_then(PropertyValue::as_str),
            Some("pci")
        );
    }

    #[test]
    fn test_subtree_mut_reuses_existing_tree() {
        let mut tree = PropertyTree::new();
        tree.subtree_mut("alsa")
            .insert("card".to_string(), PropertyValue::Integer(0));
        tree.subtree_mut("alsa")
            .insert("device".to_string(), PropertyValue::Integer(1));

        let alsa = tree.get("alsa").and_then(PropertyValue::as_tree).unwrap();
        assert_eq!(alsa.len(), 2);
    }

    #[test]
    fn test_list_accessor_covers_both_list_kinds() {
        let flags = Value::StringList(vec!["HARDWARE".to_string()]);
        let formats = Value::FormatList(vec!["pcm".to_string()]);
        assert_eq!(flags.as_list().map(<[String]>::len), Some(1));
        assert_eq!(formats.as_list(), Some(&["pcm".to_string()][..]));
        assert_eq!(Value::from("x").as_list(), None);
    }
}
