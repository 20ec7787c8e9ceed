//! Per-field normalization of a parsed sink.
//!
//! Every known field is listed once in [`FIELD_TABLE`] with the grammar that
//! types it ([`FieldKind`]) and the name it is stored under. Keys are matched
//! case-insensitively. Unknown keys are never an error: inline values stay
//! text and nested sections become a plain [`PropertyTree`](crate::PropertyTree).

use crate::error::{Error, GrammarError, Result};
use crate::fields;
use crate::map::SinkRecord;
use crate::options::ParseOptions;
use crate::raw::{RawNode, RawSection};
use crate::value::Value;

/// The grammar applied to a known field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Trimmed text, unchanged
    Opaque,
    SampleSpec,
    ChannelMap,
    OwnerModule,
    Mute,
    /// Per-channel volumes with optional balance
    Volume,
    /// A single volume reading
    BaseVolume,
    Latency,
    Flags,
    Properties,
    Ports,
    Formats,
}

impl FieldKind {
    pub const ALL: [FieldKind; 12] = [
        FieldKind::Opaque,
        FieldKind::SampleSpec,
        FieldKind::ChannelMap,
        FieldKind::OwnerModule,
        FieldKind::Mute,
        FieldKind::Volume,
        FieldKind::BaseVolume,
        FieldKind::Latency,
        FieldKind::Flags,
        FieldKind::Properties,
        FieldKind::Ports,
        FieldKind::Formats,
    ];

    /// Returns `true` for kinds whose grammar mismatch is a field error.
    #[must_use]
    pub const fn is_strict(self) -> bool {
        match self {
            FieldKind::SampleSpec
            | FieldKind::Mute
            | FieldKind::Volume
            | FieldKind::BaseVolume
            | FieldKind::Latency => true,
            FieldKind::Opaque
            | FieldKind::ChannelMap
            | FieldKind::OwnerModule
            | FieldKind::Flags
            | FieldKind::Properties
            | FieldKind::Ports
            | FieldKind::Formats => false,
        }
    }

    /// Types one raw field value.
    ///
    /// # Errors
    ///
    /// Returns the [`GrammarError`] of a strict kind whose grammar rejects the value.
    pub fn apply(self, node: &RawNode, options: &ParseOptions) -> std::result::Result<Value, GrammarError> {
        let text = match node {
            RawNode::Leaf(text) => text.trim(),
            RawNode::Section(section) => return self.apply_section(section),
        };

        Ok(match self {
            FieldKind::Opaque => Value::Text(text.to_string()),
            FieldKind::SampleSpec => Value::SampleSpec(fields::parse_sample_spec(text)?),
            FieldKind::ChannelMap => Value::StringList(fields::split_list(text)),
            FieldKind::OwnerModule => fields::parse_owner_module(text),
            FieldKind::Mute => Value::Boolean(fields::parse_mute(text)?),
            FieldKind::Volume => {
                Value::ChannelVolumes(fields::parse_channel_volumes(text, options.decibels)?)
            }
            FieldKind::BaseVolume => Value::Volume(fields::parse_volume(text, options.decibels)?),
            FieldKind::Latency => Value::Latency(fields::parse_latency(text)?),
            FieldKind::Flags => Value::StringList(fields::split_flags(text)),
            // Section kinds given an inline value are kept as text
            FieldKind::Properties | FieldKind::Ports | FieldKind::Formats => {
                Value::Text(text.to_string())
            }
        })
    }

    fn apply_section(self, section: &RawSection) -> std::result::Result<Value, GrammarError> {
        match self {
            FieldKind::Properties => Ok(Value::PropertyTree(fields::expand_properties(section))),
            FieldKind::Ports => Ok(Value::Ports(fields::parse_ports(section))),
            FieldKind::Formats => Ok(Value::FormatList(fields::collect_formats(section))),
            kind if kind.is_strict() => Err(GrammarError::ExpectedInline),
            _ => Ok(Value::PropertyTree(fields::plain_tree(section))),
        }
    }
}

/// A known field: the lower-cased report key, its grammar, and its output name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub kind: FieldKind,
    pub output: &'static str,
}

const fn field(key: &'static str, kind: FieldKind, output: &'static str) -> FieldSpec {
    FieldSpec { key, kind, output }
}

/// Every field with a dedicated treatment.
pub const FIELD_TABLE: &[FieldSpec] = &[
    field("state", FieldKind::Opaque, "state"),
    field("name", FieldKind::Opaque, "name"),
    field("description", FieldKind::Opaque, "description"),
    field("driver", FieldKind::Opaque, "driver"),
    field("monitor source", FieldKind::Opaque, "monitorSource"),
    field("active port", FieldKind::Opaque, "activePort"),
    field("sample specification", FieldKind::SampleSpec, "sampling"),
    field("channel map", FieldKind::ChannelMap, "channels"),
    field("owner module", FieldKind::OwnerModule, "ownerModule"),
    field("mute", FieldKind::Mute, "mute"),
    field("volume", FieldKind::Volume, "volume"),
    field("base volume", FieldKind::BaseVolume, "baseVolume"),
    field("latency", FieldKind::Latency, "latency"),
    field("flags", FieldKind::Flags, "flags"),
    field("properties", FieldKind::Properties, "property"),
    field("ports", FieldKind::Ports, "ports"),
    field("formats", FieldKind::Formats, "formats"),
];

/// Looks up a lower-cased key in [`FIELD_TABLE`].
#[must_use]
pub fn lookup(key: &str) -> Option<&'static FieldSpec> {
    FIELD_TABLE.iter().find(|spec| spec.key == key)
}

/// Types every field of one parsed sink.
///
/// `record_index` is the sink's position in the report and is only used for
/// error reporting.
///
/// # Errors
///
/// Returns [`Error::FieldParse`] for the first field whose strict grammar
/// rejects its value.
pub fn normalize_record(
    record_index: usize,
    id: Option<u32>,
    raw: &RawSection,
    options: &ParseOptions,
) -> Result<SinkRecord> {
    let mut record = SinkRecord::with_id(id);

    for (key, node) in raw {
        let lowered = key.to_lowercase();
        let spec = lookup(&lowered);

        let value = match spec {
            Some(spec) => spec.kind.apply(node, options).map_err(|source| {
                Error::field_parse(record_index, key, node.as_leaf().unwrap_or("").trim(), source)
            })?,
            None => match node {
                RawNode::Leaf(text) => Value::Text(text.trim().to_string()),
                RawNode::Section(section) => Value::PropertyTree(fields::plain_tree(section)),
            },
        };

        let output = match spec {
            Some(spec) if options.canonical_keys => spec.output.to_string(),
            _ => lowered,
        };
        record.insert(output, value);
    }

    Ok(record)
}
