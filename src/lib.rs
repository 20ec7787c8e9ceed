//! # pactl_sinks
//!
//! Parses the report printed by `pactl list sinks` into typed,
//! serde-serializable sink records.
//!
//! ## What it does
//!
//! `pactl` describes each PulseAudio (or PipeWire) output device as a block of
//! tab-indented fields, with nested sections and values wrapped across lines.
//! This crate rebuilds that structure and types each known field:
//!
//! - **Volumes** become raw/fraction/decibel triples per channel
//! - **Latencies** become seconds
//! - **Sample specifications** become format, channel count, and rate in Hz
//! - **Properties** with dotted keys become nested trees
//! - **Ports** become name/priority/availability entries
//!
//! Unknown fields are kept as text, so new `pactl` versions keep parsing.
//!
//! ## Quick Start
//!
//! ```rust
//! use pactl_sinks::{parse, Value};
//!
//! let report = "\
//! Sink #0
//! \tState: RUNNING
//! \tName: alsa_output.pci-0000_00_1f.3.analog-stereo
//! \tSample Specification: s16le 2ch 44100Hz
//! \tMute: no
//! \tVolume: front-left: 65536 / 100% / 0.00 dB,   front-right: 65536 / 100% / 0.00 dB
//! \t        balance 0.00
//! ";
//!
//! let sinks = parse(report).unwrap();
//! let sink = &sinks[0];
//!
//! assert_eq!(sink.get("state").and_then(Value::as_str), Some("RUNNING"));
//! assert_eq!(sink.get("sampling").and_then(Value::as_sample_spec).map(|s| s.frequency_hz), Some(44100));
//! assert_eq!(sink.get("mute").and_then(Value::as_bool), Some(false));
//!
//! let volume = sink.get("volume").and_then(Value::as_channel_volumes).unwrap();
//! assert_eq!(volume.get("front-left").map(|v| v.value), Some(1.0));
//! assert_eq!(volume.balance, Some(0.0));
//! ```
//!
//! ### Running pactl
//!
//! ```rust,no_run
//! use pactl_sinks::{grab, PactlCommand};
//!
//! let sinks = grab(&PactlCommand::new()).unwrap();
//! for sink in &sinks {
//!     println!("{:?}: {:?}", sink.id(), sink.get("description"));
//! }
//! ```
//!
//! ## Errors
//!
//! Callers get either every sink fully typed, or one error:
//!
//! - [`Error::SourceUnavailable`] when `pactl` could not be run or printed nothing
//! - [`Error::FieldParse`] when a volume, latency, sample specification, or
//!   mute value does not match its grammar
//!
//! Layout irregularities are never errors. See [`format`] for the report layout.

pub mod error;
pub mod fields;
pub mod format;
pub mod map;
pub mod normalize;
pub mod options;
pub mod parser;
pub mod raw;
pub mod scanner;
pub mod short;
pub mod source;
pub mod value;

pub use error::{Error, GrammarError, Result};
pub use map::SinkRecord;
pub use options::{DecibelPolicy, ParseOptions};
pub use parser::Parser;
pub use short::{active_sink, running_sink, ShortSink};
pub use source::{PactlCommand, SinkSource, StaticSource};
pub use value::{ChannelVolumes, Latency, PortInfo, PropertyTree, PropertyValue, SampleSpec, Value, Volume};

use std::io;

/// Parses a `pactl list sinks` report.
///
/// An empty report yields an empty list.
///
/// # Examples
///
/// ```rust
/// use pactl_sinks::parse;
///
/// assert!(parse("").unwrap().is_empty());
///
/// let sinks = parse("Sink #0\n\tState: IDLE\n\nSink #1\n\tState: RUNNING\n").unwrap();
/// assert_eq!(sinks.len(), 2);
/// ```
///
/// # Errors
///
/// Returns [`Error::FieldParse`] if a field fails its grammar.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(report: &str) -> Result<Vec<SinkRecord>> {
    parse_with_options(report, &ParseOptions::default())
}

/// Parses a report with custom options.
///
/// # Errors
///
/// Returns [`Error::FieldParse`] if a field fails its grammar.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(report: &str, options: &ParseOptions) -> Result<Vec<SinkRecord>> {
    Parser::with_options(report, options.clone()).parse()
}

/// Parses a report from bytes.
///
/// # Examples
///
/// ```rust
/// use pactl_sinks::from_slice;
///
/// let sinks = from_slice(b"Sink #0\n\tMute: yes\n").unwrap();
/// assert_eq!(sinks[0].get("mute").and_then(|v| v.as_bool()), Some(true));
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or a field fails its grammar.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(bytes: &[u8]) -> Result<Vec<SinkRecord>> {
    let report = std::str::from_utf8(bytes).map_err(|e| Error::InvalidUtf8(e.to_string()))?;
    parse(report)
}

/// Parses a report from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use pactl_sinks::from_reader;
/// use std::io::Cursor;
///
/// let sinks = from_reader(Cursor::new(b"Sink #0\n\tFlags: HARDWARE LATENCY\n")).unwrap();
/// assert_eq!(sinks[0].get("flags").and_then(|v| v.as_list()).map(<[String]>::len), Some(2));
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or a field fails its grammar.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Vec<SinkRecord>> {
    let mut report = String::new();
    reader
        .read_to_string(&mut report)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse(&report)
}

/// Fetches a report from `source` and parses it.
///
/// # Errors
///
/// Returns [`Error::SourceUnavailable`] if the source fails or returns an
/// empty report, or [`Error::FieldParse`] if a field fails its grammar.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn grab<S: SinkSource + ?Sized>(source: &S) -> Result<Vec<SinkRecord>> {
    grab_with_options(source, &ParseOptions::default())
}

/// Fetches a report from `source` and parses it with custom options.
///
/// # Errors
///
/// See [`grab`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn grab_with_options<S: SinkSource + ?Sized>(
    source: &S,
    options: &ParseOptions,
) -> Result<Vec<SinkRecord>> {
    let report = source.fetch_document()?;
    if report.trim().is_empty() {
        return Err(Error::source_unavailable("source returned an empty report"));
    }
    parse_with_options(&report, options)
}
