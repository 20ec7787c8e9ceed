//! Error types for sink report parsing.
//!
//! Two kinds of failure reach callers:
//!
//! - **Source failures**: the `pactl` invocation (or whatever produced the
//!   report) failed or returned nothing. See [`Error::SourceUnavailable`].
//! - **Field failures**: a field with a dedicated grammar (volume, latency,
//!   sample specification, mute) did not match it. See [`Error::FieldParse`].
//!
//! Structural irregularities in the report (odd indentation, a missing blank
//! line) are never errors; the section parser absorbs them.
//!
//! ## Examples
//!
//! ```rust
//! use pactl_sinks::{parse, Error};
//!
//! let report = "Sink #0\n\tMute: maybe\n";
//! match parse(report) {
//!     Err(Error::FieldParse { record_index, key, .. }) => {
//!         assert_eq!(record_index, 0);
//!         assert_eq!(key, "Mute");
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Represents every failure the crate can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The report source failed or produced no output
    #[error("Sink report unavailable: {reason}")]
    SourceUnavailable { reason: String },

    /// A field value did not match its grammar
    #[error("Sink {record_index}: cannot parse `{key}` value {raw_value:?}: {source}")]
    FieldParse {
        record_index: usize,
        key: String,
        raw_value: String,
        source: GrammarError,
    },

    /// Input bytes were not valid UTF-8
    #[error("Invalid UTF-8 in sink report: {0}")]
    InvalidUtf8(String),

    /// IO error while reading a report
    #[error("IO error: {0}")]
    Io(String),

    /// The short listing contained no sinks
    #[error("No audio sink")]
    NoSink,
}

impl Error {
    /// Creates a [`Error::SourceUnavailable`] from any displayable reason.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pactl_sinks::Error;
    ///
    /// let err = Error::source_unavailable("pactl exited with status 1");
    /// assert!(err.to_string().contains("status 1"));
    /// ```
    pub fn source_unavailable<T: std::fmt::Display>(reason: T) -> Self {
        Error::SourceUnavailable {
            reason: reason.to_string(),
        }
    }

    /// Creates a [`Error::FieldParse`] for the record at `record_index`.
    pub fn field_parse(record_index: usize, key: &str, raw_value: &str, source: GrammarError) -> Self {
        Error::FieldParse {
            record_index,
            key: key.to_string(),
            raw_value: raw_value.to_string(),
            source,
        }
    }

    /// Creates an I/O error.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` if this error came from the report source rather than the parser.
    #[must_use]
    pub const fn is_source_error(&self) -> bool {
        matches!(self, Error::SourceUnavailable { .. })
    }
}

/// Names the field grammar that rejected a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("expected `<raw> / <percent>% / <decibel> dB`")]
    Volume,

    #[error("expected a numeric balance")]
    Balance,

    #[error("decibel value is not an accepted number")]
    Decibel,

    #[error("expected `<n>[unit]sec, configured <n>[unit]sec`")]
    Latency,

    #[error("expected `<format> <channels>ch <rate>Hz`")]
    SampleSpec,

    #[error("expected `yes` or `no`")]
    Mute,

    #[error("expected an inline value, found a nested section")]
    ExpectedInline,
}

pub type Result<T> = std::result::Result<T, Error>;
