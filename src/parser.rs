//! Sink report parsing.
//!
//! This module provides the [`Parser`] that turns the text of
//! `pactl list sinks` into typed [`SinkRecord`]s.
//!
//! ## Overview
//!
//! Parsing happens in two stages:
//!
//! - **Sections**: lines are grouped into a [`RawSection`] tree by their
//!   leading tab count. A field whose value is empty opens a nested section
//!   one tab deeper. A bare line one tab deeper than its section, or at the
//!   section's depth followed by spaces, continues the previous field's
//!   value, since `pactl` wraps long values. Other bare lines are kept only
//!   when they are a single token.
//! - **Normalization**: each sink's tree is typed field by field
//!   (see [`normalize`](crate::normalize)).
//!
//! Structural irregularities never fail: a section simply ends at the first
//! line indented less than it. Only field grammar mismatches are errors.
//!
//! ## Usage
//!
//! ```rust
//! use pactl_sinks::Parser;
//!
//! let report = "Sink #3\n\tState: IDLE\n\tDescription: Built-in Audio\n\t\tAnalog Stereo\n";
//! let sinks = Parser::new(report).parse().unwrap();
//!
//! assert_eq!(sinks[0].id(), Some(3));
//! assert_eq!(
//!     sinks[0].get("description").and_then(|v| v.as_str()),
//!     Some("Built-in Audio Analog Stereo")
//! );
//! ```

use crate::normalize::normalize_record;
use crate::options::ParseOptions;
use crate::raw::{RawNode, RawSection};
use crate::scanner::{tab_depth, Lines};
use crate::{Result, SinkRecord};

/// Shape of one line once its indentation is removed.
#[derive(Debug, PartialEq)]
enum LineKind<'a> {
    /// `key: value` or `key = value`
    Leaf { key: &'a str, value: &'a str },
    /// `key:` or `key =` with nothing after the separator
    Header { key: &'a str },
    /// A line without a separator
    Bare(&'a str),
    Blank,
}

fn classify(content: &str) -> LineKind<'_> {
    let content = content.trim();
    if content.is_empty() {
        return LineKind::Blank;
    }

    if let Some(at) = content.find(|c: char| c == ':' || c == '=') {
        let key = content[..at].trim();
        let value = content[at + 1..].trim();
        if !key.is_empty() {
            return if value.is_empty() {
                LineKind::Header { key }
            } else {
                LineKind::Leaf { key, value }
            };
        }
    }

    LineKind::Bare(content)
}

/// Appends a wrapped remainder to the leaf stored under `last_leaf`.
///
/// Returns `false` when there is no such leaf.
fn append_continuation(section: &mut RawSection, last_leaf: Option<&str>, token: &str) -> bool {
    match last_leaf.and_then(|key| section.get_mut(key)) {
        Some(RawNode::Leaf(value)) => {
            value.push(' ');
            value.push_str(token);
            true
        }
        _ => false,
    }
}

/// Parses `Sink #<n>` into `n`.
fn sink_id(line: &str) -> Option<u32> {
    line.trim().strip_prefix("Sink #")?.trim().parse().ok()
}

/// The sink report parser.
///
/// A parser is built for one report and consumed by [`Parser::parse`].
/// Line positions are passed through the recursion explicitly, so no cursor
/// state outlives a call.
pub struct Parser<'a> {
    lines: Lines<'a>,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    #[must_use]
    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Parser {
            lines: Lines::new(input),
            options,
        }
    }

    /// Parses the whole report into sink records, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldParse`](crate::Error::FieldParse) if any sink has
    /// a field that fails its grammar. No partial list is returned.
    pub fn parse(self) -> Result<Vec<SinkRecord>> {
        let mut sinks = Vec::new();

        for (id, raw) in self.raw_sinks() {
            let record = normalize_record(sinks.len(), id, &raw, &self.options)?;
            sinks.push(record);
        }

        tracing::debug!(lines = self.lines.len(), sinks = sinks.len(), "parsed sink report");
        Ok(sinks)
    }

    /// Splits the report into one untyped section per sink.
    ///
    /// Sinks whose section is empty are dropped.
    #[must_use]
    pub fn raw_sinks(&self) -> Vec<(Option<u32>, RawSection)> {
        let mut sinks = Vec::new();
        let mut index = 0;

        while let Some((header, raw, next)) = self.next_sink(index) {
            let id = sink_id(header);
            tracing::trace!(line = index + 1, ?id, fields = raw.len(), "sink section");
            if !raw.is_empty() {
                sinks.push((id, raw));
            }
            index = next;
        }

        sinks
    }

    /// Reads the header at `index`, then the sink's fields at one tab.
    ///
    /// Returns the header line, the fields, and the index just past the
    /// blank terminator, or `None` once the report is exhausted.
    fn next_sink(&self, index: usize) -> Option<(&'a str, RawSection, usize)> {
        let header = self.lines.get(index)?;
        let (raw, mut next) = self.parse_section(index + 1, 1)?;

        if self.lines.get(next).is_some_and(|line| line.trim().is_empty()) {
            next += 1;
        }
        Some((header, raw, next))
    }

    /// Parses the lines from `start` that are indented at least `indent` tabs.
    ///
    /// Returns the section and the index of the first line it does not own,
    /// or `None` if `start` is past the end of the report.
    fn parse_section(&self, start: usize, indent: usize) -> Option<(RawSection, usize)> {
        if start >= self.lines.len() {
            return None;
        }

        let mut section = RawSection::new();
        let mut last_leaf: Option<&'a str> = None;
        let mut index = start;

        while let Some(line) = self.lines.get(index) {
            let depth = tab_depth(line);
            if depth < indent {
                break;
            }

            match classify(&line[depth..]) {
                LineKind::Leaf { key, value } => {
                    section.insert(key.to_string(), RawNode::Leaf(value.to_string()));
                    last_leaf = Some(key);
                    index += 1;
                }
                LineKind::Header { key } => {
                    let (child, next) = self
                        .parse_section(index + 1, depth + 1)
                        .unwrap_or_else(|| (RawSection::new(), index + 1));
                    section.insert(key.to_string(), RawNode::Section(child));
                    last_leaf = None;
                    index = next;
                }
                LineKind::Bare(token) => {
                    // `balance` is printed after one tab and a run of spaces
                    let wrapped = depth == indent + 1
                        || (depth == indent && line[depth..].starts_with(' '));
                    let continued =
                        wrapped && append_continuation(&mut section, last_leaf, token);
                    if !continued {
                        if token.contains(char::is_whitespace) {
                            tracing::debug!(line = index + 1, text = token, "skipping unkeyed line");
                        } else {
                            // Formats lists entries as bare lines at the section's own depth
                            section.insert(token.to_string(), RawNode::Leaf(token.to_string()));
                        }
                        last_leaf = None;
                    }
                    index += 1;
                }
                LineKind::Blank => index += 1,
            }
        }

        Some((section, index))
    }
}
