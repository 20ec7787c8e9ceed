//! The one-line-per-sink listing of `pactl list short sinks`.
//!
//! Each line holds `id name driver sample-spec state`, separated by tabs (the
//! sample specification itself contains spaces). [`running_sink`] picks the
//! sink an application should treat as current.
//!
//! ## Examples
//!
//! ```rust
//! use pactl_sinks::short::{parse_short_sinks, running_sink};
//!
//! let listing = "0\talsa_output.hdmi\tmodule-alsa-card.c\ts16le 2ch 44100Hz\tSUSPENDED\n\
//!                1\talsa_output.analog\tmodule-alsa-card.c\ts16le 2ch 48000Hz\tRUNNING\n";
//!
//! let sinks = parse_short_sinks(listing);
//! assert_eq!(sinks[1].sample_spec, "s16le 2ch 48000Hz");
//! assert_eq!(running_sink(listing).unwrap(), 1);
//! ```

use crate::source::SinkSource;
use crate::{Error, Result};
use serde::Serialize;

/// One line of the short sink listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShortSink {
    pub id: u32,
    pub name: String,
    pub driver: String,
    pub sample_spec: String,
    pub state: String,
}

fn parse_short_line(line: &str) -> Option<ShortSink> {
    let columns: Vec<&str> = line.split_whitespace().collect();
    let [id, name, driver, spec @ .., state] = columns.as_slice() else {
        return None;
    };

    Some(ShortSink {
        id: id.parse().ok()?,
        name: name.to_string(),
        driver: driver.to_string(),
        sample_spec: spec.join(" "),
        state: state.to_string(),
    })
}

/// Parses every sink line of the short listing; other lines are skipped.
#[must_use]
pub fn parse_short_sinks(listing: &str) -> Vec<ShortSink> {
    listing.lines().filter_map(parse_short_line).collect()
}

/// Returns the id of the first `RUNNING` sink, falling back to the first
/// listed sink when none is running.
///
/// # Errors
///
/// Returns [`Error::NoSink`] if the listing contains no sinks.
pub fn running_sink(listing: &str) -> Result<u32> {
    let sinks = parse_short_sinks(listing);

    if let Some(running) = sinks.iter().find(|sink| sink.state == "RUNNING") {
        return Ok(running.id);
    }

    match sinks.first() {
        Some(first) => {
            tracing::debug!(id = first.id, "no running sink, using the first listed sink");
            Ok(first.id)
        }
        None => Err(Error::NoSink),
    }
}

/// Fetches the short listing from `source` and selects the current sink.
///
/// # Errors
///
/// Returns [`Error::SourceUnavailable`] if the source fails, or
/// [`Error::NoSink`] if it lists no sinks.
pub fn active_sink<S: SinkSource + ?Sized>(source: &S) -> Result<u32> {
    running_sink(&source.fetch_document()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;

    #[test]
    fn test_space_separated_listing() {
        let sinks = parse_short_sinks("3 alsa_output.usb module-alsa-card.c s24le 2ch 96000Hz IDLE");
        assert_eq!(
            sinks,
            vec![ShortSink {
                id: 3,
                name: "alsa_output.usb".to_string(),
                driver: "module-alsa-card.c".to_string(),
                sample_spec: "s24le 2ch 96000Hz".to_string(),
                state: "IDLE".to_string(),
            }]
        );
    }

    #[test]
    fn test_non_sink_lines_are_skipped() {
        let listing = "Connection failure\n\n2\tnull\tmodule-null-sink.c\tfloat32le 2ch 48000Hz\tIDLE\n";
        let sinks = parse_short_sinks(listing);
        assert_eq!(sinks.len(), 1);
        assert_eq!(sinks[0].id, 2);
    }

    #[test]
    fn test_falls_back_to_first_sink() {
        let listing = "4\ta\tm.c\ts16le 2ch 44100Hz\tSUSPENDED\n5\tb\tm.c\ts16le 2ch 44100Hz\tIDLE\n";
        assert_eq!(running_sink(listing), Ok(4));
    }

    #[test]
    fn test_no_sink() {
        assert_eq!(running_sink(""), Err(Error::NoSink));
    }

    #[test]
    fn test_active_sink_from_source() {
        let source = StaticSource::new("7\tx\tm.c\ts16le 2ch 44100Hz\tRUNNING\n");
        assert_eq!(active_sink(&source), Ok(7));
    }
}
