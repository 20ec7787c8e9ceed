//! The `pactl list sinks` report format
//!
//! This module documents the report layout as this library reads it.
//!
//! # Records
//!
//! A report is zero or more sinks. Each sink starts with a header line, lists
//! its fields indented by one tab, and ends with a blank line:
//!
//! ```text
//! Sink #0
//! 	State: SUSPENDED
//! 	Name: alsa_output.pci-0000_00_1f.3.analog-stereo
//! 	Mute: no
//!
//! Sink #1
//! 	...
//! ```
//!
//! **Rules**:
//! - Indentation is counted in tabs only. Spaces after the tabs are ignored.
//! - `key: value` and `key = value` are equivalent. The key ends at the first
//!   `:` or `=` and may contain spaces (`Sample Specification`).
//! - A key with nothing after the separator opens a section; its children are
//!   indented one more tab.
//! - A section ends at the first line indented less than its children.
//! - A missing blank line between sinks is tolerated.
//!
//! # Wrapped values
//!
//! `pactl` wraps long values. A line without a separator, indented one tab
//! deeper than the field before it, is appended to that field's value with a
//! single space:
//!
//! ```text
//! 	Description: Built-in Audio
//! 		Analog Stereo
//! ```
//!
//! reads as `Description: Built-in Audio Analog Stereo`. The volume balance
//! is printed at the field's own tab depth followed by spaces, and is joined
//! the same way:
//!
//! ```text
//! 	Volume: mono: 65536 / 100% / 0.00 dB
//! 	        balance 0.00
//! ```
//!
//! Any other line without a separator is kept only if it is a single token
//! (as in `Formats`); longer text is skipped.
//!
//! # Field grammars
//!
//! | Field | Example | Output key | Type |
//! |-------|---------|------------|------|
//! | `State`, `Name`, `Description`, `Driver` | `RUNNING` | lower-cased | text |
//! | `Monitor Source` | `alsa_output.monitor` | `monitorSource` | text |
//! | `Active Port` | `analog-output-speaker` | `activePort` | text |
//! | `Sample Specification` | `s16le 2ch 44100Hz` | `sampling` | [`SampleSpec`](crate::SampleSpec) |
//! | `Channel Map` | `front-left,front-right` | `channels` | list |
//! | `Owner Module` | `7` | `ownerModule` | integer |
//! | `Mute` | `no` | `mute` | boolean |
//! | `Volume` | `front-left: 65536 / 100% / 0.00 dB, ... balance 0.00` | `volume` | [`ChannelVolumes`](crate::ChannelVolumes) |
//! | `Base Volume` | `65536 / 100% / 0.00 dB` | `baseVolume` | [`Volume`](crate::Volume) |
//! | `Latency` | `1000 usec, configured 2000 usec` | `latency` | [`Latency`](crate::Latency) |
//! | `Flags` | `HARDWARE DECIBEL_VOLUME` | `flags` | list |
//! | `Properties` (section) | `alsa.card = "0"` | `property` | [`PropertyTree`](crate::PropertyTree) |
//! | `Ports` (section) | `Speakers (priority: 10000)` | `ports` | map of [`PortInfo`](crate::PortInfo) |
//! | `Formats` (section) | `pcm` | `formats` | list |
//!
//! Any other field keeps its trimmed text (or, for a section, a plain
//! property tree) under its lower-cased key.
//!
//! ## Units
//!
//! - Rates: `Hz`, `kHz`, `MHz`, `GHz`, case-insensitive; fractions allowed
//!   (`1.5kHz` is 1500 Hz).
//! - Latencies: `sec`, `msec`, `usec`, `nsec`; converted to seconds.
//! - Decibels: any float, plus `-inf` for silence
//!   (see [`DecibelPolicy`](crate::DecibelPolicy)).
//!
//! ## Properties
//!
//! Dotted keys nest: `alsa.card = "0"` becomes `alsa -> card`. Surrounding
//! quotes are removed. These keys are read as integers:
//! `alsa.resolution_bits`, `alsa.subdevice`, `alsa.device`, `alsa.card`,
//! `device.buffering.buffer_size`, `device.buffering.fragment_size`.
//! `module-udev-detect.discovered` is read as a boolean.
//!
//! ## Ports
//!
//! Entries read `<name> (priority: <n>)`, optionally with `, not available`
//! before the closing parenthesis. `available` is set exactly when that
//! suffix is present.
//!
//! # Example
//!
//! ```rust
//! use pactl_sinks::parse;
//!
//! let report = "Sink #0\n\tProperties:\n\t\talsa.card = \"0\"\n\t\talsa.device = \"1\"\n";
//! let sinks = parse(report).unwrap();
//! let property = sinks[0].get("property").and_then(|v| v.as_property_tree()).unwrap();
//!
//! assert_eq!(property.get_path("alsa.card").and_then(|v| v.as_i64()), Some(0));
//! assert_eq!(property.get_path("alsa.device").and_then(|v| v.as_i64()), Some(1));
//! ```
