//! Grammars for individual field values.
//!
//! Each function here interprets one kind of `pactl` value. The strict
//! grammars (volume, latency, sample specification, mute) return a
//! [`GrammarError`] when the text does not match; the normalizer attaches the
//! record and key. Everything else is lenient and always produces a value.

use crate::error::GrammarError;
use crate::options::DecibelPolicy;
use crate::raw::{RawNode, RawSection};
use crate::value::{ChannelVolumes, Latency, PortInfo, PropertyTree, PropertyValue, SampleSpec, Value, Volume};
use indexmap::IndexMap;

type GrammarResult<T> = std::result::Result<T, GrammarError>;

/// Properties whose values are coerced to integers.
const INTEGER_PROPERTIES: &[&str] = &[
    "alsa.resolution_bits",
    "alsa.subdevice",
    "alsa.device",
    "alsa.card",
    "device.buffering.buffer_size",
    "device.buffering.fragment_size",
];

/// Properties whose values are coerced to booleans.
const BOOLEAN_PROPERTIES: &[&str] = &["module-udev-detect.discovered"];

/// Splits the leading ASCII digits off `s`.
fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Parses `s` as an unsigned integer made only of ASCII digits.
fn parse_digits<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    if s.is_char_boundary(split) && s[split..].eq_ignore_ascii_case(suffix) {
        Some(&s[..split])
    } else {
        None
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
    {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

/// Parses one `raw / percent% / decibel dB` reading.
///
/// # Examples
///
/// ```rust
/// use pactl_sinks::fields::parse_volume;
/// use pactl_sinks::DecibelPolicy;
///
/// let v = parse_volume("65536 / 100% / 0.00 dB", DecibelPolicy::AllowInfinite).unwrap();
/// assert_eq!(v.raw, 65536);
/// assert_eq!(v.value, 1.0);
/// assert_eq!(v.decibel, 0.0);
/// ```
pub fn parse_volume(text: &str, decibels: DecibelPolicy) -> GrammarResult<Volume> {
    let mut parts = text.trim().splitn(3, '/').map(str::trim);
    let (raw, percent, decibel) = match (parts.next(), parts.next(), parts.next()) {
        (Some(raw), Some(percent), Some(decibel)) => (raw, percent, decibel),
        _ => return Err(GrammarError::Volume),
    };

    let raw: u32 = parse_digits(raw).ok_or(GrammarError::Volume)?;
    let percent = percent.strip_suffix('%').unwrap_or(percent).trim_end();
    let percent: u32 = parse_digits(percent).ok_or(GrammarError::Volume)?;

    let decibel = strip_suffix_ignore_case(decibel, "db")
        .ok_or(GrammarError::Volume)?
        .trim_end();
    if decibel.is_empty() || decibel.contains(char::is_whitespace) {
        return Err(GrammarError::Volume);
    }

    Ok(Volume {
        raw,
        value: f64::from(percent) / 100.0,
        decibel: parse_decibel(decibel, decibels)?,
    })
}

fn parse_decibel(token: &str, policy: DecibelPolicy) -> GrammarResult<f64> {
    let decibel: f64 = token.parse().map_err(|_| GrammarError::Decibel)?;
    if decibel.is_nan() {
        return Err(GrammarError::Decibel);
    }
    if decibel.is_infinite() && policy == DecibelPolicy::FiniteOnly {
        return Err(GrammarError::Decibel);
    }
    Ok(decibel)
}

/// Parses the `Volume` field: comma-separated `channel: reading` entries,
/// optionally followed by `balance <float>`.
///
/// # Examples
///
/// ```rust
/// use pactl_sinks::fields::parse_channel_volumes;
/// use pactl_sinks::DecibelPolicy;
///
/// let text = "front-left: 32768 / 50% / -18.06 dB,   front-right: 32768 / 50% / -18.06 dB balance 0.00";
/// let volumes = parse_channel_volumes(text, DecibelPolicy::AllowInfinite).unwrap();
/// assert_eq!(volumes.channels.len(), 2);
/// assert_eq!(volumes.get("front-right").map(|v| v.value), Some(0.5));
/// assert_eq!(volumes.balance, Some(0.0));
/// ```
pub fn parse_channel_volumes(text: &str, decibels: DecibelPolicy) -> GrammarResult<ChannelVolumes> {
    let text = text.trim();
    let (entries, balance) = split_balance(text)?;

    let mut channels = IndexMap::new();
    for entry in entries.split(',') {
        let (channel, reading) = entry.split_once(':').ok_or(GrammarError::Volume)?;
        let channel = channel.trim();
        if channel.is_empty() {
            return Err(GrammarError::Volume);
        }
        channels.insert(channel.to_string(), parse_volume(reading, decibels)?);
    }

    Ok(ChannelVolumes { channels, balance })
}

/// Separates a trailing `balance <float>` from the channel entries.
fn split_balance(text: &str) -> GrammarResult<(&str, Option<f64>)> {
    // ASCII lowering keeps byte offsets intact
    let lowered = text.to_ascii_lowercase();
    let mut search_from = 0;
    while let Some(found) = lowered[search_from..].find("balance") {
        let at = search_from + found;
        let rest = &text[at + "balance".len()..];
        let preceded_by_space = at > 0 && text[..at].ends_with(char::is_whitespace);
        if preceded_by_space && rest.starts_with(char::is_whitespace) {
            let balance = rest.trim().parse::<f64>().map_err(|_| GrammarError::Balance)?;
            return Ok((text[..at].trim_end(), Some(balance)));
        }
        search_from = at + "balance".len();
    }
    Ok((text, None))
}

/// Parses `<n>[unit]sec, configured <n>[unit]sec` into seconds.
///
/// # Examples
///
/// ```rust
/// use pactl_sinks::fields::parse_latency;
///
/// let latency = parse_latency("1000usec, configured 2000usec").unwrap();
/// assert_eq!(latency.current_seconds, 0.001);
/// assert_eq!(latency.configured_seconds, 0.002);
/// ```
pub fn parse_latency(text: &str) -> GrammarResult<Latency> {
    let (current, configured) = text.split_once(',').ok_or(GrammarError::Latency)?;
    let configured =
        strip_prefix_ignore_case(configured.trim_start(), "configured").ok_or(GrammarError::Latency)?;

    Ok(Latency {
        current_seconds: parse_duration(current)?,
        configured_seconds: parse_duration(configured)?,
    })
}

fn parse_duration(text: &str) -> GrammarResult<f64> {
    let (digits, rest) = split_digits(text.trim());
    let amount: u64 = parse_digits(digits).ok_or(GrammarError::Latency)?;

    let rest = rest.trim();
    let divisor = if rest.is_empty() {
        1.0
    } else {
        let unit = strip_suffix_ignore_case(rest, "sec").ok_or(GrammarError::Latency)?;
        match unit.trim().to_ascii_lowercase().as_str() {
            "m" => 1e3,
            "u" => 1e6,
            "n" => 1e9,
            _ => 1.0,
        }
    };

    Ok(amount as f64 / divisor)
}

/// Parses `<format> <channels>ch <rate>Hz`.
///
/// # Examples
///
/// ```rust
/// use pactl_sinks::fields::parse_sample_spec;
///
/// let spec = parse_sample_spec("s16le 2ch 44100Hz").unwrap();
/// assert_eq!(spec.format, "s16le");
/// assert_eq!(spec.channels, 2);
/// assert_eq!(spec.frequency_hz, 44100);
/// ```
pub fn parse_sample_spec(text: &str) -> GrammarResult<SampleSpec> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let &[format, channels, frequency] = tokens.as_slice() else {
        return Err(GrammarError::SampleSpec);
    };

    let (channels, _suffix) = split_digits(channels);
    let channels: u32 = parse_digits(channels).ok_or(GrammarError::SampleSpec)?;

    Ok(SampleSpec {
        format: format.to_string(),
        channels,
        frequency_hz: parse_frequency(frequency)?,
    })
}

/// Parses `<number>[g|m|k]Hz`; the unit suffix is optional and case-insensitive.
fn parse_frequency(token: &str) -> GrammarResult<u64> {
    let end = token
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(token.len());
    let (number, unit) = token.split_at(end);
    if !number.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(GrammarError::SampleSpec);
    }
    let number: f64 = number.parse().map_err(|_| GrammarError::SampleSpec)?;

    let multiplier = if unit.is_empty() {
        1.0
    } else {
        let prefix = strip_suffix_ignore_case(unit, "hz").ok_or(GrammarError::SampleSpec)?;
        match prefix.to_ascii_lowercase().as_str() {
            "" => 1.0,
            "k" => 1e3,
            "m" => 1e6,
            "g" => 1e9,
            _ => return Err(GrammarError::SampleSpec),
        }
    };

    Ok((number * multiplier).round() as u64)
}

/// Parses `yes`/`no`, ignoring case.
pub fn parse_mute(text: &str) -> GrammarResult<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("yes") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("no") {
        Ok(false)
    } else {
        Err(GrammarError::Mute)
    }
}

/// Reads the leading module number; values without one (e.g. `n/a`) stay text.
pub fn parse_owner_module(text: &str) -> Value {
    let text = text.trim();
    match parse_digits::<i64>(split_digits(text).0) {
        Some(module) => Value::Integer(module),
        None => Value::Text(text.to_string()),
    }
}

/// Splits a comma-separated list such as a channel map.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits a whitespace-separated list such as the sink flags.
pub fn split_flags(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Removes one pair of surrounding quotes; `""` has no content and is kept.
fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .filter(|inner| !inner.is_empty())
        .unwrap_or(text)
}

fn property_leaf(key: &str, raw: &str) -> PropertyValue {
    let content = unquote(raw.trim());

    if INTEGER_PROPERTIES.contains(&key) {
        match content.parse::<i64>() {
            Ok(number) => PropertyValue::Integer(number),
            Err(_) => {
                tracing::warn!(key, value = content, "integer property is not a number");
                PropertyValue::Text(content.to_string())
            }
        }
    } else if BOOLEAN_PROPERTIES.contains(&key) {
        let truthy = match content.parse::<i64>() {
            Ok(number) => number != 0,
            Err(_) => content.eq_ignore_ascii_case("true") || content.eq_ignore_ascii_case("yes"),
        };
        PropertyValue::Boolean(truthy)
    } else {
        PropertyValue::Text(content.to_string())
    }
}

/// Expands dotted property keys into a nested tree.
///
/// # Examples
///
/// ```rust
/// use pactl_sinks::fields::expand_properties;
/// use pactl_sinks::raw::{RawNode, RawSection};
/// use pactl_sinks::PropertyValue;
///
/// let mut section = RawSection::new();
/// section.insert("alsa.card".to_string(), RawNode::from("\"0\""));
/// section.insert("device.description".to_string(), RawNode::from("\"Built-in Audio\""));
///
/// let tree = expand_properties(&section);
/// assert_eq!(tree.get_path("alsa.card"), Some(&PropertyValue::Integer(0)));
/// assert_eq!(
///     tree.get_path("device.description").and_then(PropertyValue::as_str),
///     Some("Built-in Audio")
/// );
/// ```
pub fn expand_properties(section: &RawSection) -> PropertyTree {
    let mut tree = PropertyTree::new();

    for (key, node) in section {
        let mut path: Vec<&str> = key.split('.').collect();
        let Some(last) = path.pop() else {
            continue;
        };

        let mut current = &mut tree;
        for segment in path {
            current = current.subtree_mut(segment);
        }

        let value = match node {
            RawNode::Leaf(raw) => property_leaf(key, raw),
            RawNode::Section(children) => PropertyValue::Tree(plain_tree(children)),
        };
        current.insert(last.to_string(), value);
    }

    tree
}

/// Converts a section into a tree of text leaves, without expanding keys.
pub fn plain_tree(section: &RawSection) -> PropertyTree {
    let mut tree = PropertyTree::new();
    for (key, node) in section {
        let value = match node {
            RawNode::Leaf(text) => PropertyValue::Text(text.trim().to_string()),
            RawNode::Section(children) => PropertyValue::Tree(plain_tree(children)),
        };
        tree.insert(key.clone(), value);
    }
    tree
}

/// Parses `<name> (<attribute>, ...)` where one attribute is `priority: <n>`.
///
/// Newer `pactl` versions add `type: ...` and `availability ...` attributes;
/// only `priority` and `not available` are read.
fn parse_port_strict(text: &str) -> Option<PortInfo> {
    let inner = text.strip_suffix(')')?;
    let open = inner.rfind(" (")?;
    let name = inner[..open].trim();
    if name.is_empty() {
        return None;
    }

    let mut priority = None;
    let mut available = false;
    for attribute in inner[open + 2..].split(',').map(str::trim) {
        if let Some(value) = attribute.strip_prefix("priority:") {
            priority = Some(parse_digits(value.trim())?);
        } else if attribute == "not available" {
            available = true;
        }
    }

    Some(PortInfo {
        name: name.to_string(),
        priority: priority?,
        available,
    })
}

/// Parses one `Ports` entry, falling back to a best-effort reading when the
/// text does not follow the port grammar.
///
/// `available` is true exactly when the text contains `, not available`.
///
/// # Examples
///
/// ```rust
/// use pactl_sinks::fields::parse_port;
///
/// let port = parse_port("Headphones (priority: 9000, not available)");
/// assert_eq!(port.name, "Headphones");
/// assert_eq!(port.priority, 9000);
/// assert!(port.available);
/// ```
pub fn parse_port(text: &str) -> PortInfo {
    let text = text.trim();
    if let Some(port) = parse_port_strict(text) {
        return port;
    }

    tracing::debug!(entry = text, "port entry does not follow the port grammar");
    let name = text.split(" (").next().unwrap_or(text).trim();
    let priority = text
        .find("priority:")
        .and_then(|at| parse_digits(split_digits(text[at + "priority:".len()..].trim_start()).0))
        .unwrap_or(0);

    PortInfo {
        name: name.to_string(),
        priority,
        available: text.contains(", not available"),
    }
}

/// Parses every entry of the `Ports` section, keyed by port key.
pub fn parse_ports(section: &RawSection) -> IndexMap<String, PortInfo> {
    section
        .iter()
        .filter_map(|(key, node)| node.as_leaf().map(|text| (key.clone(), parse_port(text))))
        .collect()
}

/// Collects the entries of the `Formats` section in order, ignoring keys.
pub fn collect_formats(section: &RawSection) -> Vec<String> {
    section
        .values()
        .filter_map(RawNode::as_leaf)
        .map(|format| format.trim().to_string())
        .collect()
}
