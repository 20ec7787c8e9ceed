mod common;

use common::{report, sink_block, TWO_SINKS};
use pactl_sinks::{
    from_reader, grab, parse, parse_with_options, DecibelPolicy, Error, GrammarError,
    ParseOptions, PortInfo, PropertyValue, StaticSource, Value, Volume,
};

#[test]
fn test_two_sinks_in_document_order() {
    let sinks = parse(TWO_SINKS).unwrap();

    assert_eq!(sinks.len(), 2);
    assert_eq!(sinks[0].id(), Some(0));
    assert_eq!(sinks[1].id(), Some(1));
    assert_eq!(sinks[0].get("state").and_then(Value::as_str), Some("SUSPENDED"));
    assert_eq!(sinks[1].get("state").and_then(Value::as_str), Some("RUNNING"));
}

#[test]
fn test_field_order_follows_report() {
    let sinks = parse(TWO_SINKS).unwrap();
    let keys: Vec<_> = sinks[0].keys().map(String::as_str).collect();

    assert_eq!(
        keys,
        vec![
            "state",
            "name",
            "description",
            "driver",
            "sampling",
            "channels",
            "ownerModule",
            "mute",
            "volume",
            "baseVolume",
            "monitorSource",
            "latency",
            "flags",
            "property",
            "ports",
            "activePort",
            "formats",
        ]
    );
}

#[test]
fn test_text_fields() {
    let sink = &parse(TWO_SINKS).unwrap()[0];

    assert_eq!(
        sink.get("name").and_then(Value::as_str),
        Some("alsa_output.pci-0000_00_1f.3.analog-stereo")
    );
    assert_eq!(
        sink.get("description").and_then(Value::as_str),
        Some("Built-in Audio Analog Stereo")
    );
    assert_eq!(sink.get("driver").and_then(Value::as_str), Some("module-alsa-card.c"));
    assert_eq!(
        sink.get("monitorSource").and_then(Value::as_str),
        Some("alsa_output.pci-0000_00_1f.3.analog-stereo.monitor")
    );
    assert_eq!(
        sink.get("activePort").and_then(Value::as_str),
        Some("analog-output-speaker")
    );
}

#[test]
fn test_scalar_fields() {
    let sinks = parse(TWO_SINKS).unwrap();

    let spec = sinks[0].get("sampling").and_then(Value::as_sample_spec).unwrap();
    assert_eq!(spec.format, "s16le");
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.frequency_hz, 44100);

    assert_eq!(sinks[0].get("ownerModule"), Some(&Value::Integer(7)));
    assert_eq!(sinks[1].get("ownerModule"), Some(&Value::Integer(27)));
    assert_eq!(sinks[0].get("mute"), Some(&Value::Boolean(false)));
    assert_eq!(sinks[1].get("mute"), Some(&Value::Boolean(true)));
}

#[test]
fn test_list_fields() {
    let sink = &parse(TWO_SINKS).unwrap()[0];

    assert_eq!(
        sink.get("channels"),
        Some(&Value::StringList(vec![
            "front-left".to_string(),
            "front-right".to_string()
        ]))
    );
    assert_eq!(
        sink.get("flags").and_then(Value::as_list).map(<[String]>::len),
        Some(5)
    );
    assert_eq!(
        sink.get("formats"),
        Some(&Value::FormatList(vec!["pcm".to_string()]))
    );
}

#[test]
fn test_volumes() {
    let sinks = parse(TWO_SINKS).unwrap();

    let volume = sinks[0].get("volume").and_then(Value::as_channel_volumes).unwrap();
    assert_eq!(volume.channels.len(), 2);
    assert_eq!(
        volume.get("front-left"),
        Some(&Volume {
            raw: 52428,
            value: 0.8,
            decibel: -5.81
        })
    );
    assert_eq!(volume.balance, Some(0.0));

    assert_eq!(
        sinks[0].get("baseVolume"),
        Some(&Value::Volume(Volume {
            raw: 65536,
            value: 1.0,
            decibel: 0.0
        }))
    );

    let muted = sinks[1].get("volume").and_then(Value::as_channel_volumes).unwrap();
    assert_eq!(muted.get("front-right").map(|v| v.decibel), Some(f64::NEG_INFINITY));
}

#[test]
fn test_balance_line_indented_with_spaces() {
    let text = "Sink #0\n\
                \tVolume: front-left: 65536 / 100% / 0.00 dB,   front-right: 65536 / 100% / 0.00 dB\n\
                \t        balance -0.25\n\
                \tMute: no\n";
    let sink = &parse(text).unwrap()[0];

    let keys: Vec<_> = sink.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["volume", "mute"]);

    let volume = sink.get("volume").and_then(Value::as_channel_volumes).unwrap();
    assert_eq!(volume.channels.len(), 2);
    assert_eq!(volume.balance, Some(-0.25));
}

#[test]
fn test_latency() {
    let sinks = parse(TWO_SINKS).unwrap();

    let idle = sinks[0].get("latency").and_then(Value::as_latency).unwrap();
    assert_eq!(idle.current_seconds, 0.0);
    assert_eq!(idle.configured_seconds, 0.0);

    let running = sinks[1].get("latency").and_then(Value::as_latency).unwrap();
    assert_eq!(running.current_seconds, 0.041233);
    assert_eq!(running.configured_seconds, 0.04);
}

#[test]
fn test_properties() {
    let sink = &parse(TWO_SINKS).unwrap()[0];
    let property = sink.get("property").and_then(Value::as_property_tree).unwrap();

    assert_eq!(property.get_path("alsa.card"), Some(&PropertyValue::Integer(0)));
    assert_eq!(property.get_path("alsa.resolution_bits"), Some(&PropertyValue::Integer(16)));
    assert_eq!(
        property.get_path("device.buffering.fragment_size"),
        Some(&PropertyValue::Integer(176400))
    );
    assert_eq!(
        property.get_path("module-udev-detect.discovered"),
        Some(&PropertyValue::Boolean(true))
    );
    assert_eq!(
        property.get_path("alsa.card_name").and_then(PropertyValue::as_str),
        Some("HDA Intel PCH")
    );
    assert_eq!(
        property.get_path("device.description").and_then(PropertyValue::as_str),
        Some("Built-in Audio Analog Stereo")
    );

    let top: Vec<_> = property.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(top, vec!["alsa", "device", "module-udev-detect"]);
}

#[test]
fn test_ports() {
    let sink = &parse(TWO_SINKS).unwrap()[0];
    let ports = sink.get("ports").and_then(Value::as_ports).unwrap();

    assert_eq!(
        ports.get("analog-output-speaker"),
        Some(&PortInfo {
            name: "Speakers".to_string(),
            priority: 10000,
            available: false,
        })
    );
    assert_eq!(
        ports.get("analog-output-headphones"),
        Some(&PortInfo {
            name: "Headphones".to_string(),
            priority: 9000,
            available: true,
        })
    );
}

#[test]
fn test_empty_report() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse("\n").unwrap().is_empty());
}

#[test]
fn test_mute_error_names_record_and_key() {
    let text = report(&[
        sink_block(0, &[("Mute", "no")]),
        sink_block(1, &[("Name", "second"), ("Mute", "maybe")]),
    ]);

    assert_eq!(
        parse(&text),
        Err(Error::FieldParse {
            record_index: 1,
            key: "Mute".to_string(),
            raw_value: "maybe".to_string(),
            source: GrammarError::Mute,
        })
    );
}

#[test]
fn test_strict_fields_reject_malformed_values() {
    for (key, value, expected) in [
        ("Volume", "front-left: loud", GrammarError::Volume),
        ("Base Volume", "65536 / 100%", GrammarError::Volume),
        ("Latency", "about a second", GrammarError::Latency),
        ("Sample Specification", "s16le", GrammarError::SampleSpec),
    ] {
        let text = sink_block(0, &[(key, value)]);
        match parse(&text) {
            Err(Error::FieldParse { key: k, source, .. }) => {
                assert_eq!(k, key);
                assert_eq!(source, expected);
            }
            other => panic!("{} accepted {:?}: {:?}", key, value, other),
        }
    }
}

#[test]
fn test_lenient_fields_never_fail() {
    let text = sink_block(
        0,
        &[
            ("Owner Module", "n/a"),
            ("Channel Map", ""),
            ("Flags", "???"),
            ("Card", "12 (alsa_card.pci)"),
        ],
    );
    let sink = &parse(&text).unwrap()[0];

    assert_eq!(sink.get("ownerModule").and_then(Value::as_str), Some("n/a"));
    assert_eq!(sink.get("card").and_then(Value::as_str), Some("12 (alsa_card.pci)"));
    assert_eq!(
        sink.get("flags"),
        Some(&Value::StringList(vec!["???".to_string()]))
    );
}

#[test]
fn test_finite_only_rejects_silent_sink() {
    let options = ParseOptions::new().with_decibels(DecibelPolicy::FiniteOnly);
    match parse_with_options(TWO_SINKS, &options) {
        Err(Error::FieldParse {
            record_index,
            key,
            source,
            ..
        }) => {
            assert_eq!(record_index, 1);
            assert_eq!(key, "Volume");
            assert_eq!(source, GrammarError::Decibel);
        }
        other => panic!("expected a decibel error, got {:?}", other),
    }
}

#[test]
fn test_raw_keys_when_canonical_keys_disabled() {
    let options = ParseOptions::new().with_canonical_keys(false);
    let sink = &parse_with_options(TWO_SINKS, &options).unwrap()[0];

    assert!(sink.get("sample specification").is_some());
    assert!(sink.get("properties").is_some());
    assert!(sink.get("sampling").is_none());
}

#[test]
fn test_from_reader_matches_parse() {
    let from_stream = from_reader(std::io::Cursor::new(TWO_SINKS.as_bytes())).unwrap();
    assert_eq!(from_stream, parse(TWO_SINKS).unwrap());
}

#[test]
fn test_grab_from_static_source() {
    let sinks = grab(&StaticSource::new(TWO_SINKS)).unwrap();
    assert_eq!(sinks.len(), 2);
}
