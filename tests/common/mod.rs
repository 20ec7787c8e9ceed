//! Shared sink report fixtures

#![allow(dead_code)] // Not every test file uses every fixture

/// A two-sink report in the layout `pactl list sinks` prints.
pub const TWO_SINKS: &str = "\
Sink #0
\tState: SUSPENDED
\tName: alsa_output.pci-0000_00_1f.3.analog-stereo
\tDescription: Built-in Audio
\t\tAnalog Stereo
\tDriver: module-alsa-card.c
\tSample Specification: s16le 2ch 44100Hz
\tChannel Map: front-left,front-right
\tOwner Module: 7
\tMute: no
\tVolume: front-left: 52428 /  80% / -5.81 dB,   front-right: 52428 /  80% / -5.81 dB
\t        balance 0.00
\tBase Volume: 65536 / 100% / 0.00 dB
\tMonitor Source: alsa_output.pci-0000_00_1f.3.analog-stereo.monitor
\tLatency: 0 usec, configured 0 usec
\tFlags: HARDWARE HW_MUTE_CTRL HW_VOLUME_CTRL DECIBEL_VOLUME LATENCY
\tProperties:
\t\talsa.resolution_bits = \"16\"
\t\tdevice.api = \"alsa\"
\t\tdevice.class = \"sound\"
\t\talsa.name = \"ALC3246 Analog\"
\t\talsa.subdevice = \"0\"
\t\talsa.device = \"0\"
\t\talsa.card = \"0\"
\t\talsa.card_name = \"HDA Intel PCH\"
\t\tdevice.buffering.buffer_size = \"352800\"
\t\tdevice.buffering.fragment_size = \"176400\"
\t\tmodule-udev-detect.discovered = \"1\"
\t\tdevice.description = \"Built-in Audio Analog Stereo\"
\tPorts:
\t\tanalog-output-speaker: Speakers (priority: 10000)
\t\tanalog-output-headphones: Headphones (priority: 9000, not available)
\tActive Port: analog-output-speaker
\tFormats:
\t\tpcm

Sink #1
\tState: RUNNING
\tName: bluez_sink.00_11_22_33_44_55.a2dp_sink
\tDescription: WH-1000XM3
\tDriver: module-bluez5-device.c
\tSample Specification: s16le 2ch 48000Hz
\tChannel Map: front-left,front-right
\tOwner Module: 27
\tMute: yes
\tVolume: front-left: 0 /   0% / -inf dB,   front-right: 0 /   0% / -inf dB
\t        balance 0.00
\tBase Volume: 65536 / 100% / 0.00 dB
\tMonitor Source: bluez_sink.00_11_22_33_44_55.a2dp_sink.monitor
\tLatency: 41233 usec, configured 40000 usec
\tFlags: HARDWARE DECIBEL_VOLUME LATENCY
\tProperties:
\t\tbluetooth.protocol = \"a2dp_sink\"
\t\tdevice.description = \"WH-1000XM3\"
\tPorts:
\t\theadset-output: Headset (priority: 0)
\tActive Port: headset-output
\tFormats:
\t\tpcm
";

/// Builds a minimal sink block with the given header number and fields.
pub fn sink_block(id: u32, fields: &[(&str, &str)]) -> String {
    let mut block = format!("Sink #{}\n", id);
    for (key, value) in fields {
        block.push_str(&format!("\t{}: {}\n", key, value));
    }
    block
}

/// Joins sink blocks with the blank line `pactl` puts between them.
pub fn report(blocks: &[String]) -> String {
    blocks.join("\n")
}
