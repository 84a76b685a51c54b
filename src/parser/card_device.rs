//! `list-sources` / `list-sinks` parser

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::VOLUME_RAW_MAX;
use crate::device::CardDevice;

use super::{extract_record, parse_u64, unquote};

/// `<channel>: <raw> / ...`, first channel only
static VOLUME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^:]+:\s*(?P<raw>[0-9]+)").expect("valid volume pattern"));

/// Convert a raw 0-65535 volume into a rounded percentage
pub fn volume_percentage(raw: u64) -> u32 {
    ((raw as f64 / VOLUME_RAW_MAX) * 100.0).round() as u32
}

fn parse_volume(value: &str) -> u32 {
    VOLUME_RE
        .captures(value)
        .and_then(|c| c.name("raw"))
        .map(|raw| volume_percentage(parse_u64(raw.as_str())))
        .unwrap_or(0)
}

/// Parse a `list-sources` or `list-sinks` dump
///
/// Monitor pseudo-devices (blocks with `monitor_of`) are dropped.
pub fn parse_card_devices(text: &str) -> Vec<CardDevice> {
    let mut devices = Vec::new();
    let mut current: Option<CardDevice> = None;

    for line in text.lines() {
        let Some(record) = extract_record(line) else {
            continue;
        };

        if record.bare_key() == "index" {
            devices.extend(current.take());
            current = Some(CardDevice {
                index: parse_u64(record.value),
                is_default: record.is_default_marked(),
                ..Default::default()
            });
            continue;
        }

        if record.key == "monitor_of" {
            current = None;
            continue;
        }

        let Some(device) = current.as_mut() else {
            continue;
        };

        match record.key {
            "name" => device.name = unquote(record.value),
            "driver" => device.driver = unquote(record.value),
            "device.description" => device.description = unquote(record.value),
            "muted" => device.is_muted = record.value == "yes",
            "card" => {
                device.card_index = parse_u64(record.value.split(' ').next().unwrap_or_default())
            }
            "state" => device.state = record.value.parse().unwrap_or_default(),
            "volume" => device.volume = parse_volume(record.value),
            "device.form_factor" => {
                device.form_factor = unquote(record.value).parse().unwrap_or_default()
            }
            "device.bus" => device.bus = unquote(record.value).parse().unwrap_or_default(),
            "bluetooth.protocol" => {
                device.bluetooth_protocol = unquote(record.value).parse().unwrap_or_default()
            }
            "bluetooth.a2dp_codec" => {
                device.a2dp_codec = unquote(record.value).parse().unwrap_or_default()
            }
            _ => {}
        }
    }

    devices.extend(current);

    tracing::trace!("Parsed {} card device(s)", devices.len());

    devices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{A2dpCodec, BluetoothProtocol, Bus, DeviceState, FormFactor};
    use crate::parser::fixtures::{LIST_SINKS, LIST_SOURCES};
    use proptest::prelude::*;

    #[test]
    fn test_volume_percentage() {
        assert_eq!(volume_percentage(32767), 50);
        assert_eq!(volume_percentage(65535), 100);
        assert_eq!(volume_percentage(0), 0);
        assert_eq!(volume_percentage(49151), 75);
    }

    #[test]
    fn test_reparse_is_identical() {
        assert_eq!(parse_card_devices(LIST_SINKS), parse_card_devices(LIST_SINKS));
        assert_eq!(parse_card_devices(LIST_SOURCES), parse_card_devices(LIST_SOURCES));
        assert_eq!(
            parse_card_devices(&LIST_SINKS.replace('\n', "\r\n")),
            parse_card_devices(LIST_SINKS)
        );
    }

    #[test]
    fn test_monitors_are_dropped() {
        let sources = parse_card_devices(LIST_SOURCES);
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].index, 1);
    }

    #[test]
    fn test_parse_default_source() {
        let sources = parse_card_devices(LIST_SOURCES);
        let mic = &sources[0];

        assert!(mic.is_default);
        assert_eq!(mic.name, "alsa_input.pci-0000_00_1f.3.analog-stereo");
        assert_eq!(mic.driver, "module-alsa-card.c");
        assert_eq!(mic.state, DeviceState::Running);
        assert_eq!(mic.volume, 75);
        assert!(!mic.is_muted);
        assert_eq!(mic.card_index, 0);
        assert_eq!(mic.description, "Built-in Audio Analog Stereo");
        assert_eq!(mic.bus, Bus::Pci);
        assert_eq!(mic.form_factor, FormFactor::Internal);
    }

    #[test]
    fn test_parse_sinks() {
        let sinks = parse_card_devices(LIST_SINKS);
        assert_eq!(sinks.len(), 2);

        assert!(sinks[0].is_default);
        assert_eq!(sinks[0].volume, 50);
        assert_eq!(sinks[0].state, DeviceState::Idle);

        let headset = &sinks[1];
        assert!(!headset.is_default);
        assert!(headset.is_muted);
        assert_eq!(headset.volume, 100);
        assert_eq!(headset.card_index, 5);
        assert_eq!(headset.bluetooth_protocol, BluetoothProtocol::A2dpSink);
        assert_eq!(headset.a2dp_codec, A2dpCodec::Sbc);
        assert_eq!(headset.bus, Bus::Bluetooth);
        assert_eq!(headset.form_factor, FormFactor::Headset);
    }

    #[test]
    fn test_monitor_block_discards_only_itself() {
        let dump = "  * index: 0
	name: <mon>
	monitor_of: 2
	card: 9 <x>
    index: 1
	name: <real>
";
        let devices = parse_card_devices(dump);
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].name, "real");
        assert!(!devices[0].is_default);
    }

    #[test]
    fn test_malformed_fields_keep_zero_values() {
        let dump = "index: 7
	state: HIBERNATING
	volume: garbage
	card: none
	bluetooth.a2dp_codec = \"ldac\"
";
        let devices = parse_card_devices(dump);
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].index, 7);
        assert_eq!(devices[0].state, DeviceState::Unspecified);
        assert_eq!(devices[0].volume, 0);
        assert_eq!(devices[0].card_index, 0);
        assert_eq!(devices[0].a2dp_codec, A2dpCodec::Unspecified);
    }

    proptest! {
        #[test]
        fn test_default_marker_sets_flag(default_at in 0usize..5, count in 5usize..8) {
            let dump: String = (0..count)
                .map(|i| {
                    let marker = if i == default_at { "* " } else { "" };
                    format!("  {marker}index: {i}\n\tname: <dev_{i}>\n")
                })
                .collect();

            let devices = parse_card_devices(&dump);

            prop_assert_eq!(devices.len(), count);
            for (i, device) in devices.iter().enumerate() {
                prop_assert_eq!(device.is_default, i == default_at);
            }
        }

        #[test]
        fn test_volume_in_range(raw in 0u64..=65535) {
            let percentage = volume_percentage(raw);
            prop_assert!(percentage <= 100);
        }
    }
}
