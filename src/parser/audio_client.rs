//! `list-sink-inputs` / `list-source-outputs` parser

use crate::constants::VOLUME_CONTROL_CLIENT;
use crate::device::AudioClient;

use super::{extract_record, parse_attachment, parse_u64};

/// Parse the streams attached to sinks or sources
///
/// A record is appended on each `client` line using the most recent `index` and
/// attachment. Streams recording a monitor and the volume-control UI itself are
/// not movable and are skipped.
pub fn parse_audio_clients(text: &str) -> Vec<AudioClient> {
    let mut clients = Vec::new();
    let mut client_index = 0;
    let mut card_device_index = 0;
    let mut monitor = false;

    for line in text.lines() {
        let Some(record) = extract_record(line) else {
            continue;
        };

        match record.key {
            "index" => client_index = parse_u64(record.value),
            "source" | "sink" => {
                let (index, name) = parse_attachment(record.value).unwrap_or((0, ""));

                card_device_index = index;
                monitor = name.ends_with(".monitor");
            }
            "client" => {
                if monitor {
                    continue;
                }

                let name = parse_attachment(record.value).map_or("", |(_, name)| name);
                if name == VOLUME_CONTROL_CLIENT {
                    continue;
                }

                clients.push(AudioClient {
                    index: client_index,
                    card_device_index,
                });
            }
            _ => {}
        }
    }

    tracing::trace!("Parsed {} audio client(s)", clients.len());

    clients
}
