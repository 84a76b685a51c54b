//! `list-cards` parser

use crate::device::{Bus, Card};

use super::{extract_record, parse_u64, unquote};

/// Section of a card block the cursor is currently inside
#[derive(Debug, Default, Clone, Copy)]
struct Sections {
    profiles: bool,
    sinks: bool,
    sources: bool,
}

/// Parse a `list-cards` dump into cards, in dump order
pub fn parse_cards(text: &str) -> Vec<Card> {
    let mut cards = Vec::new();
    let mut current: Option<Card> = None;
    let mut sections = Sections::default();

    for line in text.lines() {
        let Some(record) = extract_record(line) else {
            continue;
        };

        if record.key == "index" {
            cards.extend(current.take());
            current = Some(Card {
                index: parse_u64(record.value),
                ..Default::default()
            });
            sections = Sections::default();
            continue;
        }

        let Some(card) = current.as_mut() else {
            continue;
        };

        match record.key {
            "name" => card.name = unquote(record.value),
            "driver" => card.driver = unquote(record.value),
            "device.description" => card.description = unquote(record.value),
            "device.bus" => card.bus = unquote(record.value).parse().unwrap_or_default(),
            "device.form_factor" => {
                card.form_factor = unquote(record.value).parse().unwrap_or_default()
            }
            "profiles" => sections.profiles = true,
            "active profile" => {
                sections.profiles = false;

                // Profile names off Bluetooth are driver specific
                if card.bus == Bus::Bluetooth {
                    card.active_profile = unquote(record.value).parse().unwrap_or_default();
                }
            }
            "sinks" => sections.sinks = true,
            "sources" => {
                sections.sinks = false;
                sections.sources = true;
            }
            "ports" => sections.sources = false,
            key => {
                if sections.profiles && card.bus == Bus::Bluetooth {
                    card.profiles.push(key.parse().unwrap_or_default());
                }

                if sections.sinks || sections.sources {
                    if let Some(suffix) = key.split('#').nth(1) {
                        let id = parse_u64(suffix);

                        if sections.sinks {
                            card.sink_ids.push(id);
                        } else {
                            card.source_ids.push(id);
                        }
                    }
                }
            }
        }
    }

    cards.extend(current);

    tracing::trace!("Parsed {} card(s)", cards.len());

    cards
}
