//! Concurrent snapshot aggregation

use serde::{Deserialize, Serialize};

use crate::device::{Card, CardDevice, CardDeviceType};
use crate::parser::{parse_card_devices, parse_cards};

use super::AudioController;

/// Point-in-time view of all cards and their devices
///
/// A list is empty when its fetch failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardsWithDevices {
    pub cards: Vec<Card>,
    pub sources: Vec<CardDevice>,
    pub sinks: Vec<CardDevice>,
}

impl CardsWithDevices {
    /// Default device of the given type, if the tool reported one
    pub fn default_device(&self, device_type: CardDeviceType) -> Option<&CardDevice> {
        let devices = match device_type {
            CardDeviceType::Source => &self.sources,
            CardDeviceType::Sink => &self.sinks,
        };

        devices.iter().find(|d| d.is_default)
    }
}

/// Outcome of one fetch task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult<T> {
    pub success: bool,
    pub items: Vec<T>,
}

impl<T> FetchResult<T> {
    fn into_items(self) -> Vec<T> {
        if self.success {
            self.items
        } else {
            Vec::new()
        }
    }
}

impl AudioController {
    /// Collect cards, sources and sinks concurrently and merge them
    ///
    /// Never fails: a failed fetch leaves its list empty and the other two intact.
    pub async fn fetch_snapshot(&self) -> CardsWithDevices {
        let (cards, sources, sinks) = tokio::join!(
            self.fetch_cards(),
            self.fetch_card_devices(CardDeviceType::Source),
            self.fetch_card_devices(CardDeviceType::Sink),
        );

        CardsWithDevices {
            cards: cards.into_items(),
            sources: sources.into_items(),
            sinks: sinks.into_items(),
        }
    }

    pub async fn fetch_cards(&self) -> FetchResult<Card> {
        let output = self.run(["list-cards"]).await;

        if !output.success {
            tracing::error!("Could not list cards: {}", output.combined());
            return FetchResult { success: false, items: Vec::new() };
        }

        FetchResult {
            success: true,
            items: parse_cards(&output.stdout),
        }
    }

    pub async fn fetch_card_devices(&self, device_type: CardDeviceType) -> FetchResult<CardDevice> {
        let verb = match device_type {
            CardDeviceType::Source => "list-sources",
            CardDeviceType::Sink => "list-sinks",
        };
        let output = self.run([verb]).await;

        if !output.success {
            tracing::error!("Could not list {}s: {}", device_type, output.combined());
            return FetchResult { success: false, items: Vec::new() };
        }

        FetchResult {
            success: true,
            items: parse_card_devices(&output.stdout),
        }
    }
}
