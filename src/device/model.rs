//! Entities assembled from the control tool's dumps

use serde::{Deserialize, Serialize};

use super::kinds::{A2dpCodec, BluetoothProtocol, Bus, CardProfile, DeviceState, FormFactor};

/// Physical or logical audio adapter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub index: u64,
    pub name: String,
    pub driver: String,
    pub description: String,
    /// Populated for Bluetooth cards only
    pub profiles: Vec<CardProfile>,
    pub active_profile: CardProfile,
    pub source_ids: Vec<u64>,
    pub sink_ids: Vec<u64>,
    pub form_factor: FormFactor,
    pub bus: Bus,
}

/// Source or sink endpoint of a card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDevice {
    pub index: u64,
    pub name: String,
    pub driver: String,
    pub state: DeviceState,
    pub is_default: bool,
    /// Percentage of the raw 0-65535 scale
    pub volume: u32,
    pub is_muted: bool,
    pub card_index: u64,
    pub description: String,
    pub bluetooth_protocol: BluetoothProtocol,
    pub a2dp_codec: A2dpCodec,
    pub form_factor: FormFactor,
    pub bus: Bus,
}

/// Application stream attached to a source or sink
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioClient {
    pub index: u64,
    pub card_device_index: u64,
}
