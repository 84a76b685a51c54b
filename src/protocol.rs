//! Web boundary wire types
//!
//! ## Snapshot
//!
//! ```text
//! {
//!   "cards":   [ { "index": 5, "activeProfile": "a2dp_sink_sbc", ... } ],
//!   "sources": [ { "index": 1, "isDefault": true, "volume": 75, ... } ],
//!   "sinks":   [ ... ],
//!   "timestamp": 1700000000000        // ms since epoch
//! }
//! ```
//!
//! Requests carry the device type as `"source"` or `"sink"`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::audio::CardsWithDevices;
use crate::device::CardProfile;

/// Snapshot as sent to web clients
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotResponse {
    #[serde(flatten)]
    pub snapshot: Arc<CardsWithDevices>,

    /// Milliseconds since the Unix epoch at the time of sending
    pub timestamp: u64,
}

impl SnapshotResponse {
    /// Stamp a snapshot with the current time
    pub fn now(snapshot: Arc<CardsWithDevices>) -> Self {
        Self {
            snapshot,
            timestamp: chrono::Utc::now().timestamp_millis().max(0) as u64,
        }
    }
}

/// `POST /audio/volume`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeRequest {
    #[serde(rename = "type")]
    pub device_type: String,
    pub index: u64,
    /// Percentage, clamped to `[0, 100]`
    pub volume: f64,
}

/// `POST /audio/mute`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuteRequest {
    #[serde(rename = "type")]
    pub device_type: String,
    pub index: u64,
    pub mute: bool,
}

/// `POST /audio/default`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultDeviceRequest {
    #[serde(rename = "type")]
    pub device_type: String,
    pub index: u64,
    /// Device name clients are moved to
    pub name: String,
}

/// `POST /audio/profile`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardProfileRequest {
    pub index: u64,
    pub profile: CardProfile,
}

/// Body of every non-2xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
