//! Bus messages

use std::sync::Arc;

use crate::audio::CardsWithDevices;

/// Broadcast channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    DeviceState,
}

/// Broadcastable state, one variant per kind
#[derive(Debug, Clone)]
pub enum Payload {
    DeviceState(Arc<CardsWithDevices>),
}

/// Payload tagged with the topic it is published on
#[derive(Debug, Clone)]
pub struct Message {
    pub topic: Topic,
    pub payload: Payload,
}

impl Message {
    pub fn new(topic: Topic, payload: Payload) -> Self {
        Self { topic, payload }
    }

    /// Device-state snapshot on [`Topic::DeviceState`]
    pub fn device_state(snapshot: impl Into<Arc<CardsWithDevices>>) -> Self {
        Self::new(Topic::DeviceState, Payload::DeviceState(snapshot.into()))
    }
}
