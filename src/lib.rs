//! Sound-server device monitor and control daemon
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐   text dumps   ┌─────────────────┐  snapshot  ┌──────────────┐
//! │ control tool │ ─────────────▶ │ AudioController │ ─────────▶ │    PubSub    │
//! │   (pacmd)    │ ◀───────────── │ parsers + merge │            │ (dispatcher) │
//! └──────────────┘    commands    └─────────────────┘            └──────┬───────┘
//!                                                                       │ fan-out
//!                                   ┌──────────┬──────────┬─────────────┤
//!                                   ▼          ▼          ▼             ▼
//!                               Watchdog   Notifier   WebSocket …   (evicted if
//!                                                                    stalled > 1s)
//! ```

pub mod audio;
pub mod command;
pub mod config;
pub mod device;
pub mod error;
pub mod lifecycle;
pub mod parser;
pub mod protocol;
pub mod pubsub;
pub mod services;
pub mod ui;

pub use error::{Error, Result};

/// Shared constants
pub mod constants {
    /// Control tool binary
    pub const DEFAULT_CONTROL_TOOL: &str = "pacmd";

    /// Seconds between periodic snapshots
    pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 15;

    /// Per-subscriber delivery deadline
    pub const DEFAULT_DELIVERY_TIMEOUT_MS: u64 = 1000;

    /// Bus inbound queue capacity
    pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

    /// Capacity of inboxes created by the daemon's own consumers
    ///
    /// A consumer busy with one snapshot (a slow `move_audio_clients` in the
    /// watchdog) can fall this many snapshots behind before it is evicted. Eviction
    /// ends the consumer's loop, which stops the daemon.
    pub const DEFAULT_INBOX_CAPACITY: usize = 4;

    /// Upper bound of the raw volume scale
    pub const VOLUME_RAW_MAX: f64 = 65535.0;

    /// Client name of the volume-control UI, never migrated
    pub const VOLUME_CONTROL_CLIENT: &str = "PulseAudio Volume Control";
}
