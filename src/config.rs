//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::*;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Web server configuration
    pub server: ServerConfig,

    /// Control tool and snapshot polling
    pub audio: AudioConfig,

    /// Publish/subscribe bus
    pub bus: BusConfig,

    /// Microphone notification updater
    pub notifier: NotifierConfig,

    /// Device-migration watchdog
    pub watchdog: WatchdogConfig,

    /// Log output
    pub logging: LoggingConfig,
}

/// Web server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address for the web server
    pub bind_address: String,

    /// HTTP port, 0 when unset
    pub port: u16,

    /// Enable CORS
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 0,
            enable_cors: true,
        }
    }
}

/// Control tool configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Control tool binary
    pub control_tool: String,

    /// Seconds between periodic snapshots
    pub poll_interval_secs: u64,

    /// Fail a control tool run after this many seconds. Unset means wait forever.
    pub fetch_timeout_secs: Option<u64>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            control_tool: DEFAULT_CONTROL_TOOL.to_string(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            fetch_timeout_secs: None,
        }
    }
}

impl AudioConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_secs.map(Duration::from_secs)
    }
}

/// Publish/subscribe bus configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusConfig {
    /// Inbound queue capacity; publishers wait when it is full
    pub queue_capacity: usize,

    /// Per-subscriber delivery deadline in milliseconds
    pub delivery_timeout_ms: u64,

    /// Capacity of inboxes created through `PubSub::subscribe`
    pub inbox_capacity: usize,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            delivery_timeout_ms: DEFAULT_DELIVERY_TIMEOUT_MS,
            inbox_capacity: DEFAULT_INBOX_CAPACITY,
        }
    }
}

impl BusConfig {
    pub fn delivery_timeout(&self) -> Duration {
        Duration::from_millis(self.delivery_timeout_ms)
    }
}

/// Microphone notification updater configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    pub enabled: bool,

    /// `Name=` of the panel launcher whose icon follows the default source
    pub applet_name: String,

    /// Panel configuration directory; `~/.config/xfce4/panel` when unset
    pub panel_dir: Option<PathBuf>,

    /// Desktop notification tool
    pub notify_tool: String,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            applet_name: "toggle_microphone".to_string(),
            panel_dir: None,
            notify_tool: "notify-send".to_string(),
        }
    }
}

impl NotifierConfig {
    /// Resolved panel configuration directory
    pub fn panel_dir(&self) -> Option<PathBuf> {
        self.panel_dir.clone().or_else(|| {
            directories::BaseDirs::new().map(|dirs| dirs.config_dir().join("xfce4").join("panel"))
        })
    }
}

/// Device-migration watchdog configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchdogConfig {
    pub enabled: bool,
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Log output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl AppConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config file path
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "audio-cctl", "cctl")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
