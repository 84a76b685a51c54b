//! Microphone state notifications
//!
//! Follows the default source. Whenever it changes (another device, volume or mute)
//! the panel launcher icon is swapped to match and a desktop notification shows the
//! new volume.

use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::audio::CardsWithDevices;
use crate::command::CommandRunner;
use crate::config::NotifierConfig;
use crate::device::{CardDevice, CardDeviceType};
use crate::lifecycle::Lifecycle;
use crate::pubsub::{Payload, PubSub, Topic};

pub const ICON_MUTED: &str = "microphone-sensitivity-muted-symbolic";
pub const ICON_LOW: &str = "microphone-sensitivity-low-symbolic";
pub const ICON_MEDIUM: &str = "microphone-sensitivity-medium-symbolic";
pub const ICON_HIGH: &str = "microphone-sensitivity-high-symbolic";

/// Icon name for a source's mute and volume state
pub fn icon_for(source: &CardDevice) -> &'static str {
    if source.is_muted {
        ICON_MUTED
    } else if source.volume < 25 {
        ICON_LOW
    } else if source.volume > 75 {
        ICON_HIGH
    } else {
        ICON_MEDIUM
    }
}

/// Parts of the default source that trigger a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SourceState {
    index: u64,
    volume: u32,
    is_muted: bool,
}

impl From<&CardDevice> for SourceState {
    fn from(device: &CardDevice) -> Self {
        Self {
            index: device.index,
            volume: device.volume,
            is_muted: device.is_muted,
        }
    }
}

pub struct Notifier {
    runner: Arc<dyn CommandRunner>,
    bus: Arc<PubSub>,
    config: NotifierConfig,
    panel_dir: Option<PathBuf>,
    last: Mutex<Option<SourceState>>,
    lifecycle: Lifecycle,
}

impl Notifier {
    pub fn new(runner: Arc<dyn CommandRunner>, bus: Arc<PubSub>, config: &NotifierConfig) -> Self {
        Self {
            runner,
            bus,
            panel_dir: config.panel_dir(),
            config: config.clone(),
            last: Mutex::new(None),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn start(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.lifecycle.try_start() {
            tracing::debug!("Notifier already running");
            return None;
        }

        let mut inbox = self.bus.subscribe(Topic::DeviceState);
        let notifier = self.clone();

        Some(tokio::spawn(async move {
            tracing::info!("Notifier started");

            while let Some(msg) = inbox.recv().await {
                match msg.payload {
                    Payload::DeviceState(snapshot) => {
                        notifier.handle(&snapshot).await;
                    }
                }
            }

            tracing::error!("Notifier has stopped");
        }))
    }

    /// React to one snapshot; returns `true` when the default source changed
    pub async fn handle(&self, snapshot: &CardsWithDevices) -> bool {
        let Some(source) = snapshot.default_device(CardDeviceType::Source) else {
            tracing::debug!("No default source in snapshot");
            return false;
        };

        let state = SourceState::from(source);
        {
            let mut last = self.last.lock();
            if *last == Some(state) {
                return false;
            }
            *last = Some(state);
        }

        let icon = icon_for(source);
        tracing::info!("Default source {} at {}%, muted: {}", source.name, source.volume, source.is_muted);

        self.update_applet(icon).await;
        self.notify(icon, source.volume).await;

        true
    }

    async fn update_applet(&self, icon: &str) {
        let Some(dir) = &self.panel_dir else {
            tracing::warn!("No panel configuration directory");
            return;
        };

        let Some(path) = find_applet_file(dir, &self.config.applet_name).await else {
            tracing::debug!("No launcher named {} under {}", self.config.applet_name, dir.display());
            return;
        };

        if let Err(e) = rewrite_icon(&path, icon).await {
            tracing::error!("Could not set the applet icon to {}: {}", icon, e);
        }
    }

    async fn notify(&self, icon: &str, volume: u32) {
        let args = ["-t", "1", "-i", icon]
            .iter()
            .map(|a| a.to_string())
            .chain(std::iter::once(volume.to_string()))
            .collect::<Vec<_>>();

        let output = self.runner.run(&self.config.notify_tool, &args).await;
        if !output.success {
            tracing::error!("Could not notify about new default source state: {}", output.combined());
        }
    }
}

/// First `.desktop` file directly under `dir` or one level below that contains
/// `Name=<name>`
pub async fn find_applet_file(dir: &Path, name: &str) -> Option<PathBuf> {
    let needle = format!("Name={}", name);
    let mut candidates = Vec::new();

    let mut entries = tokio::fs::read_dir(dir).await.ok()?;
    while let Ok(Some(entry)) = entries.next_entry().await {
        let path = entry.path();
        let is_dir = tokio::fs::metadata(&path).await.is_ok_and(|m| m.is_dir());
        if is_dir {
            if let Ok(mut nested) = tokio::fs::read_dir(&path).await {
                while let Ok(Some(entry)) = nested.next_entry().await {
                    candidates.push(entry.path());
                }
            }
        } else {
            candidates.push(path);
        }
    }

    candidates.retain(|p| p.extension().is_some_and(|ext| ext == "desktop"));
    candidates.sort();

    for path in candidates {
        if let Ok(content) = tokio::fs::read_to_string(&path).await {
            if content.lines().any(|line| line.trim() == needle) {
                return Some(path);
            }
        }
    }

    None
}

/// Replace every `Icon=` line of a desktop file
pub async fn rewrite_icon(path: &Path, icon: &str) -> std::io::Result<()> {
    let content = tokio::fs::read_to_string(path).await?;

    let mut rewritten: String = content
        .lines()
        .map(|line| {
            if line.starts_with("Icon=") {
                format!("Icon={}", icon)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    if content.ends_with('\n') {
        rewritten.push('\n');
    }

    tokio::fs::write(path, rewritten).await
}
