//! Keeps audio clients on the default devices

use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::audio::{AudioController, CardsWithDevices};
use crate::device::CardDeviceType;
use crate::lifecycle::Lifecycle;
use crate::pubsub::{Payload, PubSub, Topic};

/// Moves every stream to the current default source and sink on each snapshot
pub struct Watchdog {
    audio: AudioController,
    bus: Arc<PubSub>,
    lifecycle: Lifecycle,
}

impl Watchdog {
    pub fn new(audio: AudioController, bus: Arc<PubSub>) -> Self {
        Self {
            audio,
            bus,
            lifecycle: Lifecycle::new(),
        }
    }

    /// Subscribe to device state and spawn the migration loop
    pub fn start(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.lifecycle.try_start() {
            tracing::debug!("Audio watchdog already running");
            return None;
        }

        let mut inbox = self.bus.subscribe(Topic::DeviceState);
        let watchdog = self.clone();

        Some(tokio::spawn(async move {
            tracing::info!("Audio watchdog started");

            while let Some(msg) = inbox.recv().await {
                match msg.payload {
                    Payload::DeviceState(snapshot) => watchdog.migrate(&snapshot).await,
                }
            }

            tracing::error!("Audio watchdog has stopped");
        }))
    }

    /// Move clients off non-default devices
    pub async fn migrate(&self, snapshot: &CardsWithDevices) {
        for device_type in [CardDeviceType::Source, CardDeviceType::Sink] {
            let Some(device) = snapshot.default_device(device_type) else {
                continue;
            };

            match self
                .audio
                .move_audio_clients(device_type, device.index, &device.name)
                .await
            {
                Ok(0) => {}
                Ok(moved) => tracing::info!("Moved {} audio clients to {} {}", moved, device_type, device.name),
                Err(e) => tracing::error!("Could not migrate {} clients: {}", device_type, e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::testing::ScriptedRunner;
    use crate::command::CommandOutput;
    use crate::config::{AudioConfig, BusConfig};
    use crate::device::CardDevice;
    use crate::parser::fixtures::{LIST_SINK_INPUTS, LIST_SOURCE_OUTPUTS};
    use crate::pubsub::Message;
    use std::time::Duration;

    fn device(index: u64, name: &str) -> CardDevice {
        CardDevice {
            index,
            name: name.to_string(),
            is_default: true,
            ..Default::default()
        }
    }

    fn setup() -> (Arc<ScriptedRunner>, Arc<PubSub>, Arc<Watchdog>) {
        let runner = Arc::new(
            ScriptedRunner::new()
                .reply("list-sink-inputs", CommandOutput::ok(LIST_SINK_INPUTS))
                .reply("list-source-outputs", CommandOutput::ok(LIST_SOURCE_OUTPUTS)),
        );
        let bus = Arc::new(PubSub::new(&BusConfig::default()));
        let audio = AudioController::new(runner.clone(), &AudioConfig::default());
        let watchdog = Arc::new(Watchdog::new(audio, bus.clone()));

        (runner, bus, watchdog)
    }

    #[tokio::test]
    async fn test_migrates_to_both_defaults() {
        let (runner, _bus, watchdog) = setup();
        let snapshot = CardsWithDevices {
            sources: vec![device(1, "alsa_input.mic")],
            sinks: vec![device(3, "bluez_sink.a2dp_sink")],
            ..Default::default()
        };

        watchdog.migrate(&snapshot).await;

        assert_eq!(
            runner.calls_to("move-source-output"),
            vec![vec![
                "move-source-output".to_string(),
                "4".to_string(),
                "alsa_input.mic".to_string()
            ]]
        );
        assert_eq!(
            runner.calls_to("move-sink-input"),
            vec![vec![
                "move-sink-input".to_string(),
                "11".to_string(),
                "bluez_sink.a2dp_sink".to_string()
            ]]
        );
    }

    #[tokio::test]
    async fn test_no_default_means_no_commands() {
        let (runner, _bus, watchdog) = setup();

        watchdog.migrate(&CardsWithDevices::default()).await;

        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn test_reacts_to_published_snapshots() {
        let (runner, bus, watchdog) = setup();
        bus.start();
        assert!(watchdog.start().is_some());
        assert!(watchdog.start().is_none());
        assert_eq!(bus.subscriber_count(Topic::DeviceState), 1);

        bus.publish(Message::device_state(CardsWithDevices {
            sinks: vec![device(0, "alsa_output.speakers")],
            ..Default::default()
        }))
        .await
        .unwrap();

        let moved = async {
            while runner.calls_to("move-sink-input").len() < 2 {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        };
        tokio::time::timeout(Duration::from_secs(2), moved).await.unwrap();
        assert!(runner.calls_to("list-source-outputs").is_empty());
    }
}
