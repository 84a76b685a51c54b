//! Periodic snapshot producer

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::audio::AudioController;
use crate::config::AudioConfig;
use crate::error::BusError;
use crate::lifecycle::Lifecycle;
use crate::pubsub::{Message, PubSub};

/// Fetches a snapshot every poll interval and publishes it on the bus
pub struct Monitor {
    audio: AudioController,
    bus: Arc<PubSub>,
    interval: Duration,
    lifecycle: Lifecycle,
}

impl Monitor {
    pub fn new(audio: AudioController, bus: Arc<PubSub>, config: &AudioConfig) -> Self {
        Self {
            audio,
            bus,
            interval: config.poll_interval(),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn start(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.lifecycle.try_start() {
            tracing::debug!("Audio monitor already running");
            return None;
        }

        let monitor = self.clone();

        Some(tokio::spawn(async move {
            tracing::info!("Audio monitor started, polling every {:?}", monitor.interval);

            loop {
                if let Err(e) = monitor.poll().await {
                    tracing::error!("Audio monitor could not publish: {}", e);
                    break;
                }

                tokio::time::sleep(monitor.interval).await;
            }

            tracing::error!("Audio monitor has stopped");
        }))
    }

    /// Fetch one snapshot and publish it
    pub async fn poll(&self) -> Result<(), BusError> {
        let snapshot = self.audio.fetch_snapshot().await;

        tracing::debug!(
            "Polled {} cards, {} sources, {} sinks",
            snapshot.cards.len(),
            snapshot.sources.len(),
            snapshot.sinks.len()
        );

        self.bus.publish(Message::device_state(snapshot)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::testing::ScriptedRunner;
    use crate::command::CommandOutput;
    use crate::config::BusConfig;
    use crate::parser::fixtures::{LIST_CARDS, LIST_SINKS, LIST_SOURCES};
    use crate::pubsub::{Payload, Topic};
    use tokio::time::timeout;

    fn monitor(bus: &Arc<PubSub>) -> Arc<Monitor> {
        let runner = ScriptedRunner::new()
            .reply("list-cards", CommandOutput::ok(LIST_CARDS))
            .reply("list-sources", CommandOutput::ok(LIST_SOURCES))
            .reply("list-sinks", CommandOutput::ok(LIST_SINKS));
        let config = AudioConfig {
            poll_interval_secs: 1,
            ..Default::default()
        };

        Arc::new(Monitor::new(
            AudioController::new(Arc::new(runner), &config),
            bus.clone(),
            &config,
        ))
    }

    #[tokio::test]
    async fn test_publishes_snapshots() {
        let bus = Arc::new(PubSub::new(&BusConfig::default()));
        bus.start();
        let mut inbox = bus.subscribe(Topic::DeviceState);

        let monitor = monitor(&bus);
        assert!(monitor.start().is_some());
        assert!(monitor.start().is_none());

        let msg = timeout(Duration::from_secs(2), inbox.recv()).await.unwrap().unwrap();
        match msg.payload {
            Payload::DeviceState(snapshot) => {
                assert_eq!(snapshot.cards.len(), 2);
                assert_eq!(snapshot.sinks.len(), 2);
            }
        }

        // Second round after the poll interval
        timeout(Duration::from_secs(3), inbox.recv()).await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_poll_queues_without_dispatcher() {
        let bus = Arc::new(PubSub::new(&BusConfig::default()));

        monitor(&bus).poll().await.unwrap();
        assert!(!bus.is_running());
    }
}
