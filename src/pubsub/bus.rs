//! Broadcast bus with bounded-time delivery
//!
//! One dispatcher task drains a bounded inbound queue and fans every message out to
//! the topic's subscribers, one at a time and in registration order. Each
//! subscriber gets a fixed deadline to accept a message; a subscriber that misses
//! it is evicted so a stalled consumer can never wedge the others.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, error::SendTimeoutError, error::TrySendError};
use tokio::task::JoinHandle;

use crate::config::BusConfig;
use crate::error::BusError;
use crate::lifecycle::Lifecycle;

use super::message::{Message, Topic};

/// Identifies one registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug, Clone)]
struct Subscription {
    id: SubscriptionId,
    inbox: mpsc::Sender<Message>,
}

/// Publish/subscribe bus
///
/// Created once by the composition root and shared as `Arc<PubSub>`.
pub struct PubSub {
    inbound_tx: mpsc::Sender<Message>,
    inbound_rx: Mutex<Option<mpsc::Receiver<Message>>>,
    subscriptions: Mutex<HashMap<Topic, Vec<Subscription>>>,
    next_id: AtomicU64,
    delivery_timeout: Duration,
    inbox_capacity: usize,
    lifecycle: Lifecycle,
}

impl PubSub {
    pub fn new(config: &BusConfig) -> Self {
        let (inbound_tx, inbound_rx) = mpsc::channel(config.queue_capacity.max(1));

        Self {
            inbound_tx,
            inbound_rx: Mutex::new(Some(inbound_rx)),
            subscriptions: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(0),
            delivery_timeout: config.delivery_timeout(),
            inbox_capacity: config.inbox_capacity.max(1),
            lifecycle: Lifecycle::new(),
        }
    }

    /// Spawn the dispatcher
    ///
    /// Only the first call starts it; later calls return `None`. The returned task
    /// runs for as long as the bus exists.
    pub fn start(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.lifecycle.try_start() {
            tracing::debug!("PubSub already running");
            return None;
        }

        let mut inbound_rx = self.inbound_rx.lock().take()?;
        let bus = self.clone();

        Some(tokio::spawn(async move {
            tracing::info!("PubSub started");

            while let Some(msg) = inbound_rx.recv().await {
                bus.dispatch(msg).await;
            }

            tracing::error!("PubSub has stopped");
        }))
    }

    /// Add an inbox to a topic
    ///
    /// The inbox stays owned by the caller, who must keep draining it.
    pub fn register(&self, topic: Topic, inbox: mpsc::Sender<Message>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));

        self.subscriptions
            .lock()
            .entry(topic)
            .or_default()
            .push(Subscription { id, inbox });

        tracing::debug!("Registered subscriber {:?} on {:?}", id, topic);

        id
    }

    /// Create an inbox with the configured capacity and register it
    pub fn subscribe(&self, topic: Topic) -> mpsc::Receiver<Message> {
        let (tx, rx) = mpsc::channel(self.inbox_capacity);
        self.register(topic, tx);
        rx
    }

    /// Queue a message for broadcast, waiting while the inbound queue is full
    pub async fn publish(&self, msg: Message) -> Result<(), BusError> {
        self.inbound_tx.send(msg).await.map_err(|_| BusError::Closed)
    }

    /// Queue a message without waiting
    pub fn try_publish(&self, msg: Message) -> Result<(), BusError> {
        self.inbound_tx.try_send(msg).map_err(|e| match e {
            TrySendError::Full(_) => BusError::Full,
            TrySendError::Closed(_) => BusError::Closed,
        })
    }

    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.subscriptions.lock().get(&topic).map_or(0, Vec::len)
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle.is_running()
    }

    async fn dispatch(&self, msg: Message) {
        // The registry lock is never held across a delivery attempt
        let subscribers = self
            .subscriptions
            .lock()
            .get(&msg.topic)
            .cloned()
            .unwrap_or_default();

        let mut evicted = Vec::new();

        for subscriber in subscribers {
            match subscriber.inbox.send_timeout(msg.clone(), self.delivery_timeout).await {
                Ok(()) => {}
                Err(SendTimeoutError::Timeout(_)) => {
                    tracing::info!(
                        "PubSub evicted subscriber {:?} on {:?}: not accepted within {:?}",
                        subscriber.id,
                        msg.topic,
                        self.delivery_timeout
                    );
                    evicted.push(subscriber.id);
                }
                Err(SendTimeoutError::Closed(_)) => {
                    tracing::info!("PubSub evicted subscriber {:?} on {:?}: inbox closed", subscriber.id, msg.topic);
                    evicted.push(subscriber.id);
                }
            }
        }

        if !evicted.is_empty() {
            if let Some(list) = self.subscriptions.lock().get_mut(&msg.topic) {
                list.retain(|s| !evicted.contains(&s.id));
            }
        }
    }
}

impl std::fmt::Debug for PubSub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PubSub")
            .field("delivery_timeout", &self.delivery_timeout)
            .field("running", &self.lifecycle.is_running())
            .finish()
    }
}
