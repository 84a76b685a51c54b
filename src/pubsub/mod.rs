//! Topic-based publish/subscribe

pub mod bus;
pub mod message;

pub use bus::{PubSub, SubscriptionId};
pub use message::{Message, Payload, Topic};
