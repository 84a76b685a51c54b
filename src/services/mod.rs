//! Long-running consumers and producers of device state
//!
//! Each service is start-once: `start` spawns its task on the first call and
//! returns `None` afterwards. A service task that ends is a fatal condition for
//! the daemon.

pub mod monitor;
pub mod notifier;
pub mod watchdog;

pub use monitor::Monitor;
pub use notifier::Notifier;
pub use watchdog::Watchdog;
