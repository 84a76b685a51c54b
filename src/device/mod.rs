//! Device model

pub mod kinds;
pub mod model;

pub use kinds::{A2dpCodec, BluetoothProtocol, Bus, CardDeviceType, CardProfile, DeviceState, FormFactor};
pub use model::{AudioClient, Card, CardDevice};
