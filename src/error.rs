//! Error types

use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Token that does not name a known enumeration value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid device bus: {0}")]
    Bus(String),

    #[error("invalid device form factor: {0}")]
    FormFactor(String),

    #[error("invalid device state: {0}")]
    DeviceState(String),

    #[error("invalid bluetooth protocol: {0}")]
    BluetoothProtocol(String),

    #[error("invalid A2DP codec: {0}")]
    A2dpCodec(String),

    #[error("invalid card profile: {0}")]
    CardProfile(String),

    #[error("invalid card device type: {0}")]
    CardDeviceType(String),
}

/// Control tool invocation errors
#[derive(Debug, Clone, Error)]
pub enum CommandError {
    #[error("`{command}` failed: {output}")]
    Failed { command: String, output: String },

    #[error("card profile is unspecified")]
    UnspecifiedProfile,
}

/// Publish/subscribe errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BusError {
    #[error("bus inbound queue is full")]
    Full,

    #[error("bus inbound queue is closed")]
    Closed,
}
