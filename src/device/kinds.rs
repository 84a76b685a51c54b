//! Enumerations reported by the control tool
//!
//! Every kind has an `Unspecified` zero value. Parsers fall back to it whenever a
//! token is not recognised, so a single odd property never aborts a dump.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Hardware bus of a card or device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bus {
    #[default]
    Unspecified,
    Pci,
    Bluetooth,
    Usb,
}

impl FromStr for Bus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pci" => Ok(Self::Pci),
            "bluetooth" => Ok(Self::Bluetooth),
            "usb" => Ok(Self::Usb),
            _ => Err(ParseError::Bus(s.to_string())),
        }
    }
}

/// Physical form of a card or device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormFactor {
    #[default]
    Unspecified,
    Internal,
    Headphones,
    Webcam,
    Headset,
}

impl FromStr for FormFactor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "internal" => Ok(Self::Internal),
            "headphone" => Ok(Self::Headphones),
            "webcam" => Ok(Self::Webcam),
            "headset" => Ok(Self::Headset),
            _ => Err(ParseError::FormFactor(s.to_string())),
        }
    }
}

/// Runtime state of a source or sink
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceState {
    #[default]
    Unspecified,
    Running,
    Idle,
    Suspended,
}

impl FromStr for DeviceState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "running" => Ok(Self::Running),
            "idle" => Ok(Self::Idle),
            "suspended" => Ok(Self::Suspended),
            _ => Err(ParseError::DeviceState(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BluetoothProtocol {
    #[default]
    Unspecified,
    HeadsetHeadUnit,
    A2dpSink,
}

impl FromStr for BluetoothProtocol {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "headset_head_unit" => Ok(Self::HeadsetHeadUnit),
            "a2dp_sink" => Ok(Self::A2dpSink),
            _ => Err(ParseError::BluetoothProtocol(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum A2dpCodec {
    #[default]
    Unspecified,
    Sbc,
    Aac,
    Aptx,
}

impl FromStr for A2dpCodec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sbc" => Ok(Self::Sbc),
            "aac" => Ok(Self::Aac),
            "aptx" => Ok(Self::Aptx),
            _ => Err(ParseError::A2dpCodec(s.to_string())),
        }
    }
}

/// Bluetooth card profile
///
/// Only Bluetooth cards report profiles; the names the tool prints for other
/// buses are driver specific and are not modelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardProfile {
    #[default]
    #[serde(rename = "unspecified")]
    Unspecified,
    #[serde(rename = "headset_head_unit")]
    HeadsetHeadUnit,
    #[serde(rename = "a2dp_sink_sbc")]
    A2dpSinkSbc,
    #[serde(rename = "a2dp_sink_aac")]
    A2dpSinkAac,
    #[serde(rename = "a2dp_sink_aptx")]
    A2dpSinkAptx,
    #[serde(rename = "a2dp_sink_aptx_hd")]
    A2dpSinkAptxHd,
    #[serde(rename = "a2dp_sink_ldac")]
    A2dpSinkLdac,
    #[serde(rename = "off")]
    Off,
}

impl CardProfile {
    /// Token understood by `set-card-profile`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::HeadsetHeadUnit => "headset_head_unit",
            Self::A2dpSinkSbc => "a2dp_sink_sbc",
            Self::A2dpSinkAac => "a2dp_sink_aac",
            Self::A2dpSinkAptx => "a2dp_sink_aptx",
            Self::A2dpSinkAptxHd => "a2dp_sink_aptx_hd",
            Self::A2dpSinkLdac => "a2dp_sink_ldac",
            Self::Off => "off",
        }
    }
}

impl FromStr for CardProfile {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "headset_head_unit" => Ok(Self::HeadsetHeadUnit),
            "a2dp_sink_sbc" => Ok(Self::A2dpSinkSbc),
            "a2dp_sink_aac" => Ok(Self::A2dpSinkAac),
            "a2dp_sink_aptx" => Ok(Self::A2dpSinkAptx),
            "a2dp_sink_aptx_hd" => Ok(Self::A2dpSinkAptxHd),
            "a2dp_sink_ldac" => Ok(Self::A2dpSinkLdac),
            "off" => Ok(Self::Off),
            _ => Err(ParseError::CardProfile(s.to_string())),
        }
    }
}

impl fmt::Display for CardProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source (capture) or sink (playback)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CardDeviceType {
    Source,
    Sink,
}

impl CardDeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Sink => "sink",
        }
    }
}

impl FromStr for CardDeviceType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "source" => Ok(Self::Source),
            "sink" => Ok(Self::Sink),
            _ => Err(ParseError::CardDeviceType(s.to_string())),
        }
    }
}

impl TryFrom<String> for CardDeviceType {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CardDeviceType> for String {
    fn from(value: CardDeviceType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for CardDeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
