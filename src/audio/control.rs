//! Mutating device operations

use crate::command::CommandOutput;
use crate::constants::VOLUME_RAW_MAX;
use crate::device::{AudioClient, CardDeviceType, CardProfile};
use crate::error::CommandError;
use crate::parser::parse_audio_clients;

use super::AudioController;

/// Convert a percentage to the tool's raw volume, clamping to `[0, 100]`
pub fn raw_volume(percentage: f64) -> u64 {
    let percentage = if percentage.is_nan() { 0.0 } else { percentage.clamp(0.0, 100.0) };

    ((percentage * VOLUME_RAW_MAX / 100.0 * 10.0).round() / 10.0).round() as u64
}

impl AudioController {
    pub async fn set_volume(
        &self,
        device_type: CardDeviceType,
        index: u64,
        percentage: f64,
    ) -> Result<(), CommandError> {
        let verb = match device_type {
            CardDeviceType::Source => "set-source-volume",
            CardDeviceType::Sink => "set-sink-volume",
        };
        let raw = raw_volume(percentage);

        let output = self.run([verb.to_string(), index.to_string(), raw.to_string()]).await;
        self.check(output, || format!("{} {} {}", verb, index, raw))
    }

    pub async fn set_mute(
        &self,
        device_type: CardDeviceType,
        index: u64,
        mute: bool,
    ) -> Result<(), CommandError> {
        let verb = match device_type {
            CardDeviceType::Source => "set-source-mute",
            CardDeviceType::Sink => "set-sink-mute",
        };
        let flag = if mute { "1" } else { "0" };

        let output = self.run([verb.to_string(), index.to_string(), flag.to_string()]).await;
        self.check(output, || format!("{} {} {}", verb, index, flag))
    }

    pub async fn set_default_device(
        &self,
        device_type: CardDeviceType,
        index: u64,
    ) -> Result<(), CommandError> {
        let verb = match device_type {
            CardDeviceType::Source => "set-default-source",
            CardDeviceType::Sink => "set-default-sink",
        };

        let output = self.run([verb.to_string(), index.to_string()]).await;
        self.check(output, || format!("{} {}", verb, index))
    }

    pub async fn set_card_profile(&self, index: u64, profile: CardProfile) -> Result<(), CommandError> {
        if profile == CardProfile::Unspecified {
            return Err(CommandError::UnspecifiedProfile);
        }

        let output = self
            .run(["set-card-profile".to_string(), index.to_string(), profile.to_string()])
            .await;
        self.check(output, || format!("set-card-profile {} {}", index, profile))
    }

    /// Streams currently attached to sources or sinks
    pub async fn fetch_audio_clients(
        &self,
        device_type: CardDeviceType,
    ) -> Result<Vec<AudioClient>, CommandError> {
        let verb = match device_type {
            CardDeviceType::Source => "list-source-outputs",
            CardDeviceType::Sink => "list-sink-inputs",
        };

        let output = self.run([verb]).await;
        if !output.success {
            return Err(self.failure(verb.to_string(), &output));
        }

        Ok(parse_audio_clients(&output.stdout))
    }

    /// Move every stream not already on `index` to the device called `name`
    ///
    /// Returns the number of streams moved. A stream that fails to move is logged
    /// and skipped.
    pub async fn move_audio_clients(
        &self,
        device_type: CardDeviceType,
        index: u64,
        name: &str,
    ) -> Result<usize, CommandError> {
        let verb = match device_type {
            CardDeviceType::Source => "move-source-output",
            CardDeviceType::Sink => "move-sink-input",
        };

        let clients = self.fetch_audio_clients(device_type).await?;
        let mut moved = 0;

        for client in clients.iter().filter(|c| c.card_device_index != index) {
            let output = self
                .run([verb.to_string(), client.index.to_string(), name.to_string()])
                .await;

            if output.success {
                moved += 1;
                tracing::info!("Moved audio client {} to default {} {}", client.index, device_type, name);
            } else {
                tracing::error!(
                    "Could not move audio client {} to {} {}: {}",
                    client.index,
                    device_type,
                    name,
                    output.combined()
                );
            }
        }

        Ok(moved)
    }

    fn check(&self, output: CommandOutput, command: impl FnOnce() -> String) -> Result<(), CommandError> {
        if output.success {
            Ok(())
        } else {
            let error = self.failure(command(), &output);
            tracing::error!("{}", error);
            Err(error)
        }
    }

    fn failure(&self, command: String, output: &CommandOutput) -> CommandError {
        CommandError::Failed {
            command: format!("{} {}", self.tool, command),
            output: output.combined(),
        }
    }
}
