//! Snapshot aggregation and device control on top of the control tool

pub mod control;
pub mod snapshot;

use std::sync::Arc;

use crate::command::CommandRunner;
use crate::config::AudioConfig;

pub use snapshot::{CardsWithDevices, FetchResult};

/// Handle to the sound server
///
/// Cheap to clone; clones share the same runner. All operations may be called
/// concurrently.
#[derive(Clone)]
pub struct AudioController {
    runner: Arc<dyn CommandRunner>,
    tool: String,
}

impl AudioController {
    pub fn new(runner: Arc<dyn CommandRunner>, config: &AudioConfig) -> Self {
        Self {
            runner,
            tool: config.control_tool.clone(),
        }
    }

    /// Control tool binary name
    pub fn tool(&self) -> &str {
        &self.tool
    }

    async fn run<I, S>(&self, args: I) -> crate::command::CommandOutput
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let args: Vec<String> = args.into_iter().map(|a| a.to_string()).collect();
        let output = self.runner.run(&self.tool, &args).await;

        tracing::debug!("{} {} -> {}", self.tool, args.join(" "), output.combined());

        output
    }
}

impl std::fmt::Debug for AudioController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioController").field("tool", &self.tool).finish()
    }
}
