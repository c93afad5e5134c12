//! In-memory engine used by tests to observe what the transport commands.

use super::engine::SoundEngine;
use super::types::TransportCommand;

#[derive(Debug, Default)]
pub(crate) struct RecordingEngine {
    pub loads: Vec<String>,
    pub commands: Vec<TransportCommand>,
    pub cut: bool,
}

impl RecordingEngine {
    pub fn last(&self) -> Option<&TransportCommand> {
        self.commands.last()
    }
}

impl SoundEngine for RecordingEngine {
    fn load(&mut self, url: &str) {
        self.loads.push(url.to_string());
    }

    fn set_transport(&mut self, cmd: TransportCommand) {
        self.commands.push(cmd);
    }

    fn cut(&mut self) {
        self.cut = true;
    }
}
