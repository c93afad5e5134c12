use super::types::TransportCommand;

/// Anything that can load a track and follow transport commands.
///
/// Engines report back asynchronously through `EngineEvent`s; how those are
/// delivered is up to the backend (`RodioEngine` hands out a channel).
pub trait SoundEngine {
    /// Load `url`, replacing whatever was loaded before.
    fn load(&mut self, url: &str);
    /// Apply the full desired transport state.
    fn set_transport(&mut self, cmd: TransportCommand);
    /// Skip the fade-out when the engine is shut down.
    fn cut(&mut self) {}
}
