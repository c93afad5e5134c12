//! Commands and events exchanged with a sound engine.

use crate::transport::PlayStatus;

/// Desired transport state pushed to the engine after every change.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransportCommand {
    pub status: PlayStatus,
    /// Position to jump to, in milliseconds. `None` keeps the current position.
    pub seek_to: Option<u64>,
    pub playback_rate: f64,
    /// 0..=100
    pub volume: u8,
    /// Let the engine restart the track by itself when it reaches the end.
    pub looping: bool,
}

/// Events reported by an engine. Times are in milliseconds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The engine started loading and knows (or guessed) the duration.
    Loading { duration: u64 },
    /// The track is ready to play.
    Loaded,
    /// Periodic tick while playing.
    Progress { position: u64, duration: u64 },
    /// Playback reached the end of a non-looping track.
    Ended,
}

#[derive(Debug)]
pub(super) enum EngineCmd {
    Load(String),
    Transport(TransportCommand),
    /// Quit the engine thread, fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}
