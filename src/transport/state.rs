/// Transport status of a track.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayStatus {
    Stopped,
    Playing,
    Paused,
}

impl Default for PlayStatus {
    fn default() -> Self {
        Self::Paused
    }
}

impl PlayStatus {
    /// Icon shown on the play button. A playing track offers pause.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Playing => "⏸",
            Self::Paused => "▶",
            Self::Stopped => "⏹",
        }
    }
}

/// Everything the transport knows about its track. Times are milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportState {
    pub status: PlayStatus,
    pub position: u64,
    /// 0 until the engine reports it.
    pub duration: u64,
    /// 0..=100
    pub volume: u8,
    /// Multiplier over the native tempo, always > 0.
    pub playback_rate: f64,
    pub looping: bool,
}

impl Default for TransportState {
    fn default() -> Self {
        Self {
            status: PlayStatus::Paused,
            position: 0,
            duration: 0,
            volume: 100,
            playback_rate: 1.0,
            looping: false,
        }
    }
}
