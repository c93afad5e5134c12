/// Ensemble-wide flags a deck hands to each of its tracks.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct SyncFlags {
    /// All tracks play together, looping.
    pub is_playing_all: bool,
    /// All tracks loop at the leader's tempo.
    pub is_syncing: bool,
    /// Tempo of the leader track.
    pub leader_bpm: f64,
}

impl SyncFlags {
    /// Tracks loop whenever the ensemble plays together.
    pub fn should_loop(&self) -> bool {
        self.is_playing_all || self.is_syncing
    }

    /// True when the play-all or sync mode differs from `previous`.
    ///
    /// The leader's BPM is not part of the mode.
    pub fn mode_changed(&self, previous: &SyncFlags) -> bool {
        self.is_playing_all != previous.is_playing_all || self.is_syncing != previous.is_syncing
    }
}
