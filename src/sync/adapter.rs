use super::flags::SyncFlags;

/// Something the adapter can drive. Implemented by `TrackPlayer`.
pub trait LoopPlay {
    /// Record the latest ensemble flags.
    fn set_ensemble(&mut self, flags: SyncFlags);
    /// Set the loop flag, then restart (`true`) or stop (`false`).
    fn handle_loop_play(&mut self, should_loop: bool);
}

/// Edge-triggered observer of a deck's `SyncFlags`.
///
/// Only changes of the play-all or sync mode restart or stop the track;
/// re-publishing the same flags does nothing.
#[derive(Debug, Clone)]
pub struct SyncAdapter {
    previous: SyncFlags,
}

impl SyncAdapter {
    /// Start observing with `initial` as the baseline. Nothing is dispatched for it.
    pub fn new(initial: SyncFlags) -> Self {
        Self { previous: initial }
    }

    #[cfg(test)]
    pub fn previous(&self) -> SyncFlags {
        self.previous
    }

    /// Forward `next` to `target` and dispatch a loop-play if the mode changed.
    ///
    /// Returns whether anything was dispatched.
    pub fn observe<T: LoopPlay>(&mut self, next: SyncFlags, target: &mut T) -> bool {
        let changed = next.mode_changed(&self.previous);
        self.previous = next;
        target.set_ensemble(next);

        if changed {
            log::debug!(
                "sync mode changed (play all: {}, syncing: {}, leader: {} BPM)",
                next.is_playing_all,
                next.is_syncing,
                next.leader_bpm
            );
            target.handle_loop_play(next.should_loop());
        }
        changed
    }
}
