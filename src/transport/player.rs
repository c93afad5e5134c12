use crate::audio::{EngineEvent, SoundEngine, TransportCommand};
use crate::sync::{LoopPlay, SyncFlags, playback_rate};
use crate::track::{TrackDescriptor, progress_state};

use super::state::{PlayStatus, TransportState};

/// Notifications a track sends up to its deck.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackNotice {
    /// The engine finished loading and the duration (ms) is known.
    Loaded {
        descriptor: TrackDescriptor,
        duration: u64,
    },
    /// The user asked for this track to be removed.
    RemoveRequested(TrackDescriptor),
}

/// Playback controller for one track.
pub struct TrackPlayer<E: SoundEngine> {
    descriptor: TrackDescriptor,
    engine: E,
    pub(super) state: TransportState,
    ensemble: SyncFlags,
    // Set by the engine's `Loaded` event until the notice can carry a duration.
    loaded_pending: bool,
}

impl<E: SoundEngine> TrackPlayer<E> {
    /// Create a paused player and ask `engine` to load the track.
    pub fn new(
        descriptor: TrackDescriptor,
        mut engine: E,
        ensemble: SyncFlags,
        initial_volume: u8,
    ) -> Self {
        engine.load(&descriptor.url);

        let mut player = Self {
            descriptor,
            engine,
            state: TransportState {
                volume: initial_volume.min(100),
                ..TransportState::default()
            },
            ensemble,
            loaded_pending: false,
        };
        player.commit(None);
        player
    }

    pub fn descriptor(&self) -> &TrackDescriptor {
        &self.descriptor
    }

    pub fn state(&self) -> &TransportState {
        &self.state
    }

    #[cfg(test)]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Percentage played, `None` while the duration is unknown.
    pub fn progress_state(&self) -> Option<f64> {
        progress_state(self.state.position, self.state.duration)
    }

    pub fn is_muted(&self) -> bool {
        self.state.volume == 0
    }

    /// Restart the track from zero, at the leader's tempo when syncing.
    pub fn play(&mut self) {
        self.state.status = PlayStatus::Playing;
        self.state.position = 0;
        self.state.playback_rate = playback_rate(
            self.ensemble.is_syncing,
            self.ensemble.leader_bpm,
            self.descriptor.bpm,
        );
        log::debug!(
            "{}: play from start at rate {:.3} (loop: {})",
            self.descriptor.url,
            self.state.playback_rate,
            self.state.looping
        );
        self.commit(Some(0));
    }

    /// Manual play/pause: native tempo, never looping.
    pub fn toggle_play_pause(&mut self) {
        self.state.status = if self.state.status == PlayStatus::Playing {
            PlayStatus::Paused
        } else {
            PlayStatus::Playing
        };
        self.state.playback_rate = 1.0;
        self.state.looping = false;
        log::debug!("{}: toggled to {:?}", self.descriptor.url, self.state.status);
        self.commit(None);
    }

    /// Pause and rewind to the start.
    pub fn stop(&mut self) {
        self.state.status = PlayStatus::Paused;
        self.state.position = 0;
        log::debug!("{}: stopped", self.descriptor.url);
        self.commit(Some(0));
    }

    pub fn volume_change(&mut self, volume: i32) {
        self.state.volume = volume.clamp(0, 100) as u8;
        self.commit(None);
    }

    /// Silence the track, or bring it back at full volume.
    pub fn toggle_mute(&mut self) {
        self.state.volume = if self.state.volume > 0 { 0 } else { 100 };
        self.commit(None);
    }

    /// The engine reached the end of the track.
    pub fn on_track_ended(&mut self) {
        // A looping engine restarts by itself.
        if !self.state.looping {
            self.stop();
        }
    }

    /// Ask the deck to remove this track. The transport itself is untouched.
    pub fn request_remove(&self) -> TrackNotice {
        TrackNotice::RemoveRequested(self.descriptor.clone())
    }

    /// Shut the engine down without a fade once the player is dropped.
    pub fn cut_engine(&mut self) {
        self.engine.cut();
    }

    /// Fold an engine event into the transport state.
    pub fn handle_event(&mut self, event: EngineEvent) -> Option<TrackNotice> {
        match event {
            EngineEvent::Loading { duration } => {
                self.learn_duration(duration);
                self.take_loaded_notice()
            }
            EngineEvent::Loaded => {
                self.loaded_pending = true;
                self.take_loaded_notice()
            }
            EngineEvent::Progress { position, duration } => {
                self.learn_duration(duration);
                self.state.position = if self.state.duration > 0 {
                    position.min(self.state.duration)
                } else {
                    position
                };
                self.take_loaded_notice()
            }
            EngineEvent::Ended => {
                self.on_track_ended();
                None
            }
        }
    }

    fn learn_duration(&mut self, duration: u64) {
        if self.state.duration == 0 {
            self.state.duration = duration;
        }
    }

    fn take_loaded_notice(&mut self) -> Option<TrackNotice> {
        if !self.loaded_pending || self.state.duration == 0 {
            return None;
        }
        self.loaded_pending = false;
        log::info!(
            "{}: loaded ({} ms)",
            self.descriptor.url,
            self.state.duration
        );
        Some(TrackNotice::Loaded {
            descriptor: self.descriptor.clone(),
            duration: self.state.duration,
        })
    }

    fn commit(&mut self, seek_to: Option<u64>) {
        self.engine.set_transport(TransportCommand {
            status: self.state.status,
            seek_to,
            playback_rate: self.state.playback_rate,
            volume: self.state.volume,
            looping: self.state.looping,
        });
    }
}

impl<E: SoundEngine> LoopPlay for TrackPlayer<E> {
    fn set_ensemble(&mut self, flags: SyncFlags) {
        self.ensemble = flags;
    }

    fn handle_loop_play(&mut self, should_loop: bool) {
        self.state.looping = should_loop;
        if should_loop {
            self.play();
        } else {
            self.stop();
        }
    }
}
