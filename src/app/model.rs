//! The deck: every loaded track plus the play-all / sync switches.

use std::sync::mpsc::Receiver;

use crate::audio::{EngineEvent, SoundEngine};
use crate::sync::{SyncAdapter, SyncFlags};
use crate::track::TrackDescriptor;
use crate::transport::{TrackNotice, TrackPlayer};

/// One track on the deck with its sync observer and engine event feed.
pub struct TrackSlot<E: SoundEngine> {
    pub player: TrackPlayer<E>,
    adapter: SyncAdapter,
    events: Receiver<EngineEvent>,
    /// Duration reported by the track's `Loaded` notice.
    pub loaded_duration: Option<u64>,
}

/// The parent container of all tracks.
pub struct Deck<E: SoundEngine> {
    pub slots: Vec<TrackSlot<E>>,
    pub selected: usize,
    pub is_playing_all: bool,
    pub is_syncing: bool,
    leader: usize,
}

impl<E: SoundEngine> Deck<E> {
    /// Create an empty deck. `leader` is the index whose BPM syncing follows.
    pub fn new(leader: usize) -> Self {
        Self {
            slots: Vec::new(),
            selected: 0,
            is_playing_all: false,
            is_syncing: false,
            leader,
        }
    }

    /// Add a track driven by `engine`, whose events arrive on `events`.
    pub fn add_track(
        &mut self,
        descriptor: TrackDescriptor,
        engine: E,
        events: Receiver<EngineEvent>,
        initial_volume: u8,
    ) {
        let flags = self.flags();
        let player = TrackPlayer::new(descriptor, engine, flags, initial_volume);
        self.slots.push(TrackSlot {
            player,
            adapter: SyncAdapter::new(flags),
            events,
            loaded_duration: None,
        });
        // A new track may be the leader and change the leader BPM.
        self.propagate();
    }

    pub fn has_tracks(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Index of the leader track, if the deck has one.
    pub fn leader(&self) -> Option<usize> {
        if self.slots.is_empty() {
            None
        } else {
            Some(self.leader.min(self.slots.len() - 1))
        }
    }

    /// The flags every track currently observes.
    pub fn flags(&self) -> SyncFlags {
        SyncFlags {
            is_playing_all: self.is_playing_all,
            is_syncing: self.is_syncing,
            leader_bpm: self
                .leader()
                .map(|i| self.slots[i].player.descriptor().bpm)
                .unwrap_or(0.0),
        }
    }

    /// Publish the current flags to every track.
    pub fn propagate(&mut self) {
        let flags = self.flags();
        for slot in &mut self.slots {
            slot.adapter.observe(flags, &mut slot.player);
        }
    }

    pub fn toggle_play_all(&mut self) {
        self.is_playing_all = !self.is_playing_all;
        log::info!("play all: {}", self.is_playing_all);
        self.propagate();
    }

    pub fn toggle_sync(&mut self) {
        self.is_syncing = !self.is_syncing;
        log::info!("sync: {}", self.is_syncing);
        self.propagate();
    }

    /// Make the selected track the leader. Takes effect on the next restart.
    pub fn set_leader_to_selected(&mut self) {
        if self.has_tracks() {
            self.leader = self.selected;
            self.propagate();
        }
    }

    pub fn selected_player_mut(&mut self) -> Option<&mut TrackPlayer<E>> {
        self.slots.get_mut(self.selected).map(|s| &mut s.player)
    }

    /// Ask the selected track to be removed and act on its request.
    pub fn remove_selected(&mut self) {
        if let Some(notice) = self.slots.get(self.selected).map(|s| s.player.request_remove()) {
            self.handle_notice(notice);
        }
    }

    pub fn next(&mut self) {
        if self.has_tracks() {
            self.selected = (self.selected + 1) % self.slots.len();
        }
    }

    pub fn prev(&mut self) {
        if self.has_tracks() {
            self.selected = (self.selected + self.slots.len() - 1) % self.slots.len();
        }
    }

    /// Drain pending engine events of every track and act on the resulting notices.
    pub fn poll_engines(&mut self) {
        let mut notices: Vec<TrackNotice> = Vec::new();
        for slot in &mut self.slots {
            while let Ok(event) = slot.events.try_recv() {
                if let Some(n) = slot.player.handle_event(event) {
                    notices.push(n);
                }
            }
        }
        for n in notices {
            self.handle_notice(n);
        }
    }

    pub fn handle_notice(&mut self, notice: TrackNotice) {
        match notice {
            TrackNotice::Loaded {
                descriptor,
                duration,
            } => {
                if let Some(slot) = self
                    .slots
                    .iter_mut()
                    .find(|s| *s.player.descriptor() == descriptor)
                {
                    slot.loaded_duration = Some(duration);
                }
            }
            TrackNotice::RemoveRequested(descriptor) => {
                let Some(idx) = self
                    .slots
                    .iter()
                    .position(|s| *s.player.descriptor() == descriptor)
                else {
                    return;
                };
                log::info!("removing {}", descriptor.url);
                // Removal is interactive; don't hold the event loop for a fade.
                let mut removed = self.slots.remove(idx);
                removed.player.cut_engine();
                drop(removed);

                if idx < self.leader {
                    self.leader -= 1;
                } else if idx == self.leader {
                    self.leader = 0;
                }
                if self.selected >= self.slots.len() {
                    self.selected = self.slots.len().saturating_sub(1);
                }
                self.propagate();
            }
        }
    }
}
