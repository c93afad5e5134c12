use approx::assert_relative_eq;

use super::*;
use crate::audio::recording::RecordingEngine;
use crate::track::TrackDescriptor;
use crate::transport::{PlayStatus, TrackPlayer};

#[derive(Default)]
struct Probe {
    ensemble: Option<SyncFlags>,
    dispatched: Vec<bool>,
}

impl LoopPlay for Probe {
    fn set_ensemble(&mut self, flags: SyncFlags) {
        self.ensemble = Some(flags);
    }

    fn handle_loop_play(&mut self, should_loop: bool) {
        self.dispatched.push(should_loop);
    }
}

fn flags(is_playing_all: bool, is_syncing: bool, leader_bpm: f64) -> SyncFlags {
    SyncFlags {
        is_playing_all,
        is_syncing,
        leader_bpm,
    }
}

#[test]
fn playback_rate_is_native_outside_sync() {
    assert_relative_eq!(playback_rate(false, 120.0, 100.0), 1.0);
}

#[test]
fn playback_rate_is_leader_over_own() {
    assert_relative_eq!(playback_rate(true, 120.0, 100.0), 1.2);
    assert_relative_eq!(playback_rate(true, 90.0, 180.0), 0.5);
}

#[test]
fn playback_rate_guards_bad_bpm() {
    assert_relative_eq!(playback_rate(true, 120.0, 0.0), 1.0);
    assert_relative_eq!(playback_rate(true, 120.0, -80.0), 1.0);
    assert_relative_eq!(playback_rate(true, 120.0, f64::NAN), 1.0);
    assert_relative_eq!(playback_rate(true, 0.0, 100.0), 1.0);
    assert_relative_eq!(playback_rate(true, f64::INFINITY, 100.0), 1.0);
}

#[test]
fn adapter_does_not_dispatch_for_baseline_or_unchanged_flags() {
    let initial = flags(false, false, 120.0);
    let mut adapter = SyncAdapter::new(initial);
    let mut probe = Probe::default();

    assert!(!adapter.observe(initial, &mut probe));
    assert!(!adapter.observe(initial, &mut probe));
    assert!(probe.dispatched.is_empty());
    assert_eq!(probe.ensemble, Some(initial));
}

#[test]
fn adapter_ignores_leader_bpm_changes() {
    let mut adapter = SyncAdapter::new(flags(false, true, 120.0));
    let mut probe = Probe::default();

    assert!(!adapter.observe(flags(false, true, 128.0), &mut probe));
    assert!(probe.dispatched.is_empty());
    assert_eq!(probe.ensemble.unwrap().leader_bpm, 128.0);
}

#[test]
fn adapter_dispatches_loop_play_on_each_mode_edge() {
    let mut adapter = SyncAdapter::new(SyncFlags::default());
    let mut probe = Probe::default();

    adapter.observe(flags(true, false, 120.0), &mut probe);
    adapter.observe(flags(true, true, 120.0), &mut probe);
    adapter.observe(flags(false, true, 120.0), &mut probe);
    adapter.observe(flags(false, false, 120.0), &mut probe);

    assert_eq!(probe.dispatched, vec![true, true, true, false]);
    assert_eq!(adapter.previous(), flags(false, false, 120.0));
}

#[test]
fn starting_sync_loops_track_at_leader_tempo() {
    let mut adapter = SyncAdapter::new(flags(false, false, 120.0));
    let mut player = TrackPlayer::new(
        TrackDescriptor::new("dana", 100.0, "/loops/bass.wav"),
        RecordingEngine::default(),
        adapter.previous(),
        100,
    );

    assert!(adapter.observe(flags(false, true, 120.0), &mut player));

    let cmd = *player.engine().last().unwrap();
    assert_eq!(cmd.status, PlayStatus::Playing);
    assert_eq!(cmd.seek_to, Some(0));
    assert!(cmd.looping);
    assert_relative_eq!(cmd.playback_rate, 1.2);
}

#[test]
fn ending_play_all_stops_track_and_clears_loop() {
    let mut adapter = SyncAdapter::new(flags(true, false, 120.0));
    let mut player = TrackPlayer::new(
        TrackDescriptor::new("dana", 100.0, "/loops/bass.wav"),
        RecordingEngine::default(),
        adapter.previous(),
        100,
    );
    player.handle_loop_play(true);
    player.handle_event(crate::audio::EngineEvent::Progress {
        position: 2_000,
        duration: 4_000,
    });

    assert!(adapter.observe(flags(false, false, 120.0), &mut player));

    assert!(!player.state().looping);
    assert_eq!(player.state().status, PlayStatus::Paused);
    assert_eq!(player.state().position, 0);
    let cmd = *player.engine().last().unwrap();
    assert!(!cmd.looping);
    assert_eq!(cmd.seek_to, Some(0));
}
