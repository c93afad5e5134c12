use approx::assert_relative_eq;

use super::*;
use crate::audio::EngineEvent;
use crate::audio::recording::RecordingEngine;
use crate::sync::{LoopPlay, SyncFlags};
use crate::track::TrackDescriptor;

fn descriptor(bpm: f64) -> TrackDescriptor {
    TrackDescriptor::new("dana", bpm, "/loops/Drum+Loop.wav")
}

fn player(bpm: f64) -> TrackPlayer<RecordingEngine> {
    TrackPlayer::new(
        descriptor(bpm),
        RecordingEngine::default(),
        SyncFlags::default(),
        100,
    )
}

fn syncing_to(leader_bpm: f64) -> SyncFlags {
    SyncFlags {
        is_playing_all: false,
        is_syncing: true,
        leader_bpm,
    }
}

#[test]
fn new_player_loads_url_and_starts_paused() {
    let p = player(100.0);
    assert_eq!(p.engine().loads, vec!["/loops/Drum+Loop.wav".to_string()]);
    assert_eq!(*p.state(), TransportState::default());

    let cmd = p.engine().last().unwrap();
    assert_eq!(cmd.status, PlayStatus::Paused);
    assert_eq!(cmd.seek_to, None);
    assert_eq!(cmd.volume, 100);
}

#[test]
fn initial_volume_is_clamped() {
    let p = TrackPlayer::new(
        descriptor(100.0),
        RecordingEngine::default(),
        SyncFlags::default(),
        250,
    );
    assert_eq!(p.state().volume, 100);
}

#[test]
fn play_and_stop_always_rewind_to_zero() {
    let mut p = player(100.0);
    p.handle_event(EngineEvent::Progress {
        position: 4_000,
        duration: 8_000,
    });
    assert_eq!(p.state().position, 4_000);

    p.play();
    assert_eq!(p.state().position, 0);
    assert_eq!(p.state().status, PlayStatus::Playing);
    assert_eq!(p.engine().last().unwrap().seek_to, Some(0));

    p.handle_event(EngineEvent::Progress {
        position: 2_500,
        duration: 8_000,
    });
    p.stop();
    assert_eq!(p.state().position, 0);
    assert_eq!(p.state().status, PlayStatus::Paused);
    assert_eq!(p.engine().last().unwrap().seek_to, Some(0));

    p.stop();
    p.play();
    p.play();
    assert_eq!(p.state().position, 0);
}

#[test]
fn play_uses_native_rate_when_not_syncing() {
    let mut p = player(100.0);
    p.set_ensemble(SyncFlags {
        is_playing_all: true,
        is_syncing: false,
        leader_bpm: 140.0,
    });
    p.play();
    assert_relative_eq!(p.state().playback_rate, 1.0);
}

#[test]
fn play_matches_leader_tempo_when_syncing() {
    let mut p = player(100.0);
    p.set_ensemble(syncing_to(120.0));
    p.play();
    assert_relative_eq!(p.state().playback_rate, 1.2);
    assert_relative_eq!(p.engine().last().unwrap().playback_rate, 1.2);
}

#[test]
fn play_with_unknown_own_bpm_falls_back_to_native_rate() {
    let mut p = player(0.0);
    p.set_ensemble(syncing_to(120.0));
    p.play();
    assert_relative_eq!(p.state().playback_rate, 1.0);
}

#[test]
fn toggle_play_pause_is_its_own_inverse() {
    let mut p = player(100.0);
    assert_eq!(p.state().status, PlayStatus::Paused);

    p.toggle_play_pause();
    assert_eq!(p.state().status, PlayStatus::Playing);
    p.toggle_play_pause();
    assert_eq!(p.state().status, PlayStatus::Paused);

    p.play();
    p.toggle_play_pause();
    p.toggle_play_pause();
    assert_eq!(p.state().status, PlayStatus::Playing);
}

#[test]
fn toggle_play_pause_overrides_sync_and_loop() {
    let mut p = player(100.0);
    p.set_ensemble(syncing_to(120.0));
    p.handle_loop_play(true);
    assert!(p.state().looping);
    assert_relative_eq!(p.state().playback_rate, 1.2);

    p.toggle_play_pause();
    assert_eq!(p.state().status, PlayStatus::Paused);
    assert_relative_eq!(p.state().playback_rate, 1.0);
    assert!(!p.state().looping);

    let cmd = p.engine().last().unwrap();
    assert!(!cmd.looping);
    assert_eq!(cmd.seek_to, None);
}

#[test]
fn toggle_play_pause_keeps_position() {
    let mut p = player(100.0);
    p.play();
    p.handle_event(EngineEvent::Progress {
        position: 3_000,
        duration: 9_000,
    });
    p.toggle_play_pause();
    assert_eq!(p.state().position, 3_000);
}

#[test]
fn toggle_play_pause_from_stopped_plays() {
    let mut p = player(100.0);
    p.state.status = PlayStatus::Stopped;
    p.toggle_play_pause();
    assert_eq!(p.state().status, PlayStatus::Playing);
}

#[test]
fn volume_change_clamps_out_of_range_input() {
    let mut p = player(100.0);
    p.volume_change(35);
    assert_eq!(p.state().volume, 35);
    assert_eq!(p.engine().last().unwrap().volume, 35);
    p.volume_change(140);
    assert_eq!(p.state().volume, 100);
    p.volume_change(-5);
    assert_eq!(p.state().volume, 0);
}

#[test]
fn toggle_mute_does_not_restore_previous_level() {
    let mut p = player(100.0);
    p.volume_change(40);

    p.toggle_mute();
    assert_eq!(p.state().volume, 0);
    assert!(p.is_muted());

    p.toggle_mute();
    assert_eq!(p.state().volume, 100);
    assert!(!p.is_muted());
}

#[test]
fn track_end_stops_unless_looping() {
    let mut p = player(100.0);
    p.play();
    p.handle_event(EngineEvent::Progress {
        position: 7_900,
        duration: 8_000,
    });
    assert_eq!(p.handle_event(EngineEvent::Ended), None);
    assert_eq!(p.state().status, PlayStatus::Paused);
    assert_eq!(p.state().position, 0);

    p.handle_loop_play(true);
    let sent = p.engine().commands.len();
    p.handle_event(EngineEvent::Ended);
    assert_eq!(p.state().status, PlayStatus::Playing);
    assert_eq!(p.engine().commands.len(), sent);
}

#[test]
fn progress_is_none_until_duration_is_known() {
    let mut p = player(100.0);
    assert_eq!(p.progress_state(), None);

    p.handle_event(EngineEvent::Progress {
        position: 5_000,
        duration: 10_000,
    });
    assert_relative_eq!(p.progress_state().unwrap(), 50.0);
}

#[test]
fn progress_position_is_clamped_to_duration() {
    let mut p = player(100.0);
    p.handle_event(EngineEvent::Progress {
        position: 12_000,
        duration: 10_000,
    });
    assert_eq!(p.state().position, 10_000);
}

#[test]
fn duration_is_fixed_once_known() {
    let mut p = player(100.0);
    p.handle_event(EngineEvent::Loading { duration: 8_000 });
    p.handle_event(EngineEvent::Progress {
        position: 1_000,
        duration: 9_000,
    });
    assert_eq!(p.state().duration, 8_000);
}

#[test]
fn loaded_notice_carries_duration_and_fires_once() {
    let mut p = player(100.0);
    assert_eq!(p.handle_event(EngineEvent::Loading { duration: 8_000 }), None);
    assert_eq!(
        p.handle_event(EngineEvent::Loaded),
        Some(TrackNotice::Loaded {
            descriptor: descriptor(100.0),
            duration: 8_000,
        })
    );
    assert_eq!(p.handle_event(EngineEvent::Loaded), None);
}

#[test]
fn loaded_notice_waits_for_duration() {
    let mut p = player(100.0);
    assert_eq!(p.handle_event(EngineEvent::Loading { duration: 0 }), None);
    assert_eq!(p.handle_event(EngineEvent::Loaded), None);

    let notice = p.handle_event(EngineEvent::Progress {
        position: 100,
        duration: 6_000,
    });
    assert_eq!(
        notice,
        Some(TrackNotice::Loaded {
            descriptor: descriptor(100.0),
            duration: 6_000,
        })
    );
}

#[test]
fn request_remove_forwards_descriptor_without_state_change() {
    let mut p = player(100.0);
    p.play();
    let before = p.state().clone();
    let sent = p.engine().commands.len();

    assert_eq!(
        p.request_remove(),
        TrackNotice::RemoveRequested(descriptor(100.0))
    );
    assert_eq!(*p.state(), before);
    assert_eq!(p.engine().commands.len(), sent);
}

#[test]
fn cut_engine_skips_fade_without_touching_transport() {
    let mut p = player(100.0);
    p.play();
    let before = p.state().clone();
    let sent = p.engine().commands.len();
    assert!(!p.engine().cut);

    p.cut_engine();
    assert!(p.engine().cut);
    assert_eq!(*p.state(), before);
    assert_eq!(p.engine().commands.len(), sent);
}

#[test]
fn handle_loop_play_sets_loop_before_acting() {
    let mut p = player(100.0);
    p.handle_loop_play(true);
    let cmd = *p.engine().last().unwrap();
    assert!(cmd.looping);
    assert_eq!(cmd.status, PlayStatus::Playing);
    assert_eq!(cmd.seek_to, Some(0));

    p.handle_loop_play(false);
    let cmd = *p.engine().last().unwrap();
    assert!(!cmd.looping);
    assert_eq!(cmd.status, PlayStatus::Paused);
    assert_eq!(cmd.seek_to, Some(0));
}

#[test]
fn glyph_follows_status() {
    assert_eq!(PlayStatus::Playing.glyph(), "⏸");
    assert_eq!(PlayStatus::Paused.glyph(), "▶");
    assert_eq!(PlayStatus::Stopped.glyph(), "⏹");
}
