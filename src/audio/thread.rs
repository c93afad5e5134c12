use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::Sink;
use rodio::mixer::Mixer;

use crate::transport::PlayStatus;

use super::sink::{create_sink_at, probe_duration, resolve_path};
use super::types::{EngineCmd, EngineEvent, TransportCommand};

/// Position inside the current pass of the track.
///
/// Looping sinks keep counting past the end, so the reported position is
/// folded back into `[0, duration)`.
pub(super) fn pass_position(elapsed: Duration, duration: Option<Duration>, looping: bool) -> Duration {
    match duration {
        Some(d) if looping && !d.is_zero() => {
            Duration::from_nanos((elapsed.as_nanos() % d.as_nanos()) as u64)
        }
        Some(d) => elapsed.min(d),
        None => elapsed,
    }
}

/// Position of a sink that was built `start_at` into the track.
///
/// `skip_duration` restarts the sink's own clock at zero, so `sink_elapsed`
/// only counts what was played since the rebuild.
pub(super) fn sink_position(
    start_at: Duration,
    sink_elapsed: Duration,
    duration: Option<Duration>,
    looping: bool,
) -> Duration {
    pass_position(start_at + sink_elapsed, duration, looping)
}

fn millis(d: Duration) -> u64 {
    d.as_millis() as u64
}

fn fade_out_sink(sink: &Sink, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    let start = sink.volume();
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(start * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}

/// Everything the engine thread knows about the loaded track.
#[derive(Default)]
struct Loaded {
    path: Option<PathBuf>,
    duration: Option<Duration>,
    sink: Option<Sink>,
    // Where in the track the current sink started.
    start_at: Duration,
    looping: bool,
    playing: bool,
    ended: bool,
}

impl Loaded {
    fn position(&self) -> Duration {
        self.sink
            .as_ref()
            .map(|s| sink_position(self.start_at, s.get_pos(), self.duration, self.looping))
            .unwrap_or(Duration::ZERO)
    }

    fn progress(&self) -> EngineEvent {
        EngineEvent::Progress {
            position: millis(self.position()),
            duration: self.duration.map(millis).unwrap_or(0),
        }
    }

    /// Replace the sink with a fresh one starting at `at`.
    fn rebuild(&mut self, mixer: &Mixer, at: Duration) {
        let Some(path) = self.path.as_ref() else {
            return;
        };
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        match create_sink_at(mixer, path, at, self.looping) {
            Ok(sink) => {
                self.sink = Some(sink);
                self.start_at = at;
                self.ended = false;
            }
            Err(e) => log::warn!("{e}"),
        }
    }

    fn load(&mut self, mixer: &Mixer, url: &str, events: &Sender<EngineEvent>) {
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        self.path = None;
        self.duration = None;
        self.start_at = Duration::ZERO;
        self.playing = false;
        self.ended = false;

        let path = match resolve_path(url) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("{e}");
                return;
            }
        };

        self.duration = probe_duration(&path);
        let _ = events.send(EngineEvent::Loading {
            duration: self.duration.map(millis).unwrap_or(0),
        });

        self.path = Some(path);
        self.rebuild(mixer, Duration::ZERO);
        if self.sink.is_some() {
            let _ = events.send(EngineEvent::Loaded);
        }
    }

    fn apply(&mut self, mixer: &Mixer, cmd: TransportCommand, events: &Sender<EngineEvent>) {
        let rebuild_at = match cmd.seek_to {
            Some(ms) => Some(Duration::from_millis(ms)),
            // Switching between a looped and a one-shot source needs a new sink.
            None if cmd.looping != self.looping => Some(self.position()),
            None => None,
        };
        self.looping = cmd.looping;
        if let Some(at) = rebuild_at {
            self.rebuild(mixer, at);
        }

        let Some(ref sink) = self.sink else {
            return;
        };
        sink.set_volume(f32::from(cmd.volume) / 100.0);
        sink.set_speed(cmd.playback_rate as f32);
        self.playing = cmd.status == PlayStatus::Playing;
        if self.playing {
            sink.play();
        } else {
            sink.pause();
        }
        let _ = events.send(self.progress());
    }

    /// Called on every tick: report progress or the end of the track.
    fn tick(&mut self, events: &Sender<EngineEvent>) {
        if !self.playing || self.ended {
            return;
        }
        let Some(ref sink) = self.sink else {
            return;
        };
        if sink.empty() {
            self.ended = true;
            self.playing = false;
            let _ = events.send(EngineEvent::Ended);
        } else {
            let _ = events.send(self.progress());
        }
    }
}

pub(super) fn spawn_engine_thread(
    mixer: Mixer,
    rx: Receiver<EngineCmd>,
    events: Sender<EngineEvent>,
    tick: Duration,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut track = Loaded::default();

        loop {
            match rx.recv_timeout(tick) {
                Ok(EngineCmd::Load(url)) => track.load(&mixer, &url, &events),
                Ok(EngineCmd::Transport(cmd)) => track.apply(&mixer, cmd, &events),
                Ok(EngineCmd::Quit { fade_out_ms }) => {
                    if let Some(ref s) = track.sink {
                        if track.playing {
                            fade_out_sink(s, fade_out_ms);
                        }
                        s.stop();
                    }
                    break;
                }
                Err(RecvTimeoutError::Timeout) => track.tick(&events),
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
