use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::mixer::Mixer;

use crate::config::EngineSettings;

use super::engine::SoundEngine;
use super::thread::spawn_engine_thread;
use super::types::{EngineCmd, EngineEvent, TransportCommand};

/// A `SoundEngine` backed by one `rodio` sink on its own worker thread.
///
/// Dropping the engine fades the sink out and joins the thread, unless it was
/// `cut` first.
pub struct RodioEngine {
    tx: Sender<EngineCmd>,
    join: Option<JoinHandle<()>>,
    fade_out_ms: u64,
}

impl RodioEngine {
    /// Spawn an engine playing into `mixer`. Events arrive on the returned receiver.
    pub fn new(mixer: &Mixer, settings: &EngineSettings) -> (Self, Receiver<EngineEvent>) {
        let (tx, rx) = mpsc::channel::<EngineCmd>();
        let (events_tx, events_rx) = mpsc::channel::<EngineEvent>();

        let join = spawn_engine_thread(
            mixer.clone(),
            rx,
            events_tx,
            Duration::from_millis(settings.tick_ms),
        );

        let engine = Self {
            tx,
            join: Some(join),
            fade_out_ms: settings.fade_out_ms,
        };
        (engine, events_rx)
    }

    fn send(&self, cmd: EngineCmd) {
        if self.tx.send(cmd).is_err() {
            log::warn!("engine thread is gone; dropping command");
        }
    }
}

impl SoundEngine for RodioEngine {
    fn load(&mut self, url: &str) {
        self.send(EngineCmd::Load(url.to_string()));
    }

    fn set_transport(&mut self, cmd: TransportCommand) {
        self.send(EngineCmd::Transport(cmd));
    }

    fn cut(&mut self) {
        self.fade_out_ms = 0;
    }
}

// Blocks the caller for up to `fade_out_ms` while a playing sink fades out.
impl Drop for RodioEngine {
    fn drop(&mut self) {
        let _ = self.tx.send(EngineCmd::Quit {
            fade_out_ms: self.fade_out_ms,
        });
        if let Some(h) = self.join.take() {
            let _ = h.join();
        }
    }
}
