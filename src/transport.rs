//! Transport state machine for a single track.
//!
//! `TrackPlayer` owns the play/pause/stop/loop state, volume and position of
//! one track, pushes every change to its `SoundEngine` and turns engine
//! events back into state updates and deck notices.

mod player;
mod state;

pub use player::*;
pub use state::*;

#[cfg(test)]
mod tests;
