//! Sound engine abstraction and its `rodio` backend.
//!
//! The transport never talks to `rodio` directly: it drives a `SoundEngine`
//! and consumes the `EngineEvent`s the engine reports back.

mod engine;
mod player;
mod sink;
mod thread;
mod types;

#[cfg(test)]
pub(crate) mod recording;

pub use engine::SoundEngine;
pub use player::RodioEngine;
pub use types::*;
