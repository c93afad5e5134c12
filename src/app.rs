//! Application module: exposes the deck model used by the TUI and runtime.
//!
//! The `Deck` lives in `app::model` and holds the tracks, the selection and
//! the ensemble flags it publishes to every track.

mod model;

pub use model::*;
