//! Ensemble synchronization for a track.
//!
//! The deck publishes `SyncFlags` on every update; `SyncAdapter` turns
//! changes of those flags into loop-play or stop commands on a track.

mod adapter;
mod flags;
mod rate;

pub use adapter::*;
pub use flags::*;
pub use rate::*;

#[cfg(test)]
mod tests;
