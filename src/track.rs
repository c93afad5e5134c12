//! Track descriptors and the read-only values derived from them.
//!
//! A `TrackDescriptor` is owned by the deck and handed to each player as its
//! identity. The helpers in `format` turn raw transport numbers into the
//! strings and percentages the view shows.

mod descriptor;
mod format;

pub use descriptor::*;
pub use format::*;
