//! Building track descriptors from audio files on disk.

mod scan;

pub use scan::scan;
