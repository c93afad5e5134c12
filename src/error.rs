//! Error types for the sound engine.
//!
//! None of these reach the transport: the engine logs them and carries on.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The track file could not be opened.
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The track file is not a format the decoder understands.
    #[error("failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    /// Remote urls are not fetched by this engine.
    #[error("remote url not supported: {0}")]
    Remote(String),

    /// No audio output device could be opened.
    #[error("no audio output device: {0}")]
    OutputDevice(#[from] rodio::StreamError),
}
