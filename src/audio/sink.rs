//! Opening tracks and preparing `rodio` sinks for them.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::prelude::*;
use rodio::mixer::Mixer;
use rodio::{Decoder, Sink, Source};

use crate::error::EngineError;

/// Map a track url to a local file path.
///
/// Plain paths and `file://` urls are accepted. Remote urls are rejected:
/// fetching them is not this engine's job.
pub(super) fn resolve_path(url: &str) -> Result<PathBuf, EngineError> {
    if let Some(rest) = url.strip_prefix("file://") {
        return Ok(PathBuf::from(rest));
    }
    if url.contains("://") {
        return Err(EngineError::Remote(url.to_string()));
    }
    Ok(PathBuf::from(url))
}

/// Best-effort duration: ask the decoder first, then the file's tags.
pub(super) fn probe_duration(path: &Path) -> Option<Duration> {
    let decoded = File::open(path)
        .ok()
        .and_then(|f| Decoder::new(BufReader::new(f)).ok())
        .and_then(|d| d.total_duration());

    decoded.or_else(|| {
        lofty::read_from_path(path)
            .ok()
            .map(|tagged| tagged.properties().duration())
            .filter(|d| !d.is_zero())
    })
}

/// Create a paused `Sink` for `path` starting at `start_at`.
///
/// Looping sources repeat forever; only the first pass is offset by `start_at`.
pub(super) fn create_sink_at(
    mixer: &Mixer,
    path: &Path,
    start_at: Duration,
    looping: bool,
) -> Result<Sink, EngineError> {
    let file = File::open(path).map_err(|source| EngineError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let decoder = Decoder::new(BufReader::new(file)).map_err(|source| EngineError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let sink = Sink::connect_new(mixer);
    if looping {
        sink.append(decoder.buffered().repeat_infinite().skip_duration(start_at));
    } else {
        // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
        sink.append(decoder.skip_duration(start_at));
    }
    sink.pause();
    Ok(sink)
}
