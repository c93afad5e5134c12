use std::path::Path;

use lofty::prelude::*;
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::track::TrackDescriptor;

pub(super) fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Parse a BPM tag value. Accepts decimals; rejects zero and garbage.
pub(super) fn parse_bpm(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|b| b.is_finite() && *b > 0.0)
}

/// Name of the directory holding `path`, used when there is no artist tag.
pub(super) fn folder_owner(path: &Path) -> String {
    path.parent()
        .and_then(|p| p.file_name())
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

/// Walk `dir` and describe every audio file found, sorted by title.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<TrackDescriptor> {
    let mut tracks: Vec<TrackDescriptor> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file()
            || (!settings.include_hidden && is_hidden(path))
            || !is_audio_file(path, settings)
        {
            continue;
        }

        let mut owner: Option<String> = None;
        let mut bpm: Option<f64> = None;

        if let Ok(tagged) = lofty::read_from_path(path) {
            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = tag.get_string(&ItemKey::TrackArtist) {
                    let v = v.trim();
                    if !v.is_empty() {
                        owner = Some(v.to_string());
                    }
                }
                bpm = tag
                    .get_string(&ItemKey::Bpm)
                    .or_else(|| tag.get_string(&ItemKey::IntegerBpm))
                    .and_then(parse_bpm);
            }
        } else {
            log::debug!("no readable tags in {}", path.display());
        }

        let bpm = bpm.or(settings.default_bpm).unwrap_or(0.0);
        if bpm == 0.0 {
            log::info!("{}: no BPM known, it will not follow sync", path.display());
        }

        tracks.push(TrackDescriptor::new(
            owner.unwrap_or_else(|| folder_owner(path)),
            bpm,
            path.to_string_lossy(),
        ));
    }

    tracks.sort_by_key(|t| t.title().to_lowercase());
    tracks
}
