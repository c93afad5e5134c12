use super::format::title_from_url;

/// Read-only description of a track as supplied by the deck.
///
/// Equality over all fields is the identity used by load and removal notices.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackDescriptor {
    /// Who recorded or uploaded the track.
    pub owner: String,
    /// Native tempo. May be 0 when unknown.
    pub bpm: f64,
    /// Where the engine loads the audio from.
    pub url: String,
}

impl TrackDescriptor {
    pub fn new(owner: impl Into<String>, bpm: f64, url: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            bpm,
            url: url.into(),
        }
    }

    /// Human title derived from the url.
    pub fn title(&self) -> String {
        title_from_url(Some(&self.url))
    }

    /// Secondary text shown under the title.
    pub fn bpm_label(&self) -> String {
        format!("BPM: {}", self.bpm)
    }
}
