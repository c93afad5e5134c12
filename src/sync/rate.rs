fn usable_bpm(bpm: f64) -> bool {
    bpm.is_finite() && bpm > 0.0
}

/// Playback rate that makes a track at `own_bpm` sound at `leader_bpm`.
///
/// Outside sync mode, or when either tempo is unknown or nonsensical, the
/// track plays at its native rate.
pub fn playback_rate(is_syncing: bool, leader_bpm: f64, own_bpm: f64) -> f64 {
    if !is_syncing {
        return 1.0;
    }
    if !usable_bpm(leader_bpm) || !usable_bpm(own_bpm) {
        log::warn!("cannot sync {own_bpm} BPM to leader at {leader_bpm} BPM; playing at native tempo");
        return 1.0;
    }
    leader_bpm / own_bpm
}
