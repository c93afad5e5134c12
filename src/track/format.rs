/// Percentage of the track already played, or `None` while the duration is unknown.
pub fn progress_state(position_ms: u64, duration_ms: u64) -> Option<f64> {
    if duration_ms == 0 {
        return None;
    }
    Some(position_ms as f64 / duration_ms as f64 * 100.0)
}

/// Format milliseconds as `MM:SS`.
///
/// There is no hours field: minutes wrap at 60, so one hour renders as `00:00`.
pub fn duration_to_time(ms: u64) -> String {
    let seconds = (ms / 1000) % 60;
    let minutes = (ms / (1000 * 60)) % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Derive a readable title from a track url.
///
/// Takes the last path segment, drops everything from the last `.` and
/// turns the first `+` into a space. Other escapes are left untouched.
pub fn title_from_url(url: Option<&str>) -> String {
    let Some(url) = url else {
        return String::new();
    };

    let filename = match url.rfind('/') {
        Some(i) => &url[i + 1..],
        None => url,
    };
    let title = match filename.rfind('.') {
        Some(i) => &filename[..i],
        None => filename,
    };
    title.replacen('+', " ", 1)
}
