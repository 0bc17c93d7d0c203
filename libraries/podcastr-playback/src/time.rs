//! Time label formatting

/// Render whole seconds as `HH:MM:SS`
///
/// Every unit is zero-padded to two digits; hours keep growing past 99.
pub fn format_duration(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Convert a media offset reported by a surface into whole seconds
///
/// Negative and non-finite offsets clamp to zero.
pub fn whole_seconds(position_secs: f64) -> u64 {
    if position_secs.is_finite() && position_secs > 0.0 {
        position_secs.floor() as u64
    } else {
        0
    }
}
