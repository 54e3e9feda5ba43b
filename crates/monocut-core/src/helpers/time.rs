// crates/monocut-core/src/helpers/time.rs
//
// Shared time formatting. Both functions floor to whole seconds and clamp
// negative or non-finite input to zero.

fn whole_seconds(secs: f64) -> u64 {
    if secs.is_finite() && secs > 0.0 { secs.floor() as u64 } else { 0 }
}

/// `MM:SS`, the compact form on library cards and the preview hint.
/// Minutes are not wrapped into hours.
///
/// ```
/// use monocut_core::helpers::time::format_duration;
/// assert_eq!(format_duration(95.0),   "01:35");
/// assert_eq!(format_duration(3725.0), "62:05");
/// ```
pub fn format_duration(secs: f64) -> String {
    let total = whole_seconds(secs);
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// `HH:MM:SS`, used by the inspector and the transport time readout.
///
/// ```
/// use monocut_core::helpers::time::format_timecode;
/// assert_eq!(format_timecode(95.0),   "00:01:35");
/// assert_eq!(format_timecode(3725.9), "01:02:05");
/// ```
pub fn format_timecode(secs: f64) -> String {
    let total = whole_seconds(secs);
    format!("{:02}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_negative_clamp() {
        assert_eq!(format_duration(0.0),  "00:00");
        assert_eq!(format_duration(-4.0), "00:00");
        assert_eq!(format_timecode(-1.0), "00:00:00");
        assert_eq!(format_timecode(f64::NAN), "00:00:00");
    }

    #[test]
    fn fractional_seconds_floor() {
        assert_eq!(format_duration(59.99), "00:59");
        assert_eq!(format_timecode(59.99), "00:00:59");
    }

    #[test]
    fn ninety_five_seconds() {
        assert_eq!(format_duration(95.0), "01:35");
        assert_eq!(format_timecode(95.0), "00:01:35");
    }

    #[test]
    fn hours_roll_over() {
        assert_eq!(format_timecode(36_000.0), "10:00:00");
        assert_eq!(format_duration(36_000.0), "600:00");
    }
}
