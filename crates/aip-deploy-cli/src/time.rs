use std::time::Duration;

/// Human readable duration, e.g. `1h 02m 03s` or `850ms`.
pub fn format_duration(duration: &Duration) -> String {
    let secs = duration.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);

    if hours > 0 {
        format!("{hours}h {minutes:02}m {seconds:02}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds:02}s")
    } else if seconds > 0 {
        format!("{}.{:03}s", seconds, duration.subsec_millis())
    } else {
        format!("{}ms", duration.subsec_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Duration::from_millis(850), "850ms")]
    #[case(Duration::from_millis(2_050), "2.050s")]
    #[case(Duration::from_secs(125), "2m 05s")]
    #[case(Duration::from_secs(3_723), "1h 02m 03s")]
    fn formats_durations(#[case] duration: Duration, #[case] expected: &str) {
        assert_eq!(format_duration(&duration), expected);
    }
}
