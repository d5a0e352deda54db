use chrono::{DateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn to_rfc3339(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Renders a duration in whole seconds as `H:MM:SS`, or `M:SS` under an
/// hour, for the result view's time-spent field.
pub fn format_duration(total_seconds: i32) -> String {
    let total_seconds = total_seconds.max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_short_durations_without_hours() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(754), "12:34");
    }

    #[test]
    fn formats_long_durations_with_hours() {
        assert_eq!(format_duration(3600), "1:00:00");
        assert_eq!(format_duration(3754), "1:02:34");
    }

    #[test]
    fn clamps_negative_durations() {
        assert_eq!(format_duration(-5), "0:00");
    }
}
