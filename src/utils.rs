use number_prefix::NumberPrefix;
use std::time::{Duration, SystemTime};

pub fn format_size(size: u64) -> String {
    match NumberPrefix::binary(size as f64) {
        NumberPrefix::Standalone(bytes) => format!("{} B", bytes),
        NumberPrefix::Prefixed(prefix, n) => format!("{:.1} {}B", n, prefix),
    }
}

/// Relative-time label ("3 hours ago") for an entry's modified timestamp.
pub fn format_relative(modified: SystemTime, now: SystemTime) -> String {
    let elapsed = now
        .duration_since(modified)
        .unwrap_or(Duration::ZERO)
        .as_secs();
    match elapsed {
        0..=59 => "just now".to_string(),
        60..=3_599 => plural(elapsed / 60, "minute"),
        3_600..=86_399 => plural(elapsed / 3_600, "hour"),
        86_400..=604_799 => plural(elapsed / 86_400, "day"),
        _ => plural(elapsed / 604_800, "week"),
    }
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Shorten a name to fit a grid cell, keeping a trailing ellipsis.
pub fn truncate_name(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        return name.to_string();
    }
    let kept: String = name.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_labels_match_the_sample_wording() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(10_000_000);
        let at = |secs: u64| now - Duration::from_secs(secs);

        assert_eq!(format_relative(at(30), now), "just now");
        assert_eq!(format_relative(at(60), now), "1 minute ago");
        assert_eq!(format_relative(at(3 * 3_600), now), "3 hours ago");
        assert_eq!(format_relative(at(2 * 86_400), now), "2 days ago");
        assert_eq!(format_relative(at(7 * 86_400), now), "1 week ago");
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        assert_eq!(format_relative(now + Duration::from_secs(500), now), "just now");
    }

    #[test]
    fn truncation_keeps_short_names_intact() {
        assert_eq!(truncate_name("short.txt", 20), "short.txt");
        assert_eq!(truncate_name("a very long file name.pdf", 10), "a very lo…");
    }
}
