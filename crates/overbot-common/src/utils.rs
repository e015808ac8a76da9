//! Shared string and time formatting helpers.

use std::time::Duration;

/// Truncates a string to at most `max_chars` characters, ending with an
/// ellipsis when anything was cut.
///
/// Counts characters, not bytes, so multi-byte input never splits a code
/// point.
pub fn truncate_string(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        return input.to_string();
    }
    let kept: String = input.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Renders a duration as a compact uptime string such as `2d 3h 4m 5s`.
///
/// With `brief` set, seconds are dropped and zero-valued leading units are
/// skipped.
pub fn format_uptime(duration: Duration, brief: bool) -> String {
    let total = duration.as_secs();
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    if brief {
        let mut parts = Vec::new();
        if days > 0 {
            parts.push(format!("{days}d"));
        }
        if days > 0 || hours > 0 {
            parts.push(format!("{hours}h"));
        }
        parts.push(format!("{minutes}m"));
        return parts.join(" ");
    }

    format!("{days}d {hours}h {minutes}m {seconds}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        let input = "This is a very long string that should be truncated";
        let truncated = truncate_string(input, 20);
        assert_eq!(truncated, "This is a very lo...");

        let short = "Short";
        assert_eq!(truncate_string(short, 20), "Short");
    }

    #[test]
    fn test_truncate_string_multibyte() {
        let input = "ééééééééé";
        assert_eq!(truncate_string(input, 5), "éé...");
    }

    #[test]
    fn test_format_uptime() {
        let duration = Duration::from_secs(2 * 86_400 + 3 * 3_600 + 4 * 60 + 5);
        assert_eq!(format_uptime(duration, false), "2d 3h 4m 5s");
        assert_eq!(format_uptime(duration, true), "2d 3h 4m");
        assert_eq!(format_uptime(Duration::from_secs(125), true), "2m");
    }
}
