//! Duration formatting and parsing.

use chrono::Duration;

/// Format whole seconds as `MM:SS`.
///
/// Minutes are not wrapped into hours, so 90 minutes renders as `90:00`.
#[must_use]
pub fn format_time(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a number of minutes as a human-readable string.
#[must_use]
pub fn format_minutes(total_minutes: u32) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    let plural = |n: u32| if n == 1 { "" } else { "s" };

    if hours > 0 {
        if minutes > 0 {
            format!(
                "{hours} hour{}, {minutes} minute{}",
                plural(hours),
                plural(minutes)
            )
        } else {
            format!("{hours} hour{}", plural(hours))
        }
    } else {
        format!("{minutes} minute{}", plural(minutes))
    }
}

/// Parse a duration string like "25m", "1h30m", "90s".
///
/// A bare number is taken as minutes.
#[must_use]
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim().to_lowercase();

    if let Ok(minutes) = s.parse::<i64>() {
        return Duration::try_minutes(minutes).filter(|_| minutes > 0);
    }

    let mut total_seconds: i64 = 0;
    let mut current_num = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            current_num.push(c);
        } else {
            if current_num.is_empty() {
                return None;
            }
            let num: i64 = current_num.parse().ok()?;
            current_num.clear();

            let seconds = match c {
                'h' => num.checked_mul(3600)?,
                'm' => num.checked_mul(60)?,
                's' => num,
                _ => return None,
            };
            total_seconds = total_seconds.checked_add(seconds)?;
        }
    }

    // trailing number without unit counts as minutes
    if !current_num.is_empty() {
        let num: i64 = current_num.parse().ok()?;
        total_seconds = total_seconds.checked_add(num.checked_mul(60)?)?;
    }

    Duration::try_seconds(total_seconds).filter(|_| total_seconds > 0)
}

/// Parse a duration string into whole minutes, rounding down.
///
/// Returns `None` for anything shorter than one minute.
#[must_use]
pub fn parse_minutes(s: &str) -> Option<u32> {
    let minutes = parse_duration(s)?.num_minutes();
    u32::try_from(minutes).ok().filter(|m| *m > 0)
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(59), "00:59");
        assert_eq!(format_time(60), "01:00");
        assert_eq!(format_time(1500), "25:00");
        assert_eq!(format_time(5400), "90:00");
        assert_eq!(format_time(6001), "100:01");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "0 minutes");
        assert_eq!(format_minutes(1), "1 minute");
        assert_eq!(format_minutes(25), "25 minutes");
        assert_eq!(format_minutes(120), "2 hours");
        assert_eq!(format_minutes(61), "1 hour, 1 minute");
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("25"), Some(Duration::minutes(25)));
        assert_eq!(parse_duration("25m"), Some(Duration::minutes(25)));
        assert_eq!(parse_duration("1h30m"), Some(Duration::minutes(90)));
        assert_eq!(parse_duration("90s"), Some(Duration::seconds(90)));
        assert_eq!(parse_duration("1h5"), Some(Duration::minutes(65)));
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration("").is_none());
        assert!(parse_duration("abc").is_none());
        assert!(parse_duration("0").is_none());
        assert!(parse_duration("10x").is_none());
    }

    #[test]
    fn test_parse_duration_overflow() {
        assert!(parse_duration("999999999999999999").is_none());
        assert!(parse_duration("99999999999999999h").is_none());
        assert!(parse_duration("9999999999999999m9999999999999999m").is_none());
        assert!(parse_duration("99999999999999999999").is_none());
        assert_eq!(parse_minutes("99999999999999999h"), None);
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("50m"), Some(50));
        assert_eq!(parse_minutes("90s"), Some(1));
        assert_eq!(parse_minutes("30s"), None);
    }

    #[test]
    fn test_render_progress_bar() {
        assert_eq!(render_progress_bar(0.5, 4), "[██░░]");
        assert_eq!(render_progress_bar(1.5, 2), "[██]");
        assert_eq!(render_progress_bar(0.0, 2), "[░░]");
    }
}
