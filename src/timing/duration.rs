/// Parse `"h:mm:ss"` or `"mm:ss"` into seconds.
///
/// Anything else (wrong part count, non-numeric parts, overflow) is treated as
/// zero seconds rather than an error. Parts are unsigned, so a negative part
/// also yields zero: `"-1:30"` is 0, not a signed -30s.
pub fn parse_duration(text: &str) -> u64 {
    match try_parse(text) {
        Some(secs) => secs,
        None => {
            tracing::debug!(duration = text, "Unparseable duration, counting as 0s");
            0
        }
    }
}

fn try_parse(text: &str) -> Option<u64> {
    let parts = text
        .split(':')
        .map(|p| p.trim().parse::<u64>().ok())
        .collect::<Option<Vec<u64>>>()?;

    let (hours, minutes, seconds) = match parts.as_slice() {
        [h, m, s] => (*h, *m, *s),
        [m, s] => (0, *m, *s),
        _ => return None,
    };

    hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)
}

/// Render seconds as `"1h 2m 3s"`, dropping the hour part when it is zero.
///
/// Not the inverse of [`parse_duration`]: the output uses unit suffixes, the
/// input uses colons.
pub fn format_duration(secs: u64) -> String {
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let rem = secs % 60;
    if hours > 0 {
        format!("{}h {}m {}s", hours, mins, rem)
    } else {
        format!("{}m {}s", mins, rem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hours_minutes_seconds() {
        assert_eq!(parse_duration("1:02:03"), 3723);
    }

    #[test]
    fn test_parse_minutes_seconds() {
        assert_eq!(parse_duration("5:30"), 330);
        assert_eq!(parse_duration("75:00"), 4500);
    }

    #[test]
    fn test_parse_malformed_is_zero() {
        assert_eq!(parse_duration("garbage"), 0);
        assert_eq!(parse_duration(""), 0);
        assert_eq!(parse_duration("42"), 0);
        assert_eq!(parse_duration("1:2:3:4"), 0);
        assert_eq!(parse_duration("5:xx"), 0);
        assert_eq!(parse_duration("-1:30"), 0);
    }

    #[test]
    fn test_parse_tolerates_padding() {
        assert_eq!(parse_duration(" 2 : 05 "), 125);
    }

    #[test]
    fn test_parse_overflow_is_zero() {
        assert_eq!(parse_duration("18446744073709551615:00:00"), 0);
    }

    #[test]
    fn test_format_with_hours() {
        assert_eq!(format_duration(3723), "1h 2m 3s");
        assert_eq!(format_duration(7200), "2h 0m 0s");
    }

    #[test]
    fn test_format_without_hours() {
        assert_eq!(format_duration(330), "5m 30s");
        assert_eq!(format_duration(0), "0m 0s");
    }

    #[test]
    fn test_formatted_text_does_not_parse_back() {
        // Suffix style output is not colon style input.
        assert_eq!(parse_duration(&format_duration(3723)), 0);
    }
}
