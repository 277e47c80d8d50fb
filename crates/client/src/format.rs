// =============================================================================
// Postline Client - Format Utilities
// =============================================================================

use chrono::DateTime;

/// Short card date, e.g. `Mar 5`. Empty when absent or unparseable.
pub fn short_date(iso: Option<&str>) -> String {
    iso.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.format("%b %-d").to_string())
        .unwrap_or_default()
}

/// Medium date with short time, e.g. `Mar 5, 2025, 14:03`.
pub fn medium_date_time(iso: Option<&str>) -> String {
    iso.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.format("%b %-d, %Y, %H:%M").to_string())
        .unwrap_or_default()
}

/// Group digits in thousands, e.g. `12,500`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"1 post"` / `"3 posts"`.
pub fn pluralize(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{} {}", n, noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates() {
        let iso = Some("2025-03-05T14:03:00.000Z");
        assert_eq!(short_date(iso), "Mar 5");
        assert_eq!(medium_date_time(iso), "Mar 5, 2025, 14:03");
        assert_eq!(short_date(None), "");
        assert_eq!(medium_date_time(Some("yesterday")), "");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "post"), "1 post");
        assert_eq!(pluralize(0, "post"), "0 posts");
    }
}
