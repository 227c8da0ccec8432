use chrono::{DateTime, Utc};

/// Longest description excerpt shown in map popups.
pub const EXCERPT_LENGTH: usize = 100;

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 1_440;
const MINUTES_PER_MONTH: i64 = 43_200;
const MINUTES_PER_YEAR: i64 = 525_600;

/// Relative time such as "3 days ago" or "about 5 hours ago".
pub fn time_ago(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(date).num_seconds();
    let distance = distance_in_words(seconds.unsigned_abs());

    if seconds >= 0 {
        format!("{distance} ago")
    } else {
        format!("in {distance}")
    }
}

fn distance_in_words(seconds: u64) -> String {
    let minutes = i64::try_from((seconds + 30) / 60).unwrap_or(i64::MAX);

    match minutes {
        0 => "less than a minute".to_string(),
        1 => "1 minute".to_string(),
        m if m < 45 => format!("{m} minutes"),
        m if m < 90 => "about 1 hour".to_string(),
        m if m < MINUTES_PER_DAY => format!("about {} hours", rounded_div(m, MINUTES_PER_HOUR)),
        m if m < 2_520 => "1 day".to_string(),
        m if m < MINUTES_PER_MONTH => format!("{} days", rounded_div(m, MINUTES_PER_DAY)),
        m if m < 2 * MINUTES_PER_MONTH => "about 1 month".to_string(),
        m if m < MINUTES_PER_YEAR => format!("{} months", rounded_div(m, MINUTES_PER_MONTH)),
        m => {
            let years = rounded_div(m, MINUTES_PER_YEAR);
            if years == 1 {
                "about 1 year".to_string()
            } else {
                format!("about {years} years")
            }
        }
    }
}

const fn rounded_div(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}

/// "March 14, 2025 at 3:09 PM"
pub fn long_date_time(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y at %-I:%M %p").to_string()
}

/// "March 14, 2025"
pub fn long_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "Mar 14, 2025"
pub fn short_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// First `max_chars` characters of `text`, with "..." appended when cut.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::fixed_now;
    use chrono::Duration;

    #[test]
    fn relative_times_follow_distance_buckets() {
        let now = fixed_now();
        let cases = [
            (Duration::seconds(10), "less than a minute ago"),
            (Duration::seconds(70), "1 minute ago"),
            (Duration::minutes(20), "20 minutes ago"),
            (Duration::minutes(60), "about 1 hour ago"),
            (Duration::hours(5), "about 5 hours ago"),
            (Duration::hours(30), "1 day ago"),
            (Duration::days(3), "3 days ago"),
            (Duration::days(29), "29 days ago"),
            (Duration::days(45), "about 1 month ago"),
            (Duration::days(400), "about 1 year ago"),
        ];

        for (offset, expected) in cases {
            assert_eq!(time_ago(now - offset, now), expected, "offset {offset}");
        }
        assert_eq!(time_ago(now + Duration::days(2), now), "in 2 days");
    }

    #[test]
    fn dates_use_long_and_short_forms() {
        let now = fixed_now();
        assert_eq!(long_date_time(now), "March 14, 2025 at 3:09 PM");
        assert_eq!(long_date(now), "March 14, 2025");
        assert_eq!(short_date(now), "Mar 14, 2025");
    }

    #[test]
    fn truncation_adds_ellipsis_only_when_cut() {
        assert_eq!(truncate_description("short", EXCERPT_LENGTH), "short");
        let long = "x".repeat(120);
        let excerpt = truncate_description(&long, EXCERPT_LENGTH);
        assert_eq!(excerpt.len(), 103);
        assert!(excerpt.ends_with("..."));
        assert_eq!(truncate_description(&"y".repeat(100), 100), "y".repeat(100));
    }
}
