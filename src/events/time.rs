use crate::error::{config_error, BotResult};
use chrono::{DateTime, Datelike, Duration, Utc};

/// Length of the upcoming-week horizon used by the event filter, in seconds
pub const WEEK_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Convert a unix timestamp to a UTC datetime.
/// Out-of-range stamps clamp to the epoch so formatting stays total.
pub fn unix_to_date(stamp: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(stamp, 0).unwrap_or_default()
}

/// Full date rendering: long weekday, day, month, 24-hour time (UTC)
fn full_date(date: &DateTime<Utc>) -> String {
    date.format("%A, %-d %B, %H:%M").to_string()
}

/// Time-only rendering, 24-hour (UTC)
fn just_time(date: &DateTime<Utc>) -> String {
    date.format("%H:%M").to_string()
}

/// Human-readable span between two unix timestamps.
///
/// Events starting and ending on the same UTC calendar date render as
/// `Friday, 1 September, 17:00 to 19:00`; anything longer repeats the
/// full date on both sides of the `to`.
pub fn span(start: i64, end: i64) -> String {
    let start_date = unix_to_date(start);
    let end_date = unix_to_date(end);
    if start_date.date_naive() == end_date.date_naive() {
        format!("{} to {}", full_date(&start_date), just_time(&end_date))
    } else {
        format!("{} to {}", full_date(&start_date), full_date(&end_date))
    }
}

/// Parse time string in HH:MM format
pub fn parse_time(time_str: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Calculate the next weekly publish time (Mondays at the target HH:MM, UTC)
pub fn next_publish_time(
    current_time: DateTime<Utc>,
    target_time: &str,
) -> BotResult<DateTime<Utc>> {
    let (target_hour, target_minute) =
        parse_time(target_time).ok_or_else(|| config_error("Invalid publish time format"))?;

    let mut next = current_time
        .date_naive()
        .and_hms_opt(target_hour, target_minute, 0)
        .ok_or_else(|| config_error("Failed to create datetime"))?
        .and_utc();

    // If we've already passed the target time today, move to tomorrow
    if next <= current_time {
        next += Duration::days(1);
    }

    // Publishing happens on Mondays
    while next.weekday() != chrono::Weekday::Mon {
        next += Duration::days(1);
    }

    Ok(next)
}
