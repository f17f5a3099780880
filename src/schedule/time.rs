//! Wall-clock time strings (`"11:30 AM"`) to minutes since midnight and back.

pub const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeParseError {
    #[error("missing ':' separator in time {0:?}")]
    MissingSeparator(String),

    #[error("missing AM/PM marker in time {0:?}")]
    MissingPeriod(String),

    #[error("unknown period marker {0:?}, expected AM or PM")]
    InvalidPeriod(String),

    #[error("invalid hour {0:?}, expected 1-12")]
    InvalidHour(String),

    #[error("invalid minute {0:?}, expected 00-59")]
    InvalidMinute(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Period {
    Am,
    Pm,
}

impl Period {
    fn parse(raw: &str) -> Result<Self, TimeParseError> {
        let lower = raw.to_ascii_lowercase();
        match lower.as_str() {
            "pm" | "p.m." => Ok(Period::Pm),
            "am" | "a.m." => Ok(Period::Am),
            _ => Err(TimeParseError::InvalidPeriod(raw.to_string())),
        }
    }
}

/// Parse a 12-hour clock string such as `"9:05 AM"` or `"06:00 pm"` into
/// minutes elapsed since midnight.
pub fn parse_minutes(input: &str) -> Result<u32, TimeParseError> {
    let trimmed = input.trim();

    let (hour_raw, rest) = trimmed
        .split_once(':')
        .ok_or_else(|| TimeParseError::MissingSeparator(trimmed.to_string()))?;

    let mut rest_parts = rest.split_whitespace();
    let minute_raw = rest_parts.next().unwrap_or_default();
    let period_raw = rest_parts
        .next()
        .ok_or_else(|| TimeParseError::MissingPeriod(trimmed.to_string()))?;

    if let Some(extra) = rest_parts.next() {
        return Err(TimeParseError::InvalidPeriod(format!("{period_raw} {extra}")));
    }

    let mut hour = Some(hour_raw.trim())
        .filter(|h| (1..=2).contains(&h.len()) && h.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|h| h.parse::<u32>().ok())
        .filter(|h| (1..=12).contains(h))
        .ok_or_else(|| TimeParseError::InvalidHour(hour_raw.to_string()))?;

    // Minutes are always two digits in the dashboard format.
    let minute = Some(minute_raw)
        .filter(|m| m.len() == 2 && m.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|m| m.parse::<u32>().ok())
        .filter(|m| *m < 60)
        .ok_or_else(|| TimeParseError::InvalidMinute(minute_raw.to_string()))?;

    match Period::parse(period_raw)? {
        Period::Pm if hour != 12 => hour += 12,
        Period::Am if hour == 12 => hour = 0,
        _ => {}
    }

    Ok(hour * 60 + minute)
}

/// Format minutes since midnight as `"H:MM AM/PM"`. Values past the end of
/// the day wrap around.
pub fn format_minutes(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    let hour = minutes / 60;
    let minute = minutes % 60;

    let period = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };

    format!("{display_hour}:{minute:02} {period}")
}

/// Label used for hour rows of the grid (`"12 AM"`, `"1 PM"`, ...).
pub fn hour_label(hour: u32) -> String {
    format_minutes(hour * 60).replacen(":00", "", 1)
}
