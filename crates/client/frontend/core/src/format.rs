//! Timestamp parsing and display helpers.
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a server timestamp.
///
/// Accepts RFC 3339 with an offset. Naive timestamps carry no zone and are
/// taken as UTC, which is how the backend stores them.
pub fn parse_server_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    parse_naive(raw).map(|naive| Utc.from_utc_datetime(&naive))
}

/// Render a server timestamp in the local time zone, or verbatim when it
/// cannot be parsed.
pub fn local_timestamp(raw: &str) -> String {
    match parse_server_timestamp(raw) {
        Some(utc) => utc.with_timezone(&Local).format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// Parse a timestamp typed by the user.
///
/// Offsets are honoured; anything without one is local time. A bare date
/// means local midnight. Returns `None` for unparsable or non-existent
/// local times (DST gaps).
pub fn parse_user_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    let naive = parse_naive(raw).or_else(|| {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    })?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}
