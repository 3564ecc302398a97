//! Wall-clock access and date text helpers.
//!
//! The browser build reads the clock through `js_sys::Date`; native builds
//! (SSR and tests) use `time`. Everything downstream works on `time::Date`
//! and epoch milliseconds so rendering stays deterministic under test.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::format_description::well_known::{Iso8601, Rfc3339};
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime};

/// Current calendar date.
#[must_use]
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (year, month, day) = (now.get_full_year() as i32, now.get_month() as u8 + 1, now.get_date() as u8);
        Month::try_from(month)
            .ok()
            .and_then(|m| Date::from_calendar_date(year, m, day).ok())
            .unwrap_or(Date::MIN)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        OffsetDateTime::now_utc().date()
    }
}

/// Current time as epoch milliseconds.
#[must_use]
pub fn now_millis() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let ms = js_sys::Date::now() as i64;
        ms
    }
    #[cfg(not(feature = "hydrate"))]
    {
        i64::try_from(OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000).unwrap_or_default()
    }
}

/// Current time as an RFC 3339 string.
#[must_use]
pub fn now_iso() -> String {
    millis_to_datetime(now_millis())
        .and_then(|t| t.format(&Rfc3339).ok())
        .unwrap_or_default()
}

fn millis_to_datetime(ms: i64) -> Option<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000).ok()
}

/// Parse a strict `YYYY-MM-DD` date.
#[must_use]
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    let mut parts = raw.trim().splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    Date::from_calendar_date(year, Month::try_from(month).ok()?, day).ok()
}

/// Parse a wire timestamp: epoch millis, RFC 3339, a zone-less ISO
/// date-time (taken as UTC) or a bare date.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ms) = raw.parse::<i64>() {
        return millis_to_datetime(ms);
    }
    if let Ok(t) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(t);
    }
    if let Ok(t) = PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT) {
        return Some(t.assume_utc());
    }
    raw.get(..10).and_then(parse_iso_date).map(|d| d.midnight().assume_utc())
}

/// Calendar date of a wire timestamp.
#[must_use]
pub fn parse_date(raw: &str) -> Option<Date> {
    parse_timestamp(raw).map(OffsetDateTime::date)
}

/// Epoch millis of a wire timestamp.
#[must_use]
pub fn parse_millis(raw: &str) -> Option<i64> {
    parse_timestamp(raw).and_then(|t| i64::try_from(t.unix_timestamp_nanos() / 1_000_000).ok())
}

/// `M/D/YYYY`.
#[must_use]
pub fn format_date(date: Date) -> String {
    format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year())
}

/// `YYYY-MM-DD`.
#[must_use]
pub fn iso_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Display form of an optional wire timestamp; `"N/A"` when missing or unparsable.
#[must_use]
pub fn display_date(raw: Option<&str>) -> String {
    raw.and_then(parse_date).map_or_else(|| "N/A".to_owned(), format_date)
}

/// Relative age of `then_ms` measured at `now_ms`.
#[must_use]
pub fn format_time_ago(then_ms: i64, now_ms: i64) -> String {
    let seconds = (now_ms - then_ms).div_euclid(1000);
    match seconds {
        s if s < 60 => "Just now".to_owned(),
        s if s < 3_600 => format!("{} minutes ago", s / 60),
        s if s < 86_400 => format!("{} hours ago", s / 3_600),
        s if s < 2_592_000 => format!("{} days ago", s / 86_400),
        _ => millis_to_datetime(then_ms).map_or_else(String::new, |t| format_date(t.date())),
    }
}
