use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

/// Default timezone for valuation dates.
/// This is the canonical timezone used to convert UTC instants to domain dates.
/// For a US-focused portfolio ledger, America/New_York is a sensible default.
pub const DEFAULT_VALUATION_TZ: Tz = chrono_tz::America::New_York;

/// Converts a UTC instant to a valuation date in the given timezone.
///
/// This is the single source of truth for converting instants to domain dates.
/// Use this whenever you need to derive a "business date" from a timestamp.
///
/// # Arguments
/// * `instant` - The UTC timestamp to convert
/// * `tz` - The timezone to use for the conversion
pub fn valuation_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Convenience function that uses the default valuation timezone.
/// Equivalent to `valuation_date_from_utc(instant, DEFAULT_VALUATION_TZ)`.
pub fn valuation_date(instant: DateTime<Utc>) -> NaiveDate {
    valuation_date_from_utc(instant, DEFAULT_VALUATION_TZ)
}

/// Midnight of the given calendar date in the valuation timezone,
/// expressed as a UTC instant.
///
/// Returns `None` for invalid dates or the rare local times that do not
/// exist in the valuation timezone.
pub fn instant_for_date(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    let midnight = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)?;
    DEFAULT_VALUATION_TZ
        .from_local_datetime(&midnight)
        .single()
        .map(|local| local.with_timezone(&Utc))
}

/// Whether `instant` falls strictly between `start` and `end` at
/// calendar-day granularity in the valuation timezone.
///
/// Events on the boundary dates themselves are excluded: an event dated
/// the same day as `start` or `end` is not in range.
pub fn in_date_range_exclusive(
    instant: DateTime<Utc>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> bool {
    let date = valuation_date(instant);
    date > valuation_date(start) && date < valuation_date(end)
}

/// Report timestamp, rendered in the valuation timezone.
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&DEFAULT_VALUATION_TZ)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
