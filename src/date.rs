//! Display-date normalization.
//!
//! The listing shows dates such as `24-03-15` (two-digit year, month, day).
//! [`parse_date`] turns such a string into a UTC instant, interpreting it as
//! wall-clock time at a fixed UTC offset.

use crate::error::DateError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// chrono pattern for the listing's `YY-MM-DD` dates.
///
/// `%y` maps 00-68 to 2000-2068 and 69-99 to 1969-1999.
pub const LISTING_DATE_FORMAT: &str = "%y-%m-%d";

/// Parse `text` with the chrono `format` and resolve it at `utc_offset_minutes`
/// east of UTC.
///
/// Date-only formats resolve to local midnight.
pub fn parse_date(
    text: &str,
    format: &str,
    utc_offset_minutes: i32,
) -> Result<DateTime<Utc>, DateError> {
    let offset = fixed_offset(utc_offset_minutes)?;
    let text = text.trim();

    let naive = match NaiveDateTime::parse_from_str(text, format) {
        Ok(naive) => naive,
        Err(_) => NaiveDate::parse_from_str(text, format)?.and_time(chrono::NaiveTime::MIN),
    };

    offset
        .from_local_datetime(&naive)
        .single()
        .map(|local| local.with_timezone(&Utc))
        .ok_or(DateError::Ambiguous(naive))
}

/// Build a [`FixedOffset`] from minutes east of UTC.
pub fn fixed_offset(utc_offset_minutes: i32) -> Result<FixedOffset, DateError> {
    utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(DateError::OffsetOutOfRange(utc_offset_minutes))
}
