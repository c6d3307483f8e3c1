//! UTC datetime utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` struct for absolute cache expiry
//! timestamps.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::parse("2024-06-15").unwrap();
//! let dt = DateTimeUtc::parse("2024-06-15T16:30:45+02:00").unwrap();
//!
//! assert_eq!(dt.to_rfc3339(), "2024-06-15T14:30:45Z");
//! assert_eq!(dt.unix_timestamp(), 1_718_461_845);
//! ```

use anyhow::{Result, bail};
use std::fmt;

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse a date or an RFC 3339 datetime, normalized to UTC.
    ///
    /// Accepted forms:
    /// - `YYYY-MM-DD`
    /// - `YYYY-MM-DD[T| ]HH:MM:SS[.fraction][Z|±HH:MM]`
    ///
    /// A datetime without a zone is taken as UTC. Fractional seconds are dropped.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        if bytes.len() == 10 {
            let date = Self::from_ymd(year, month, day);
            date.validate().ok()?;
            return Some(date);
        }

        // "YYYY-MM-DDTHH:MM:SS" (19 chars)
        if bytes.len() < 19 || !matches!(bytes[10], b'T' | b't' | b' ') {
            return None;
        }
        if bytes[13] != b':' || bytes[16] != b':' {
            return None;
        }
        let dt = Self::new(
            year,
            month,
            day,
            parse_u8(&bytes[11..13])?,
            parse_u8(&bytes[14..16])?,
            parse_u8(&bytes[17..19])?,
        );
        dt.validate().ok()?;

        let mut rest = &bytes[19..];
        if let Some((b'.', fraction)) = rest.split_first() {
            let digits = fraction.iter().take_while(|b| b.is_ascii_digit()).count();
            if digits == 0 {
                return None;
            }
            rest = &fraction[digits..];
        }

        let offset_secs = match rest {
            [] | [b'Z' | b'z'] => 0,
            [sign @ (b'+' | b'-'), h1, h2, b':', m1, m2] => {
                let hours = parse_u8(&[*h1, *h2])?;
                let minutes = parse_u8(&[*m1, *m2])?;
                if hours > 23 || minutes > 59 {
                    return None;
                }
                let secs = i64::from(hours) * 3600 + i64::from(minutes) * 60;
                if *sign == b'+' { secs } else { -secs }
            }
            _ => return None,
        };

        if offset_secs == 0 {
            Some(dt)
        } else {
            Self::from_unix_timestamp(dt.unix_timestamp() - offset_secs)
        }
    }

    /// Inverse of [`Self::unix_timestamp`].
    ///
    /// Returns `None` outside years 0..=9999.
    pub fn from_unix_timestamp(ts: i64) -> Option<Self> {
        let days = ts.div_euclid(86_400);
        let secs = ts.rem_euclid(86_400);
        let (year, month, day) = civil_from_days(days);

        if !(0..=9999).contains(&year) {
            return None;
        }

        Some(Self::new(
            u16::try_from(year).ok()?,
            u8::try_from(month).ok()?,
            u8::try_from(day).ok()?,
            u8::try_from(secs / 3600).ok()?,
            u8::try_from(secs % 3600 / 60).ok()?,
            u8::try_from(secs % 60).ok()?,
        ))
    }

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Format as RFC 3339: `YYYY-MM-DDTHH:MM:SSZ`
    pub fn to_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }

    /// Seconds since 1970-01-01T00:00:00Z (negative before the epoch).
    pub fn unix_timestamp(self) -> i64 {
        let days = days_from_civil(
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        );
        days * 86_400
            + i64::from(self.hour) * 3600
            + i64::from(self.minute) * 60
            + i64::from(self.second)
    }
}

impl fmt::Display for DateTimeUtc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

/// Days since the Unix epoch for a proleptic Gregorian date.
///
/// Howard Hinnant's `days_from_civil`.
const fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Proleptic Gregorian date for days since the Unix epoch.
///
/// Howard Hinnant's `civil_from_days`.
const fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let dt = DateTimeUtc::parse("2024-06-15").unwrap();
        assert_eq!(dt, DateTimeUtc::from_ymd(2024, 6, 15));
    }

    #[test]
    fn test_parse_with_time() {
        let dt = DateTimeUtc::parse("2024-06-15T14:30:45Z").unwrap();
        assert_eq!(dt, DateTimeUtc::new(2024, 6, 15, 14, 30, 45));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(DateTimeUtc::parse(""), None);
        assert_eq!(DateTimeUtc::parse("2024/06/15"), None);
        assert_eq!(DateTimeUtc::parse("2024-13-01"), None);
        assert_eq!(DateTimeUtc::parse("2024-06-15T14:30"), None);
        assert_eq!(DateTimeUtc::parse("2024-06-15T14:30:45Zjunk"), None);
        assert_eq!(DateTimeUtc::parse("2024-06-15T14:30:45+0200"), None);
        assert_eq!(DateTimeUtc::parse("2024-06-15T14:30:45+24:00"), None);
        assert_eq!(DateTimeUtc::parse("2024-06-15T14:30:45."), None);
        assert_eq!(DateTimeUtc::parse("2024-06-15_14:30:45Z"), None);
        assert_eq!(DateTimeUtc::parse("soon"), None);
    }

    #[test]
    fn test_parse_offset_normalized_to_utc() {
        assert_eq!(
            DateTimeUtc::parse("2030-06-01T02:00:00+02:00"),
            Some(DateTimeUtc::from_ymd(2030, 6, 1))
        );
        assert_eq!(
            DateTimeUtc::parse("2030-06-01T01:30:00-01:00"),
            Some(DateTimeUtc::new(2030, 6, 1, 2, 30, 0))
        );
        // Offset moves the date back across a year boundary
        assert_eq!(
            DateTimeUtc::parse("2030-01-01T00:30:00+01:00"),
            Some(DateTimeUtc::new(2029, 12, 31, 23, 30, 0))
        );
    }

    #[test]
    fn test_parse_lenient_forms() {
        let expected = DateTimeUtc::new(2030, 6, 1, 12, 0, 0);
        assert_eq!(DateTimeUtc::parse("2030-06-01 12:00:00"), Some(expected));
        assert_eq!(DateTimeUtc::parse("2030-06-01T12:00:00"), Some(expected));
        assert_eq!(DateTimeUtc::parse("2030-06-01t12:00:00z"), Some(expected));
        assert_eq!(DateTimeUtc::parse("2030-06-01T12:00:00.250Z"), Some(expected));
        assert_eq!(
            DateTimeUtc::parse("2030-06-01 12:00:00.5+00:00"),
            Some(expected)
        );
    }

    #[test]
    fn test_from_unix_timestamp() {
        assert_eq!(
            DateTimeUtc::from_unix_timestamp(0),
            Some(DateTimeUtc::from_ymd(1970, 1, 1))
        );
        assert_eq!(
            DateTimeUtc::from_unix_timestamp(1_718_461_845),
            Some(DateTimeUtc::new(2024, 6, 15, 14, 30, 45))
        );
        assert_eq!(
            DateTimeUtc::from_unix_timestamp(-1),
            Some(DateTimeUtc::new(1969, 12, 31, 23, 59, 59))
        );
        assert_eq!(
            DateTimeUtc::from_unix_timestamp(951_782_400),
            Some(DateTimeUtc::from_ymd(2000, 2, 29))
        );
    }

    #[test]
    fn test_validate_invalid_day() {
        // Day 31 in a 30-day month
        assert!(DateTimeUtc::new(2024, 4, 31, 12, 0, 0).validate().is_err());

        // Day 29 in February (non-leap year)
        assert!(DateTimeUtc::new(2023, 2, 29, 12, 0, 0).validate().is_err());
    }

    #[test]
    fn test_validate_leap_year() {
        assert!(DateTimeUtc::new(2024, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTimeUtc::new(2000, 2, 29, 12, 0, 0).validate().is_ok()); // divisible by 400
        assert!(DateTimeUtc::new(1900, 2, 29, 12, 0, 0).validate().is_err()); // divisible by 100 but not 400
    }

    #[test]
    fn test_validate_invalid_time() {
        assert!(DateTimeUtc::new(2024, 6, 15, 24, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 60, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 0, 60).validate().is_err());
    }

    #[test]
    fn test_to_rfc3339() {
        let dt = DateTimeUtc::new(2024, 1, 5, 9, 3, 7);
        assert_eq!(dt.to_rfc3339(), "2024-01-05T09:03:07Z");
        assert_eq!(dt.to_string(), "2024-01-05T09:03:07Z");
    }

    #[test]
    fn test_unix_timestamp() {
        assert_eq!(DateTimeUtc::from_ymd(1970, 1, 1).unix_timestamp(), 0);
        assert_eq!(DateTimeUtc::from_ymd(2000, 3, 1).unix_timestamp(), 951_868_800);
        assert_eq!(
            DateTimeUtc::new(2024, 6, 15, 14, 30, 45).unix_timestamp(),
            1_718_461_845
        );
        assert_eq!(DateTimeUtc::new(1969, 12, 31, 23, 59, 59).unix_timestamp(), -1);
    }
}
