//! Cache lifetime carried by the model.
//!
//! The model never touches a cache store. It only hands the external cache
//! layer a key and one of these durations.

use crate::utils::date::DateTimeUtc;
use serde::Deserialize;
use std::fmt;

/// Default cache lifetime in seconds.
pub const DEFAULT_CACHE_DURATION_SECS: u64 = 3600;

/// Cache time-to-live: relative seconds or an absolute expiry timestamp.
///
/// Deserializes from a non-negative integer (seconds) or a
/// `YYYY-MM-DD` / `YYYY-MM-DDTHH:MM:SSZ` string (absolute expiry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawCacheDuration")]
pub enum CacheDuration {
    Seconds(u64),
    Until(DateTimeUtc),
}

impl Default for CacheDuration {
    fn default() -> Self {
        Self::Seconds(DEFAULT_CACHE_DURATION_SECS)
    }
}

impl CacheDuration {
    /// Relative TTL in seconds as seen at `now_unix`.
    ///
    /// Expiry timestamps already in the past yield 0.
    pub fn ttl_secs(self, now_unix: i64) -> u64 {
        match self {
            Self::Seconds(secs) => secs,
            Self::Until(expiry) => u64::try_from(expiry.unix_timestamp() - now_unix).unwrap_or(0),
        }
    }
}

impl From<u64> for CacheDuration {
    fn from(secs: u64) -> Self {
        Self::Seconds(secs)
    }
}

impl From<DateTimeUtc> for CacheDuration {
    fn from(expiry: DateTimeUtc) -> Self {
        Self::Until(expiry)
    }
}

impl fmt::Display for CacheDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(secs) => write!(f, "{secs}s"),
            Self::Until(expiry) => write!(f, "until {expiry}"),
        }
    }
}

#[derive(Deserialize)]
#[serde(
    untagged,
    expecting = "cache duration in seconds or an expiry date/datetime"
)]
enum RawCacheDuration {
    Seconds(u64),
    Until(String),
    /// Unquoted TOML date or datetime.
    TomlUntil(toml::value::Datetime),
}

impl TryFrom<RawCacheDuration> for CacheDuration {
    type Error = String;

    fn try_from(raw: RawCacheDuration) -> Result<Self, Self::Error> {
        match raw {
            RawCacheDuration::Seconds(secs) => Ok(Self::Seconds(secs)),
            RawCacheDuration::Until(s) => parse_expiry(s.trim()),
            RawCacheDuration::TomlUntil(dt) => parse_expiry(&dt.to_string()),
        }
    }
}

fn parse_expiry(s: &str) -> Result<CacheDuration, String> {
    DateTimeUtc::parse(s).map(CacheDuration::Until).ok_or_else(|| {
        format!("invalid cache expiry `{s}`, expected YYYY-MM-DD or an RFC 3339 datetime")
    })
}
