//! Time values for client timeouts.
//!
//! Responsibilities:
//! - Represent a timeout as a quantity in a time unit (`30s`, `250ms`, `5m`).
//! - Parse and render the textual form used in settings.
//! - Model the `-1` sentinel (no timeout) and `0` explicitly.
//!
//! Does NOT handle:
//! - Applying timeouts to a transport (see the client that consumes `ClientSettings`).
//!
//! Invariants:
//! - The only negative value accepted is `-1` (milliseconds), i.e. `TimeValue::MINUS_ONE`.
//! - `Display` output parses back to an equal value.
//! - Equality compares the absolute amount of time, so `1s == 1000ms`.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Unit of a [`TimeValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Suffixes in match order: longer suffixes ending in `s` come first.
    const SUFFIXES: [(&'static str, TimeUnit); 7] = [
        ("nanos", TimeUnit::Nanos),
        ("micros", TimeUnit::Micros),
        ("ms", TimeUnit::Millis),
        ("s", TimeUnit::Seconds),
        ("m", TimeUnit::Minutes),
        ("h", TimeUnit::Hours),
        ("d", TimeUnit::Days),
    ];

    /// Suffix used in the string representation.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Nanos => "nanos",
            Self::Micros => "micros",
            Self::Millis => "ms",
            Self::Seconds => "s",
            Self::Minutes => "m",
            Self::Hours => "h",
            Self::Days => "d",
        }
    }

    fn nanos_per_unit(self) -> i128 {
        match self {
            Self::Nanos => 1,
            Self::Micros => 1_000,
            Self::Millis => 1_000_000,
            Self::Seconds => 1_000_000_000,
            Self::Minutes => 60 * 1_000_000_000,
            Self::Hours => 3_600 * 1_000_000_000,
            Self::Days => 86_400 * 1_000_000_000,
        }
    }
}

/// Error returned when a time value string cannot be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimeValueParseError {
    #[error("value is empty")]
    Empty,

    #[error("missing unit, expected one of nanos, micros, ms, s, m, h, d")]
    MissingUnit,

    #[error("'{0}' is not a whole number")]
    InvalidNumber(String),

    #[error("negative values other than -1 are not allowed")]
    Negative,
}

/// A timeout expressed as an amount of a [`TimeUnit`].
#[derive(Debug, Clone, Copy)]
pub struct TimeValue {
    duration: i64,
    unit: TimeUnit,
}

impl TimeValue {
    /// Sentinel meaning "no timeout".
    pub const MINUS_ONE: TimeValue = TimeValue {
        duration: -1,
        unit: TimeUnit::Millis,
    };

    /// Zero milliseconds.
    pub const ZERO: TimeValue = TimeValue {
        duration: 0,
        unit: TimeUnit::Millis,
    };

    /// Create a time value. Negative amounts other than the `-1` sentinel are rejected.
    pub fn new(duration: i64, unit: TimeUnit) -> Result<Self, TimeValueParseError> {
        let value = Self { duration, unit };
        if duration < 0 && value != Self::MINUS_ONE {
            return Err(TimeValueParseError::Negative);
        }
        Ok(value)
    }

    pub const fn from_millis(millis: u32) -> Self {
        Self {
            duration: millis as i64,
            unit: TimeUnit::Millis,
        }
    }

    pub const fn from_secs(secs: u32) -> Self {
        Self {
            duration: secs as i64,
            unit: TimeUnit::Seconds,
        }
    }

    /// The amount, in [`TimeValue::unit`].
    pub fn duration(&self) -> i64 {
        self.duration
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Whether this is the "no timeout" sentinel.
    pub fn is_infinite(&self) -> bool {
        *self == Self::MINUS_ONE
    }

    /// Convert to a [`Duration`]; `None` for the "no timeout" sentinel.
    pub fn as_duration(&self) -> Option<Duration> {
        if self.duration < 0 {
            return None;
        }
        let amount = self.duration as u64;
        Some(match self.unit {
            TimeUnit::Nanos => Duration::from_nanos(amount),
            TimeUnit::Micros => Duration::from_micros(amount),
            TimeUnit::Millis => Duration::from_millis(amount),
            TimeUnit::Seconds => Duration::from_secs(amount),
            TimeUnit::Minutes => Duration::from_secs(amount.saturating_mul(60)),
            TimeUnit::Hours => Duration::from_secs(amount.saturating_mul(3_600)),
            TimeUnit::Days => Duration::from_secs(amount.saturating_mul(86_400)),
        })
    }

    fn total_nanos(&self) -> i128 {
        i128::from(self.duration) * self.unit.nanos_per_unit()
    }
}

impl PartialEq for TimeValue {
    fn eq(&self, other: &Self) -> bool {
        self.total_nanos() == other.total_nanos()
    }
}

impl Eq for TimeValue {}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.duration < 0 {
            write!(f, "{}", self.duration)
        } else {
            write!(f, "{}{}", self.duration, self.unit.suffix())
        }
    }
}

impl FromStr for TimeValue {
    type Err = TimeValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(TimeValueParseError::Empty);
        }
        // Bare sentinels carry no unit.
        match normalized.as_str() {
            "-1" => return Ok(Self::MINUS_ONE),
            "0" => return Ok(Self::ZERO),
            _ => {}
        }

        let (number, unit) = TimeUnit::SUFFIXES
            .iter()
            .find_map(|&(suffix, unit)| {
                normalized
                    .strip_suffix(suffix)
                    .map(|number| (number.trim(), unit))
            })
            .ok_or(TimeValueParseError::MissingUnit)?;

        let duration: i64 = number
            .parse()
            .map_err(|_| TimeValueParseError::InvalidNumber(number.to_string()))?;

        Self::new(duration, unit)
    }
}
