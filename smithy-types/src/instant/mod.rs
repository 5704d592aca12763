/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{SecondsFormat, TimeZone, Utc};
use std::error::Error;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A point in time, stored as seconds and nanoseconds relative to the Unix epoch.
///
/// `Instant` is the timestamp type used by every model member that carries a date. It is
/// totally ordered and hashable so that models embedding it keep structural equality.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: (fraction * NANOS_PER_SECOND as f64) as u32,
        }
    }

    /// Creates an `Instant` from its raw parts.
    ///
    /// `subsecond_nanos` is not normalized: values of one second or more are stored as given and
    /// will fail to format as [`Format::DateTime`].
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let mut seconds = -(duration.as_secs() as i64);
                let mut nanos = duration.subsec_nanos();
                if nanos != 0 {
                    seconds -= 1;
                    nanos = NANOS_PER_SECOND - nanos;
                }
                Instant {
                    seconds,
                    subsecond_nanos: nanos,
                }
            }
        }
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn epoch_subsecond_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    /// Formats this instant for the wire.
    ///
    /// `DateTime` produces RFC-3339 in UTC with trailing fractional zeros removed, eg.
    /// `2019-12-16T23:48:18.52Z`. It fails if the instant cannot be represented as a calendar date.
    pub fn fmt(&self, format: Format) -> Result<String, DateTimeFormatError> {
        match format {
            Format::DateTime => {
                let datetime = Utc
                    .timestamp_opt(self.seconds, self.subsecond_nanos)
                    .single()
                    .ok_or_else(|| self.format_error())?;
                let rfc3339 = datetime.to_rfc3339_opts(SecondsFormat::AutoSi, true);
                if !self.has_nanos() {
                    return Ok(rfc3339);
                }
                // AutoSi pads fractions to 3, 6 or 9 digits
                let mut rfc3339 = rfc3339
                    .trim_end_matches('Z')
                    .trim_end_matches('0')
                    .to_owned();
                rfc3339.push('Z');
                Ok(rfc3339)
            }
            Format::EpochSeconds => {
                if self.subsecond_nanos >= NANOS_PER_SECOND {
                    return Err(self.format_error());
                }
                if self.subsecond_nanos == 0 {
                    return Ok(self.seconds.to_string());
                }
                // `seconds` is floored, so before the epoch the fraction counts down from the next
                // whole second: -2s + 0.5s is written as -1.5
                let (sign, whole, nanos) = if self.seconds < 0 {
                    (
                        "-",
                        -(self.seconds + 1),
                        NANOS_PER_SECOND - self.subsecond_nanos,
                    )
                } else {
                    ("", self.seconds, self.subsecond_nanos)
                };
                let fraction = format!("{:0>9}", nanos);
                Ok(format!(
                    "{}{}.{}",
                    sign,
                    whole,
                    fraction.trim_end_matches('0')
                ))
            }
        }
    }

    fn format_error(&self) -> DateTimeFormatError {
        DateTimeFormatError {
            seconds: self.seconds,
            subsecond_nanos: self.subsecond_nanos,
        }
    }
}

impl From<SystemTime> for Instant {
    fn from(system_time: SystemTime) -> Self {
        Instant::from_system_time(system_time)
    }
}

/// Wire formats for [`Instant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC-3339 / ISO-8601 date-time, as used by the EC2 query protocol.
    DateTime,
    /// Seconds since the Unix epoch, with an optional fractional part.
    EpochSeconds,
}

/// An [`Instant`] could not be rendered in the requested [`Format`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeFormatError {
    seconds: i64,
    subsecond_nanos: u32,
}

impl fmt::Display for DateTimeFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "instant {}s + {}ns is out of range for a calendar date-time",
            self.seconds, self.subsecond_nanos
        )
    }
}

impl Error for DateTimeFormatError {}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use proptest::prelude::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn system_time_before_epoch() {
        let instant = Instant::from_system_time(UNIX_EPOCH - Duration::from_millis(1500));
        assert_eq!(instant.epoch_seconds(), -2);
        assert_eq!(instant.epoch_subsecond_nanos(), 500_000_000);
        assert_eq!(
            instant.fmt(Format::DateTime).unwrap(),
            "1969-12-31T23:59:58.5Z"
        );
    }

    #[test]
    fn epoch_seconds_before_epoch() {
        let instant = Instant::from_system_time(UNIX_EPOCH - Duration::from_millis(1500));
        assert_eq!(instant.fmt(Format::EpochSeconds).unwrap(), "-1.5");
        assert_eq!(instant.epoch_fractional_seconds(), -1.5);

        let just_before = Instant::from_system_time(UNIX_EPOCH - Duration::from_nanos(1));
        assert_eq!(
            just_before.fmt(Format::EpochSeconds).unwrap(),
            "-0.000000001"
        );
        assert_eq!(
            Instant::from_epoch_seconds(-3)
                .fmt(Format::EpochSeconds)
                .unwrap(),
            "-3"
        );
    }

    #[test]
    fn epoch_seconds_after_epoch() {
        let instant = Instant::from_secs_and_nanos(1_576_540_098, 520_000_000);
        assert_eq!(instant.fmt(Format::EpochSeconds).unwrap(), "1576540098.52");
        assert_eq!(
            Instant::from_epoch_seconds(0)
                .fmt(Format::EpochSeconds)
                .unwrap(),
            "0"
        );
    }

    #[test]
    fn invalid_nanos_do_not_format() {
        let instant = Instant::from_secs_and_nanos(0, 2_000_000_000);
        let err = instant.fmt(Format::DateTime).expect_err("nanos are out of range");
        assert!(format!("{}", err).contains("out of range"));
        assert!(instant.fmt(Format::EpochSeconds).is_err());
    }

    #[test]
    fn unrepresentable_year_does_not_format() {
        let instant = Instant::from_epoch_seconds(i64::MAX);
        assert!(instant.fmt(Format::DateTime).is_err());
    }

    proptest! {
        #[test]
        fn datetime_never_ends_in_fractional_zero(seconds in 0i64..4_102_444_800, nanos in 0u32..1_000_000_000) {
            let formatted = Instant::from_secs_and_nanos(seconds, nanos).fmt(Format::DateTime).unwrap();
            prop_assert!(formatted.ends_with('Z'));
            if nanos != 0 {
                prop_assert!(!formatted.ends_with("0Z"));
            }
        }

        #[test]
        fn epoch_seconds_keep_exact_value(seconds in -4_102_444_800i64..4_102_444_800, nanos in 0u32..1_000_000_000) {
            let formatted = Instant::from_secs_and_nanos(seconds, nanos).fmt(Format::EpochSeconds).unwrap();
            let (negative, digits) = match formatted.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, formatted.as_str()),
            };
            let mut parts = digits.splitn(2, '.');
            let whole: i128 = parts.next().unwrap().parse().unwrap();
            let fraction = parts.next().unwrap_or("");
            prop_assert!(!fraction.ends_with('0'));
            let fraction: i128 = format!("{:0<9}", fraction).parse().unwrap();
            let magnitude = whole * 1_000_000_000 + fraction;
            let total = if negative { -magnitude } else { magnitude };
            prop_assert_eq!(total, i128::from(seconds) * 1_000_000_000 + i128::from(nanos));
        }
    }
}
