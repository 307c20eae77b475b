// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delay strings such as `"150ms"` or `"1.5s"`.

use alloc::string::{String, ToString};
use core::time::Duration;

/// A delay string could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseDelayError {
    /// The input was empty.
    #[error("delay is empty")]
    Empty,
    /// The numeric part is missing, negative, or not a number.
    #[error("invalid delay amount in `{input}`")]
    InvalidAmount {
        /// The rejected input.
        input: String,
    },
    /// The unit suffix is not one of `ms`, `s`, `m`, `h`.
    #[error("unknown delay unit `{unit}`; expected one of ms, s, m, h")]
    UnknownUnit {
        /// The rejected unit.
        unit: String,
    },
}

/// Parse a delay of the form `<amount><unit>`.
///
/// `amount` may be fractional; `unit` is one of `ms`, `s`, `m`, `h`.
///
/// ```
/// use core::time::Duration;
/// use dropkit_transition::parse_delay;
///
/// assert_eq!(parse_delay("150ms"), Ok(Duration::from_millis(150)));
/// assert_eq!(parse_delay("1.5s"), Ok(Duration::from_millis(1500)));
/// assert!(parse_delay("10 parsecs").is_err());
/// ```
pub fn parse_delay(input: &str) -> Result<Duration, ParseDelayError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseDelayError::Empty);
    }
    let split = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed.len());
    let (amount, unit) = trimmed.split_at(split);
    let invalid = || ParseDelayError::InvalidAmount {
        input: input.to_string(),
    };
    if amount.is_empty() {
        return Err(invalid());
    }
    let amount: f64 = amount.parse().map_err(|_| invalid())?;

    let nanos_per_unit = match unit.trim() {
        "ms" => 1e6,
        "s" => 1e9,
        "m" => 60e9,
        "h" => 3600e9,
        other => {
            return Err(ParseDelayError::UnknownUnit {
                unit: other.to_string(),
            });
        }
    };
    let nanos = amount * nanos_per_unit;
    if !nanos.is_finite() || nanos >= u64::MAX as f64 {
        return Err(invalid());
    }
    // Round to the nearest nanosecond so fractional amounts survive float error.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "nanos is finite, non-negative and below u64::MAX"
    )]
    let nanos = (nanos + 0.5) as u64;
    Ok(Duration::from_nanos(nanos))
}

/// Serde adapter for delay fields written as strings.
#[cfg(feature = "serde")]
pub(crate) mod serde_delay {
    use alloc::format;
    use alloc::string::String;
    use core::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    /// Writes whole milliseconds as `"150ms"` and keeps any remainder as a fraction, as in
    /// `"0.5ms"`.
    pub(crate) fn serialize<S: Serializer>(
        delay: &Duration,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_millis(*delay))
    }

    pub(crate) fn format_millis(delay: Duration) -> String {
        let millis = delay.as_millis();
        let sub_millis = delay.subsec_nanos() % 1_000_000;
        if sub_millis == 0 {
            return format!("{millis}ms");
        }
        let fraction = format!("{sub_millis:06}");
        format!("{millis}.{}ms", fraction.trim_end_matches('0'))
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_delay(&raw).map_err(D::Error::custom)
    }
}
