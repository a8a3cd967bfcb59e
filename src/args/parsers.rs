use std::time::Duration;

use super::types::PositiveUsize;
use crate::error::ValidationError;

pub(super) fn parse_positive_usize(s: &str) -> Result<PositiveUsize, ValidationError> {
    s.parse::<PositiveUsize>()
}

pub(crate) fn parse_bool_env(s: &str) -> Result<bool, ValidationError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(ValidationError::InvalidBoolean {
            value: s.to_owned(),
        }),
    }
}

/// Milliseconds per accepted duration suffix.
const UNIT_MILLIS: [(&str, u64); 4] = [("ms", 1), ("s", 1_000), ("m", 60_000), ("h", 3_600_000)];

/// Parses `<number>[ms|s|m|h]`; a bare number is seconds.
///
/// # Errors
///
/// Returns an error when the value is empty, malformed, overflows, or is zero.
pub fn parse_duration_arg(s: &str) -> Result<Duration, ValidationError> {
    let value = s.trim();
    if value.is_empty() {
        return Err(ValidationError::DurationEmpty);
    }

    let split = value
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(value.len());
    let (count, suffix) = value.split_at(split);
    if count.is_empty() {
        return Err(ValidationError::InvalidDurationFormat {
            value: value.to_owned(),
        });
    }
    let count: u64 = count
        .parse()
        .map_err(|source| ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source,
        })?;

    let suffix = if suffix.is_empty() { "s" } else { suffix };
    let per_unit = UNIT_MILLIS
        .iter()
        .find_map(|(unit, millis)| (*unit == suffix).then_some(*millis))
        .ok_or_else(|| ValidationError::InvalidDurationUnit {
            unit: suffix.to_owned(),
        })?;
    let millis = count
        .checked_mul(per_unit)
        .ok_or(ValidationError::DurationOverflow)?;

    match millis {
        0 => Err(ValidationError::DurationZero),
        millis => Ok(Duration::from_millis(millis)),
    }
}
