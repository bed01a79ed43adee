//! Human-readable duration strings.
//!
//! Accepts the composable unit grammar used on the CLI: a sequence of
//! `<value><unit>` parts where the unit is one of `ns`, `us`/`µs`, `ms`,
//! `s`, `m`, `h` and the value may be fractional, e.g. `"30m"`, `"1h30m"`,
//! `"1.5h"`. The bare string `"0"` is the only unitless form accepted.

use crate::error::{DdtError, Result};
use chrono::{DateTime, Utc};
use std::time::Duration;

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

fn unit_nanos(unit: &str) -> Option<f64> {
    match unit {
        "ns" => Some(1.0),
        "us" | "µs" => Some(1_000.0),
        "ms" => Some(1_000_000.0),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(60.0 * NANOS_PER_SEC),
        "h" => Some(3600.0 * NANOS_PER_SEC),
        _ => None,
    }
}

pub fn parse(input: &str) -> Result<Duration> {
    let s = input.trim();
    if s == "0" {
        return Ok(Duration::ZERO);
    }
    if s.is_empty() {
        return Err(DdtError::Duration(input.to_string()));
    }

    let mut nanos = 0.0f64;
    let mut rest = s;
    while !rest.is_empty() {
        let value_end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit() && *c != '.')
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (value_str, tail) = rest.split_at(value_end);
        let value: f64 = value_str
            .parse()
            .map_err(|_| DdtError::Duration(input.to_string()))?;

        let unit_end = tail
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() || *c == '.')
            .map(|(i, _)| i)
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_end);
        let scale = unit_nanos(unit).ok_or_else(|| DdtError::Duration(input.to_string()))?;

        nanos += value * scale;
        rest = next;
    }

    if !nanos.is_finite() || nanos < 0.0 {
        return Err(DdtError::Duration(input.to_string()));
    }
    Ok(Duration::from_nanos(nanos as u64))
}

/// Absolute end timestamp (epoch seconds): `reference` plus the parsed
/// duration, truncated to whole seconds.
pub fn end_timestamp(reference: DateTime<Utc>, input: &str) -> Result<i64> {
    let d = parse(input)?;
    Ok(reference.timestamp() + d.as_secs() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn single_unit() {
        assert_eq!(parse("30m").unwrap(), Duration::from_secs(1800));
        assert_eq!(parse("10s").unwrap(), Duration::from_secs(10));
        assert_eq!(parse("2h").unwrap(), Duration::from_secs(7200));
        assert_eq!(parse("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse("250us").unwrap(), Duration::from_micros(250));
        assert_eq!(parse("250µs").unwrap(), Duration::from_micros(250));
        assert_eq!(parse("99ns").unwrap(), Duration::from_nanos(99));
    }

    #[test]
    fn composed_units() {
        assert_eq!(parse("1h30m").unwrap(), Duration::from_secs(5400));
        assert_eq!(parse("1m30s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse("1h1m1s").unwrap(), Duration::from_secs(3661));
    }

    #[test]
    fn fractional_value() {
        assert_eq!(parse("1.5h").unwrap(), Duration::from_secs(5400));
        assert_eq!(parse("0.5s").unwrap(), Duration::from_millis(500));
    }

    #[test]
    fn zero_is_the_only_unitless_form() {
        assert_eq!(parse("0").unwrap(), Duration::ZERO);
        assert!(parse("30").is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("").is_err());
        assert!(parse("30x").is_err());
        assert!(parse("h").is_err());
        assert!(parse("-5m").is_err());
        assert!(parse("1h30").is_err());
    }

    #[test]
    fn end_timestamp_is_reference_plus_seconds() {
        let reference = Utc.timestamp_opt(1_000_000, 0).unwrap();
        assert_eq!(end_timestamp(reference, "30m").unwrap(), 1_001_800);
        assert_eq!(end_timestamp(reference, "1h30m").unwrap(), 1_005_400);
        assert_eq!(end_timestamp(reference, "0").unwrap(), 1_000_000);
    }
}
