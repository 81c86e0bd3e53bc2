//! Time parser for user input.
//!
//! Accepts `H`, `HH`, `H:M` and `HH:MM`. Syntax problems are reported as
//! [`TimeError::InvalidFormat`], values outside the clock range as
//! [`TimeError::InvalidTime`].

use crate::error::{TimeError, TimeResult};
use crate::number_words::parse_integer;
use crate::time::Time;
use log::debug;

const SEPARATOR: char = ':';

/// Parse a time string such as `"14:30"` or `"8"`.
pub fn parse_time(input: &str) -> TimeResult<Time> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeError::EmptyInput);
    }
    debug!("Parsing time input: '{}'", trimmed);

    let separators = trimmed.matches(SEPARATOR).count();
    let time = match separators {
        0 => {
            let hour = parse_integer(trimmed).ok_or_else(|| {
                TimeError::InvalidFormat("Expected format: H, HH, H:M or HH:MM".to_string())
            })?;
            Time::new(hour, 0)?
        }
        1 => {
            let (hour_part, minute_part) = trimmed.split_once(SEPARATOR).ok_or_else(|| {
                TimeError::InvalidFormat("Expected format: HH:MM or H:M".to_string())
            })?;
            if hour_part.is_empty() || minute_part.is_empty() {
                return Err(TimeError::InvalidFormat(
                    "Both hours and minutes are required".to_string(),
                ));
            }
            match (parse_integer(hour_part), parse_integer(minute_part)) {
                (Some(hour), Some(minute)) => Time::new(hour, minute)?,
                _ => {
                    return Err(TimeError::InvalidFormat(
                        "Hours and minutes must be numbers".to_string(),
                    ));
                }
            }
        }
        _ => {
            return Err(TimeError::InvalidFormat(
                "Expected exactly one colon separator".to_string(),
            ));
        }
    };

    debug!("Parsed '{}' as {}", trimmed, time);
    Ok(time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("14:30", 14, 30)]
    #[test_case("8:45", 8, 45)]
    #[test_case("08:05", 8, 5)]
    #[test_case("0:0", 0, 0)]
    #[test_case("23:59", 23, 59)]
    #[test_case("  12:37  ", 12, 37)]
    #[test_case("5", 5, 0)]
    #[test_case("05", 5, 0)]
    #[test_case(" 17 ", 17, 0)]
    fn test_parse_valid(input: &str, hour: u8, minute: u8) {
        let time = parse_time(input).unwrap();
        assert_eq!((time.hour(), time.minute()), (hour, minute));
    }

    #[test_case("")]
    #[test_case("   ")]
    #[test_case("\t\n")]
    fn test_parse_empty(input: &str) {
        assert_eq!(parse_time(input), Err(TimeError::EmptyInput));
    }

    #[test_case("14:30:00")]
    #[test_case("::")]
    #[test_case(":30")]
    #[test_case("14:")]
    #[test_case(":")]
    #[test_case("ab:cd")]
    #[test_case("14:3a")]
    #[test_case("14 : 30")]
    #[test_case("noon")]
    #[test_case("14.30")]
    #[test_case("99999999999:00")]
    fn test_parse_invalid_format(input: &str) {
        assert!(
            matches!(parse_time(input), Err(TimeError::InvalidFormat(_))),
            "expected InvalidFormat for '{}'",
            input
        );
    }

    #[test_case("25:30")]
    #[test_case("24:00")]
    #[test_case("12:60")]
    #[test_case("-1:00")]
    #[test_case("24")]
    fn test_parse_invalid_time(input: &str) {
        assert!(
            matches!(parse_time(input), Err(TimeError::InvalidTime { .. })),
            "expected InvalidTime for '{}'",
            input
        );
    }

    #[test]
    fn test_parse_is_deterministic() {
        for input in ["7:15", "bad", "30:00", ""] {
            assert_eq!(parse_time(input), parse_time(input));
        }
    }

    #[test]
    fn test_from_str() {
        let time: Time = "9:05".parse().unwrap();
        assert_eq!(time.to_string(), "09:05");
    }
}
