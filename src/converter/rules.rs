//! British phrasing rules for times whose minute is a multiple of five.
//!
//! Each rule owns a predicate, a phrase builder and a priority. The
//! predicates are disjoint over the multiple-of-five domain, and lower
//! priorities are tried first. Priorities are spaced out so new special
//! cases can be slotted in between the existing ones.

use crate::error::TimeResult;
use crate::number_words::to_words;
use crate::time::Time;
use log::trace;
use std::fmt::Debug;

const ON_THE_HOUR: u8 = 0;
const QUARTER_PAST: u8 = 15;
const HALF_HOUR: u8 = 30;
const QUARTER_TO: u8 = 45;
const MINUTES_IN_HOUR: i32 = 60;
const MIDNIGHT_HOUR: u8 = 0;
const NOON_HOUR: u8 = 12;

pub trait ConversionRule: Debug + Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;
    /// Evaluation order, lower first
    fn priority(&self) -> u32;
    fn matches(&self, time: &Time) -> bool;
    fn convert(&self, time: &Time) -> TimeResult<String>;
}

/// The standard rule set, unsorted.
pub fn default_rules() -> Vec<Box<dyn ConversionRule>> {
    vec![
        Box::new(MidnightRule),
        Box::new(NoonRule),
        Box::new(OClockRule),
        Box::new(QuarterPastRule),
        Box::new(HalfPastRule),
        Box::new(QuarterToRule),
        Box::new(MinutesPastRule),
        Box::new(MinutesToRule),
    ]
}

fn is_midnight(time: &Time) -> bool {
    time.hour() == MIDNIGHT_HOUR && time.minute() == ON_THE_HOUR
}

fn is_noon(time: &Time) -> bool {
    time.hour() == NOON_HOUR && time.minute() == ON_THE_HOUR
}

fn current_hour_words(time: &Time) -> TimeResult<String> {
    to_words(time.twelve_hour() as i32)
}

fn next_hour_words(time: &Time) -> TimeResult<String> {
    to_words(time.next_twelve_hour() as i32)
}

/// 00:00
#[derive(Debug)]
pub struct MidnightRule;

impl ConversionRule for MidnightRule {
    fn name(&self) -> &'static str {
        "midnight"
    }
    fn priority(&self) -> u32 {
        1
    }
    fn matches(&self, time: &Time) -> bool {
        let matches = is_midnight(time);
        trace!("MidnightRule.matches({}) = {}", time, matches);
        matches
    }
    fn convert(&self, _time: &Time) -> TimeResult<String> {
        Ok("midnight".to_string())
    }
}

/// 12:00
#[derive(Debug)]
pub struct NoonRule;

impl ConversionRule for NoonRule {
    fn name(&self) -> &'static str {
        "noon"
    }
    fn priority(&self) -> u32 {
        2
    }
    fn matches(&self, time: &Time) -> bool {
        is_noon(time)
    }
    fn convert(&self, _time: &Time) -> TimeResult<String> {
        Ok("noon".to_string())
    }
}

/// Any other time on the hour: "three o'clock"
#[derive(Debug)]
pub struct OClockRule;

impl ConversionRule for OClockRule {
    fn name(&self) -> &'static str {
        "o'clock"
    }
    fn priority(&self) -> u32 {
        3
    }
    fn matches(&self, time: &Time) -> bool {
        time.minute() == ON_THE_HOUR && !is_midnight(time) && !is_noon(time)
    }
    fn convert(&self, time: &Time) -> TimeResult<String> {
        Ok(format!("{} o'clock", current_hour_words(time)?))
    }
}

#[derive(Debug)]
pub struct QuarterPastRule;

impl ConversionRule for QuarterPastRule {
    fn name(&self) -> &'static str {
        "quarter past"
    }
    fn priority(&self) -> u32 {
        10
    }
    fn matches(&self, time: &Time) -> bool {
        let matches = time.minute() == QUARTER_PAST;
        trace!("QuarterPastRule.matches({}) = {}", time, matches);
        matches
    }
    fn convert(&self, time: &Time) -> TimeResult<String> {
        Ok(format!("quarter past {}", current_hour_words(time)?))
    }
}

#[derive(Debug)]
pub struct HalfPastRule;

impl ConversionRule for HalfPastRule {
    fn name(&self) -> &'static str {
        "half past"
    }
    fn priority(&self) -> u32 {
        11
    }
    fn matches(&self, time: &Time) -> bool {
        time.minute() == HALF_HOUR
    }
    fn convert(&self, time: &Time) -> TimeResult<String> {
        Ok(format!("half past {}", current_hour_words(time)?))
    }
}

/// X:45 names the following hour, so 23:45 rolls over to "quarter to zero"
#[derive(Debug)]
pub struct QuarterToRule;

impl ConversionRule for QuarterToRule {
    fn name(&self) -> &'static str {
        "quarter to"
    }
    fn priority(&self) -> u32 {
        12
    }
    fn matches(&self, time: &Time) -> bool {
        time.minute() == QUARTER_TO
    }
    fn convert(&self, time: &Time) -> TimeResult<String> {
        Ok(format!("quarter to {}", next_hour_words(time)?))
    }
}

/// "ten past four"
#[derive(Debug)]
pub struct MinutesPastRule;

impl ConversionRule for MinutesPastRule {
    fn name(&self) -> &'static str {
        "minutes past"
    }
    fn priority(&self) -> u32 {
        20
    }
    fn matches(&self, time: &Time) -> bool {
        let minute = time.minute();
        let matches = minute > ON_THE_HOUR && minute < HALF_HOUR && minute != QUARTER_PAST;
        trace!("MinutesPastRule.matches({}) = {}", time, matches);
        matches
    }
    fn convert(&self, time: &Time) -> TimeResult<String> {
        Ok(format!("{} past {}", to_words(time.minute() as i32)?, current_hour_words(time)?))
    }
}

/// "twenty to nine"
#[derive(Debug)]
pub struct MinutesToRule;

impl ConversionRule for MinutesToRule {
    fn name(&self) -> &'static str {
        "minutes to"
    }
    fn priority(&self) -> u32 {
        21
    }
    fn matches(&self, time: &Time) -> bool {
        time.minute() > HALF_HOUR && time.minute() != QUARTER_TO
    }
    fn convert(&self, time: &Time) -> TimeResult<String> {
        let minutes_left = MINUTES_IN_HOUR - time.minute() as i32;
        Ok(format!("{} to {}", to_words(minutes_left)?, next_hour_words(time)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn time(hour: i32, minute: i32) -> Time {
        Time::new(hour, minute).unwrap()
    }

    #[test]
    fn test_midnight_rule() {
        assert!(MidnightRule.matches(&time(0, 0)));
        assert!(!MidnightRule.matches(&time(0, 5)));
        assert!(!MidnightRule.matches(&time(12, 0)));
        assert_eq!(MidnightRule.convert(&time(0, 0)).unwrap(), "midnight");
    }

    #[test]
    fn test_noon_rule() {
        assert!(NoonRule.matches(&time(12, 0)));
        assert!(!NoonRule.matches(&time(0, 0)));
        assert!(!NoonRule.matches(&time(12, 30)));
        assert_eq!(NoonRule.convert(&time(12, 0)).unwrap(), "noon");
    }

    #[test_case(1, "one o'clock")]
    #[test_case(9, "nine o'clock")]
    #[test_case(13, "one o'clock")]
    #[test_case(23, "eleven o'clock")]
    fn test_o_clock_rule(hour: i32, expected: &str) {
        let t = time(hour, 0);
        assert!(OClockRule.matches(&t));
        assert_eq!(OClockRule.convert(&t).unwrap(), expected);
    }

    #[test]
    fn test_o_clock_rule_leaves_midnight_and_noon_alone() {
        assert!(!OClockRule.matches(&time(0, 0)));
        assert!(!OClockRule.matches(&time(12, 0)));
        assert!(!OClockRule.matches(&time(3, 5)));
    }

    #[test_case(0, "quarter past zero")]
    #[test_case(7, "quarter past seven")]
    #[test_case(12, "quarter past twelve")]
    #[test_case(19, "quarter past seven")]
    fn test_quarter_past_rule(hour: i32, expected: &str) {
        let t = time(hour, 15);
        assert!(QuarterPastRule.matches(&t));
        assert_eq!(QuarterPastRule.convert(&t).unwrap(), expected);
    }

    #[test_case(14, "half past two")]
    #[test_case(0, "half past zero")]
    #[test_case(12, "half past twelve")]
    fn test_half_past_rule(hour: i32, expected: &str) {
        let t = time(hour, 30);
        assert!(HalfPastRule.matches(&t));
        assert_eq!(HalfPastRule.convert(&t).unwrap(), expected);
    }

    #[test_case(8, "quarter to nine")]
    #[test_case(11, "quarter to twelve")]
    #[test_case(12, "quarter to one")]
    #[test_case(23, "quarter to zero")]
    fn test_quarter_to_rule(hour: i32, expected: &str) {
        let t = time(hour, 45);
        assert!(QuarterToRule.matches(&t));
        assert_eq!(QuarterToRule.convert(&t).unwrap(), expected);
    }

    #[test_case(4, 10, "ten past four")]
    #[test_case(16, 25, "twenty five past four")]
    #[test_case(0, 5, "five past zero")]
    fn test_minutes_past_rule(hour: i32, minute: i32, expected: &str) {
        let t = time(hour, minute);
        assert!(MinutesPastRule.matches(&t));
        assert_eq!(MinutesPastRule.convert(&t).unwrap(), expected);
    }

    #[test]
    fn test_minutes_past_rule_skips_quarter_and_half() {
        assert!(!MinutesPastRule.matches(&time(4, 15)));
        assert!(!MinutesPastRule.matches(&time(4, 30)));
        assert!(!MinutesPastRule.matches(&time(4, 0)));
    }

    #[test_case(8, 40, "twenty to nine")]
    #[test_case(20, 55, "five to nine")]
    #[test_case(23, 55, "five to zero")]
    #[test_case(11, 35, "twenty five to twelve")]
    fn test_minutes_to_rule(hour: i32, minute: i32, expected: &str) {
        let t = time(hour, minute);
        assert!(MinutesToRule.matches(&t));
        assert_eq!(MinutesToRule.convert(&t).unwrap(), expected);
    }

    #[test]
    fn test_exactly_one_rule_per_five_minute_mark() {
        let rules = default_rules();
        for hour in 0..24 {
            for minute in (0..60).step_by(5) {
                let t = time(hour, minute);
                let matching: Vec<&str> =
                    rules.iter().filter(|rule| rule.matches(&t)).map(|rule| rule.name()).collect();
                assert_eq!(matching.len(), 1, "{} matched {:?}", t, matching);
            }
        }
    }

    #[test]
    fn test_priorities_are_distinct() {
        let mut priorities: Vec<u32> = default_rules().iter().map(|rule| rule.priority()).collect();
        priorities.sort_unstable();
        priorities.dedup();
        assert_eq!(priorities, vec![1, 2, 3, 10, 11, 12, 20, 21]);
    }
}
