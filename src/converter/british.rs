//! British English phrasing for five-minute marks.

use super::rules::{default_rules, ConversionRule};
use super::TimeToWords;
use crate::error::{TimeError, TimeResult};
use crate::time::Time;
use log::{debug, error, info};

const MINUTES_DIVISOR: u8 = 5;

/// Scans its rules in ascending priority and applies the first match.
#[derive(Debug)]
pub struct BritishTimeConverter {
    rules: Vec<Box<dyn ConversionRule>>,
}

impl BritishTimeConverter {
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    /// Build a converter from an arbitrary rule list. The order is fixed
    /// here by priority; ties keep their given order.
    pub fn with_rules(mut rules: Vec<Box<dyn ConversionRule>>) -> Self {
        rules.sort_by_key(|rule| rule.priority());
        debug!("Loaded {} conversion rules", rules.len());
        Self { rules }
    }

    pub fn rules(&self) -> &[Box<dyn ConversionRule>] {
        &self.rules
    }
}

impl Default for BritishTimeConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeToWords for BritishTimeConverter {
    fn name(&self) -> &'static str {
        "british"
    }

    fn can_handle(&self, time: &Time) -> bool {
        time.minute() % MINUTES_DIVISOR == 0
    }

    fn convert(&self, time: &Time) -> TimeResult<String> {
        debug!("Converting time: {}", time);
        let rule = self.rules.iter().find(|rule| rule.matches(time)).ok_or_else(|| {
            error!("No rule matched for time: {}", time);
            TimeError::NoRuleMatched(*time)
        })?;
        debug!("Rule '{}' matched for time {}", rule.name(), time);
        let phrase = rule.convert(time)?;
        info!("Converted {} to '{}' using '{}'", time, phrase, rule.name());
        Ok(phrase)
    }
}

#[cfg(test)]
mod tests {
    use super::super::rules::{MidnightRule, MinutesPastRule, OClockRule};
    use super::*;
    use crate::number_words::to_words;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn time(hour: i32, minute: i32) -> Time {
        Time::new(hour, minute).unwrap()
    }

    #[test]
    fn test_rules_sorted_by_priority() {
        let converter = BritishTimeConverter::with_rules(vec![
            Box::new(MinutesPastRule),
            Box::new(OClockRule),
            Box::new(MidnightRule),
        ]);
        let names: Vec<&str> = converter.rules().iter().map(|rule| rule.name()).collect();
        assert_eq!(names, vec!["midnight", "o'clock", "minutes past"]);
    }

    #[test_case(0, 0, "midnight")]
    #[test_case(12, 0, "noon")]
    #[test_case(15, 0, "three o'clock")]
    #[test_case(14, 15, "quarter past two")]
    #[test_case(14, 30, "half past two")]
    #[test_case(8, 45, "quarter to nine")]
    #[test_case(23, 45, "quarter to zero")]
    #[test_case(9, 20, "twenty past nine")]
    #[test_case(23, 55, "five to zero")]
    #[test_case(11, 50, "ten to twelve")]
    fn test_convert(hour: i32, minute: i32, expected: &str) {
        assert_eq!(BritishTimeConverter::new().convert(&time(hour, minute)).unwrap(), expected);
    }

    #[test]
    fn test_can_handle_only_five_minute_marks() {
        let converter = BritishTimeConverter::new();
        assert!(converter.can_handle(&time(3, 0)));
        assert!(converter.can_handle(&time(3, 55)));
        assert!(!converter.can_handle(&time(3, 37)));
        assert!(!converter.can_handle(&time(3, 1)));
    }

    #[test]
    fn test_empty_rule_set_reports_no_match() {
        let converter = BritishTimeConverter::with_rules(Vec::new());
        let t = time(6, 10);
        assert_eq!(converter.convert(&t), Err(TimeError::NoRuleMatched(t)));
    }

    #[derive(Debug)]
    struct TwentyPastRule;

    impl ConversionRule for TwentyPastRule {
        fn name(&self) -> &'static str {
            "twenty past"
        }
        fn priority(&self) -> u32 {
            13
        }
        fn matches(&self, time: &Time) -> bool {
            time.minute() == 20
        }
        fn convert(&self, time: &Time) -> TimeResult<String> {
            Ok(format!("a third past {}", to_words(time.twelve_hour() as i32)?))
        }
    }

    #[test]
    fn test_inserted_rule_wins_over_generic_rule() {
        let mut rules = default_rules();
        rules.push(Box::new(TwentyPastRule));
        let converter = BritishTimeConverter::with_rules(rules);
        assert_eq!(converter.convert(&time(9, 20)).unwrap(), "a third past nine");
        assert_eq!(converter.convert(&time(9, 25)).unwrap(), "twenty five past nine");
    }
}
