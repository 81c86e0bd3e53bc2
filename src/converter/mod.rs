//! Time-to-words conversion.
//!
//! [`TimeConverterService`] walks a chain of [`TimeToWords`] strategies and
//! hands the time to the first one that accepts it. The default chain puts
//! the British phrasing (five-minute marks only) ahead of the plain
//! numeric reading, which accepts everything.

use crate::error::{TimeError, TimeResult};
use crate::time::Time;
use log::debug;
use std::fmt::Debug;

pub mod british;
pub mod general;
pub mod rules;

pub use british::BritishTimeConverter;
pub use general::GeneralTimeConverter;
pub use rules::ConversionRule;

pub trait TimeToWords: Debug + Send + Sync {
    fn name(&self) -> &'static str;
    fn convert(&self, time: &Time) -> TimeResult<String>;
    fn can_handle(&self, _time: &Time) -> bool {
        true
    }
}

#[derive(Debug)]
pub struct TimeConverterService {
    converters: Vec<Box<dyn TimeToWords>>,
}

impl TimeConverterService {
    pub fn new() -> Self {
        let converters: Vec<Box<dyn TimeToWords>> =
            vec![Box::new(BritishTimeConverter::new()), Box::new(GeneralTimeConverter)];
        Self { converters }
    }

    pub fn convert(&self, time: &Time) -> TimeResult<String> {
        for converter in &self.converters {
            if converter.can_handle(time) {
                debug!("Using {} converter for {}", converter.name(), time);
                return converter.convert(time);
            }
        }
        Err(TimeError::NoRuleMatched(*time))
    }

    /// Like [`convert`](Self::convert), for callers that may not have a
    /// time at all.
    pub fn convert_optional(&self, time: Option<&Time>) -> TimeResult<String> {
        let time = time.ok_or(TimeError::NullTime)?;
        self.convert(time)
    }
}

impl Default for TimeConverterService {
    fn default() -> Self {
        Self::new()
    }
}
