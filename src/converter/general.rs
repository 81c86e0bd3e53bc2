use super::TimeToWords;
use crate::error::TimeResult;
use crate::number_words::to_words;
use crate::time::Time;

/// Reads the hour and minute out as plain numbers: 12:37 is
/// "twelve thirty seven". Uses the 24-hour value.
#[derive(Debug, Default)]
pub struct GeneralTimeConverter;

impl TimeToWords for GeneralTimeConverter {
    fn name(&self) -> &'static str {
        "general"
    }

    fn convert(&self, time: &Time) -> TimeResult<String> {
        Ok(format!("{} {}", to_words(time.hour() as i32)?, to_words(time.minute() as i32)?))
    }
}
