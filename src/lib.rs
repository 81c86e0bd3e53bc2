//! # Spoken Time
//!
//! Reads clock times out in British English: `14:30` is "half past two",
//! `8:45` is "quarter to nine" and `00:00` is "midnight".
//!
//! ```
//! let time = spoken_time::parse_time("23:55")?;
//! assert_eq!(spoken_time::convert_time(&time)?, "five to zero");
//! # Ok::<(), spoken_time::TimeError>(())
//! ```
//!
//! Minutes on a five-minute mark go through the British rule set in
//! [`converter::rules`]; every other minute is read as plain numbers
//! ("twelve thirty seven").

pub mod app;
pub mod command_processor;
pub mod config;
pub mod converter;
pub mod error;
pub mod logging;
pub mod number_words;
pub mod output;
pub mod parser;
pub mod time;

use once_cell::sync::Lazy;

static CONVERTER: Lazy<converter::TimeConverterService> =
    Lazy::new(converter::TimeConverterService::new);

/// Convert a time to its spoken form using the process-wide converter.
pub fn convert_time(time: &Time) -> TimeResult<String> {
    CONVERTER.convert(time)
}

// Re-export commonly used types
pub use config::Config;
pub use error::{TimeError, TimeResult};
pub use parser::parse_time;
pub use time::Time;
