//! English words for the numbers -99 to 99.
//
// The table is built once on first use and only read afterwards.

use crate::error::{TimeError, TimeResult};
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

const ONES: [&str; 10] = ["zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];
const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];
const TENS: [&str; 10] =
    ["", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety"];

/// Exclusive upper bound of the table
pub const LIMIT: i32 = 100;

static NUMBER_WORDS: Lazy<Vec<String>> = Lazy::new(|| {
    (0..LIMIT as usize)
        .map(|n| match n {
            0..=9 => ONES[n].to_string(),
            10..=19 => TEENS[n - 10].to_string(),
            _ if n % 10 == 0 => TENS[n / 10].to_string(),
            _ => format!("{} {}", TENS[n / 10], ONES[n % 10]),
        })
        .collect()
});

static INTEGER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+$").expect("integer pattern is valid"));

/// Parse a signed decimal integer, rejecting anything else (including
/// values that overflow `i32`).
pub fn parse_integer(text: &str) -> Option<i32> {
    if !INTEGER_PATTERN.is_match(text) {
        return None;
    }
    text.parse::<i32>().ok()
}

/// Convert a number in `-99..=99` to words.
///
/// Negative numbers are prefixed with `"minus "`.
pub fn to_words(number: i32) -> TimeResult<String> {
    if number <= -LIMIT || number >= LIMIT {
        return Err(TimeError::OutOfRange(number));
    }
    if number < 0 {
        return Ok(format!("minus {}", to_words(-number)?));
    }
    let words = NUMBER_WORDS[number as usize].clone();
    trace!("to_words({}) = '{}'", number, words);
    Ok(words)
}

/// Convert a textual number to words. Surrounding whitespace is ignored.
pub fn str_to_words(input: &str) -> TimeResult<String> {
    let trimmed = input.trim();
    match parse_integer(trimmed) {
        Some(number) => to_words(number),
        None => Err(TimeError::InvalidNumber(input.to_string())),
    }
}
