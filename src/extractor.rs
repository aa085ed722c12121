//! Number extraction
//!
//! Finds plain numbers and `start-end` ranges in free text and expands them
//! into a flat, ordered list of numbers.

use std::ops::RangeInclusive;

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::NUMBER_PATTERN;
use crate::errors::{Result, number_overflow_error};

/// Integer type produced by the extractor
///
/// Digit runs of any script are matched, so values are never negative.
/// Literals that do not fit are reported as
/// [`crate::errors::Error::NumberOverflow`].
pub type Number = u128;

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(NUMBER_PATTERN).expect("Failed to compile regex pattern for NUMBER_PATTERN")
});

static DIGIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d$").expect("Failed to compile regex pattern for DIGIT_RE"));

/// A single match of the number pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberToken {
    /// A bare number such as `42`
    Single(Number),
    /// An inclusive range such as `5-8`
    Range { start: Number, end: Number },
}

impl NumberToken {
    /// Parses a matched token, splitting on the hyphen for ranges
    pub fn parse(token: &str) -> Result<Self> {
        match token.split_once('-') {
            Some((start, end)) => Ok(NumberToken::Range {
                start: parse_number(start)?,
                end: parse_number(end)?,
            }),
            None => Ok(NumberToken::Single(parse_number(token)?)),
        }
    }

    /// Numbers this token stands for, in ascending order
    ///
    /// A descending range like `9-5` yields nothing.
    pub fn expand(&self) -> RangeInclusive<Number> {
        match *self {
            NumberToken::Single(value) => value..=value,
            NumberToken::Range { start, end } => start..=end,
        }
    }

    /// How many numbers [`NumberToken::expand`] yields
    ///
    /// `None` when the count does not fit in a `u128`, which only happens for
    /// the range `0-340282366920938463463374607431768211455`.
    pub fn len(&self) -> Option<u128> {
        match *self {
            NumberToken::Single(_) => Some(1),
            NumberToken::Range { start, end } if start <= end => (end - start).checked_add(1),
            NumberToken::Range { .. } => Some(0),
        }
    }

    pub fn is_empty(&self) -> bool {
        match *self {
            NumberToken::Single(_) => false,
            NumberToken::Range { start, end } => start > end,
        }
    }
}

fn is_decimal_digit(c: char) -> bool {
    let mut buffer = [0; 4];
    DIGIT_RE.is_match(c.encode_utf8(&mut buffer))
}

/// Value of a Unicode decimal digit
///
/// Decimal digits come in contiguous runs of ten, zero first, so the value is
/// the distance to the start of the run modulo ten.
fn digit_value(c: char) -> u32 {
    if let Some(value) = c.to_digit(10) {
        return value;
    }
    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32)
        && is_decimal_digit(prev)
    {
        start -= 1;
    }
    (c as u32 - start) % 10
}

fn parse_number(digits: &str) -> Result<Number> {
    // The pattern guarantees decimal digits, so overflow is the only failure
    let ascii: String = digits
        .chars()
        .map(|c| char::from(b'0' + digit_value(c) as u8))
        .collect();
    ascii
        .parse::<Number>()
        .map_err(|_| number_overflow_error(digits))
}

/// Iterates over the number tokens of `text` from left to right
///
/// # Examples
/// ```
/// use number_extractor::extractor::{NumberToken, tokens};
///
/// let found: Vec<NumberToken> = tokens("a 1, b 2-4").collect::<Result<_, _>>().unwrap();
/// assert_eq!(found, vec![NumberToken::Single(1), NumberToken::Range { start: 2, end: 4 }]);
/// ```
pub fn tokens(text: &str) -> impl Iterator<Item = Result<NumberToken>> + '_ {
    NUMBER_RE.find_iter(text).map(|found| {
        let token = NumberToken::parse(found.as_str())?;
        if let NumberToken::Range { start, end } = token
            && start > end
        {
            warn!("Descending range '{}' expands to no numbers", found.as_str());
        }
        Ok(token)
    })
}

/// Extracts every number from `text`, expanding ranges in place
///
/// # Arguments
/// * `text` - The text to scan
///
/// # Returns
/// * `Result<Vec<Number>>` - The numbers in order of appearance
///
/// # Errors
/// Returns an error if a literal is too large for [`Number`]
///
/// # Examples
/// ```
/// use number_extractor::extractor::extract;
///
/// assert_eq!(extract("items: 3, range 5-7, code9").unwrap(), vec![3, 5, 6, 7, 9]);
/// ```
pub fn extract(text: &str) -> Result<Vec<Number>> {
    let mut numbers = Vec::new();
    for token in tokens(text) {
        numbers.extend(token?.expand());
    }
    Ok(numbers)
}
