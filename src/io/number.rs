//! # Number parsing
//!
//! Reading exact capacities from decimal strings like `12`, `-3` or `2.75`.
use std::ops::Neg;

use num_traits::Zero;
use relp_num::RationalBig;

use crate::io::error::{ParseError, ParseResult};

/// Parsing a number read from a network file.
pub trait Parse: Sized {
    /// Read a decimal (abc.xyz) number.
    ///
    /// # Errors
    ///
    /// When the text is not a decimal number, or when the number is not exactly representable by
    /// this type.
    fn parse(text: &str) -> ParseResult<Self>;
}

macro_rules! parse_integer {
    ($($integer:ty),*) => {$(
        impl Parse for $integer {
            fn parse(text: &str) -> ParseResult<Self> {
                let raw = Raw::try_from(text)?;
                if raw.decimal_steps_from_right > 0 {
                    return Err(ParseError::new(format!(
                        "Value \"{text}\" is not an integer, so it can not be represented exactly",
                    )));
                }

                let value = raw.digits.iter()
                    .try_fold(0 as $integer, |value, &digit| {
                        value.checked_mul(10)?.checked_add(<$integer>::from(digit))
                    })
                    .ok_or_else(|| ParseError::new(format!(
                        "Value \"{text}\" is too large, at most {} can be represented",
                        <$integer>::MAX,
                    )))?;

                Ok(raw.sign.apply(value))
            }
        }
    )*}
}
parse_integer!(i32, i64, i128);

impl Parse for RationalBig {
    fn parse(text: &str) -> ParseResult<Self> {
        let raw = Raw::try_from(text)?;

        let ten = Self::from(10);
        let numerator = raw.digits.iter()
            .fold(Self::zero(), |value, &digit| value * ten.clone() + Self::from(i32::from(digit)));
        let denominator = (0..raw.decimal_steps_from_right)
            .fold(Self::from(1), |value, _| value * ten.clone());

        Ok(raw.sign.apply(numerator / denominator))
    }
}

/// Intermediate form of read number.
///
/// The decimal point is removed from the digits and remembered as a number of steps from the
/// right. Trailing zeros after the decimal point are dropped.
#[derive(Eq, PartialEq, Clone, Debug)]
struct Raw {
    sign: Sign,
    digits: Vec<u8>,
    decimal_steps_from_right: usize,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
enum Sign {
    Positive,
    Negative,
}

impl Sign {
    fn apply<T: Neg<Output=T>>(self, value: T) -> T {
        match self {
            Sign::Positive => value,
            Sign::Negative => -value,
        }
    }
}

impl TryFrom<&str> for Raw {
    type Error = ParseError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let (sign, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, text.strip_prefix('+').unwrap_or(text)),
        };

        let (integer_part, decimal_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if integer_part.is_empty() && decimal_part.is_empty() {
            return Err(ParseError::new(format!("Failed to parse \"{text}\" as a number: no digits")));
        }
        let decimal_part = decimal_part.trim_end_matches('0');

        let digits = integer_part.chars()
            .chain(decimal_part.chars())
            .map(|character| character.to_digit(10).and_then(|digit| u8::try_from(digit).ok()))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| ParseError::new(format!(
                "Failed to parse \"{text}\" as a number: unexpected character",
            )))?;

        Ok(Self { sign, digits, decimal_steps_from_right: decimal_part.len() })
    }
}
