//! Length validation rule.

use std::num::IntErrorKind;

use thiserror::Error;

use crate::pass::{Alphabet, ClassSet};

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 26;

/// Why a length input was rejected. Variants are in reporting priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LengthError {
    #[error("Password length is required")]
    Missing,
    #[error("Password length must be a whole number")]
    NotANumber,
    #[error("Password length should be a minimum of {}", MIN_LENGTH)]
    TooShort,
    #[error("Password length should be a maximum of {}", MAX_LENGTH)]
    TooLong,
}

/// Anything that blocks generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Length(#[from] LengthError),
    #[error("Select at least one character class")]
    NoCharacterClass,
}

/// Check a raw length value and return it as a count.
pub fn validate_length(raw: Option<&str>) -> Result<usize, LengthError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Err(LengthError::Missing),
        Some(s) => s,
    };

    let value: i64 = raw.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => LengthError::TooLong,
        IntErrorKind::NegOverflow => LengthError::TooShort,
        _ => LengthError::NotANumber,
    })?;

    if value < MIN_LENGTH as i64 {
        return Err(LengthError::TooShort);
    }
    if value > MAX_LENGTH as i64 {
        return Err(LengthError::TooLong);
    }
    Ok(value as usize)
}

/// Full request check: a valid length and at least one class.
pub fn validate_request(raw: Option<&str>, classes: ClassSet) -> Result<(Alphabet, usize), FormError> {
    let length = validate_length(raw)?;
    let alphabet = Alphabet::compose(classes).ok_or(FormError::NoCharacterClass)?;
    Ok((alphabet, length))
}
