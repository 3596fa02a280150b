//! Caller-side input validation.
//!
//! The repository stores ratings as given. Every caller that accepts text
//! from a person (CLI arguments, menu prompts) parses it through here first.

use thiserror::Error;

use crate::core::types::CustomerId;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("customer id must be a positive whole number, got {0:?}")]
    InvalidCustomerId(String),
    #[error("rating must be a whole number, got {0:?}")]
    NonNumericRating(String),
    #[error("rating must be between {min} and {max}, got {0}", min = MIN_RATING, max = MAX_RATING)]
    RatingOutOfRange(i64),
}

/// Parse a customer id typed by a person.
pub fn parse_customer_id(raw: &str) -> Result<CustomerId, InputError> {
    match raw.trim().parse::<CustomerId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(InputError::InvalidCustomerId(raw.trim().to_string())),
    }
}

/// Parse and bound-check a rating typed by a person.
pub fn parse_rating(raw: &str) -> Result<u8, InputError> {
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| InputError::NonNumericRating(raw.trim().to_string()))?;
    if !(i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&value) {
        return Err(InputError::RatingOutOfRange(value));
    }
    Ok(value as u8)
}
