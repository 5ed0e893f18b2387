//! Field checks run by the callback form before anything is sent.

use thiserror::Error;

use crate::domain::contact::CallbackRequest;
use crate::domain::types::{ContactName, PhoneDigits, is_valid_phone_length, strip_non_digits};

/// Form field a validation error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
}

/// Reasons the form refuses to submit. The display text is shown to the user.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Please enter your name.")]
    EmptyName,
    #[error("Mobile number is required.")]
    EmptyPhone,
    #[error("Mobile number must contain only numbers.")]
    NonNumericPhone,
    #[error("Please enter a valid mobile number (10-15 digits).")]
    InvalidLength,
}

impl FieldError {
    /// Field that should receive focus.
    pub fn field(self) -> Field {
        match self {
            FieldError::EmptyName => Field::Name,
            _ => Field::Phone,
        }
    }
}

/// Validates the raw form values, name first.
pub fn validate(name: &str, phone: &str) -> Result<CallbackRequest, FieldError> {
    let name = ContactName::new(name).map_err(|_| FieldError::EmptyName)?;

    let phone = phone.trim();
    if phone.is_empty() {
        return Err(FieldError::EmptyPhone);
    }
    if !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError::NonNumericPhone);
    }
    if !is_valid_phone_length(phone.len()) {
        return Err(FieldError::InvalidLength);
    }
    let phone = PhoneDigits::new(phone).map_err(|_| FieldError::InvalidLength)?;

    Ok(CallbackRequest::new(name, phone))
}

/// Rewrites a phone field value as the user types, keeping digits only.
pub fn filter_phone_input(value: &str) -> String {
    strip_non_digits(value)
}
