//! Strongly-typed value objects used by the intake domain.
//!
//! These wrappers enforce the callback form invariants (trimmed non-empty
//! names, digit-only phone numbers of bounded length) so that once a value
//! reaches the domain layer it can be forwarded to the CRM as-is.
use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of digits accepted in a phone number.
pub const PHONE_MIN_DIGITS: usize = 10;
/// Maximum number of digits accepted in a phone number.
pub const PHONE_MAX_DIGITS: usize = 15;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Phone number has no digits or a digit count outside the accepted range.
    #[error("invalid phone number")]
    InvalidPhone,
    /// Provided CRM identifier was empty.
    #[error("invalid contact id")]
    InvalidContactId,
}

/// Removes every character that is not an ASCII digit.
///
/// Applying it twice yields the same result as applying it once.
pub fn strip_non_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Returns `true` when `count` lies within the accepted phone length range.
pub fn is_valid_phone_length(count: usize) -> bool {
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&count)
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Person name as typed into the callback form, trimmed and non-empty.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Constructs a trimmed, non-empty name.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let inner = NonEmptyString::new(value)?;
        Ok(Self(inner.into_inner()))
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits the name into a first name and the remaining last name.
    ///
    /// The first whitespace-separated token is the first name; the remaining
    /// tokens joined by a single space form the last name, which is empty for
    /// single-token names.
    pub fn split(&self) -> (&str, String) {
        let mut tokens = self.0.split_whitespace();
        // Non-empty after trimming, so there is always a first token.
        let first = tokens.next().unwrap_or(self.0.as_str());
        let last = tokens.collect::<Vec<_>>().join(" ");
        (first, last)
    }
}

/// Phone number normalized to its digits only (10 to 15 of them).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PhoneDigits(String);

impl PhoneDigits {
    /// Strips formatting characters and checks the remaining digit count.
    pub fn new<S: AsRef<str>>(value: S) -> Result<Self, TypeConstraintError> {
        let digits = strip_non_digits(value.as_ref());
        if digits.is_empty() || !is_valid_phone_length(digits.len()) {
            return Err(TypeConstraintError::InvalidPhone);
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier assigned to a contact by the CRM.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CrmContactId(String);

impl CrmContactId {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        NonEmptyString::new(value)
            .map(|id| Self(id.into_inner()))
            .map_err(|_| TypeConstraintError::InvalidContactId)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for CrmContactId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Secret used to authenticate against the CRM API.
///
/// Neither `Debug` nor `Display` reveal the value; use [`CrmCredential::expose`]
/// only when building the authorization header.
#[derive(Clone, PartialEq, Eq)]
pub struct CrmCredential(String);

impl CrmCredential {
    /// Wraps a credential, rejecting blank values.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let inner = NonEmptyString::new(value)?;
        Ok(Self(inner.into_inner()))
    }

    /// Builds a credential from an optional configuration value.
    ///
    /// Missing and blank values both yield `None`.
    pub fn from_optional(value: Option<&str>) -> Option<Self> {
        value.and_then(|v| Self::new(v).ok())
    }

    /// Returns the raw secret.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for CrmCredential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("CrmCredential(***)")
    }
}

impl Display for CrmCredential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("***")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_non_digits_is_idempotent() {
        for input in ["555-123-4567", "+1 (555) 123 4567", "abc", "", "٣٤٥12"] {
            let once = strip_non_digits(input);
            assert_eq!(strip_non_digits(&once), once);
        }
        assert_eq!(strip_non_digits("+1 (555) 123-4567"), "15551234567");
    }

    #[test]
    fn strip_non_digits_drops_non_ascii_digits() {
        assert_eq!(strip_non_digits("٣٤٥12"), "12");
    }

    #[test]
    fn phone_digits_accepts_lengths_ten_to_fifteen() {
        for len in PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS {
            let digits = "7".repeat(len);
            let phone = PhoneDigits::new(&digits).expect("valid length");
            assert_eq!(phone.as_str(), digits);
        }
    }

    #[test]
    fn phone_digits_rejects_out_of_range_lengths() {
        assert_eq!(
            PhoneDigits::new("1".repeat(9)),
            Err(TypeConstraintError::InvalidPhone)
        );
        assert_eq!(
            PhoneDigits::new("1".repeat(16)),
            Err(TypeConstraintError::InvalidPhone)
        );
        assert_eq!(
            PhoneDigits::new("no digits"),
            Err(TypeConstraintError::InvalidPhone)
        );
    }

    #[test]
    fn phone_digits_normalizes_formatting() {
        let phone = PhoneDigits::new("555-123-4567").unwrap();
        assert_eq!(phone.as_str(), "5551234567");
    }

    #[test]
    fn contact_name_rejects_blank() {
        assert_eq!(
            ContactName::new("   "),
            Err(TypeConstraintError::EmptyString)
        );
        assert_eq!(ContactName::new("  Jane ").unwrap().as_str(), "Jane");
    }

    #[test]
    fn contact_name_split() {
        let name = ContactName::new("Jane Doe Smith").unwrap();
        assert_eq!(name.split(), ("Jane", "Doe Smith".to_string()));

        let name = ContactName::new("Madonna").unwrap();
        assert_eq!(name.split(), ("Madonna", String::new()));

        let name = ContactName::new("Jane   Doe").unwrap();
        assert_eq!(name.split(), ("Jane", "Doe".to_string()));
    }

    #[test]
    fn credential_is_redacted() {
        let credential = CrmCredential::new("pat-na1-secret").unwrap();
        assert_eq!(format!("{credential:?}"), "CrmCredential(***)");
        assert_eq!(credential.to_string(), "***");
        assert_eq!(credential.expose(), "pat-na1-secret");
    }

    #[test]
    fn credential_from_optional_treats_blank_as_missing() {
        assert!(CrmCredential::from_optional(None).is_none());
        assert!(CrmCredential::from_optional(Some("  ")).is_none());
        assert!(CrmCredential::from_optional(Some("key")).is_some());
    }

    #[test]
    fn contact_id_rejects_empty() {
        assert_eq!(
            CrmContactId::new(""),
            Err(TypeConstraintError::InvalidContactId)
        );
        assert_eq!(CrmContactId::new("42").unwrap().as_str(), "42");
    }
}
