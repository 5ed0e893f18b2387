//! Form definitions backing the intake routes.

use thiserror::Error;

pub mod intake;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("name and phone are required")]
    MissingFields,

    #[error("invalid phone number")]
    InvalidPhoneNumber,
}
