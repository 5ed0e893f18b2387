//! Error conversion glue between the form and service layers.
//!
//! Forms must not depend on service error types, so the mapping from a
//! rejected submission to the service taxonomy lives here.

use crate::forms::FormError;
use crate::services::ServiceError;

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        match val {
            FormError::MissingFields => ServiceError::MissingFields,
            FormError::InvalidPhoneNumber => ServiceError::InvalidPhone,
        }
    }
}
