use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod intake;

/// Errors surfaced by the service layer to the HTTP routes.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("name or phone is missing")]
    MissingFields,

    #[error("phone number is invalid")]
    InvalidPhone,

    #[error("CRM credential is not configured")]
    Misconfigured,

    #[error("CRM request failed: {0}")]
    Upstream(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
