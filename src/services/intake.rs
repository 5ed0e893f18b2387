use crate::domain::contact::{CallbackRequest, NewContact};
use crate::domain::types::{CrmContactId, CrmCredential};
use crate::forms::intake::IntakeForm;
use crate::repository::ContactWriter;
use crate::repository::errors::RepositoryError;
use crate::services::{ServiceError, ServiceResult};

/// Successful results of a callback intake.
#[derive(Debug, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// The CRM created a new contact.
    Created(CrmContactId),
    /// The CRM already knew the contact.
    AlreadyExists,
}

/// Validates a callback submission and records it as a CRM contact.
///
/// The submission is validated before the credential is checked, and nothing
/// is sent to the CRM unless both succeed.
pub async fn create_contact<R>(
    repo: &R,
    credential: Option<&CrmCredential>,
    form: IntakeForm,
) -> ServiceResult<IntakeOutcome>
where
    R: ContactWriter + ?Sized,
{
    let request = CallbackRequest::try_from(form).map_err(ServiceError::from)?;

    let Some(credential) = credential else {
        log::error!("CRM credential is not configured");
        return Err(ServiceError::Misconfigured);
    };

    let contact = NewContact::from(&request);
    log::debug!("Creating CRM contact: {contact:?}");

    match repo.create_contact(credential, &contact).await {
        Ok(created) => {
            log::info!("Created CRM contact {}", created.id);
            Ok(IntakeOutcome::Created(created.id))
        }
        Err(RepositoryError::Conflict) => {
            log::info!("CRM contact already exists");
            Ok(IntakeOutcome::AlreadyExists)
        }
        Err(err) => {
            log::error!("Failed to create CRM contact: {err}");
            Err(ServiceError::Upstream(err))
        }
    }
}
