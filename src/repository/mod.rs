//! Access to the external CRM acting as system of record for contacts.

use async_trait::async_trait;

use crate::{
    domain::{
        contact::{CreatedContact, NewContact},
        types::CrmCredential,
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod hubspot;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use hubspot::HubSpotRepository;

/// Creates contacts in the CRM.
#[async_trait]
pub trait ContactWriter: Send + Sync {
    /// Creates a single contact.
    ///
    /// Returns [`errors::RepositoryError::Conflict`] when the CRM reports the
    /// contact as a duplicate.
    async fn create_contact(
        &self,
        credential: &CrmCredential,
        contact: &NewContact,
    ) -> RepositoryResult<CreatedContact>;
}
