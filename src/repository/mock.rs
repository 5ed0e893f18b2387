//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::contact::{CreatedContact, NewContact};
use crate::domain::types::CrmCredential;
use crate::repository::ContactWriter;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Repository {}

    #[async_trait]
    impl ContactWriter for Repository {
        async fn create_contact(
            &self,
            credential: &CrmCredential,
            contact: &NewContact,
        ) -> RepositoryResult<CreatedContact>;
    }
}
