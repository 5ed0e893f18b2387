#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use callback_intake::domain::contact::{CreatedContact, NewContact};
use callback_intake::domain::types::{CrmContactId, CrmCredential};
use callback_intake::models::config::ServerConfig;
use callback_intake::repository::ContactWriter;
use callback_intake::repository::errors::{RepositoryError, RepositoryResult};

type Responder = Box<dyn Fn() -> RepositoryResult<CreatedContact> + Send + Sync>;

/// In-memory CRM recording every contact it is asked to create.
pub struct FakeCrm {
    respond: Responder,
    calls: AtomicUsize,
    last: Mutex<Option<(String, NewContact)>>,
}

impl FakeCrm {
    pub fn new(
        respond: impl Fn() -> RepositoryResult<CreatedContact> + Send + Sync + 'static,
    ) -> Self {
        Self {
            respond: Box::new(respond),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn creating(id: &'static str) -> Self {
        Self::new(move || {
            Ok(CreatedContact {
                id: CrmContactId::new(id).unwrap(),
            })
        })
    }

    pub fn conflicting() -> Self {
        Self::new(|| Err(RepositoryError::Conflict))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Credential and contact of the most recent call.
    pub fn last(&self) -> Option<(String, NewContact)> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactWriter for FakeCrm {
    async fn create_contact(
        &self,
        credential: &CrmCredential,
        contact: &NewContact,
    ) -> RepositoryResult<CreatedContact> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((credential.expose().to_string(), contact.clone()));
        (self.respond)()
    }
}

pub fn server_config(api_key: Option<&str>) -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        crm_api_url: "http://127.0.0.1:1".to_string(),
        crm_timeout_secs: 1,
        hubspot_api_key: api_key.map(str::to_string),
    }
}
