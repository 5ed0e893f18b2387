//! HubSpot implementation of [`ContactWriter`] over the CRM v3 REST API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::domain::contact::{CreatedContact, NewContact};
use crate::domain::types::{CrmContactId, CrmCredential};
use crate::repository::ContactWriter;
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub const DEFAULT_HUBSPOT_URL: &str = "https://api.hubapi.com";
const CONTACTS_PATH: &str = "/crm/v3/objects/contacts";
const STATUS_CONFLICT: u16 = 409;

#[derive(Serialize)]
struct ContactPayload<'a> {
    properties: &'a NewContact,
}

/// Client for the HubSpot contacts endpoint.
#[derive(Clone)]
pub struct HubSpotRepository {
    client: reqwest::Client,
    base_url: String,
}

impl HubSpotRepository {
    /// Builds a repository whose requests are bounded by `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> RepositoryResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn contacts_url(&self) -> String {
        format!("{}{CONTACTS_PATH}", self.base_url)
    }
}

#[async_trait]
impl ContactWriter for HubSpotRepository {
    async fn create_contact(
        &self,
        credential: &CrmCredential,
        contact: &NewContact,
    ) -> RepositoryResult<CreatedContact> {
        let response = self
            .client
            .post(self.contacts_url())
            .bearer_auth(credential.expose())
            .json(&ContactPayload {
                properties: contact,
            })
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        parse_create_response(status, &body)
    }
}

/// Interprets the status and body returned by the create-contact call.
pub(crate) fn parse_create_response(status: u16, body: &str) -> RepositoryResult<CreatedContact> {
    match status {
        200..=299 => {
            let value: Value = serde_json::from_str(body)?;
            let id = match value.get("id") {
                Some(Value::String(id)) => id.clone(),
                Some(Value::Number(id)) => id.to_string(),
                _ => {
                    return Err(RepositoryError::MalformedResponse(
                        "missing contact id".to_string(),
                    ));
                }
            };
            let id = CrmContactId::new(id)
                .map_err(|e| RepositoryError::MalformedResponse(e.to_string()))?;
            Ok(CreatedContact { id })
        }
        STATUS_CONFLICT => Err(RepositoryError::Conflict),
        _ => Err(RepositoryError::UnexpectedStatus {
            status,
            body: body.to_string(),
        }),
    }
}
