//! Configuration model loaded from external sources.

use std::fmt::{Debug, Formatter};
use std::time::Duration;

use serde::Deserialize;

use crate::domain::types::CrmCredential;
use crate::repository::hubspot::DEFAULT_HUBSPOT_URL;

const DEFAULT_CRM_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    #[serde(default = "default_crm_api_url")]
    pub crm_api_url: String,
    #[serde(default = "default_crm_timeout_secs")]
    pub crm_timeout_secs: u64,
    /// CRM private app token. Optional so that a missing value fails requests
    /// rather than startup.
    #[serde(default)]
    pub hubspot_api_key: Option<String>,
}

impl ServerConfig {
    /// Returns the configured CRM credential, if any.
    pub fn crm_credential(&self) -> Option<CrmCredential> {
        CrmCredential::from_optional(self.hubspot_api_key.as_deref())
    }

    pub fn crm_timeout(&self) -> Duration {
        Duration::from_secs(self.crm_timeout_secs)
    }
}

impl Debug for ServerConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("address", &self.address)
            .field("port", &self.port)
            .field("crm_api_url", &self.crm_api_url)
            .field("crm_timeout_secs", &self.crm_timeout_secs)
            .field("hubspot_api_key", &self.crm_credential())
            .finish()
    }
}

fn default_crm_api_url() -> String {
    DEFAULT_HUBSPOT_URL.to_string()
}

fn default_crm_timeout_secs() -> u64 {
    DEFAULT_CRM_TIMEOUT_SECS
}
