use serde::{Deserialize, Serialize};

use crate::domain::types::{ContactName, CrmContactId, PhoneDigits};

/// A validated request for a callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbackRequest {
    pub name: ContactName,
    pub phone: PhoneDigits,
}

impl CallbackRequest {
    #[must_use]
    pub fn new(name: ContactName, phone: PhoneDigits) -> Self {
        Self { name, phone }
    }
}

/// Lead status assigned to contacts created from the callback form.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    #[default]
    New,
}

/// Lifecycle stage assigned to contacts created from the callback form.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleStage {
    #[default]
    Lead,
}

/// Contact properties as understood by the CRM.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewContact {
    pub firstname: String,
    pub lastname: String,
    pub phone: String,
    pub hs_lead_status: LeadStatus,
    pub lifecyclestage: LifecycleStage,
}

impl From<&CallbackRequest> for NewContact {
    fn from(request: &CallbackRequest) -> Self {
        let (first, last) = request.name.split();
        Self {
            firstname: first.to_string(),
            lastname: last,
            phone: request.phone.as_str().to_string(),
            hs_lead_status: LeadStatus::New,
            lifecyclestage: LifecycleStage::Lead,
        }
    }
}

/// Contact returned by the CRM after a successful creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatedContact {
    pub id: CrmContactId,
}
