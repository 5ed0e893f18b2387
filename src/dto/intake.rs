//! Wire payloads exchanged between the landing page and the intake endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::contact::CallbackRequest;

pub const MSG_CONTACT_CREATED: &str = "Contact created successfully";
pub const MSG_CONTACT_EXISTS: &str = "Contact already exists in our system.";
pub const MSG_MISSING_FIELDS: &str = "Name and phone number are required.";
pub const MSG_INVALID_PHONE: &str = "Please provide a valid phone number (10-15 digits).";
pub const MSG_SERVER_MISCONFIGURED: &str = "Server configuration error.";
pub const MSG_UPSTREAM_FAILURE: &str = "An error occurred. Please try again later.";
pub const MSG_BODY_TOO_LARGE: &str = "Request body is too large.";

/// Body posted by the callback form.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntakeRequest {
    pub name: String,
    pub phone: String,
}

impl From<&CallbackRequest> for IntakeRequest {
    fn from(request: &CallbackRequest) -> Self {
        Self {
            name: request.name.as_str().to_string(),
            phone: request.phone.as_str().to_string(),
        }
    }
}

/// Envelope returned by every intake response.
///
/// Missing `success` or `message` fields decode as `false` and an empty
/// message.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IntakeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
}

impl IntakeResponse {
    pub fn success(message: impl Into<String>, contact_id: Option<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            contact_id,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            contact_id: None,
        }
    }
}
