use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::domain::contact::CallbackRequest;
use crate::domain::types::{ContactName, PhoneDigits};
use crate::forms::FormError;

#[derive(Debug, Default, Deserialize, Validate)]
/// Raw callback submission as posted by the landing page.
pub struct IntakeForm {
    /// Name typed by the visitor.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,
    /// Phone number typed by the visitor, possibly with formatting.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub phone: String,
}

impl IntakeForm {
    /// Reads the form from a raw request body.
    ///
    /// Bodies that are not a JSON object are treated as an empty object, and
    /// fields that are not JSON strings are treated as absent.
    pub fn from_body(body: &[u8]) -> Self {
        let value = serde_json::from_slice::<Value>(body).unwrap_or(Value::Null);
        let field = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            name: field("name"),
            phone: field("phone"),
        }
    }
}

impl TryFrom<IntakeForm> for CallbackRequest {
    type Error = FormError;

    fn try_from(form: IntakeForm) -> Result<Self, Self::Error> {
        form.validate().map_err(|_| FormError::MissingFields)?;

        let name = ContactName::new(form.name).map_err(|_| FormError::MissingFields)?;
        let phone = PhoneDigits::new(&form.phone).map_err(|_| FormError::InvalidPhoneNumber)?;

        Ok(CallbackRequest::new(name, phone))
    }
}
