//! State of the "request a callback" modal.
//!
//! [`FormController`] holds everything the modal displays and exposes the user
//! interactions as plain methods. Rendering is left to whoever reads
//! [`FormController::view`].

use crate::controller::transport::{IntakeReply, IntakeTransport, TransportError};
use crate::controller::validation::{Field, FieldError, filter_phone_input, validate};
use crate::domain::contact::CallbackRequest;
use crate::dto::intake::IntakeRequest;

pub const DEFAULT_SUBMIT_LABEL: &str = "Request Callback";
pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const MSG_GENERIC_FAILURE: &str = "An error occurred. Please try again.";
pub const MSG_NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Editing,
    Submitting,
    Confirmed,
}

/// Where a click on the modal overlay landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Content,
}

/// Reasons a submit attempt did not produce a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A request from this form is still outstanding.
    InFlight,
    /// The form was already replaced by the confirmation.
    AlreadyConfirmed,
    /// A field failed validation.
    Invalid(FieldError),
}

/// Result of a completed submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Confirmed { contact_id: Option<String> },
    Rejected(String),
    NetworkError,
}

impl Outcome {
    /// Message to show the user, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Confirmed { .. } => None,
            Outcome::Rejected(message) => Some(message.as_str()),
            Outcome::NetworkError => Some(MSG_NETWORK_ERROR),
        }
    }
}

/// Everything a renderer needs to draw the modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormView {
    pub modal_open: bool,
    pub form_visible: bool,
    pub confirmation_visible: bool,
    pub name: String,
    pub phone: String,
    pub phone_error: Option<String>,
    pub submit_enabled: bool,
    pub submit_label: String,
    pub alert: Option<String>,
    pub focus: Option<Field>,
}

#[derive(Debug)]
pub struct FormController {
    modal_open: bool,
    name: String,
    phone: String,
    phone_error: Option<FieldError>,
    alert: Option<String>,
    focus: Option<Field>,
    phase: Phase,
    submit_label: String,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_LABEL)
    }
}

impl FormController {
    /// Creates a closed modal whose submit control reads `submit_label`.
    pub fn new(submit_label: impl Into<String>) -> Self {
        Self {
            modal_open: false,
            name: String::new(),
            phone: String::new(),
            phone_error: None,
            alert: None,
            focus: None,
            phase: Phase::Editing,
            submit_label: submit_label.into(),
        }
    }

    /// Opens the modal with an empty form.
    ///
    /// An outstanding request keeps the submit control disabled until it
    /// completes.
    pub fn open(&mut self) {
        self.modal_open = true;
        self.name.clear();
        self.phone.clear();
        self.phone_error = None;
        self.alert = None;
        self.focus = None;
        if self.phase == Phase::Confirmed {
            self.phase = Phase::Editing;
        }
    }

    pub fn close(&mut self) {
        self.modal_open = false;
    }

    pub fn is_open(&self) -> bool {
        self.modal_open
    }

    /// Handles a key press anywhere on the page.
    pub fn key_down(&mut self, key: &str) {
        if key == "Escape" && self.modal_open {
            self.close();
        }
    }

    /// Handles a click on the overlay; only the backdrop closes the modal.
    pub fn click_overlay(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop {
            self.close();
        }
    }

    pub fn input_name(&mut self, value: &str) {
        self.name = value.to_string();
    }

    /// Stores the phone value with every non-digit removed.
    pub fn input_phone(&mut self, value: &str) {
        self.phone = filter_phone_input(value);
        if !self.phone.is_empty() {
            self.phone_error = None;
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Validates the form and, if it passes, locks the submit control.
    pub fn begin_submit(&mut self) -> Result<CallbackRequest, SubmitRejected> {
        match self.phase {
            Phase::Submitting => return Err(SubmitRejected::InFlight),
            Phase::Confirmed => return Err(SubmitRejected::AlreadyConfirmed),
            Phase::Editing => {}
        }

        match validate(&self.name, &self.phone) {
            Ok(request) => {
                self.phone_error = None;
                self.alert = None;
                self.focus = None;
                self.phase = Phase::Submitting;
                Ok(request)
            }
            Err(err) => {
                if err.field() == Field::Phone {
                    self.phone_error = Some(err);
                }
                self.focus = Some(err.field());
                Err(SubmitRejected::Invalid(err))
            }
        }
    }

    /// Applies the result of the request started by [`Self::begin_submit`].
    pub fn finish_submit(&mut self, result: Result<IntakeReply, TransportError>) -> Outcome {
        let outcome = match result {
            Ok(reply) if reply.is_success() => Outcome::Confirmed {
                contact_id: reply.body.contact_id,
            },
            Ok(reply) => {
                let message = if reply.body.message.is_empty() {
                    MSG_GENERIC_FAILURE.to_string()
                } else {
                    reply.body.message
                };
                Outcome::Rejected(message)
            }
            Err(err) => {
                log::error!("Error submitting form: {err}");
                Outcome::NetworkError
            }
        };

        match &outcome {
            Outcome::Confirmed { contact_id } => {
                log::info!("Callback request submitted, contact id: {contact_id:?}");
                self.phase = Phase::Confirmed;
                self.alert = None;
            }
            Outcome::Rejected(_) | Outcome::NetworkError => {
                self.phase = Phase::Editing;
                self.alert = outcome.message().map(str::to_string);
            }
        }

        outcome
    }

    /// Validates, sends exactly one request and applies its result.
    ///
    /// Never retries; calling it again after completion sends a new request.
    pub async fn submit<T>(&mut self, transport: &T) -> Result<Outcome, SubmitRejected>
    where
        T: IntakeTransport + ?Sized,
    {
        let request = self.begin_submit()?;
        let result = transport.post(&IntakeRequest::from(&request)).await;
        Ok(self.finish_submit(result))
    }

    /// Clears the alert after the user has acknowledged it.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn view(&self) -> FormView {
        let submitting = self.phase == Phase::Submitting;
        FormView {
            modal_open: self.modal_open,
            form_visible: self.phase != Phase::Confirmed,
            confirmation_visible: self.phase == Phase::Confirmed,
            name: self.name.clone(),
            phone: self.phone.clone(),
            phone_error: self.phone_error.map(|e| e.to_string()),
            submit_enabled: !submitting,
            submit_label: if submitting {
                SUBMITTING_LABEL.to_string()
            } else {
                self.submit_label.clone()
            },
            alert: self.alert.clone(),
            focus: self.focus,
        }
    }
}
