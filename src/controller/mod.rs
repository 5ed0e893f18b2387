//! Client-side logic of the callback form, free of any DOM dependency.

pub mod form;
pub mod transport;
pub mod validation;

pub use form::{FormController, FormView, Outcome, SubmitRejected};
pub use validation::{FieldError, filter_phone_input, validate};
