//! Domain values shared by the intake endpoint and the form controller.

pub mod contact;
pub mod types;
