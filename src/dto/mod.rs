//! DTO modules that bridge services with the HTTP API and its clients.

pub mod intake;
