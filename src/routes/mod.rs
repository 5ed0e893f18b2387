use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;
use actix_web::web;

pub mod intake;

/// Headers attached to every response, error paths and preflights included.
pub fn default_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::CONTENT_TYPE, "application/json"))
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"))
}

/// Registers the intake routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(intake::preflight)
        .service(intake::create_contact);
}
