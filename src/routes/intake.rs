use actix_web::{HttpResponse, Responder, options, post, web};

use crate::dto::intake::{
    IntakeResponse, MSG_BODY_TOO_LARGE, MSG_CONTACT_CREATED, MSG_CONTACT_EXISTS,
    MSG_INVALID_PHONE, MSG_MISSING_FIELDS, MSG_SERVER_MISCONFIGURED, MSG_UPSTREAM_FAILURE,
};
use crate::forms::intake::IntakeForm;
use crate::models::config::ServerConfig;
use crate::repository::ContactWriter;
use crate::services::ServiceError;
use crate::services::intake::{self as intake_service, IntakeOutcome};

/// Largest request body the intake endpoint reads.
pub const MAX_BODY_BYTES: usize = 256 * 1024;

#[options("/create-contact")]
pub async fn preflight() -> impl Responder {
    HttpResponse::Ok().finish()
}

#[post("/create-contact")]
pub async fn create_contact(
    payload: web::Payload,
    repo: web::Data<dyn ContactWriter>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let body = match payload.to_bytes_limited(MAX_BODY_BYTES).await {
        Ok(Ok(body)) => body,
        Ok(Err(err)) => {
            log::warn!("Failed to read request body: {err}");
            web::Bytes::new()
        }
        Err(_) => {
            log::warn!("Request body exceeds {MAX_BODY_BYTES} bytes");
            return HttpResponse::PayloadTooLarge()
                .json(IntakeResponse::failure(MSG_BODY_TOO_LARGE));
        }
    };

    let form = IntakeForm::from_body(&body);
    let credential = server_config.crm_credential();

    match intake_service::create_contact(repo.get_ref(), credential.as_ref(), form).await {
        Ok(IntakeOutcome::Created(id)) => HttpResponse::Ok().json(IntakeResponse::success(
            MSG_CONTACT_CREATED,
            Some(id.into_inner()),
        )),
        Ok(IntakeOutcome::AlreadyExists) => {
            HttpResponse::Ok().json(IntakeResponse::success(MSG_CONTACT_EXISTS, None))
        }
        Err(err) => error_response(&err),
    }
}

/// Maps a service error to its status code and public message.
///
/// Only validation errors describe the problem; everything else gets a
/// generic message since the detail has already been logged.
fn error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::MissingFields => {
            HttpResponse::BadRequest().json(IntakeResponse::failure(MSG_MISSING_FIELDS))
        }
        ServiceError::InvalidPhone => {
            HttpResponse::BadRequest().json(IntakeResponse::failure(MSG_INVALID_PHONE))
        }
        ServiceError::Misconfigured => HttpResponse::InternalServerError()
            .json(IntakeResponse::failure(MSG_SERVER_MISCONFIGURED)),
        ServiceError::Upstream(_) => {
            HttpResponse::InternalServerError().json(IntakeResponse::failure(MSG_UPSTREAM_FAILURE))
        }
    }
}
