use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpResponse, HttpServer, web};

use callback_intake::controller::form::{
    FormController, MSG_GENERIC_FAILURE, MSG_NETWORK_ERROR, Outcome,
};
use callback_intake::controller::transport::{HttpIntakeTransport, IntakeTransport};
use callback_intake::dto::intake::IntakeRequest;
use callback_intake::repository::ContactWriter;
use callback_intake::repository::errors::RepositoryError;
use callback_intake::routes;

mod common;

use common::{FakeCrm, server_config};

/// Starts the intake endpoint backed by `crm` and returns its URL.
fn spawn_intake(crm: Arc<FakeCrm>, api_key: Option<&'static str>) -> String {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(routes::default_headers())
            .configure(routes::configure)
            .app_data(web::Data::from(crm.clone() as Arc<dyn ContactWriter>))
            .app_data(web::Data::new(server_config(api_key)))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}/create-contact")
}

fn filled_form() -> FormController {
    let mut form = FormController::default();
    form.open();
    form.input_name("Jane Doe");
    form.input_phone("555 123 4567");
    form
}

#[actix_web::test]
async fn confirmed_submission_carries_contact_id() {
    let crm = Arc::new(FakeCrm::creating("42"));
    let transport =
        HttpIntakeTransport::new(spawn_intake(crm.clone(), Some("key")), Duration::from_secs(5))
            .unwrap();
    let mut form = filled_form();

    let outcome = form.submit(&transport).await.unwrap();

    assert_eq!(
        outcome,
        Outcome::Confirmed {
            contact_id: Some("42".to_string())
        }
    );
    assert!(form.view().confirmation_visible);
    assert_eq!(crm.calls(), 1);
}

#[actix_web::test]
async fn duplicate_contact_is_confirmed_without_id() {
    let crm = Arc::new(FakeCrm::conflicting());
    let transport =
        HttpIntakeTransport::new(spawn_intake(crm, Some("key")), Duration::from_secs(5)).unwrap();
    let mut form = filled_form();

    let outcome = form.submit(&transport).await.unwrap();

    assert_eq!(outcome, Outcome::Confirmed { contact_id: None });
}

#[actix_web::test]
async fn server_message_is_surfaced_verbatim() {
    let crm = Arc::new(FakeCrm::new(|| Err(RepositoryError::Timeout)));
    let transport =
        HttpIntakeTransport::new(spawn_intake(crm, Some("key")), Duration::from_secs(5)).unwrap();
    let mut form = filled_form();

    let outcome = form.submit(&transport).await.unwrap();

    assert_eq!(
        outcome,
        Outcome::Rejected("An error occurred. Please try again later.".to_string())
    );
    let view = form.view();
    assert!(view.submit_enabled);
    assert!(view.form_visible);
}

#[actix_web::test]
async fn raw_reply_reports_status() {
    let crm = Arc::new(FakeCrm::creating("42"));
    let transport =
        HttpIntakeTransport::new(spawn_intake(crm, None), Duration::from_secs(5)).unwrap();

    let reply = transport
        .post(&IntakeRequest {
            name: "Jane Doe".to_string(),
            phone: "5551234567".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(reply.status, 500);
    assert!(!reply.body.success);
    assert_eq!(reply.body.message, "Server configuration error.");
}

#[actix_web::test]
async fn unreachable_endpoint_is_a_network_error() {
    let transport =
        HttpIntakeTransport::new("http://127.0.0.1:1/create-contact", Duration::from_secs(5))
            .unwrap();
    let mut form = filled_form();

    let outcome = form.submit(&transport).await.unwrap();

    assert_eq!(outcome, Outcome::NetworkError);
    assert_eq!(form.view().alert.as_deref(), Some(MSG_NETWORK_ERROR));
    assert!(form.view().submit_enabled);
}

#[actix_web::test]
async fn non_json_reply_is_a_network_error() {
    let server = HttpServer::new(|| {
        App::new().default_service(web::to(|| async {
            HttpResponse::BadGateway()
                .content_type("text/html")
                .body("<html>Bad Gateway</html>")
        }))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    let transport =
        HttpIntakeTransport::new(format!("http://{addr}/create-contact"), Duration::from_secs(5))
            .unwrap();
    let mut form = filled_form();

    let outcome = form.submit(&transport).await.unwrap();

    assert_eq!(outcome, Outcome::NetworkError);
}

#[actix_web::test]
async fn reply_without_message_is_rejected_with_generic_text() {
    let server = HttpServer::new(|| {
        App::new().default_service(web::to(|| async {
            HttpResponse::BadRequest()
                .content_type("application/json")
                .body(r#"{"success":false}"#)
        }))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    let transport =
        HttpIntakeTransport::new(format!("http://{addr}/create-contact"), Duration::from_secs(5))
            .unwrap();
    let mut form = filled_form();

    let outcome = form.submit(&transport).await.unwrap();

    assert_eq!(outcome, Outcome::Rejected(MSG_GENERIC_FAILURE.to_string()));
    assert_eq!(form.view().alert.as_deref(), Some(MSG_GENERIC_FAILURE));
}
