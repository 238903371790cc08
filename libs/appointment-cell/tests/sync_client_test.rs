use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use appointment_cell::{
    AppointmentBoard, AppointmentDraft, AppointmentStatus, HttpSyncClient, RemoteSyncClient,
};
use doctor_cell::DoctorSource;
use shared_models::error::RemoteError;
use shared_utils::test_utils::{days_from, test_now, MockApiResponses, TestConfig};

fn client_for(mock_server: &MockServer) -> HttpSyncClient {
    let config = TestConfig::with_base_url(&mock_server.uri());
    HttpSyncClient::new(&config.to_app_config(), &config.session())
}

#[tokio::test]
async fn test_list_doctors_sends_session_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/doctors"))
        .and(header("Authorization", "Bearer test-access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockApiResponses::doctor_response("d1", "Dr. A", "Cardio"),
            MockApiResponses::doctor_response("d2", "Dr. Bone", "Orthopedics"),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let doctors = client_for(&mock_server).list_doctors().await.unwrap();

    assert_eq!(doctors.len(), 2);
    assert_eq!(doctors[1].name, "Dr. Bone");
}

#[tokio::test]
async fn test_list_appointments_decodes_records() {
    let mock_server = MockServer::start().await;
    let date = days_from(test_now(), 2);

    Mock::given(method("GET"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockApiResponses::scheduled_appointment("a1", "Amy Lee", "d1", date),
            MockApiResponses::completed_appointment("a2", "Bob Stone", "d2", date),
        ])))
        .mount(&mock_server)
        .await;

    let appointments = client_for(&mock_server).list_appointments().await.unwrap();

    assert_eq!(appointments.len(), 2);
    assert_eq!(appointments[0].appointment_date, date);
    assert_eq!(appointments[1].status, AppointmentStatus::Completed);
}

#[tokio::test]
async fn test_create_posts_draft_body() {
    let mock_server = MockServer::start().await;
    let date = days_from(test_now(), 1);

    Mock::given(method("POST"))
        .and(path("/appointments"))
        .and(body_partial_json(json!({
            "patientName": "Jane Roe",
            "doctorId": "d1",
            "notes": "",
            "status": "Scheduled"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(
            MockApiResponses::scheduled_appointment("srv-1", "Jane Roe", "d1", date),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let draft = AppointmentDraft::new("Jane Roe", "d1", date);
    let created = client_for(&mock_server).create_appointment(&draft).await.unwrap();

    assert_eq!(created.id, "srv-1");
}

#[tokio::test]
async fn test_delete_and_complete_paths() {
    let mock_server = MockServer::start().await;
    let date = days_from(test_now(), 1);

    Mock::given(method("DELETE"))
        .and(path("/appointments/a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Appointment deleted" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/appointments/a2/status"))
        .and(body_json(json!({ "status": "Completed" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            MockApiResponses::completed_appointment("a2", "Bob Stone", "d2", date),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    client.delete_appointment("a1").await.unwrap();
    let updated = client.complete_appointment("a2").await.unwrap();

    assert_eq!(updated.status, AppointmentStatus::Completed);
}

#[tokio::test]
async fn test_delete_with_empty_body_succeeds() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/appointments/a1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    assert!(client_for(&mock_server).delete_appointment("a1").await.is_ok());
}

#[tokio::test]
async fn test_server_error_surfaces_as_remote_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(500).set_body_json(MockApiResponses::error_response("db down")))
        .mount(&mock_server)
        .await;

    let draft = AppointmentDraft::new("Jane Roe", "d1", days_from(test_now(), 1));
    let result = client_for(&mock_server).create_appointment(&draft).await;

    assert_matches!(result, Err(RemoteError::Api { status: 500, .. }));
}

#[tokio::test]
async fn test_created_record_without_id_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "patientName": "Jane Roe",
            "doctorId": "d1",
            "appointmentDate": days_from(test_now(), 1).to_rfc3339(),
            "status": "Scheduled"
        })))
        .mount(&mock_server)
        .await;

    let draft = AppointmentDraft::new("Jane Roe", "d1", days_from(test_now(), 1));
    let result = client_for(&mock_server).create_appointment(&draft).await;

    assert_matches!(result, Err(RemoteError::Decode(_)));
}

#[tokio::test]
async fn test_board_over_http_books_and_completes() {
    let mock_server = MockServer::start().await;
    let now = chrono::Utc::now();
    let date = days_from(now, 1);

    Mock::given(method("GET"))
        .and(path("/doctors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockApiResponses::doctor_response("d1", "Dr. A", "Cardio"),
        ])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(
            MockApiResponses::scheduled_appointment("65f1a2b3c4", "Jane Roe", "d1", date),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/appointments/65f1a2b3c4/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            MockApiResponses::completed_appointment("65f1a2b3c4", "Jane Roe", "d1", date),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = TestConfig::with_base_url(&mock_server.uri());
    let session = config.session();
    let client = HttpSyncClient::new(&config.to_app_config(), &session);
    let mut board = AppointmentBoard::activate(Some(&session), client).await.unwrap();

    let draft = AppointmentDraft::new("Jane Roe", "d1", date);
    let created = board.book(&draft, now).await.unwrap();
    assert_eq!(created.id, "65f1a2b3c4");
    assert_eq!(created.status, AppointmentStatus::Scheduled);

    let completed = board.complete(&created.id).await.unwrap();
    assert_eq!(completed.status, AppointmentStatus::Completed);
    assert_eq!(board.store().len(), 1);

    board.complete(&created.id).await.unwrap();
}

#[tokio::test]
async fn test_unreachable_api_leaves_board_usable() {
    let config = TestConfig::with_base_url("http://127.0.0.1:9");
    let session = config.session();
    let client = HttpSyncClient::new(&config.to_app_config(), &session);

    let mut board = AppointmentBoard::activate(Some(&session), client).await.unwrap();

    assert!(board.store().is_empty());
    assert!(board.directory().is_empty());
    assert_eq!(board.take_notices().len(), 2);
    assert!(board.visible().is_empty());
}
