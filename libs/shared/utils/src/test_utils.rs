use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::auth::Session;

pub struct TestConfig {
    pub api_base_url: String,
    pub access_token: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:6005/api".to_string(),
            access_token: "test-access-token".to_string(),
        }
    }
}

impl TestConfig {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            api_base_url: self.api_base_url.clone(),
            access_token: Some(self.access_token.clone()),
            user_id: "test-user".to_string(),
        }
    }

    pub fn session(&self) -> Session {
        Session::new("test-user", self.access_token.clone())
    }
}

/// Fixed instant used by tests that need a deterministic "now".
pub fn test_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-03-10T09:00:00Z")
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

pub fn days_from(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now + Duration::days(days)
}

/// Canned JSON bodies shaped like the clinic API's responses.
pub struct MockApiResponses;

impl MockApiResponses {
    pub fn doctor_response(id: &str, name: &str, specialty: &str) -> Value {
        json!({
            "_id": id,
            "name": name,
            "specialty": specialty,
            "__v": 0
        })
    }

    pub fn appointment_response(
        id: &str,
        patient_name: &str,
        doctor_id: &str,
        appointment_date: DateTime<Utc>,
        status: &str,
    ) -> Value {
        json!({
            "_id": id,
            "patientName": patient_name,
            "doctorId": doctor_id,
            "appointmentDate": appointment_date.to_rfc3339(),
            "notes": "",
            "status": status,
            "__v": 0
        })
    }

    pub fn scheduled_appointment(id: &str, patient_name: &str, doctor_id: &str, appointment_date: DateTime<Utc>) -> Value {
        Self::appointment_response(id, patient_name, doctor_id, appointment_date, "Scheduled")
    }

    pub fn completed_appointment(id: &str, patient_name: &str, doctor_id: &str, appointment_date: DateTime<Utc>) -> Value {
        Self::appointment_response(id, patient_name, doctor_id, appointment_date, "Completed")
    }

    pub fn error_response(message: &str) -> Value {
        json!({ "message": message })
    }
}
