// libs/appointment-cell/src/services/sync.rs
use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, instrument};

use doctor_cell::{Doctor, DoctorSource};
use shared_config::AppConfig;
use shared_database::RestClient;
use shared_models::auth::Session;
use shared_models::error::RemoteError;

use crate::models::{Appointment, AppointmentDraft, StatusUpdateRequest};

/// Every remote operation the appointment core performs. Listing doctors
/// comes from [`DoctorSource`].
#[async_trait]
pub trait RemoteSyncClient: DoctorSource {
    async fn list_appointments(&self) -> Result<Vec<Appointment>, RemoteError>;

    async fn create_appointment(&self, draft: &AppointmentDraft) -> Result<Appointment, RemoteError>;

    async fn delete_appointment(&self, id: &str) -> Result<(), RemoteError>;

    async fn complete_appointment(&self, id: &str) -> Result<Appointment, RemoteError>;
}

/// [`RemoteSyncClient`] backed by the clinic's HTTP+JSON API.
pub struct HttpSyncClient {
    rest: RestClient,
}

impl HttpSyncClient {
    pub fn new(config: &AppConfig, session: &Session) -> Self {
        Self {
            rest: RestClient::new(config, Some(session)),
        }
    }

    fn appointment_path(id: &str) -> String {
        format!("/appointments/{}", urlencoding::encode(id))
    }
}

#[async_trait]
impl DoctorSource for HttpSyncClient {
    #[instrument(skip(self))]
    async fn list_doctors(&self) -> Result<Vec<Doctor>, RemoteError> {
        self.rest.request(Method::GET, "/doctors", None).await
    }
}

#[async_trait]
impl RemoteSyncClient for HttpSyncClient {
    #[instrument(skip(self))]
    async fn list_appointments(&self) -> Result<Vec<Appointment>, RemoteError> {
        self.rest.request(Method::GET, "/appointments", None).await
    }

    #[instrument(skip(self, draft))]
    async fn create_appointment(&self, draft: &AppointmentDraft) -> Result<Appointment, RemoteError> {
        debug!("Creating appointment with doctor {}", draft.doctor_id);

        let body = serde_json::to_value(draft)
            .map_err(|e| RemoteError::Decode(e.to_string()))?;

        self.rest.request(Method::POST, "/appointments", Some(body)).await
    }

    #[instrument(skip(self))]
    async fn delete_appointment(&self, id: &str) -> Result<(), RemoteError> {
        self.rest
            .request_empty(Method::DELETE, &Self::appointment_path(id), None)
            .await
    }

    #[instrument(skip(self))]
    async fn complete_appointment(&self, id: &str) -> Result<Appointment, RemoteError> {
        let body = serde_json::to_value(StatusUpdateRequest::completed())
            .map_err(|e| RemoteError::Decode(e.to_string()))?;
        let path = format!("{}/status", Self::appointment_path(id));

        self.rest.request(Method::PATCH, &path, Some(body)).await
    }
}
