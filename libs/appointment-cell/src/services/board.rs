// libs/appointment-cell/src/services/board.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use doctor_cell::DoctorDirectory;
use shared_models::auth::Session;

use crate::models::{Appointment, AppointmentDraft, AppointmentError, GENERIC_FAILURE_NOTICE};
use crate::services::filter::filter;
use crate::services::lifecycle::AppointmentLifecycleService;
use crate::services::store::AppointmentStore;
use crate::services::sync::RemoteSyncClient;

/// Everything the appointment screen works with: the doctor directory, the
/// appointment store, the current search query and pending user notices.
///
/// A board only exists for an authenticated session.
pub struct AppointmentBoard<C: RemoteSyncClient> {
    session: Session,
    client: Arc<C>,
    directory: DoctorDirectory,
    store: AppointmentStore<C>,
    lifecycle: AppointmentLifecycleService,
    query: String,
    notices: Vec<String>,
}

impl<C: RemoteSyncClient> AppointmentBoard<C> {
    /// Start the appointment core for `session`. Without a session nothing is
    /// loaded and `None` is returned.
    pub async fn activate(session: Option<&Session>, client: C) -> Option<Self> {
        let Some(session) = session else {
            debug!("No session, appointment board not activated");
            return None;
        };

        info!("Activating appointment board for user {}", session.user_id);

        let client = Arc::new(client);
        let mut board = Self {
            session: session.clone(),
            store: AppointmentStore::new(Arc::clone(&client)),
            client,
            directory: DoctorDirectory::new(),
            lifecycle: AppointmentLifecycleService::new(),
            query: String::new(),
            notices: Vec::new(),
        };

        board.reload().await;
        Some(board)
    }

    /// Fetch doctors and appointments again. Returns whether both loads
    /// succeeded; failures are logged and queued as notices.
    pub async fn reload(&mut self) -> bool {
        let client = Arc::clone(&self.client);

        let (doctors, appointments) = futures::join!(
            self.directory.load(client.as_ref()),
            self.store.load_all(),
        );

        let mut ok = true;
        if doctors.is_err() {
            warn!("Doctor directory unavailable, doctor names show as unknown");
            self.notices.push(GENERIC_FAILURE_NOTICE.to_string());
            ok = false;
        }
        if let Err(e) = appointments {
            self.report(&e);
            ok = false;
        }
        ok
    }

    /// Validate and book a draft as of `now`.
    pub async fn book(
        &mut self,
        draft: &AppointmentDraft,
        now: DateTime<Utc>,
    ) -> Result<Appointment, AppointmentError> {
        let result = self.store.create(draft, now).await.cloned();
        self.track(result)
    }

    pub async fn remove(&mut self, id: &str) -> Result<Appointment, AppointmentError> {
        let result = self.store.remove(id).await;
        self.track(result)
    }

    pub async fn complete(&mut self, id: &str) -> Result<Appointment, AppointmentError> {
        let result = self.store.complete(id).await.cloned();
        self.track(result)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Appointments matching the current query, in store order.
    pub fn visible(&self) -> Vec<&Appointment> {
        filter(self.store.appointments(), &self.directory, &self.query)
    }

    pub fn doctor_label(&self, appointment: &Appointment) -> &str {
        self.directory.display_name(&appointment.doctor_id)
    }

    /// Whether the complete action should be offered for this appointment.
    pub fn can_complete(&self, appointment: &Appointment) -> bool {
        self.lifecycle.can_complete(appointment.status)
    }

    /// A fresh booking form, optionally with a doctor picked in advance.
    pub fn new_draft(&self, preselected_doctor: Option<&str>, now: DateTime<Utc>) -> AppointmentDraft {
        AppointmentDraft::blank(preselected_doctor, now)
    }

    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn directory(&self) -> &DoctorDirectory {
        &self.directory
    }

    pub fn store(&self) -> &AppointmentStore<C> {
        &self.store
    }

    fn track<T>(&mut self, result: Result<T, AppointmentError>) -> Result<T, AppointmentError> {
        if let Err(e) = &result {
            self.report(e);
        }
        result
    }

    fn report(&mut self, error: &AppointmentError) {
        if error.is_remote() {
            warn!("Remote operation failed: {}", error);
        } else {
            debug!("Operation refused: {}", error);
        }
        self.notices.push(error.user_message());
    }
}
