// libs/appointment-cell/src/services/store.rs
use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};

use shared_models::error::RemoteError;

use crate::models::{Appointment, AppointmentDraft, AppointmentError};
use crate::services::lifecycle::AppointmentLifecycleService;
use crate::services::sync::RemoteSyncClient;
use crate::services::validation::validate_draft;

/// Local view of the clinic's appointments.
///
/// Every change to the collection mirrors a response the server has already
/// confirmed; nothing is applied speculatively. Mutating methods take
/// `&mut self`, so at most one remote operation per store is in flight.
pub struct AppointmentStore<C: RemoteSyncClient> {
    client: Arc<C>,
    lifecycle: AppointmentLifecycleService,
    appointments: Vec<Appointment>,
}

impl<C: RemoteSyncClient> AppointmentStore<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            lifecycle: AppointmentLifecycleService::new(),
            appointments: Vec::new(),
        }
    }

    /// Replace the whole collection with the server's list.
    pub async fn load_all(&mut self) -> Result<usize, AppointmentError> {
        debug!("Loading appointments");

        let fetched = self.client.list_appointments().await.map_err(|e| {
            error!("Error fetching appointments: {}", e);
            AppointmentError::from(e)
        })?;

        let mut seen = HashSet::with_capacity(fetched.len());
        self.appointments = fetched
            .into_iter()
            .filter(|appointment| {
                let fresh = seen.insert(appointment.id.clone());
                if !fresh {
                    warn!("Duplicate appointment id {} in list response, keeping first", appointment.id);
                }
                fresh
            })
            .collect();

        info!("Loaded {} appointments", self.appointments.len());
        Ok(self.appointments.len())
    }

    /// Validate and submit a draft; the record the server returns is stored.
    pub async fn create(
        &mut self,
        draft: &AppointmentDraft,
        now: DateTime<Utc>,
    ) -> Result<&Appointment, AppointmentError> {
        validate_draft(draft, now)?;

        let created = self.client.create_appointment(draft).await.map_err(|e| {
            error!("Error creating appointment: {}", e);
            AppointmentError::from(e)
        })?;

        info!("Appointment {} created", created.id);

        let pos = match self.position(&created.id) {
            Some(pos) => {
                warn!("Server returned existing appointment id {}, replacing it", created.id);
                self.appointments[pos] = created;
                pos
            }
            None => {
                self.appointments.push(created);
                self.appointments.len() - 1
            }
        };

        Ok(&self.appointments[pos])
    }

    /// Delete on the server, then drop the local record.
    pub async fn remove(&mut self, id: &str) -> Result<Appointment, AppointmentError> {
        if self.position(id).is_none() {
            return Err(AppointmentError::NotFound(id.to_string()));
        }

        self.client.delete_appointment(id).await.map_err(|e| {
            error!("Error deleting appointment {}: {}", id, e);
            AppointmentError::from(e)
        })?;

        let pos = self
            .position(id)
            .ok_or_else(|| AppointmentError::NotFound(id.to_string()))?;
        info!("Appointment {} deleted", id);
        Ok(self.appointments.remove(pos))
    }

    /// Mark an appointment completed. Already-completed records are returned
    /// untouched without contacting the server.
    pub async fn complete(&mut self, id: &str) -> Result<&Appointment, AppointmentError> {
        let pos = self
            .position(id)
            .ok_or_else(|| AppointmentError::NotFound(id.to_string()))?;

        let current = self.appointments[pos].status;
        if !self.lifecycle.can_complete(current) {
            debug!("Appointment {} already {}, nothing to do", id, current);
            return Ok(&self.appointments[pos]);
        }

        let updated = self.client.complete_appointment(id).await.map_err(|e| {
            error!("Error completing appointment {}: {}", id, e);
            AppointmentError::from(e)
        })?;

        if updated.id != id {
            error!("Status update for {} answered with record {}", id, updated.id);
            return Err(AppointmentError::Remote(RemoteError::Decode(format!(
                "status update for {} returned record {}",
                id, updated.id
            ))));
        }

        let pos = self
            .position(id)
            .ok_or_else(|| AppointmentError::NotFound(id.to_string()))?;
        info!("Appointment {} marked {}", id, updated.status);
        self.appointments[pos] = updated;

        Ok(&self.appointments[pos])
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn get(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|appointment| appointment.id == id)
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.appointments.iter().position(|appointment| appointment.id == id)
    }
}
