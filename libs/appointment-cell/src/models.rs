// libs/appointment-cell/src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use shared_models::error::RemoteError;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// An appointment as the clinic API stores it. The identifier is always the
/// one the server assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(rename = "_id")]
    pub id: String,
    pub patient_name: String,
    #[serde(default)]
    pub doctor_id: String,
    pub appointment_date: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn is_completed(&self) -> bool {
        self.status == AppointmentStatus::Completed
    }

    /// Notes as shown on an appointment card.
    pub fn notes_display(&self) -> &str {
        match self.notes.as_deref() {
            Some(notes) if !notes.trim().is_empty() => notes,
            _ => "-",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "Scheduled"),
            AppointmentStatus::Completed => write!(f, "Completed"),
        }
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

/// A booking that has not been accepted by the server yet, so it carries no
/// identifier. Its status is always `Scheduled`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDraft {
    pub patient_name: String,
    pub doctor_id: String,
    pub appointment_date: DateTime<Utc>,
    pub notes: String,
    status: AppointmentStatus,
}

impl AppointmentDraft {
    pub fn new(
        patient_name: impl Into<String>,
        doctor_id: impl Into<String>,
        appointment_date: DateTime<Utc>,
    ) -> Self {
        Self {
            patient_name: patient_name.into(),
            doctor_id: doctor_id.into(),
            appointment_date,
            notes: String::new(),
            status: AppointmentStatus::Scheduled,
        }
    }

    /// An empty form, dated at `now`, optionally with a doctor already chosen.
    pub fn blank(doctor_id: Option<&str>, now: DateTime<Utc>) -> Self {
        Self::new("", doctor_id.unwrap_or_default(), now)
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn status(&self) -> AppointmentStatus {
        self.status
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: AppointmentStatus,
}

impl StatusUpdateRequest {
    pub fn completed() -> Self {
        Self { status: AppointmentStatus::Completed }
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

pub const GENERIC_FAILURE_NOTICE: &str =
    "Something went wrong while contacting the clinic. Please try again.";

/// Reasons a draft is refused before anything is sent to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Patient name must be at least 3 letters long.")]
    InvalidPatientName,

    #[error("Please select a doctor.")]
    MissingDoctor,

    #[error("Appointment date must be in the future.")]
    DateNotInFuture,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppointmentError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Remote store error: {0}")]
    Remote(#[from] RemoteError),

    #[error("Appointment not found: {0}")]
    NotFound(String),
}

impl AppointmentError {
    /// Text suitable for showing to the person using the front end.
    /// Validation failures keep their specific reason; remote failures are
    /// reported generically.
    pub fn user_message(&self) -> String {
        match self {
            AppointmentError::Validation(reason) => reason.to_string(),
            AppointmentError::Remote(_) => GENERIC_FAILURE_NOTICE.to_string(),
            AppointmentError::NotFound(_) => "That appointment is no longer listed.".to_string(),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, AppointmentError::Remote(_))
    }
}
