#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;

use appointment_cell::{Appointment, AppointmentDraft, AppointmentStatus, RemoteSyncClient};
use doctor_cell::{Doctor, DoctorSource};
use shared_models::error::RemoteError;
use shared_utils::test_utils::{days_from, test_now};

mock! {
    pub Remote {}

    #[async_trait]
    impl DoctorSource for Remote {
        async fn list_doctors(&self) -> Result<Vec<Doctor>, RemoteError>;
    }

    #[async_trait]
    impl RemoteSyncClient for Remote {
        async fn list_appointments(&self) -> Result<Vec<Appointment>, RemoteError>;
        async fn create_appointment(&self, draft: &AppointmentDraft) -> Result<Appointment, RemoteError>;
        async fn delete_appointment(&self, id: &str) -> Result<(), RemoteError>;
        async fn complete_appointment(&self, id: &str) -> Result<Appointment, RemoteError>;
    }
}

pub fn now() -> DateTime<Utc> {
    test_now()
}

pub fn tomorrow() -> DateTime<Utc> {
    days_from(test_now(), 1)
}

pub fn appointment(id: &str, patient: &str, doctor_id: &str, status: AppointmentStatus) -> Appointment {
    Appointment {
        id: id.to_string(),
        patient_name: patient.to_string(),
        doctor_id: doctor_id.to_string(),
        appointment_date: tomorrow(),
        notes: None,
        status,
    }
}

pub fn scheduled(id: &str, patient: &str, doctor_id: &str) -> Appointment {
    appointment(id, patient, doctor_id, AppointmentStatus::Scheduled)
}

/// The server's answer to a create: the draft's fields plus an id.
pub fn accepted(id: &str, draft: &AppointmentDraft) -> Appointment {
    Appointment {
        id: id.to_string(),
        patient_name: draft.patient_name.clone(),
        doctor_id: draft.doctor_id.clone(),
        appointment_date: draft.appointment_date,
        notes: Some(draft.notes.clone()),
        status: draft.status(),
    }
}

pub fn doctors() -> Vec<Doctor> {
    vec![
        Doctor::new("d1", "Dr. A", "Cardio"),
        Doctor::new("d2", "Dr. Bone", "Orthopedics"),
    ]
}

pub fn transport_error() -> RemoteError {
    RemoteError::Transport("connection reset".to_string())
}
