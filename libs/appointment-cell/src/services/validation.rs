// libs/appointment-cell/src/services/validation.rs
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use tracing::debug;

use crate::models::{AppointmentDraft, ValidationError};

static PATIENT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z\s]{3,}$").expect("patient name pattern compiles")
});

/// Letters and whitespace only, at least three characters once trimmed.
pub fn validate_patient_name(name: &str) -> bool {
    PATIENT_NAME.is_match(name.trim())
}

/// Bookings must be strictly after `now`.
pub fn validate_future_date(instant: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    instant > now
}

/// Check a draft before it is submitted, reporting the first problem found.
pub fn validate_draft(draft: &AppointmentDraft, now: DateTime<Utc>) -> Result<(), ValidationError> {
    if !validate_patient_name(&draft.patient_name) {
        debug!("Rejected draft: invalid patient name");
        return Err(ValidationError::InvalidPatientName);
    }

    if draft.doctor_id.trim().is_empty() {
        debug!("Rejected draft: no doctor selected");
        return Err(ValidationError::MissingDoctor);
    }

    if !validate_future_date(draft.appointment_date, now) {
        debug!("Rejected draft: {} is not after {}", draft.appointment_date, now);
        return Err(ValidationError::DateNotInFuture);
    }

    Ok(())
}
