// libs/appointment-cell/src/services/filter.rs
use doctor_cell::DoctorDirectory;

use crate::models::Appointment;

/// Appointments whose patient name or resolved doctor name contains `query`,
/// ignoring case, in their original order. An empty query keeps everything.
pub fn filter<'a>(
    appointments: &'a [Appointment],
    directory: &DoctorDirectory,
    query: &str,
) -> Vec<&'a Appointment> {
    let needle = query.to_lowercase();

    appointments
        .iter()
        .filter(|appointment| matches_query(appointment, directory, &needle))
        .collect()
}

/// `needle` must already be lowercased.
pub fn matches_query(appointment: &Appointment, directory: &DoctorDirectory, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    if appointment.patient_name.to_lowercase().contains(needle) {
        return true;
    }

    // Unresolved doctors never match on name
    directory
        .find(&appointment.doctor_id)
        .is_some_and(|doctor| doctor.name.to_lowercase().contains(needle))
}
