// libs/appointment-cell/src/services/lifecycle.rs
use tracing::debug;

use crate::models::AppointmentStatus;

#[derive(Debug, Default, Clone, Copy)]
pub struct AppointmentLifecycleService;

impl AppointmentLifecycleService {
    pub fn new() -> Self {
        Self
    }

    /// Get all valid next statuses for a given current status
    pub fn get_valid_transitions(&self, current_status: AppointmentStatus) -> Vec<AppointmentStatus> {
        match current_status {
            AppointmentStatus::Scheduled => vec![AppointmentStatus::Completed],
            // Terminal
            AppointmentStatus::Completed => vec![],
        }
    }

    /// Whether the "mark as completed" action should be offered at all.
    pub fn can_complete(&self, current_status: AppointmentStatus) -> bool {
        let allowed = self
            .get_valid_transitions(current_status)
            .contains(&AppointmentStatus::Completed);
        debug!("Completion from {} allowed: {}", current_status, allowed);
        allowed
    }
}
