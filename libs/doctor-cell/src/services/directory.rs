use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use shared_models::error::RemoteError;

use crate::models::Doctor;

/// Shown in place of a doctor reference the directory cannot resolve.
pub const UNKNOWN_DOCTOR: &str = "Unknown";

/// Anything able to hand over the full doctor list.
#[async_trait]
pub trait DoctorSource: Send + Sync {
    async fn list_doctors(&self) -> Result<Vec<Doctor>, RemoteError>;
}

/// Session-wide cache of doctors, indexed by identifier.
#[derive(Debug, Default, Clone)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
    index: HashMap<String, usize>,
}

impl DoctorDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch every doctor and replace the cache. On failure the cache is
    /// left exactly as it was.
    pub async fn load<S>(&mut self, source: &S) -> Result<usize, RemoteError>
    where
        S: DoctorSource + ?Sized,
    {
        debug!("Loading doctor directory");

        match source.list_doctors().await {
            Ok(doctors) => {
                let count = self.replace(doctors);
                info!("Doctor directory loaded with {} doctors", count);
                Ok(count)
            }
            Err(e) => {
                error!("Error fetching doctors: {}", e);
                Err(e)
            }
        }
    }

    /// Swap in a new doctor list and rebuild the index. A repeated identifier
    /// keeps its first occurrence.
    pub fn replace(&mut self, doctors: Vec<Doctor>) -> usize {
        let mut kept = Vec::with_capacity(doctors.len());
        let mut index = HashMap::with_capacity(doctors.len());

        for doctor in doctors {
            if index.contains_key(&doctor.id) {
                warn!("Duplicate doctor id {} in directory response, keeping first", doctor.id);
                continue;
            }
            index.insert(doctor.id.clone(), kept.len());
            kept.push(doctor);
        }

        self.doctors = kept;
        self.index = index;
        self.doctors.len()
    }

    pub fn find(&self, id: &str) -> Option<&Doctor> {
        self.index.get(id).and_then(|&pos| self.doctors.get(pos))
    }

    pub fn display_name(&self, id: &str) -> &str {
        self.find(id).map_or(UNKNOWN_DOCTOR, |doctor| doctor.name.as_str())
    }

    pub fn is_resolved(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Doctors in the order the server returned them.
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }
}
