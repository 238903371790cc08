pub mod directory;

pub use directory::{DoctorDirectory, DoctorSource, UNKNOWN_DOCTOR};
