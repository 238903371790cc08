pub mod board;
pub mod filter;
pub mod lifecycle;
pub mod store;
pub mod sync;
pub mod validation;

pub use board::AppointmentBoard;
pub use filter::filter;
pub use lifecycle::AppointmentLifecycleService;
pub use store::AppointmentStore;
pub use sync::{HttpSyncClient, RemoteSyncClient};
pub use validation::{validate_draft, validate_future_date, validate_patient_name};
