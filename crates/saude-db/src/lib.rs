pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::appointment_repository::AppointmentRepository;
pub use repositories::health_care_worker_repository::HealthCareWorkerRepository;
