pub mod constants;
pub mod models;

pub use models::appointment::Appointment;
pub use models::health_care_worker::HealthCareWorker;
pub use models::tracked::Tracked;
