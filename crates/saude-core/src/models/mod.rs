pub mod appointment;
pub mod health_care_worker;
pub mod tracked;
