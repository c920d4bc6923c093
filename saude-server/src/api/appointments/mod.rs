mod appointments;
mod list_appointments_query;
pub mod serializer;

pub use appointments::*;
pub use list_appointments_query::ListAppointmentsQuery;
