//! Constraint names and validation messages shared by the storage and
//! API layers.
//!
//! The storage layer enforces these rules with schema constraints; the
//! API layer runs the same checks up front and re-uses the messages so
//! a constraint violation surfaced at commit time reads exactly like a
//! pre-check failure.

pub const APPOINTMENT_DATE_CONSTRAINT_NAME: &str = "appointment_date_must_be_in_the_future";

pub const APPOINTMENT_DATE_ERROR_MESSAGE: &str =
    "Appointment can only be scheduled for a date later than today";

pub const UNIQUE_APPOINTMENT_DATE_HEALTH_CARE_WORKER_CONSTRAINT_NAME: &str =
    "unique_appointment_date_health_care_worker";

pub const UNIQUE_APPOINTMENT_DATE_HEALTH_CARE_WORKER_ERROR_MESSAGE: &str =
    "Appointment already exists for this date and worker combination";
