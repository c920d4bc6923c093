//! Wire representation of appointments.
//!
//! `profissional_uuid` carries the referenced worker's external uuid;
//! whether that worker actually exists is checked by the handlers
//! against the store. The date rule (strictly after today) is applied
//! here, on the provided value only.

use crate::api::error::ValidationErrors;
use crate::api::field_map::APPOINTMENT_FIELDS;
use crate::api::fields::{
    NOT_A_DICT_MESSAGE, NULL_MESSAGE, REQUIRED_MESSAGE, decode_date, decode_string,
};

use saude_core::Appointment;
use saude_core::constants::APPOINTMENT_DATE_ERROR_MESSAGE;

use chrono::{NaiveDate, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

pub const INVALID_WORKER_REF_MESSAGE: &str = "Invalid value.";

/// Message for a worker reference that matches nothing in the store.
pub fn missing_worker_message(value: &str) -> String {
    format!("Object with uuid={value} does not exist.")
}

pub fn render(appointment: &Appointment) -> Value {
    let mut object = Map::new();

    for (external, internal) in APPOINTMENT_FIELDS.pairs() {
        let value = match *internal {
            "uuid" => appointment.uuid().to_string(),
            "health_care_worker" => appointment.health_care_worker.to_string(),
            "date" => appointment.date.to_string(),
            "info" => appointment.info.clone(),
            _ => continue,
        };
        object.insert((*external).to_string(), Value::String(value));
    }

    Value::Object(object)
}

/// Validated write payload, before the worker reference has been
/// resolved against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentWrite {
    pub health_care_worker: Uuid,
    pub date: NaiveDate,
    pub info: String,
}

/// Decode a create payload. Every writable field must be present.
pub fn deserialize_new(body: &Value) -> Result<AppointmentWrite, ValidationErrors> {
    let object = as_object(body)?;

    let mut errors = ValidationErrors::new();

    let health_care_worker = match object.get("profissional_uuid") {
        Some(value) => decode_worker_ref(value, &mut errors),
        None => {
            errors.add("profissional_uuid", REQUIRED_MESSAGE);
            None
        }
    };

    let date = match object.get("data") {
        Some(value) => decode_future_date(value, &mut errors),
        None => {
            errors.add("data", REQUIRED_MESSAGE);
            None
        }
    };

    let info = match object.get("info") {
        Some(value) => decode_string(value, "info", false, &mut errors),
        None => {
            errors.add("info", REQUIRED_MESSAGE);
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    match (health_care_worker, date, info) {
        (Some(health_care_worker), Some(date), Some(info)) => Ok(AppointmentWrite {
            health_care_worker,
            date,
            info,
        }),
        _ => Err(errors),
    }
}

/// Decode an update payload over an existing appointment. With
/// `partial` set, absent fields keep their stored values; otherwise
/// every writable field must be present. The date rule applies only to
/// a provided date. `modified` is left to the caller.
pub fn deserialize_update(
    body: &Value,
    base: &Appointment,
    partial: bool,
) -> Result<Appointment, ValidationErrors> {
    let object = as_object(body)?;

    let mut errors = ValidationErrors::new();
    let mut appointment = base.clone();

    match object.get("profissional_uuid") {
        Some(value) => {
            if let Some(worker) = decode_worker_ref(value, &mut errors) {
                appointment.health_care_worker = worker;
            }
        }
        None if !partial => errors.add("profissional_uuid", REQUIRED_MESSAGE),
        None => {}
    }

    match object.get("data") {
        Some(value) => {
            if let Some(date) = decode_future_date(value, &mut errors) {
                appointment.date = date;
            }
        }
        None if !partial => errors.add("data", REQUIRED_MESSAGE),
        None => {}
    }

    match object.get("info") {
        Some(value) => {
            if let Some(info) = decode_string(value, "info", false, &mut errors) {
                appointment.info = info;
            }
        }
        None if !partial => errors.add("info", REQUIRED_MESSAGE),
        None => {}
    }

    if errors.is_empty() {
        Ok(appointment)
    } else {
        Err(errors)
    }
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, ValidationErrors> {
    body.as_object().ok_or_else(|| {
        let mut errors = ValidationErrors::new();
        errors.add_non_field(NOT_A_DICT_MESSAGE);
        errors
    })
}

fn decode_worker_ref(value: &Value, errors: &mut ValidationErrors) -> Option<Uuid> {
    match value {
        Value::Null => {
            errors.add("profissional_uuid", NULL_MESSAGE);
            None
        }
        Value::String(s) => match s.parse::<Uuid>() {
            Ok(uuid) => Some(uuid),
            Err(_) => {
                // A malformed uuid cannot name any stored worker.
                errors.add("profissional_uuid", missing_worker_message(s));
                None
            }
        },
        _ => {
            errors.add("profissional_uuid", INVALID_WORKER_REF_MESSAGE);
            None
        }
    }
}

fn decode_future_date(value: &Value, errors: &mut ValidationErrors) -> Option<NaiveDate> {
    let date = decode_date(value, "data", errors)?;

    if date <= Utc::now().date_naive() {
        errors.add("data", APPOINTMENT_DATE_ERROR_MESSAGE);
        return None;
    }

    Some(date)
}
