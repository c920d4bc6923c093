//! Wire representation of health-care workers.
//!
//! External payloads use the Portuguese field names; the mapping to
//! the entity's fields lives in [`HEALTH_CARE_WORKER_FIELDS`]. `uuid`
//! is read-only and unknown keys are ignored on writes.

use crate::api::error::ValidationErrors;
use crate::api::field_map::HEALTH_CARE_WORKER_FIELDS;
use crate::api::fields::{NOT_A_DICT_MESSAGE, REQUIRED_MESSAGE, decode_date, decode_string};

use saude_core::HealthCareWorker;

use serde_json::{Map, Value};

pub fn render(worker: &HealthCareWorker) -> Value {
    let mut object = Map::new();

    for (external, internal) in HEALTH_CARE_WORKER_FIELDS.pairs() {
        let value = match *internal {
            "uuid" => worker.uuid().to_string(),
            "legal_name" => worker.legal_name.clone(),
            "preferred_name" => worker.preferred_name.clone(),
            "pronouns" => worker.pronouns.clone(),
            "date_of_birth" => worker.date_of_birth.to_string(),
            "specialization" => worker.specialization.clone(),
            _ => continue,
        };
        object.insert((*external).to_string(), Value::String(value));
    }

    Value::Object(object)
}

/// Decode a create payload. Every writable field must be present.
pub fn deserialize_new(body: &Value) -> Result<HealthCareWorker, ValidationErrors> {
    let object = as_object(body)?;

    let mut errors = ValidationErrors::new();

    let legal_name = decode_field(object, "nome_legal", false, &mut errors);
    let preferred_name = decode_field(object, "nome_social", true, &mut errors);
    let pronouns = decode_field(object, "pronomes", false, &mut errors);
    let specialization = decode_field(object, "especializacao", false, &mut errors);

    let date_of_birth = match object.get("data_de_nascimento") {
        Some(value) => decode_date(value, "data_de_nascimento", &mut errors),
        None => {
            errors.add("data_de_nascimento", REQUIRED_MESSAGE);
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    match (
        legal_name,
        preferred_name,
        pronouns,
        date_of_birth,
        specialization,
    ) {
        (
            Some(legal_name),
            Some(preferred_name),
            Some(pronouns),
            Some(date_of_birth),
            Some(specialization),
        ) => Ok(HealthCareWorker::new(
            legal_name,
            preferred_name,
            pronouns,
            date_of_birth,
            specialization,
        )),
        _ => Err(errors),
    }
}

/// Decode an update payload over an existing worker. With `partial`
/// set, absent fields keep their stored values; otherwise every
/// writable field must be present. `modified` is left to the caller.
pub fn deserialize_update(
    body: &Value,
    base: &HealthCareWorker,
    partial: bool,
) -> Result<HealthCareWorker, ValidationErrors> {
    let object = as_object(body)?;

    let mut errors = ValidationErrors::new();
    let mut worker = base.clone();

    if let Some(value) = decode_update_field(object, "nome_legal", false, partial, &mut errors) {
        worker.legal_name = value;
    }
    if let Some(value) = decode_update_field(object, "nome_social", true, partial, &mut errors) {
        worker.preferred_name = value;
    }
    if let Some(value) = decode_update_field(object, "pronomes", false, partial, &mut errors) {
        worker.pronouns = value;
    }
    if let Some(value) = decode_update_field(object, "especializacao", false, partial, &mut errors)
    {
        worker.specialization = value;
    }

    match object.get("data_de_nascimento") {
        Some(value) => {
            if let Some(date) = decode_date(value, "data_de_nascimento", &mut errors) {
                worker.date_of_birth = date;
            }
        }
        None if !partial => errors.add("data_de_nascimento", REQUIRED_MESSAGE),
        None => {}
    }

    if errors.is_empty() {
        Ok(worker)
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

fn decode_field(
    object: &Map<String, Value>,
    field: &str,
    allow_blank: bool,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match object.get(field) {
        Some(value) => decode_string(value, field, allow_blank, errors),
        None => {
            errors.add(field, REQUIRED_MESSAGE);
            None
        }
    }
}

fn decode_update_field(
    object: &Map<String, Value>,
    field: &str,
    allow_blank: bool,
    partial: bool,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match object.get(field) {
        Some(value) => decode_string(value, field, allow_blank, errors),
        None => {
            if !partial {
                errors.add(field, REQUIRED_MESSAGE);
            }
            None
        }
    }
}
