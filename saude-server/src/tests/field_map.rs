use crate::api::field_map::{APPOINTMENT_FIELDS, HEALTH_CARE_WORKER_FIELDS};

#[test]
fn worker_field_map_is_bidirectional() {
    for (external, internal) in HEALTH_CARE_WORKER_FIELDS.pairs() {
        assert_eq!(HEALTH_CARE_WORKER_FIELDS.to_internal(external), Some(*internal));
        assert_eq!(HEALTH_CARE_WORKER_FIELDS.to_external(internal), Some(*external));
    }
}

#[test]
fn worker_field_map_translates_portuguese_names() {
    assert_eq!(
        HEALTH_CARE_WORKER_FIELDS.to_internal("nome_legal"),
        Some("legal_name")
    );
    assert_eq!(
        HEALTH_CARE_WORKER_FIELDS.to_internal("data_de_nascimento"),
        Some("date_of_birth")
    );
    assert_eq!(
        HEALTH_CARE_WORKER_FIELDS.to_external("specialization"),
        Some("especializacao")
    );
}

#[test]
fn appointment_field_map_translates_portuguese_names() {
    assert_eq!(
        APPOINTMENT_FIELDS.to_internal("profissional_uuid"),
        Some("health_care_worker")
    );
    assert_eq!(APPOINTMENT_FIELDS.to_internal("data"), Some("date"));
    assert_eq!(APPOINTMENT_FIELDS.to_external("info"), Some("info"));
}

#[test]
fn unknown_names_do_not_map() {
    assert_eq!(HEALTH_CARE_WORKER_FIELDS.to_internal("legal_name"), None);
    assert_eq!(APPOINTMENT_FIELDS.to_external("id"), None);
}
