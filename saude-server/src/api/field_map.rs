/// Static mapping between external (wire) field names and the internal
/// names carried by the entities. External names are the Portuguese
/// ones the API has always spoken; internal names are the Rust ones.
#[derive(Debug, Clone, Copy)]
pub struct FieldMap {
    pairs: &'static [(&'static str, &'static str)],
}

impl FieldMap {
    pub const fn new(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self { pairs }
    }

    /// (external, internal) pairs in serialization order.
    pub fn pairs(&self) -> &'static [(&'static str, &'static str)] {
        self.pairs
    }

    pub fn to_external(&self, internal: &str) -> Option<&'static str> {
        self.pairs
            .iter()
            .find(|(_, i)| *i == internal)
            .map(|(e, _)| *e)
    }

    pub fn to_internal(&self, external: &str) -> Option<&'static str> {
        self.pairs
            .iter()
            .find(|(e, _)| *e == external)
            .map(|(_, i)| *i)
    }
}

pub static HEALTH_CARE_WORKER_FIELDS: FieldMap = FieldMap::new(&[
    ("uuid", "uuid"),
    ("nome_legal", "legal_name"),
    ("nome_social", "preferred_name"),
    ("pronomes", "pronouns"),
    ("data_de_nascimento", "date_of_birth"),
    ("especializacao", "specialization"),
]);

pub static APPOINTMENT_FIELDS: FieldMap = FieldMap::new(&[
    ("uuid", "uuid"),
    ("profissional_uuid", "health_care_worker"),
    ("data", "date"),
    ("info", "info"),
]);
