use serde::Serialize;
use serde_json::Value;

/// List responses wrap the collection in a `data` key.
#[derive(Debug, Serialize)]
pub struct ListEnvelope {
    pub data: Vec<Value>,
}

impl ListEnvelope {
    pub fn new(data: Vec<Value>) -> Self {
        Self { data }
    }
}
