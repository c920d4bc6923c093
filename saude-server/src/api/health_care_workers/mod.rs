mod health_care_workers;
pub mod serializer;

pub use health_care_workers::*;
