pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::envelope::ListEnvelope;
pub use api::error::{ApiError, ApiResult, ValidationErrors};
pub use config::Config;
pub use error::ServerError;
pub use routes::build_router;
pub use state::AppState;
