use sqlx::SqlitePool;

/// Shared state handed to every handler. Requests are independent;
/// isolation and atomicity come from the database, so the pool is all
/// the state there is.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
