use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

/// Shared application state passed to every handler via axum `State`.
///
/// Repositories borrow a per-request transaction, so the state only carries
/// the connection pool.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
