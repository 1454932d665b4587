use sea_orm::DatabaseConnection;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}
