use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Creates a pooled database connection
///
/// # Arguments
/// * `database_url` - The connection string of the store
/// * `max_connections` - Upper bound on the size of the pool
pub async fn create_connection(
    database_url: &str,
    max_connections: u32,
) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options
        .max_connections(max_connections)
        .sqlx_logging(false);

    Database::connect(options).await
}
