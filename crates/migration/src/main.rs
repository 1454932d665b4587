use sea_orm_migration::prelude::*;

/// Runs the migration CLI (`up`, `down`, `status`, `fresh`, ...) against `DATABASE_URL`
#[async_std::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
