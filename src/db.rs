//! Database connection setup

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

/// Connect to the database and make sure the operations table exists.
pub async fn connect(options: impl Into<ConnectOptions>) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;

    tracing::info!("Running migrations...");
    migration::Migrator::up(&db, None).await?;

    Ok(db)
}
