//! Connection pool and schema bootstrap

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

use crate::config::Config;
use crate::entity::{carts, items};

/// Open the shared connection pool described by `config`
pub async fn connect(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(false);

    tracing::info!(max_connections = config.max_connections, "Connecting to database...");
    let db = Database::connect(options).await?;
    tracing::info!("Database connected");

    Ok(db)
}

/// Create the `items` and `carts` tables if they do not exist yet
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    // carts references items, so items goes first
    let mut create_items = schema.create_table_from_entity(items::Entity);
    create_items.if_not_exists();
    db.execute(backend.build(&create_items)).await?;

    let mut create_carts = schema.create_table_from_entity(carts::Entity);
    create_carts.if_not_exists();
    db.execute(backend.build(&create_carts)).await?;

    Ok(())
}
