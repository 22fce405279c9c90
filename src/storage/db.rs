use std::time::Duration;

use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::config::DatabaseConfig;
use crate::constants::IN_MEMORY_DATABASE_URL;
use crate::entities::student;

/// Database handle for student records
#[derive(Clone)]
pub struct LocalStorage {
    pub conn: DatabaseConnection,
}

impl LocalStorage {
    /// Connect to the configured database and make sure the schema exists
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .sqlx_logging(config.sqlx_logging);

        let conn = Database::connect(options)
            .await
            .with_context(|| format!("Failed to connect to database: {}", config.url))?;

        let storage = LocalStorage { conn };
        storage.init_schema().await?;

        log::info!("Connected to database {}", config.url);
        Ok(storage)
    }

    /// Private in-memory database, used by tests and dry runs
    pub async fn in_memory() -> Result<Self> {
        // Every SQLite in-memory connection is its own database, so keep one.
        let config = DatabaseConfig {
            url: IN_MEMORY_DATABASE_URL.to_string(),
            min_connections: 1,
            max_connections: 1,
            ..DatabaseConfig::default()
        };
        Self::new(&config).await
    }

    /// Create the `students` table from the entity definition if it is missing
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut create_students = schema.create_table_from_entity(student::Entity);
        create_students.if_not_exists();

        self.conn
            .execute(backend.build(&create_students))
            .await
            .context("Failed to create students table")?;

        Ok(())
    }

    /// Check if the database has any student rows, deleted ones included
    pub async fn has_data(&self) -> Result<bool> {
        use sea_orm::{EntityTrait, PaginatorTrait};

        let count = student::Entity::find().count(&self.conn).await?;
        Ok(count > 0)
    }
}
