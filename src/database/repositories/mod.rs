mod customer;
mod employee;
mod permission;
mod position;

use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Executor;

use crate::config::Config;

/// Postgres-backed implementation of every repository trait.
#[derive(Clone)]
pub struct PgDatabase {
    pool: PgPool,
}

impl PgDatabase {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &Config) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .after_connect(|conn, _meta| {
                Box::pin(async move {
                    conn.execute("SET application_name = 'backoffice';").await?;
                    Ok(())
                })
            })
            .connect(&config.database_url)
            .await?;

        Ok(Self::new(pool))
    }

    /// Creates the tables this service owns. Customers, positions and
    /// employees are expected to exist already.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS permission_roles (
                id SERIAL PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                permissions JSONB NOT NULL,
                created_at TIMESTAMPTZ DEFAULT NOW(),
                updated_at TIMESTAMPTZ DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
