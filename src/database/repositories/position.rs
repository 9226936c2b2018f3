use async_trait::async_trait;

use super::PgDatabase;
use crate::database::{DbResult, Position, PositionRepository};

#[async_trait]
impl PositionRepository for PgDatabase {
    async fn list_positions(&self) -> DbResult<Vec<Position>> {
        sqlx::query_as::<_, Position>("SELECT id, name FROM positions ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    async fn find_position(&self, id: &str) -> DbResult<Option<Position>> {
        sqlx::query_as::<_, Position>("SELECT id, name FROM positions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create_position(&self, position: &Position) -> DbResult<()> {
        sqlx::query("INSERT INTO positions (id, name) VALUES ($1, $2)")
            .bind(&position.id)
            .bind(&position.name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update_position(&self, id: &str, name: &str) -> DbResult<()> {
        sqlx::query("UPDATE positions SET name = $1 WHERE id = $2")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    // Employees referencing the position are left alone.
    async fn delete_position(&self, id: &str) -> DbResult<()> {
        sqlx::query("DELETE FROM positions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
