use async_trait::async_trait;

use super::PgDatabase;
use crate::database::{DbResult, PermissionRole, PermissionRoleData, PermissionRoleRepository};

#[async_trait]
impl PermissionRoleRepository for PgDatabase {
    async fn list_roles(&self) -> DbResult<Vec<PermissionRole>> {
        sqlx::query_as::<_, PermissionRole>(
            "SELECT id, name, permissions FROM permission_roles ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn find_role(&self, id: i32) -> DbResult<Option<PermissionRole>> {
        sqlx::query_as::<_, PermissionRole>(
            "SELECT id, name, permissions FROM permission_roles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn create_role(&self, data: &PermissionRoleData) -> DbResult<i32> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO permission_roles (name, permissions) VALUES ($1, $2) RETURNING id",
        )
        .bind(&data.name)
        .bind(&data.permissions)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created permission role {} ({})", id, data.name);
        Ok(id)
    }

    async fn update_role(&self, id: i32, data: &PermissionRoleData) -> DbResult<()> {
        sqlx::query(
            r#"
            UPDATE permission_roles
            SET name = $1, permissions = $2, updated_at = NOW()
            WHERE id = $3
            "#,
        )
        .bind(&data.name)
        .bind(&data.permissions)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_role(&self, id: i32) -> DbResult<()> {
        sqlx::query("DELETE FROM permission_roles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
