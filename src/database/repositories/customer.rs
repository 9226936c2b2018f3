use async_trait::async_trait;

use super::PgDatabase;
use crate::database::{Customer, CustomerData, CustomerRepository, DbResult};

#[async_trait]
impl CustomerRepository for PgDatabase {
    async fn list_customers(&self) -> DbResult<Vec<Customer>> {
        sqlx::query_as::<_, Customer>(
            "SELECT id, full_name, phone, email FROM customers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn find_customer(&self, id: i32) -> DbResult<Option<Customer>> {
        sqlx::query_as::<_, Customer>(
            "SELECT id, full_name, phone, email FROM customers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn create_customer(&self, data: &CustomerData) -> DbResult<i32> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO customers (full_name, phone, email) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&data.name)
        .bind(&data.phone)
        .bind(&data.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update_customer(&self, id: i32, data: &CustomerData) -> DbResult<()> {
        sqlx::query("UPDATE customers SET full_name = $1, phone = $2, email = $3 WHERE id = $4")
            .bind(&data.name)
            .bind(&data.phone)
            .bind(&data.email)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_customer(&self, id: i32) -> DbResult<()> {
        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
