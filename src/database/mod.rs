// Persistence gateway.
// Repository traits are what handlers see; `PgDatabase` implements them over a sqlx pool.

pub mod models;
pub mod repositories;

use async_trait::async_trait;

pub use models::customer::{Customer, CustomerData};
pub use models::employee::{Employee, EmployeeCredentials, EmployeeData};
pub use models::permission::{PermissionRole, PermissionRoleData};
pub use models::position::Position;
pub use repositories::PgDatabase;

pub type DbResult<T> = Result<T, sqlx::Error>;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn list_customers(&self) -> DbResult<Vec<Customer>>;
    async fn find_customer(&self, id: i32) -> DbResult<Option<Customer>>;
    /// Returns the id assigned by the store.
    async fn create_customer(&self, data: &CustomerData) -> DbResult<i32>;
    async fn update_customer(&self, id: i32, data: &CustomerData) -> DbResult<()>;
    async fn delete_customer(&self, id: i32) -> DbResult<()>;
}

#[async_trait]
pub trait PositionRepository: Send + Sync {
    async fn list_positions(&self) -> DbResult<Vec<Position>>;
    async fn find_position(&self, id: &str) -> DbResult<Option<Position>>;
    async fn create_position(&self, position: &Position) -> DbResult<()>;
    async fn update_position(&self, id: &str, name: &str) -> DbResult<()>;
    async fn delete_position(&self, id: &str) -> DbResult<()>;
}

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn list_employees(&self) -> DbResult<Vec<Employee>>;
    async fn find_employee(&self, id: &str) -> DbResult<Option<Employee>>;
    /// Case-insensitive lookup used by login.
    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> DbResult<Option<EmployeeCredentials>>;
    async fn create_employee(&self, data: &EmployeeData) -> DbResult<()>;
    /// Replaces every mutable column of `id`. `data.id` is ignored and a `None`
    /// image keeps the stored one.
    async fn update_employee(&self, id: &str, data: &EmployeeData) -> DbResult<()>;
    async fn delete_employee(&self, id: &str) -> DbResult<()>;
}

#[async_trait]
pub trait PermissionRoleRepository: Send + Sync {
    async fn list_roles(&self) -> DbResult<Vec<PermissionRole>>;
    async fn find_role(&self, id: i32) -> DbResult<Option<PermissionRole>>;
    async fn create_role(&self, data: &PermissionRoleData) -> DbResult<i32>;
    async fn update_role(&self, id: i32, data: &PermissionRoleData) -> DbResult<()>;
    async fn delete_role(&self, id: i32) -> DbResult<()>;
}

/// Everything the HTTP layer needs from storage.
pub trait Database:
    CustomerRepository + PositionRepository + EmployeeRepository + PermissionRoleRepository
{
}

impl<T> Database for T where
    T: CustomerRepository + PositionRepository + EmployeeRepository + PermissionRoleRepository
{
}
