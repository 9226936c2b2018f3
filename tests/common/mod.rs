#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use backoffice::{
    AppState,
    config::Config,
    create_router,
    database::{
        Customer, CustomerData, CustomerRepository, DbResult, Employee, EmployeeCredentials,
        EmployeeData, EmployeeRepository, PermissionRole, PermissionRoleData,
        PermissionRoleRepository, Position, PositionRepository,
    },
};
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const JWT_SECRET: &str = "integration-secret";
pub const BOUNDARY: &str = "----backoffice-test-boundary";

/// In-memory stand-in for Postgres with the same observable behaviour:
/// ordered listings, serial ids, unique keys, no-op updates/deletes of
/// missing rows, and COALESCE on employee images.
#[derive(Default)]
pub struct MemoryDatabase {
    customers: Mutex<BTreeMap<i32, Customer>>,
    next_customer_id: Mutex<i32>,
    positions: Mutex<BTreeMap<String, Position>>,
    employees: Mutex<BTreeMap<String, Employee>>,
    roles: Mutex<BTreeMap<i32, PermissionRole>>,
    next_role_id: Mutex<i32>,
}

fn duplicate(what: &str) -> sqlx::Error {
    sqlx::Error::Protocol(format!(
        "duplicate key value violates unique constraint \"{}_pkey\"",
        what
    ))
}

fn employee_row(data: &EmployeeData, created_at: chrono::DateTime<Utc>) -> Employee {
    Employee {
        id: data.id.clone(),
        prefix: data.prefix.clone(),
        first_name: data.first_name.clone(),
        last_name: data.last_name.clone(),
        nickname: data.nickname.clone(),
        position_id: data.position_id.clone(),
        color: data.color.clone(),
        salary: data.salary,
        pay_date: data.pay_date,
        has_social_security: data.has_social_security,
        social_security_id: data.social_security_id.clone(),
        tax_deduction: data.tax_deduction,
        hourly_rate: data.hourly_rate,
        overtime_rate: data.overtime_rate,
        leave_personal: data.leave_personal,
        leave_vacation: data.leave_vacation,
        leave_sick: data.leave_sick,
        email: data.email.clone(),
        password_hash: data.password_hash.clone(),
        status: data.status,
        payment_channel: data.payment_channel.clone(),
        account_type: data.account_type.clone(),
        bank_name: data.bank_name.clone(),
        account_number: data.account_number.clone(),
        bank_branch: data.bank_branch.clone(),
        image_url: data.image_url.clone(),
        created_at,
        updated_at: Utc::now(),
    }
}

impl MemoryDatabase {
    pub fn employee(&self, id: &str) -> Option<Employee> {
        self.employees.lock().unwrap().get(id).cloned()
    }

    pub fn insert_employee(&self, data: EmployeeData) {
        let row = employee_row(&data, Utc::now());
        self.employees.lock().unwrap().insert(data.id.clone(), row);
    }
}

#[async_trait]
impl CustomerRepository for MemoryDatabase {
    async fn list_customers(&self) -> DbResult<Vec<Customer>> {
        Ok(self.customers.lock().unwrap().values().cloned().collect())
    }

    async fn find_customer(&self, id: i32) -> DbResult<Option<Customer>> {
        Ok(self.customers.lock().unwrap().get(&id).cloned())
    }

    async fn create_customer(&self, data: &CustomerData) -> DbResult<i32> {
        let mut next = self.next_customer_id.lock().unwrap();
        *next += 1;
        let id = *next;
        self.customers.lock().unwrap().insert(
            id,
            Customer {
                id,
                name: data.name.clone(),
                phone: data.phone.clone(),
                email: data.email.clone(),
            },
        );
        Ok(id)
    }

    async fn update_customer(&self, id: i32, data: &CustomerData) -> DbResult<()> {
        if let Some(customer) = self.customers.lock().unwrap().get_mut(&id) {
            customer.name = data.name.clone();
            customer.phone = data.phone.clone();
            customer.email = data.email.clone();
        }
        Ok(())
    }

    async fn delete_customer(&self, id: i32) -> DbResult<()> {
        self.customers.lock().unwrap().remove(&id);
        Ok(())
    }
}

#[async_trait]
impl PositionRepository for MemoryDatabase {
    async fn list_positions(&self) -> DbResult<Vec<Position>> {
        Ok(self.positions.lock().unwrap().values().cloned().collect())
    }

    async fn find_position(&self, id: &str) -> DbResult<Option<Position>> {
        Ok(self.positions.lock().unwrap().get(id).cloned())
    }

    async fn create_position(&self, position: &Position) -> DbResult<()> {
        let mut positions = self.positions.lock().unwrap();
        if positions.contains_key(&position.id) {
            return Err(duplicate("positions"));
        }
        positions.insert(position.id.clone(), position.clone());
        Ok(())
    }

    async fn update_position(&self, id: &str, name: &str) -> DbResult<()> {
        if let Some(position) = self.positions.lock().unwrap().get_mut(id) {
            position.name = name.to_string();
        }
        Ok(())
    }

    async fn delete_position(&self, id: &str) -> DbResult<()> {
        self.positions.lock().unwrap().remove(id);
        Ok(())
    }
}

#[async_trait]
impl EmployeeRepository for MemoryDatabase {
    async fn list_employees(&self) -> DbResult<Vec<Employee>> {
        Ok(self.employees.lock().unwrap().values().cloned().collect())
    }

    async fn find_employee(&self, id: &str) -> DbResult<Option<Employee>> {
        Ok(self.employee(id))
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> DbResult<Option<EmployeeCredentials>> {
        let email = email.to_lowercase();
        Ok(self
            .employees
            .lock()
            .unwrap()
            .values()
            .find(|e| e.email.to_lowercase() == email)
            .map(|e| EmployeeCredentials {
                id: e.id.clone(),
                email: e.email.clone(),
                password_hash: e.password_hash.clone(),
                status: e.status,
            }))
    }

    async fn create_employee(&self, data: &EmployeeData) -> DbResult<()> {
        let mut employees = self.employees.lock().unwrap();
        if employees.contains_key(&data.id) {
            return Err(duplicate("employees"));
        }
        employees.insert(data.id.clone(), employee_row(data, Utc::now()));
        Ok(())
    }

    async fn update_employee(&self, id: &str, data: &EmployeeData) -> DbResult<()> {
        let mut employees = self.employees.lock().unwrap();
        if let Some(existing) = employees.get_mut(id) {
            let mut row = employee_row(data, existing.created_at);
            row.id = id.to_string();
            row.image_url = data.image_url.clone().or_else(|| existing.image_url.clone());
            *existing = row;
        }
        Ok(())
    }

    async fn delete_employee(&self, id: &str) -> DbResult<()> {
        self.employees.lock().unwrap().remove(id);
        Ok(())
    }
}

#[async_trait]
impl PermissionRoleRepository for MemoryDatabase {
    async fn list_roles(&self) -> DbResult<Vec<PermissionRole>> {
        Ok(self.roles.lock().unwrap().values().cloned().collect())
    }

    async fn find_role(&self, id: i32) -> DbResult<Option<PermissionRole>> {
        Ok(self.roles.lock().unwrap().get(&id).cloned())
    }

    async fn create_role(&self, data: &PermissionRoleData) -> DbResult<i32> {
        let mut roles = self.roles.lock().unwrap();
        if roles.values().any(|r| r.name == data.name) {
            return Err(duplicate("permission_roles_name"));
        }
        let mut next = self.next_role_id.lock().unwrap();
        *next += 1;
        let id = *next;
        roles.insert(
            id,
            PermissionRole {
                id,
                name: data.name.clone(),
                permissions: data.permissions.clone(),
            },
        );
        Ok(id)
    }

    async fn update_role(&self, id: i32, data: &PermissionRoleData) -> DbResult<()> {
        if let Some(role) = self.roles.lock().unwrap().get_mut(&id) {
            role.name = data.name.clone();
            role.permissions = data.permissions.clone();
        }
        Ok(())
    }

    async fn delete_role(&self, id: i32) -> DbResult<()> {
        self.roles.lock().unwrap().remove(&id);
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub db: Arc<MemoryDatabase>,
    pub config: Config,
    pub upload_dir: TempDir,
}

pub fn test_app() -> TestApp {
    test_app_with(|_| {})
}

pub fn test_app_with(configure: impl FnOnce(&mut Config)) -> TestApp {
    let upload_dir = tempfile::tempdir().unwrap();
    let mut config = Config::new("postgres://unused", JWT_SECRET);
    config.upload_dir = upload_dir.path().to_path_buf();
    config.bcrypt_cost = 4;
    configure(&mut config);

    let db = Arc::new(MemoryDatabase::default());
    let state = AppState::new(db.clone(), config.clone());

    TestApp {
        router: create_router(state),
        db,
        config,
        upload_dir,
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
        TestResponse { status, body }
    }

    pub async fn call(&self, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header("content-type", "application/json");
                Body::from(serde_json::to_vec(&v).unwrap())
            }
            None => Body::empty(),
        };
        self.send(builder.body(body).unwrap()).await
    }

    pub async fn raw(&self, method: &str, uri: &str, content_type: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", content_type)
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn multipart(&self, method: &str, uri: &str, form: &MultipartBody) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(form.finish()))
            .unwrap();
        self.send(request).await
    }
}

#[derive(Default)]
pub struct MultipartBody {
    parts: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.parts.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, bytes: &[u8]) -> Self {
        self.parts.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                BOUNDARY, name, file_name
            )
            .as_bytes(),
        );
        self.parts.extend_from_slice(bytes);
        self.parts.extend_from_slice(b"\r\n");
        self
    }

    pub fn finish(&self) -> Vec<u8> {
        let mut body = self.parts.clone();
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        body
    }
}

pub fn hashed(password: &str) -> String {
    bcrypt::hash(password, 4).unwrap()
}
