use async_trait::async_trait;

use super::PgDatabase;
use crate::database::{DbResult, Employee, EmployeeCredentials, EmployeeData, EmployeeRepository};

// Numeric and timestamp columns are cast so rows decode whether the table
// uses NUMERIC/REAL or TIMESTAMP/TIMESTAMPTZ.
const EMPLOYEE_COLUMNS: &str = r#"
    id, prefix, first_name, last_name, nickname, position_id, color,
    salary::float8 AS salary, pay_date, has_social_security, social_security_id,
    tax_deduction::float8 AS tax_deduction, hourly_rate::float8 AS hourly_rate,
    overtime_rate::float8 AS overtime_rate, leave_personal::int4 AS leave_personal,
    leave_vacation::int4 AS leave_vacation, leave_sick::int4 AS leave_sick,
    email, password_hash, status, payment_channel, account_type, bank_name,
    account_number, bank_branch, image_url,
    created_at::timestamptz AS created_at, updated_at::timestamptz AS updated_at
"#;

#[async_trait]
impl EmployeeRepository for PgDatabase {
    async fn list_employees(&self) -> DbResult<Vec<Employee>> {
        let sql = format!("SELECT {} FROM employees ORDER BY id", EMPLOYEE_COLUMNS);
        sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_employee(&self, id: &str) -> DbResult<Option<Employee>> {
        let sql = format!("SELECT {} FROM employees WHERE id = $1", EMPLOYEE_COLUMNS);
        sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> DbResult<Option<EmployeeCredentials>> {
        sqlx::query_as::<_, EmployeeCredentials>(
            r#"
            SELECT id, email, password_hash, status
            FROM employees
            WHERE lower(email) = lower($1)
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }

    async fn create_employee(&self, data: &EmployeeData) -> DbResult<()> {
        sqlx::query(
            r#"
            INSERT INTO employees (
                id, prefix, first_name, last_name, nickname, position_id, color, salary, pay_date,
                has_social_security, social_security_id, tax_deduction, hourly_rate, overtime_rate,
                leave_personal, leave_vacation, leave_sick, email, password_hash, status,
                payment_channel, account_type, bank_name, account_number, bank_branch, image_url
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26
            )
            "#,
        )
        .bind(&data.id)
        .bind(&data.prefix)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.nickname)
        .bind(&data.position_id)
        .bind(&data.color)
        .bind(data.salary)
        .bind(data.pay_date)
        .bind(data.has_social_security)
        .bind(&data.social_security_id)
        .bind(data.tax_deduction)
        .bind(data.hourly_rate)
        .bind(data.overtime_rate)
        .bind(data.leave_personal)
        .bind(data.leave_vacation)
        .bind(data.leave_sick)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.status)
        .bind(&data.payment_channel)
        .bind(&data.account_type)
        .bind(&data.bank_name)
        .bind(&data.account_number)
        .bind(&data.bank_branch)
        .bind(&data.image_url)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_employee(&self, id: &str, data: &EmployeeData) -> DbResult<()> {
        sqlx::query(
            r#"
            UPDATE employees SET
                prefix = $1, first_name = $2, last_name = $3, nickname = $4,
                position_id = $5, color = $6, salary = $7, pay_date = $8,
                has_social_security = $9, social_security_id = $10,
                tax_deduction = $11, hourly_rate = $12, overtime_rate = $13,
                leave_personal = $14, leave_vacation = $15, leave_sick = $16,
                email = $17, password_hash = $18, status = $19, payment_channel = $20,
                account_type = $21, bank_name = $22, account_number = $23, bank_branch = $24,
                image_url = COALESCE($25, image_url), updated_at = NOW()
            WHERE id = $26
            "#,
        )
        .bind(&data.prefix)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.nickname)
        .bind(&data.position_id)
        .bind(&data.color)
        .bind(data.salary)
        .bind(data.pay_date)
        .bind(data.has_social_security)
        .bind(&data.social_security_id)
        .bind(data.tax_deduction)
        .bind(data.hourly_rate)
        .bind(data.overtime_rate)
        .bind(data.leave_personal)
        .bind(data.leave_vacation)
        .bind(data.leave_sick)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.status)
        .bind(&data.payment_channel)
        .bind(&data.account_type)
        .bind(&data.bank_name)
        .bind(&data.account_number)
        .bind(&data.bank_branch)
        .bind(&data.image_url)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_employee(&self, id: &str) -> DbResult<()> {
        sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
