use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Employee row as returned to API clients.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Employee {
    pub id: String,
    pub prefix: String,
    pub first_name: String,
    pub last_name: String,
    pub nickname: String,
    pub position_id: String,
    pub color: String,
    pub salary: f64,
    pub pay_date: Option<NaiveDate>,
    pub has_social_security: bool,
    pub social_security_id: String,
    pub tax_deduction: f64,
    pub hourly_rate: f64,
    pub overtime_rate: f64,
    pub leave_personal: i32,
    pub leave_vacation: i32,
    pub leave_sick: i32,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub status: bool,
    pub payment_channel: String,
    pub account_type: String,
    pub bank_name: String,
    pub account_number: String,
    pub bank_branch: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The columns login needs and nothing more.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeCredentials {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub status: bool,
}

/// Column values written by create and update.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmployeeData {
    pub id: String,
    pub prefix: String,
    pub first_name: String,
    pub last_name: String,
    pub nickname: String,
    pub position_id: String,
    pub color: String,
    pub salary: f64,
    pub pay_date: Option<NaiveDate>,
    pub has_social_security: bool,
    pub social_security_id: String,
    pub tax_deduction: f64,
    pub hourly_rate: f64,
    pub overtime_rate: f64,
    pub leave_personal: i32,
    pub leave_vacation: i32,
    pub leave_sick: i32,
    pub email: String,
    pub password_hash: String,
    pub status: bool,
    pub payment_channel: String,
    pub account_type: String,
    pub bank_name: String,
    pub account_number: String,
    pub bank_branch: String,
    /// `None` means no new image was uploaded.
    pub image_url: Option<String>,
}
