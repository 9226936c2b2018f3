use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: i32,
    #[sqlx(rename = "full_name")]
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Mutable customer columns, as written by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerData {
    pub name: String,
    pub phone: String,
    pub email: String,
}
