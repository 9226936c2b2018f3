use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// A named role with its permission matrix.
///
/// `permissions` is stored as JSONB and passed through untouched; the frontend
/// keeps `{module: {view, create, update, delete}}` in it but nothing here
/// depends on that shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PermissionRole {
    pub id: i32,
    pub name: String,
    pub permissions: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PermissionRoleData {
    pub name: String,
    pub permissions: Value,
}
