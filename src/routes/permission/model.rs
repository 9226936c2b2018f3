use serde::Deserialize;
use serde_json::Value;

use crate::database::PermissionRoleData;
use crate::error::{AppError, AppResult};

/// Body of create and update. A client-sent `id` is ignored.
#[derive(Debug, Deserialize)]
pub struct PermissionRoleRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub permissions: Option<Value>,
}

impl PermissionRoleRequest {
    pub fn into_data(self) -> AppResult<PermissionRoleData> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("name is required".into()));
        }

        Ok(PermissionRoleData {
            name: self.name,
            permissions: self
                .permissions
                .unwrap_or_else(|| Value::Object(Default::default())),
        })
    }
}
