use serde::{Deserialize, Serialize};

use crate::database::CustomerData;
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct CustomerRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct CreateCustomerResponse {
    pub id: i32,
}

impl CustomerRequest {
    /// Checks required fields and returns the columns to write.
    pub fn into_data(self) -> AppResult<CustomerData> {
        for (field, value) in [("name", &self.name), ("phone", &self.phone), ("email", &self.email)] {
            if value.trim().is_empty() {
                return Err(AppError::BadRequest(format!("{} is required", field)));
            }
        }
        if !is_email(&self.email) {
            return Err(AppError::BadRequest("email is not a valid address".into()));
        }

        Ok(CustomerData {
            name: self.name,
            phone: self.phone,
            email: self.email,
        })
    }
}

fn is_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !value.contains(' ')
        }
        None => false,
    }
}
