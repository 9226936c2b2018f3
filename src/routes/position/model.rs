use serde::Deserialize;

use crate::database::Position;
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct PositionRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Body of `PUT /api/positions/{id}`. An `id` in the body is accepted and
/// ignored; the path decides which row changes.
#[derive(Debug, Deserialize)]
pub struct UpdatePositionRequest {
    #[serde(default)]
    pub name: String,
}

impl PositionRequest {
    pub fn into_position(self) -> AppResult<Position> {
        if self.id.trim().is_empty() {
            return Err(AppError::BadRequest("id is required".into()));
        }
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("name is required".into()));
        }

        Ok(Position {
            id: self.id,
            name: self.name,
        })
    }
}

impl UpdatePositionRequest {
    pub fn into_name(self) -> AppResult<String> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("name is required".into()));
        }
        Ok(self.name)
    }
}
