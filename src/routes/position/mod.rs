mod handler;
mod model;

pub use handler::{create_position, delete_position, get_position, list_positions, update_position};
pub use model::{PositionRequest, UpdatePositionRequest};
