mod handler;
mod model;

pub use handler::{authenticate, login};
pub use model::{LoginRequest, LoginResponse};
