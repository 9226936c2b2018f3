mod handler;
mod model;

pub use handler::{create_role, delete_role, get_role, list_roles, update_role};
pub use model::PermissionRoleRequest;
