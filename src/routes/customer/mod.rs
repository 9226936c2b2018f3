mod handler;
mod model;

pub use handler::{create_customer, delete_customer, get_customer, list_customers, update_customer};
pub use model::{CreateCustomerResponse, CustomerRequest};
