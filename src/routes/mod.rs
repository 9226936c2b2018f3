pub mod auth;
pub mod customer;
pub mod employee;
pub mod permission;
pub mod position;
