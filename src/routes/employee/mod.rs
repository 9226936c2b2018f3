mod form;
mod handler;

pub use form::{EmployeeForm, UploadedFile, lenient, remove_upload, store_upload};
pub use handler::{
    create_employee, debug_employees, delete_employee, get_employee, list_employees,
    update_employee,
};
