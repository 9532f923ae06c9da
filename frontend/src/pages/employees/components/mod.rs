pub mod add_form;
pub mod list;

pub use add_form::AddEmployeeModal;
pub use list::{EmployeeSearch, EmployeeTable};
