use crate::api::{ApiClient, ApiError, Employee, EmployeeId, NewEmployee};

pub async fn fetch_employees(api: &ApiClient) -> Result<Vec<Employee>, ApiError> {
    api.list_employees().await
}

pub async fn add_employee(api: &ApiClient, employee: NewEmployee) -> Result<Employee, ApiError> {
    api.create_employee(&employee).await
}

pub async fn remove_employee(api: &ApiClient, id: EmployeeId) -> Result<(), ApiError> {
    api.delete_employee(id).await
}
