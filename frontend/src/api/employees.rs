use super::{
    client::{expect_success, parse_json, ApiClient},
    types::{ApiError, DashboardStats, Employee, EmployeeId, NewEmployee},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let url = self.endpoint("/employees/").await;
        let response = self.dispatch(self.http().get(url)).await?;
        parse_json(response, "Failed to load employees").await
    }

    pub async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee, ApiError> {
        let url = self.endpoint("/employees/").await;
        let response = self.dispatch(self.http().post(url).json(employee)).await?;
        parse_json(response, "Failed to add employee").await
    }

    pub async fn delete_employee(&self, id: EmployeeId) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/employees/{}", id)).await;
        let response = self.dispatch(self.http().delete(url)).await?;
        expect_success(response, "Failed to delete employee").await
    }

    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let url = self.endpoint("/employees/dashboard/stats").await;
        let response = self.dispatch(self.http().get(url)).await?;
        parse_json(response, "Failed to load dashboard stats").await
    }
}
