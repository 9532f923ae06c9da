use crate::{
    api::{ApiClient, ApiError, DashboardStats},
    pages::dashboard::utils::build_report_csv,
};

pub async fn fetch_stats(api: &ApiClient) -> Result<DashboardStats, ApiError> {
    api.get_dashboard_stats().await
}

/// Pulls the live roster and all-time summary and renders the CSV report.
pub async fn build_report(api: &ApiClient) -> Result<String, ApiError> {
    let employees = api.list_employees().await?;
    let summary = api.get_attendance_summary().await?;
    build_report_csv(&employees, &summary)
        .map_err(|e| ApiError::unknown(format!("Failed to build report: {}", e)))
}
