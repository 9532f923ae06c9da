use chrono::NaiveDate;

use crate::api::{
    ApiClient, ApiError, AttendanceRecord, AttendanceSummaryItem, DailyStats, Employee,
    EmployeeId, MarkAttendanceRequest,
};

pub async fn fetch_roster(api: &ApiClient) -> Result<Vec<Employee>, ApiError> {
    api.list_employees().await
}

pub async fn fetch_daily_stats(api: &ApiClient, date: NaiveDate) -> Result<DailyStats, ApiError> {
    api.get_today_stats(date).await
}

pub async fn fetch_history(
    api: &ApiClient,
    employee_id: EmployeeId,
) -> Result<Vec<AttendanceRecord>, ApiError> {
    api.get_employee_attendance(employee_id).await
}

pub async fn fetch_summary(api: &ApiClient) -> Result<Vec<AttendanceSummaryItem>, ApiError> {
    api.get_attendance_summary().await
}

pub async fn submit_mark(
    api: &ApiClient,
    request: MarkAttendanceRequest,
) -> Result<AttendanceRecord, ApiError> {
    api.mark_attendance(&request).await
}
