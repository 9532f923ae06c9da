use chrono::NaiveDate;

use super::{
    client::{parse_json, ApiClient},
    types::{
        ApiError, AttendanceRecord, AttendanceSummaryItem, DailyStats, EmployeeId,
        MarkAttendanceRequest,
    },
};

impl ApiClient {
    /// Creates or overwrites the record for `(employee_id, date)`.
    pub async fn mark_attendance(
        &self,
        request: &MarkAttendanceRequest,
    ) -> Result<AttendanceRecord, ApiError> {
        let url = self.endpoint("/attendance/").await;
        let response = self.dispatch(self.http().post(url).json(request)).await?;
        parse_json(response, "Failed to mark attendance").await
    }

    pub async fn get_employee_attendance(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let url = self
            .endpoint(&format!("/attendance/employee/{}", employee_id))
            .await;
        let response = self.dispatch(self.http().get(url)).await?;
        parse_json(response, "Failed to load attendance history").await
    }

    pub async fn get_attendance_summary(&self) -> Result<Vec<AttendanceSummaryItem>, ApiError> {
        let url = self.endpoint("/attendance/summary").await;
        let response = self.dispatch(self.http().get(url)).await?;
        parse_json(response, "Failed to load attendance summary").await
    }

    pub async fn get_today_stats(&self, date: NaiveDate) -> Result<DailyStats, ApiError> {
        let url = self.endpoint("/attendance/today-stats").await;
        let builder = self
            .http()
            .get(url)
            .query(&[("date", date.format("%Y-%m-%d").to_string())]);
        let response = self.dispatch(builder).await?;
        parse_json(response, "Failed to load daily stats").await
    }
}
