use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    models::employee::Department,
    types::{AttendanceId, EmployeeId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

/// One attendance mark; at most one exists per employee and date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AttendanceRecord {
    #[schema(value_type = i64)]
    pub id: AttendanceId,
    #[schema(value_type = i64)]
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub check_in_time: Option<String>,
    pub remarks: Option<String>,
}

/// Payload for marking attendance. Re-marking an employee on the same date
/// replaces the existing record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct MarkAttendanceRequest {
    #[schema(value_type = i64)]
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default)]
    #[validate(length(max = 16))]
    pub check_in_time: Option<String>,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct DailyStats {
    pub present: i64,
    pub absent: i64,
    pub total: i64,
}

/// Lifetime attendance totals for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AttendanceSummaryItem {
    /// Business code of the employee.
    pub employee_id: String,
    pub full_name: String,
    pub department: Department,
    pub present_days: i64,
    pub absent_days: i64,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct DailyStatsQuery {
    /// Calendar date in `YYYY-MM-DD`; defaults to today in the server time zone.
    pub date: Option<String>,
}
