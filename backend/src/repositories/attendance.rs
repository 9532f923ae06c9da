//! Attendance repository trait for dependency injection and testing.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    db::connection::DbPool,
    error::AppError,
    models::attendance::{AttendanceRecord, AttendanceSummaryItem, MarkAttendanceRequest},
    types::EmployeeId,
};

const SELECT_COLUMNS: &str = "id, employee_id, date, status, check_in_time, remarks";

/// Present/absent counts for one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DailyCounts {
    pub present: i64,
    pub absent: i64,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttendanceRepositoryTrait: Send + Sync {
    /// Creates the record for `(employee_id, date)` or replaces its status,
    /// check-in time and remarks when one already exists.
    async fn upsert(&self, payload: &MarkAttendanceRequest) -> Result<AttendanceRecord, AppError>;

    /// Full history of one employee, newest date first.
    async fn list_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<AttendanceRecord>, AppError>;

    /// Lifetime present/absent totals for every employee, including those
    /// with no records.
    async fn summary(&self) -> Result<Vec<AttendanceSummaryItem>, AppError>;

    async fn daily_counts(&self, date: NaiveDate) -> Result<DailyCounts, AppError>;
}

/// PostgreSQL implementation of `AttendanceRepositoryTrait`.
#[derive(Clone)]
pub struct AttendanceRepository {
    pool: DbPool,
}

impl AttendanceRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceRepositoryTrait for AttendanceRepository {
    async fn upsert(&self, payload: &MarkAttendanceRequest) -> Result<AttendanceRecord, AppError> {
        let query = format!(
            "INSERT INTO attendance_records (employee_id, date, status, check_in_time, remarks) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (employee_id, date) DO UPDATE SET \
                 status = EXCLUDED.status, \
                 check_in_time = EXCLUDED.check_in_time, \
                 remarks = EXCLUDED.remarks, \
                 updated_at = NOW() \
             RETURNING {}",
            SELECT_COLUMNS
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(payload.employee_id)
            .bind(payload.date)
            .bind(payload.status.as_str())
            .bind(payload.check_in_time.as_deref())
            .bind(payload.remarks.as_deref())
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|err| match AppError::from(err) {
                AppError::NotFound(_) => AppError::NotFound("Employee not found".to_string()),
                other => other,
            })
    }

    async fn list_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let query = format!(
            "SELECT {} FROM attendance_records WHERE employee_id = $1 ORDER BY date DESC",
            SELECT_COLUMNS
        );
        let rows = sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(employee_id)
            .fetch_all(self.pool.as_ref())
            .await?;
        Ok(rows)
    }

    async fn summary(&self) -> Result<Vec<AttendanceSummaryItem>, AppError> {
        let rows = sqlx::query_as::<_, AttendanceSummaryItem>(
            "SELECT e.employee_id, e.full_name, e.department, \
                    COUNT(a.id) FILTER (WHERE a.status = 'Present') AS present_days, \
                    COUNT(a.id) FILTER (WHERE a.status = 'Absent') AS absent_days \
             FROM employees e \
             LEFT JOIN attendance_records a ON a.employee_id = e.id \
             GROUP BY e.id \
             ORDER BY e.id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;
        Ok(rows)
    }

    async fn daily_counts(&self, date: NaiveDate) -> Result<DailyCounts, AppError> {
        let (present, absent) = sqlx::query_as::<_, (i64, i64)>(
            "SELECT COUNT(*) FILTER (WHERE status = 'Present'), \
                    COUNT(*) FILTER (WHERE status = 'Absent') \
             FROM attendance_records WHERE date = $1",
        )
        .bind(date)
        .fetch_one(self.pool.as_ref())
        .await?;
        Ok(DailyCounts { present, absent })
    }
}
