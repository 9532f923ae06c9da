use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use crate::{
    error::AppError,
    handlers::employees::employee_not_found,
    models::attendance::{
        AttendanceRecord, AttendanceSummaryItem, DailyStats, DailyStatsQuery,
        MarkAttendanceRequest,
    },
    state::AppState,
    types::EmployeeId,
    utils::time,
    validation::Validate,
};

pub async fn mark_attendance(
    State(state): State<AppState>,
    payload: Result<Json<MarkAttendanceRequest>, JsonRejection>,
) -> Result<Json<AttendanceRecord>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    if state.employees.find_by_id(payload.employee_id).await?.is_none() {
        return Err(employee_not_found());
    }

    let record = state.attendance.upsert(&payload).await?;
    tracing::info!(
        employee_id = %record.employee_id,
        date = %record.date,
        status = record.status.as_str(),
        "Attendance marked"
    );
    Ok(Json(record))
}

pub async fn employee_attendance(
    State(state): State<AppState>,
    Path(employee_id): Path<EmployeeId>,
) -> Result<Json<Vec<AttendanceRecord>>, AppError> {
    let records = state.attendance.list_for_employee(employee_id).await?;
    Ok(Json(records))
}

pub async fn attendance_summary(
    State(state): State<AppState>,
) -> Result<Json<Vec<AttendanceSummaryItem>>, AppError> {
    let summary = state.attendance.summary().await?;
    Ok(Json(summary))
}

pub async fn daily_stats(
    State(state): State<AppState>,
    query: Result<Query<DailyStatsQuery>, QueryRejection>,
) -> Result<Json<DailyStats>, AppError> {
    let Query(query) = query?;
    let date = match query.date.as_deref().map(str::trim) {
        None | Some("") => time::today_local(&state.config.time_zone),
        Some(raw) => time::parse_iso_date(raw)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid date: {}", raw)))?,
    };

    let counts = state.attendance.daily_counts(date).await?;
    let total = state.employees.count().await?;
    Ok(Json(DailyStats {
        present: counts.present,
        absent: counts.absent,
        total,
    }))
}
