#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    error::ErrorResponse,
    handlers::health::HealthResponse,
    models::{
        attendance::{
            AttendanceRecord, AttendanceStatus, AttendanceSummaryItem, DailyStats,
            DailyStatsQuery, MarkAttendanceRequest,
        },
        dashboard::DashboardStats,
        employee::{CreateEmployee, Department, Employee, EmployeeStatus, EmployeeWithAttendance},
    },
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "HRMS Lite API", description = "Employee roster, attendance marking and dashboard statistics"),
    paths(
        health_doc,
        list_employees_doc,
        create_employee_doc,
        get_employee_doc,
        delete_employee_doc,
        dashboard_stats_doc,
        mark_attendance_doc,
        employee_attendance_doc,
        attendance_summary_doc,
        daily_stats_doc
    ),
    components(
        schemas(
            // employees
            Department,
            EmployeeStatus,
            Employee,
            CreateEmployee,
            EmployeeWithAttendance,
            DashboardStats,
            // attendance
            AttendanceStatus,
            AttendanceRecord,
            MarkAttendanceRequest,
            AttendanceSummaryItem,
            DailyStats,
            DailyStatsQuery,
            // misc
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "Employees", description = "Employee roster"),
        (name = "Attendance", description = "Attendance marking and aggregates"),
        (name = "Health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, body = HealthResponse)),
    tag = "Health"
)]
fn health_doc() {}

#[utoipa::path(
    get,
    path = "/api/employees/",
    responses((status = 200, description = "All employees in registration order", body = [Employee])),
    tag = "Employees"
)]
fn list_employees_doc() {}

#[utoipa::path(
    post,
    path = "/api/employees/",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee registered", body = Employee),
        (status = 400, description = "Duplicate employee ID/email or invalid payload", body = ErrorResponse)
    ),
    tag = "Employees"
)]
fn create_employee_doc() {}

#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(("id" = i64, Path, description = "Employee row id")),
    responses(
        (status = 200, body = EmployeeWithAttendance),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Employees"
)]
fn get_employee_doc() {}

#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(("id" = i64, Path, description = "Employee row id")),
    responses(
        (status = 204, description = "Employee and their attendance deleted"),
        (status = 404, body = ErrorResponse)
    ),
    tag = "Employees"
)]
fn delete_employee_doc() {}

#[utoipa::path(
    get,
    path = "/api/employees/dashboard/stats",
    responses((status = 200, body = DashboardStats)),
    tag = "Employees"
)]
fn dashboard_stats_doc() {}

#[utoipa::path(
    post,
    path = "/api/attendance/",
    request_body = MarkAttendanceRequest,
    responses(
        (status = 200, description = "Record created or replaced", body = AttendanceRecord),
        (status = 404, description = "Unknown employee", body = ErrorResponse)
    ),
    tag = "Attendance"
)]
fn mark_attendance_doc() {}

#[utoipa::path(
    get,
    path = "/api/attendance/employee/{id}",
    params(("id" = i64, Path, description = "Employee row id")),
    responses((status = 200, description = "History, newest date first", body = [AttendanceRecord])),
    tag = "Attendance"
)]
fn employee_attendance_doc() {}

#[utoipa::path(
    get,
    path = "/api/attendance/summary",
    responses((status = 200, body = [AttendanceSummaryItem])),
    tag = "Attendance"
)]
fn attendance_summary_doc() {}

#[utoipa::path(
    get,
    path = "/api/attendance/today-stats",
    params(DailyStatsQuery),
    responses(
        (status = 200, body = DailyStats),
        (status = 400, description = "Malformed date", body = ErrorResponse)
    ),
    tag = "Attendance"
)]
fn daily_stats_doc() {}
