#![allow(dead_code)]
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, NaiveDate, Utc};
use serde_json::Value;
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};
use tower::ServiceExt;

use hrms_backend::{
    app_router,
    config::Config,
    error::AppError,
    models::{
        attendance::{
            AttendanceRecord, AttendanceStatus, AttendanceSummaryItem, MarkAttendanceRequest,
        },
        employee::{CreateEmployee, Department, Employee},
    },
    repositories::{
        employee::{DUPLICATE_EMAIL, DUPLICATE_EMPLOYEE_ID},
        AttendanceRepositoryTrait, DailyCounts, EmployeeRepositoryTrait,
    },
    state::AppState,
    types::{AttendanceId, EmployeeId},
};

#[derive(Default)]
struct Tables {
    next_employee_id: i64,
    next_attendance_id: i64,
    employees: Vec<Employee>,
    attendance: Vec<AttendanceRecord>,
}

/// In-memory stand-in for PostgreSQL that mirrors the schema constraints:
/// unique employee codes and emails, one attendance record per employee and
/// date, and cascading deletes.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().expect("lock in-memory tables")
    }

    pub fn attendance_rows(&self) -> Vec<AttendanceRecord> {
        self.lock().attendance.clone()
    }
}

#[async_trait]
impl EmployeeRepositoryTrait for InMemoryStore {
    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.lock().employees.clone())
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, AppError> {
        Ok(self.lock().employees.iter().find(|e| e.id == id).cloned())
    }

    async fn create(&self, payload: &CreateEmployee) -> Result<Employee, AppError> {
        let mut tables = self.lock();
        if tables
            .employees
            .iter()
            .any(|e| e.employee_id == payload.employee_id)
        {
            return Err(AppError::BadRequest(DUPLICATE_EMPLOYEE_ID.to_string()));
        }
        if tables.employees.iter().any(|e| e.email == payload.email) {
            return Err(AppError::BadRequest(DUPLICATE_EMAIL.to_string()));
        }
        tables.next_employee_id += 1;
        // Distinct timestamps keep "most recent" ordering deterministic.
        let created_at = Utc::now() + Duration::milliseconds(tables.next_employee_id);
        let employee = Employee {
            id: EmployeeId::new(tables.next_employee_id),
            employee_id: payload.employee_id.clone(),
            full_name: payload.full_name.clone(),
            email: payload.email.clone(),
            department: payload.department,
            designation: payload.designation.clone(),
            status: payload.status,
            created_at,
        };
        tables.employees.push(employee.clone());
        Ok(employee)
    }

    async fn delete(&self, id: EmployeeId) -> Result<bool, AppError> {
        let mut tables = self.lock();
        let before = tables.employees.len();
        tables.employees.retain(|e| e.id != id);
        let removed = tables.employees.len() != before;
        if removed {
            tables.attendance.retain(|a| a.employee_id != id);
        }
        Ok(removed)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.lock().employees.len() as i64)
    }

    async fn department_distribution(&self) -> Result<Vec<(Department, i64)>, AppError> {
        let mut counts: BTreeMap<Department, i64> = BTreeMap::new();
        for employee in &self.lock().employees {
            *counts.entry(employee.department).or_default() += 1;
        }
        Ok(counts.into_iter().collect())
    }

    async fn recent(&self, limit: i64) -> Result<Vec<Employee>, AppError> {
        let mut employees = self.lock().employees.clone();
        employees.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        employees.truncate(limit.max(0) as usize);
        Ok(employees)
    }
}

#[async_trait]
impl AttendanceRepositoryTrait for InMemoryStore {
    async fn upsert(&self, payload: &MarkAttendanceRequest) -> Result<AttendanceRecord, AppError> {
        let mut tables = self.lock();
        if !tables.employees.iter().any(|e| e.id == payload.employee_id) {
            return Err(AppError::NotFound("Employee not found".to_string()));
        }
        if let Some(existing) = tables
            .attendance
            .iter_mut()
            .find(|a| a.employee_id == payload.employee_id && a.date == payload.date)
        {
            existing.status = payload.status;
            existing.check_in_time = payload.check_in_time.clone();
            existing.remarks = payload.remarks.clone();
            return Ok(existing.clone());
        }
        tables.next_attendance_id += 1;
        let record = AttendanceRecord {
            id: AttendanceId::new(tables.next_attendance_id),
            employee_id: payload.employee_id,
            date: payload.date,
            status: payload.status,
            check_in_time: payload.check_in_time.clone(),
            remarks: payload.remarks.clone(),
        };
        tables.attendance.push(record.clone());
        Ok(record)
    }

    async fn list_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let mut records: Vec<AttendanceRecord> = self
            .lock()
            .attendance
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }

    async fn summary(&self) -> Result<Vec<AttendanceSummaryItem>, AppError> {
        let tables = self.lock();
        Ok(tables
            .employees
            .iter()
            .map(|employee| {
                let days = |status| {
                    tables
                        .attendance
                        .iter()
                        .filter(|a| a.employee_id == employee.id && a.status == status)
                        .count() as i64
                };
                AttendanceSummaryItem {
                    employee_id: employee.employee_id.clone(),
                    full_name: employee.full_name.clone(),
                    department: employee.department,
                    present_days: days(AttendanceStatus::Present),
                    absent_days: days(AttendanceStatus::Absent),
                }
            })
            .collect())
    }

    async fn daily_counts(&self, date: NaiveDate) -> Result<DailyCounts, AppError> {
        let tables = self.lock();
        let mut counts = DailyCounts::default();
        for record in tables.attendance.iter().filter(|a| a.date == date) {
            match record.status {
                AttendanceStatus::Present => counts.present += 1,
                AttendanceStatus::Absent => counts.absent += 1,
            }
        }
        Ok(counts)
    }
}

pub fn test_config() -> Config {
    Config::from_lookup(|_| None).expect("default config")
}

pub fn test_app() -> (Router, InMemoryStore) {
    let store = InMemoryStore::new();
    let state = AppState::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        test_config(),
    );
    (app_router(state), store)
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("router response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    )
    .await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
    )
    .await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    )
    .await
}

pub async fn seed_employee(app: &Router, code: &str, name: &str, department: &str) -> i64 {
    let (status, body) = post_json(
        app,
        "/api/employees/",
        serde_json::json!({
            "employee_id": code,
            "full_name": name,
            "email": format!("{}@example.com", code.to_lowercase()),
            "department": department,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed failed: {}", body);
    body["id"].as_i64().expect("employee id")
}
