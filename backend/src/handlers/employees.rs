use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::collections::BTreeMap;

use crate::{
    error::AppError,
    models::{
        dashboard::DashboardStats,
        employee::{CreateEmployee, Employee, EmployeeWithAttendance},
    },
    state::AppState,
    types::EmployeeId,
    utils::time,
    validation::Validate,
};

pub async fn list_employees(State(state): State<AppState>) -> Result<Json<Vec<Employee>>, AppError> {
    let employees = state.employees.list().await?;
    Ok(Json(employees))
}

pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployee>, JsonRejection>,
) -> Result<(StatusCode, Json<Employee>), AppError> {
    let Json(payload) = payload?;
    let payload = payload.normalized();
    payload.validate()?;

    let employee = state.employees.create(&payload).await?;
    tracing::info!(
        id = %employee.id,
        employee_code = %employee.employee_id,
        department = %employee.department,
        "Employee created"
    );
    Ok((StatusCode::CREATED, Json(employee)))
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> Result<Json<EmployeeWithAttendance>, AppError> {
    let employee = state
        .employees
        .find_by_id(id)
        .await?
        .ok_or_else(employee_not_found)?;
    let attendances = state.attendance.list_for_employee(id).await?;
    Ok(Json(EmployeeWithAttendance {
        employee,
        attendances,
    }))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> Result<StatusCode, AppError> {
    if !state.employees.delete(id).await? {
        return Err(employee_not_found());
    }
    tracing::info!(id = %id, "Employee deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn dashboard_stats(State(state): State<AppState>) -> Result<Json<DashboardStats>, AppError> {
    let today = time::today_local(&state.config.time_zone);

    let total_employees = state.employees.count().await?;
    let counts = state.attendance.daily_counts(today).await?;
    let department_distribution: BTreeMap<String, i64> = state
        .employees
        .department_distribution()
        .await?
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(department, count)| (department.as_str().to_string(), count))
        .collect();
    let recent_employees = state
        .employees
        .recent(state.config.recent_employees_limit)
        .await?;

    Ok(Json(DashboardStats {
        total_employees,
        present_today: counts.present,
        absent_today: counts.absent,
        department_distribution,
        recent_employees,
    }))
}

pub(crate) fn employee_not_found() -> AppError {
    AppError::NotFound("Employee not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        models::employee::{Department, EmployeeStatus},
        repositories::{
            attendance::MockAttendanceRepositoryTrait, employee::MockEmployeeRepositoryTrait,
            DailyCounts,
        },
    };
    use chrono::Utc;
    use mockall::predicate::eq;
    use std::sync::Arc;

    fn state_with(
        employees: MockEmployeeRepositoryTrait,
        attendance: MockAttendanceRepositoryTrait,
    ) -> AppState {
        let config = Config::from_lookup(|_| None).expect("default config");
        AppState::new(Arc::new(employees), Arc::new(attendance), config)
    }

    fn employee(id: i64, code: &str, department: Department) -> Employee {
        Employee {
            id: EmployeeId::new(id),
            employee_id: code.to_string(),
            full_name: format!("Employee {}", id),
            email: format!("e{}@example.com", id),
            department,
            designation: "Staff".into(),
            status: EmployeeStatus::Active,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn delete_missing_employee_is_not_found() {
        let mut employees = MockEmployeeRepositoryTrait::new();
        employees
            .expect_delete()
            .with(eq(EmployeeId::new(9)))
            .returning(|_| Ok(false));
        let state = state_with(employees, MockAttendanceRepositoryTrait::new());

        let result = delete_employee(State(state), Path(EmployeeId::new(9))).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_existing_employee_returns_no_content() {
        let mut employees = MockEmployeeRepositoryTrait::new();
        employees.expect_delete().returning(|_| Ok(true));
        let state = state_with(employees, MockAttendanceRepositoryTrait::new());

        let status = delete_employee(State(state), Path(EmployeeId::new(1)))
            .await
            .expect("deleted");
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn create_rejects_invalid_payload_before_touching_repository() {
        let employees = MockEmployeeRepositoryTrait::new();
        let state = state_with(employees, MockAttendanceRepositoryTrait::new());
        let payload = CreateEmployee {
            employee_id: "EMP-001".into(),
            full_name: "Alice".into(),
            email: "not-an-email".into(),
            department: Department::Engineering,
            designation: "Staff".into(),
            status: EmployeeStatus::Active,
        };

        let result = create_employee(State(state), Ok(Json(payload))).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn dashboard_stats_combines_repository_results() {
        let mut employees = MockEmployeeRepositoryTrait::new();
        employees.expect_count().returning(|| Ok(2));
        employees.expect_department_distribution().returning(|| {
            Ok(vec![
                (Department::Engineering, 1),
                (Department::HumanResources, 1),
            ])
        });
        employees
            .expect_recent()
            .with(eq(3))
            .returning(|_| Ok(vec![employee(2, "EMP-002", Department::HumanResources)]));
        let mut attendance = MockAttendanceRepositoryTrait::new();
        attendance.expect_daily_counts().returning(|_| {
            Ok(DailyCounts {
                present: 1,
                absent: 1,
            })
        });
        let state = state_with(employees, attendance);

        let Json(stats) = dashboard_stats(State(state)).await.expect("stats");
        assert_eq!(stats.total_employees, 2);
        assert_eq!(stats.present_today, 1);
        assert_eq!(stats.absent_today, 1);
        assert_eq!(stats.department_distribution.get("Human Resources"), Some(&1));
        assert_eq!(stats.recent_employees.len(), 1);
    }
}
