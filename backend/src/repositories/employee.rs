//! Employee repository trait for dependency injection and testing.
//!
//! Handlers only see `EmployeeRepositoryTrait`; `MockEmployeeRepositoryTrait`
//! is generated for unit tests.

use async_trait::async_trait;

use crate::{
    db::connection::DbPool,
    error::AppError,
    models::employee::{CreateEmployee, Department, Employee},
    types::EmployeeId,
};

pub const DUPLICATE_EMPLOYEE_ID: &str = "Employee ID already registered";
pub const DUPLICATE_EMAIL: &str = "Email already registered";

const EMPLOYEE_CODE_CONSTRAINT: &str = "employees_employee_id_key";
const EMPLOYEE_EMAIL_CONSTRAINT: &str = "employees_email_key";

const SELECT_COLUMNS: &str =
    "id, employee_id, full_name, email, department, designation, status, created_at";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepositoryTrait: Send + Sync {
    /// All employees in registration order.
    async fn list(&self) -> Result<Vec<Employee>, AppError>;

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, AppError>;

    /// Inserts a new employee. Duplicate codes or emails are rejected with
    /// `AppError::BadRequest`.
    async fn create(&self, payload: &CreateEmployee) -> Result<Employee, AppError>;

    /// Deletes the employee and, through the foreign key, their attendance.
    /// Returns `false` when no such employee exists.
    async fn delete(&self, id: EmployeeId) -> Result<bool, AppError>;

    async fn count(&self) -> Result<i64, AppError>;

    async fn department_distribution(&self) -> Result<Vec<(Department, i64)>, AppError>;

    /// Newest employees first.
    async fn recent(&self, limit: i64) -> Result<Vec<Employee>, AppError>;
}

/// PostgreSQL implementation of `EmployeeRepositoryTrait`.
#[derive(Clone)]
pub struct EmployeeRepository {
    pool: DbPool,
}

impl EmployeeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepositoryTrait for EmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        let query = format!("SELECT {} FROM employees ORDER BY id ASC", SELECT_COLUMNS);
        let rows = sqlx::query_as::<_, Employee>(&query)
            .fetch_all(self.pool.as_ref())
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, AppError> {
        let query = format!("SELECT {} FROM employees WHERE id = $1", SELECT_COLUMNS);
        let row = sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;
        Ok(row)
    }

    async fn create(&self, payload: &CreateEmployee) -> Result<Employee, AppError> {
        let query = format!(
            "INSERT INTO employees (employee_id, full_name, email, department, designation, status) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            SELECT_COLUMNS
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&payload.employee_id)
            .bind(&payload.full_name)
            .bind(&payload.email)
            .bind(payload.department.as_str())
            .bind(&payload.designation)
            .bind(payload.status.as_str())
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(map_unique_violation)
    }

    async fn delete(&self, id: EmployeeId) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
            .fetch_one(self.pool.as_ref())
            .await?;
        Ok(count)
    }

    async fn department_distribution(&self) -> Result<Vec<(Department, i64)>, AppError> {
        let rows = sqlx::query_as::<_, (Department, i64)>(
            "SELECT department, COUNT(*) FROM employees GROUP BY department ORDER BY department",
        )
        .fetch_all(self.pool.as_ref())
        .await?;
        Ok(rows)
    }

    async fn recent(&self, limit: i64) -> Result<Vec<Employee>, AppError> {
        let query = format!(
            "SELECT {} FROM employees ORDER BY created_at DESC, id DESC LIMIT $1",
            SELECT_COLUMNS
        );
        let rows = sqlx::query_as::<_, Employee>(&query)
            .bind(limit)
            .fetch_all(self.pool.as_ref())
            .await?;
        Ok(rows)
    }
}

fn map_unique_violation(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.constraint() {
            Some(EMPLOYEE_CODE_CONSTRAINT) => {
                return AppError::BadRequest(DUPLICATE_EMPLOYEE_ID.to_string())
            }
            Some(EMPLOYEE_EMAIL_CONSTRAINT) => {
                return AppError::BadRequest(DUPLICATE_EMAIL.to_string())
            }
            _ => {}
        }
    }
    err.into()
}
