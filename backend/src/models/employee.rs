use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    models::attendance::AttendanceRecord,
    types::EmployeeId,
    validation::rules,
};

pub const DEFAULT_DESIGNATION: &str = "Staff";

/// Departments an employee can belong to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "TEXT")]
pub enum Department {
    Engineering,
    #[serde(rename = "Human Resources")]
    #[sqlx(rename = "Human Resources")]
    HumanResources,
    Marketing,
    Finance,
    Operations,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Engineering,
        Department::HumanResources,
        Department::Marketing,
        Department::Finance,
        Department::Operations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::HumanResources => "Human Resources",
            Department::Marketing => "Marketing",
            Department::Finance => "Finance",
            Department::Operations => "Operations",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "TEXT")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Employee {
    #[schema(value_type = i64)]
    pub id: EmployeeId,
    /// Business code chosen by the operator, e.g. `EMP-001`.
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: Department,
    pub designation: String,
    pub status: EmployeeStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for registering a new employee.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEmployee {
    #[validate(custom(function = "rules::validate_employee_code"))]
    pub employee_id: String,
    #[validate(
        length(min = 1, max = 100, message = "Full name is required"),
        custom(function = "rules::validate_not_blank")
    )]
    pub full_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub department: Department,
    #[serde(default = "default_designation")]
    #[validate(length(max = 100))]
    pub designation: String,
    #[serde(default)]
    pub status: EmployeeStatus,
}

fn default_designation() -> String {
    DEFAULT_DESIGNATION.to_string()
}

impl CreateEmployee {
    /// Trims user-entered text and lowercases the email so uniqueness checks
    /// are not defeated by stray whitespace or casing.
    pub fn normalized(mut self) -> Self {
        self.employee_id = self.employee_id.trim().to_string();
        self.full_name = self.full_name.trim().to_string();
        self.email = self.email.trim().to_lowercase();
        let designation = self.designation.trim();
        self.designation = if designation.is_empty() {
            default_designation()
        } else {
            designation.to_string()
        };
        self
    }
}

/// An employee together with their full attendance history.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmployeeWithAttendance {
    #[serde(flatten)]
    pub employee: Employee,
    pub attendances: Vec<AttendanceRecord>,
}
