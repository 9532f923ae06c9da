use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::models::employee::Employee;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub total_employees: i64,
    pub present_today: i64,
    pub absent_today: i64,
    /// Head count per department name; departments without staff are omitted.
    pub department_distribution: BTreeMap<String, i64>,
    /// Most recently registered employees, newest first.
    pub recent_employees: Vec<Employee>,
}
