#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{
        AttendanceRecord, AttendanceStatus, DashboardStats, Department, Employee, EmployeeId,
        EmployeeStatus,
    };
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::collections::BTreeMap;

    pub fn employee(id: EmployeeId, name: &str, department: Department) -> Employee {
        Employee {
            id,
            employee_id: format!("EMP-{:03}", id),
            full_name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            department,
            designation: "Staff".into(),
            status: EmployeeStatus::Active,
            created_at: Utc.with_ymd_and_hms(2024, 1, id as u32, 9, 0, 0).single(),
        }
    }

    pub fn roster() -> Vec<Employee> {
        vec![
            employee(1, "Alice", Department::Engineering),
            employee(2, "Bob", Department::HumanResources),
            employee(3, "Carol", Department::Finance),
        ]
    }

    pub fn record(
        id: i64,
        employee_id: EmployeeId,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id,
            date,
            status,
            check_in_time: (status == AttendanceStatus::Present).then(|| "09:00 AM".to_string()),
            remarks: Some(match status {
                AttendanceStatus::Present => "On-time".to_string(),
                AttendanceStatus::Absent => "No information".to_string(),
            }),
        }
    }

    pub fn dashboard_stats() -> DashboardStats {
        let mut distribution = BTreeMap::new();
        distribution.insert("Engineering".to_string(), 2);
        distribution.insert("Finance".to_string(), 1);
        DashboardStats {
            total_employees: 3,
            present_today: 2,
            absent_today: 1,
            department_distribution: distribution,
            recent_employees: roster().into_iter().rev().collect(),
        }
    }
}
