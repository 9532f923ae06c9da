use leptos::*;
use thiserror::Error;
use validator::ValidateEmail;

use crate::api::{Department, Employee, EmployeeStatus, NewEmployee};

pub const PAGE_SIZE: usize = 5;
pub const DEFAULT_DESIGNATION: &str = "Staff";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmployeeFormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Enter a valid email address")]
    InvalidEmail,
}

/// Plain snapshot of the add-employee form.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: Department,
    pub designation: String,
    pub status: EmployeeStatus,
}

impl EmployeeDraft {
    pub fn validate(&self) -> Result<NewEmployee, EmployeeFormError> {
        let employee_id = required(&self.employee_id, "Employee ID")?;
        let full_name = required(&self.full_name, "Full name")?;
        let email = required(&self.email, "Email")?.to_lowercase();
        if !email.validate_email() {
            return Err(EmployeeFormError::InvalidEmail);
        }
        let designation = match self.designation.trim() {
            "" => DEFAULT_DESIGNATION.to_string(),
            value => value.to_string(),
        };
        Ok(NewEmployee {
            employee_id,
            full_name,
            email,
            department: self.department,
            designation,
            status: self.status,
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, EmployeeFormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(EmployeeFormError::Required(field))
    } else {
        Ok(trimmed.to_string())
    }
}

#[derive(Clone, Copy)]
pub struct EmployeeFormState {
    employee_id: RwSignal<String>,
    full_name: RwSignal<String>,
    email: RwSignal<String>,
    department: RwSignal<Department>,
    designation: RwSignal<String>,
    status: RwSignal<EmployeeStatus>,
}

impl Default for EmployeeFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeFormState {
    pub fn new() -> Self {
        Self {
            employee_id: create_rw_signal(String::new()),
            full_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            department: create_rw_signal(Department::Engineering),
            designation: create_rw_signal(String::new()),
            status: create_rw_signal(EmployeeStatus::Active),
        }
    }

    pub fn employee_id_signal(&self) -> RwSignal<String> {
        self.employee_id
    }

    pub fn full_name_signal(&self) -> RwSignal<String> {
        self.full_name
    }

    pub fn email_signal(&self) -> RwSignal<String> {
        self.email
    }

    pub fn department_signal(&self) -> RwSignal<Department> {
        self.department
    }

    pub fn designation_signal(&self) -> RwSignal<String> {
        self.designation
    }

    pub fn status_signal(&self) -> RwSignal<EmployeeStatus> {
        self.status
    }

    pub fn draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            employee_id: self.employee_id.get_untracked(),
            full_name: self.full_name.get_untracked(),
            email: self.email.get_untracked(),
            department: self.department.get_untracked(),
            designation: self.designation.get_untracked(),
            status: self.status.get_untracked(),
        }
    }

    pub fn to_request(&self) -> Result<NewEmployee, EmployeeFormError> {
        self.draft().validate()
    }

    pub fn reset(&self) {
        self.employee_id.set(String::new());
        self.full_name.set(String::new());
        self.email.set(String::new());
        self.department.set(Department::Engineering);
        self.designation.set(String::new());
        self.status.set(EmployeeStatus::Active);
    }
}

/// Case-insensitive match on name, business code or department.
pub fn filter_employees(employees: &[Employee], query: &str) -> Vec<Employee> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return employees.to_vec();
    }
    employees
        .iter()
        .filter(|employee| {
            employee.full_name.to_lowercase().contains(&needle)
                || employee.employee_id.to_lowercase().contains(&needle)
                || employee.department.as_str().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
    pub first: usize,
    pub last: usize,
}

impl<T> Page<T> {
    pub fn caption(&self, noun: &str) -> String {
        if self.total == 0 {
            format!("No {}", noun)
        } else {
            format!("Showing {}-{} of {} {}", self.first, self.last, self.total, noun)
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// 1-based page of `PAGE_SIZE` items; out-of-range pages clamp to the last one.
pub fn paginate<T: Clone>(items: &[T], page: usize) -> Page<T> {
    let total = items.len();
    let total_pages = total.div_ceil(PAGE_SIZE).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(total);
    Page {
        items: items[start.min(total)..end].to_vec(),
        page,
        total_pages,
        total,
        first: if total == 0 { 0 } else { start + 1 },
        last: end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{employee, roster};

    fn draft() -> EmployeeDraft {
        EmployeeDraft {
            employee_id: " EMP-010 ".into(),
            full_name: "Dana Scully".into(),
            email: "Dana@Example.com".into(),
            department: Department::Operations,
            designation: "  ".into(),
            status: EmployeeStatus::Active,
        }
    }

    #[test]
    fn draft_trims_and_defaults_designation() {
        let request = draft().validate().unwrap();
        assert_eq!(request.employee_id, "EMP-010");
        assert_eq!(request.email, "dana@example.com");
        assert_eq!(request.designation, DEFAULT_DESIGNATION);
        assert_eq!(request.department, Department::Operations);
    }

    #[test]
    fn draft_requires_fields_in_order() {
        let mut blank = draft();
        blank.employee_id.clear();
        blank.full_name.clear();
        assert_eq!(
            blank.validate(),
            Err(EmployeeFormError::Required("Employee ID"))
        );
        blank.employee_id = "EMP-011".into();
        assert_eq!(
            blank.validate().unwrap_err().to_string(),
            "Full name is required"
        );
    }

    #[test]
    fn draft_rejects_bad_email() {
        for email in ["dana", "dana@", "@example.com", "da na@example.com", "dana@@example.com"] {
            let mut bad = draft();
            bad.email = email.into();
            assert_eq!(bad.validate(), Err(EmployeeFormError::InvalidEmail), "{}", email);
        }
    }

    #[test]
    fn draft_accepts_emails_the_backend_accepts() {
        for email in ["dana.scully+hr@example.co.uk", "d_s@sub.example.org"] {
            let mut ok = draft();
            ok.email = email.into();
            assert_eq!(ok.validate().map(|r| r.email), Ok(email.to_string()));
        }
    }

    #[test]
    fn filter_matches_code_name_or_department() {
        let employees = roster();
        assert_eq!(filter_employees(&employees, "emp-002")[0].full_name, "Bob");
        assert_eq!(filter_employees(&employees, "FIN")[0].full_name, "Carol");
        assert_eq!(filter_employees(&employees, "ali")[0].id, 1);
        assert_eq!(filter_employees(&employees, "").len(), 3);
        assert!(filter_employees(&employees, "marketing").is_empty());
        assert!(filter_employees(&employees, "bob ").is_empty());
        assert_eq!(filter_employees(&employees, "human ")[0].full_name, "Bob");
    }

    #[test]
    fn paginate_splits_into_pages_of_five() {
        let employees: Vec<_> = (1..=12)
            .map(|id| employee(id, &format!("Person {}", id), Department::Finance))
            .collect();
        let first = paginate(&employees, 1);
        assert_eq!(first.items.len(), 5);
        assert_eq!(first.caption("employees"), "Showing 1-5 of 12 employees");
        assert!(!first.has_previous());

        let last = paginate(&employees, 3);
        assert_eq!(last.items.len(), 2);
        assert_eq!(last.caption("employees"), "Showing 11-12 of 12 employees");
        assert!(!last.has_next());

        assert_eq!(paginate(&employees, 9).page, 3);
    }

    #[test]
    fn paginate_empty_list() {
        let page = paginate::<Employee>(&[], 2);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.caption("employees"), "No employees");
    }
}
