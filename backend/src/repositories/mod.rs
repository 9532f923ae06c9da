pub mod attendance;
pub mod employee;

pub use attendance::{AttendanceRepository, AttendanceRepositoryTrait, DailyCounts};
pub use employee::{EmployeeRepository, EmployeeRepositoryTrait};
