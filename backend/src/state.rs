use std::sync::Arc;

use crate::{
    config::Config,
    db::connection::DbPool,
    repositories::{
        AttendanceRepository, AttendanceRepositoryTrait, EmployeeRepository,
        EmployeeRepositoryTrait,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<dyn EmployeeRepositoryTrait>,
    pub attendance: Arc<dyn AttendanceRepositoryTrait>,
    pub config: Config,
}

impl AppState {
    pub fn new(
        employees: Arc<dyn EmployeeRepositoryTrait>,
        attendance: Arc<dyn AttendanceRepositoryTrait>,
        config: Config,
    ) -> Self {
        Self {
            employees,
            attendance,
            config,
        }
    }

    /// Wires the PostgreSQL repositories over a shared pool.
    pub fn from_pool(pool: DbPool, config: Config) -> Self {
        Self::new(
            Arc::new(EmployeeRepository::new(pool.clone())),
            Arc::new(AttendanceRepository::new(pool)),
            config,
        )
    }
}
