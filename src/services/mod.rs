//! Business logic services

pub mod assets;
pub mod assignments;
pub mod employees;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub assets: assets::AssetsService,
    pub employees: employees::EmployeesService,
    pub assignments: assignments::AssignmentsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            assets: assets::AssetsService::new(repository.clone()),
            employees: employees::EmployeesService::new(repository.clone()),
            assignments: assignments::AssignmentsService::new(repository.clone()),
            repository,
        }
    }

    /// Check that the database answers
    pub async fn ping(&self) -> crate::error::AppResult<()> {
        self.repository.ping().await
    }
}
