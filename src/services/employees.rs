//! Employee directory service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        employee::{Employee, EmployeeRequest},
        enums::EmployeeStatus,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct EmployeesService {
    repository: Repository,
}

impl EmployeesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Employee>> {
        self.repository.employees.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Employee> {
        self.repository.employees.get_by_id(id).await
    }

    /// Create an employee; the email must not exist yet
    pub async fn create(&self, data: EmployeeRequest) -> AppResult<Employee> {
        let data = data.normalized();
        data.validate()?;

        let mut tx = self.repository.begin().await?;

        if self
            .repository
            .employees
            .email_owner(&mut tx, &data.email)
            .await?
            .is_some()
        {
            tracing::warn!(email = %data.email, "Rejected duplicate employee email");
            return Err(AppError::Conflict(format!(
                "Employee with email {} already exists",
                data.email
            )));
        }

        let employee = self.repository.employees.create(&mut tx, &data).await?;
        tx.commit().await?;

        tracing::info!(employee_id = employee.id, "Employee created");
        Ok(employee)
    }

    /// Replace an employee's fields; the email may only collide with the employee itself
    pub async fn update(&self, id: i64, data: EmployeeRequest) -> AppResult<Employee> {
        let data = data.normalized();
        data.validate()?;

        let mut tx = self.repository.begin().await?;

        // Existence first so a missing id answers NotFound, not Conflict
        self.repository.employees.lock_by_id(&mut tx, id).await?;

        match self.repository.employees.email_owner(&mut tx, &data.email).await? {
            Some(owner) if owner != id => {
                tracing::warn!(employee_id = id, owner, "Rejected email in use");
                return Err(AppError::Conflict(
                    "Email already in use by another employee".to_string(),
                ));
            }
            _ => {}
        }

        let employee = self.repository.employees.update(&mut tx, id, &data).await?;
        tx.commit().await?;

        tracing::info!(employee_id = id, status = %employee.status, "Employee updated");
        Ok(employee)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.employees.delete(id).await?;
        tracing::info!(employee_id = id, "Employee deleted");
        Ok(())
    }

    pub async fn list_active(&self) -> AppResult<Vec<Employee>> {
        self.repository
            .employees
            .list_by_status(EmployeeStatus::Active)
            .await
    }
}
