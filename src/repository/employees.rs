//! Employees repository for database operations

use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        employee::{Employee, EmployeeRequest},
        enums::EmployeeStatus,
    },
};

#[derive(Clone)]
pub struct EmployeesRepository {
    pool: Pool<Postgres>,
}

impl EmployeesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all employees
    pub async fn list(&self) -> AppResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>("SELECT * FROM employees ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(employees)
    }

    /// Get employee by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Get employee by ID and lock the row until the transaction ends
    pub async fn lock_by_id(&self, conn: &mut PgConnection, id: i64) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Get employee by ID, blocking concurrent deletes until the transaction ends
    pub async fn share_lock_by_id(&self, conn: &mut PgConnection, id: i64) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1 FOR SHARE")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// ID of the employee holding this email, if any
    pub async fn email_owner(&self, conn: &mut PgConnection, email: &str) -> AppResult<Option<i64>> {
        let id = sqlx::query_scalar("SELECT id FROM employees WHERE email = $1")
            .bind(email)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(id)
    }

    /// Insert an employee
    pub async fn create(
        &self,
        conn: &mut PgConnection,
        data: &EmployeeRequest,
    ) -> AppResult<Employee> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (full_name, department, email, phone_number, designation, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.full_name)
        .bind(&data.department)
        .bind(&data.email)
        .bind(&data.phone_number)
        .bind(&data.designation)
        .bind(data.status)
        .fetch_one(&mut *conn)
        .await?;
        Ok(employee)
    }

    /// Replace every editable field of an employee
    pub async fn update(
        &self,
        conn: &mut PgConnection,
        id: i64,
        data: &EmployeeRequest,
    ) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>(
            r#"
            UPDATE employees SET
                full_name = $1, department = $2, email = $3,
                phone_number = $4, designation = $5, status = $6
            WHERE id = $7
            RETURNING *
            "#,
        )
        .bind(&data.full_name)
        .bind(&data.department)
        .bind(&data.email)
        .bind(&data.phone_number)
        .bind(&data.designation)
        .bind(data.status)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| not_found(id))
    }

    /// Delete an employee
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    /// Employees in the given status
    pub async fn list_by_status(&self, status: EmployeeStatus) -> AppResult<Vec<Employee>> {
        let employees =
            sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE status = $1 ORDER BY id")
                .bind(status)
                .fetch_all(&self.pool)
                .await?;
        Ok(employees)
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Employee with id {} not found", id))
}
