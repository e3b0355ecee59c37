//! Repository layer for database operations

pub mod assets;
pub mod assignments;
pub mod employees;

use sqlx::{Pool, Postgres, Transaction};

use crate::error::AppResult;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub assets: assets::AssetsRepository,
    pub employees: employees::EmployeesRepository,
    pub assignments: assignments::AssignmentsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            assets: assets::AssetsRepository::new(pool.clone()),
            employees: employees::EmployeesRepository::new(pool.clone()),
            assignments: assignments::AssignmentsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Start a transaction. Dropping it without `commit` rolls everything back.
    pub async fn begin(&self) -> AppResult<Transaction<'static, Postgres>> {
        Ok(self.pool.begin().await?)
    }

    /// Round-trip to the database (readiness probe)
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
