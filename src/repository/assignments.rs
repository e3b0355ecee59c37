//! Assignment history repository for database operations

use chrono::NaiveDate;
use sqlx::{FromRow, PgConnection, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        asset::Asset,
        assignment::{Assignment, AssignmentDetails},
        employee::Employee,
        enums::{AssetCondition, AssetStatus, EmployeeStatus},
    },
};

/// Assignment joined with its asset and employee
const DETAILS_SELECT: &str = r#"
    SELECT h.id, h.asset_id, h.employee_id, h.assigned_date, h.returned_date, h.notes,
           a.asset_name, a.asset_type, a.make_model, a.serial_number, a.purchase_date,
           a.warranty_expiry_date, a.asset_condition, a.status AS asset_status,
           a.is_spare, a.specifications,
           e.full_name, e.department, e.email, e.phone_number, e.designation,
           e.status AS employee_status
    FROM assignment_history h
    JOIN assets a ON a.id = h.asset_id
    JOIN employees e ON e.id = h.employee_id
"#;

/// Flat row of `DETAILS_SELECT`
#[derive(Debug, FromRow)]
struct AssignmentDetailsRow {
    id: i64,
    asset_id: i64,
    employee_id: i64,
    assigned_date: NaiveDate,
    returned_date: Option<NaiveDate>,
    notes: Option<String>,
    asset_name: String,
    asset_type: String,
    make_model: String,
    serial_number: String,
    purchase_date: NaiveDate,
    warranty_expiry_date: Option<NaiveDate>,
    asset_condition: AssetCondition,
    asset_status: AssetStatus,
    is_spare: bool,
    specifications: Option<String>,
    full_name: String,
    department: String,
    email: String,
    phone_number: String,
    designation: String,
    employee_status: EmployeeStatus,
}

impl From<AssignmentDetailsRow> for AssignmentDetails {
    fn from(row: AssignmentDetailsRow) -> Self {
        AssignmentDetails {
            id: row.id,
            asset_id: row.asset_id,
            employee_id: row.employee_id,
            assigned_date: row.assigned_date,
            returned_date: row.returned_date,
            notes: row.notes,
            asset: Asset {
                id: row.asset_id,
                asset_name: row.asset_name,
                asset_type: row.asset_type,
                make_model: row.make_model,
                serial_number: row.serial_number,
                purchase_date: row.purchase_date,
                warranty_expiry_date: row.warranty_expiry_date,
                condition: row.asset_condition,
                status: row.asset_status,
                is_spare: row.is_spare,
                specifications: row.specifications,
            },
            employee: Employee {
                id: row.employee_id,
                full_name: row.full_name,
                department: row.department,
                email: row.email,
                phone_number: row.phone_number,
                designation: row.designation,
                status: row.employee_status,
            },
        }
    }
}

#[derive(Clone)]
pub struct AssignmentsRepository {
    pool: Pool<Postgres>,
}

impl AssignmentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// All assignments, oldest first
    pub async fn list(&self) -> AppResult<Vec<AssignmentDetails>> {
        let query = format!("{} ORDER BY h.id", DETAILS_SELECT);
        let rows = sqlx::query_as::<_, AssignmentDetailsRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(AssignmentDetails::from).collect())
    }

    /// Assignment history of one asset
    pub async fn list_by_asset(&self, asset_id: i64) -> AppResult<Vec<AssignmentDetails>> {
        let query = format!("{} WHERE h.asset_id = $1 ORDER BY h.id", DETAILS_SELECT);
        let rows = sqlx::query_as::<_, AssignmentDetailsRow>(&query)
            .bind(asset_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(AssignmentDetails::from).collect())
    }

    /// Assignment history of one employee
    pub async fn list_by_employee(&self, employee_id: i64) -> AppResult<Vec<AssignmentDetails>> {
        let query = format!("{} WHERE h.employee_id = $1 ORDER BY h.id", DETAILS_SELECT);
        let rows = sqlx::query_as::<_, AssignmentDetailsRow>(&query)
            .bind(employee_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(AssignmentDetails::from).collect())
    }

    /// The open assignment of an asset, if it is checked out
    pub async fn find_active_by_asset(&self, asset_id: i64) -> AppResult<Option<AssignmentDetails>> {
        let query = format!(
            "{} WHERE h.asset_id = $1 AND h.returned_date IS NULL",
            DETAILS_SELECT
        );
        let row = sqlx::query_as::<_, AssignmentDetailsRow>(&query)
            .bind(asset_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(AssignmentDetails::from))
    }

    /// Whether the asset has an open assignment
    pub async fn has_active(&self, conn: &mut PgConnection, asset_id: i64) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM assignment_history WHERE asset_id = $1 AND returned_date IS NULL)",
        )
        .bind(asset_id)
        .fetch_one(&mut *conn)
        .await?;
        Ok(exists)
    }

    /// Get assignment by ID and lock the row until the transaction ends
    pub async fn lock_by_id(&self, conn: &mut PgConnection, id: i64) -> AppResult<Assignment> {
        sqlx::query_as::<_, Assignment>("SELECT * FROM assignment_history WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Assignment with id {} not found", id)))
    }

    /// Open a new assignment.
    ///
    /// A second open assignment for the same asset violates
    /// `uq_assignment_history_active_asset` and surfaces as `AppError::Conflict`.
    pub async fn create(
        &self,
        conn: &mut PgConnection,
        asset_id: i64,
        employee_id: i64,
        assigned_date: NaiveDate,
        notes: Option<&str>,
    ) -> AppResult<Assignment> {
        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            INSERT INTO assignment_history (asset_id, employee_id, assigned_date, notes)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(asset_id)
        .bind(employee_id)
        .bind(assigned_date)
        .bind(notes)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::Conflict(_) => {
                AppError::Conflict(format!("Asset {} is already assigned", asset_id))
            }
            other => other,
        })?;
        Ok(assignment)
    }

    /// Close an assignment
    pub async fn mark_returned(
        &self,
        conn: &mut PgConnection,
        id: i64,
        returned_date: NaiveDate,
        notes: Option<&str>,
    ) -> AppResult<Assignment> {
        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            UPDATE assignment_history SET returned_date = $1, notes = $2
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(returned_date)
        .bind(notes)
        .bind(id)
        .fetch_one(&mut *conn)
        .await?;
        Ok(assignment)
    }
}
