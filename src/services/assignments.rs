//! Assignment lifecycle service
//!
//! An asset cycles AVAILABLE -> ASSIGNED -> AVAILABLE. Each transition writes
//! the asset status and the history row in one transaction; an early return
//! drops the transaction and rolls both back.

use chrono::{Local, NaiveDate};

use crate::{
    error::{AppError, AppResult},
    models::{
        asset::Asset,
        assignment::{append_return_notes, Assignment, AssignmentDetails},
        enums::AssetStatus,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct AssignmentsService {
    repository: Repository,
}

impl AssignmentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Check an available asset out to an employee
    pub async fn assign(
        &self,
        asset_id: i64,
        employee_id: i64,
        notes: Option<&str>,
    ) -> AppResult<AssignmentDetails> {
        let mut tx = self.repository.begin().await?;

        // Row lock on the asset serialises concurrent assigns of the same asset
        let asset = self.repository.assets.lock_by_id(&mut tx, asset_id).await?;
        let employee = self
            .repository
            .employees
            .share_lock_by_id(&mut tx, employee_id)
            .await?;

        ensure_assignable(&asset)?;

        if self.repository.assignments.has_active(&mut tx, asset_id).await? {
            tracing::warn!(asset_id, "Asset is AVAILABLE but has an open assignment");
            return Err(AppError::Conflict(format!(
                "Asset {} is already assigned",
                asset_id
            )));
        }

        let assignment = self
            .repository
            .assignments
            .create(&mut tx, asset_id, employee_id, today(), notes)
            .await?;
        let asset = self
            .repository
            .assets
            .set_status(&mut tx, asset_id, AssetStatus::Assigned)
            .await?;

        tx.commit().await?;

        tracing::info!(
            assignment_id = assignment.id,
            asset_id,
            employee_id,
            "Asset assigned"
        );
        Ok(AssignmentDetails::new(assignment, asset, employee))
    }

    /// Close an open assignment and make the asset available again
    pub async fn return_asset(
        &self,
        assignment_id: i64,
        notes: Option<&str>,
    ) -> AppResult<AssignmentDetails> {
        let mut tx = self.repository.begin().await?;

        let assignment = self
            .repository
            .assignments
            .lock_by_id(&mut tx, assignment_id)
            .await?;

        ensure_returnable(&assignment)?;

        let notes = append_return_notes(assignment.notes.as_deref(), notes);
        let assignment = self
            .repository
            .assignments
            .mark_returned(&mut tx, assignment_id, today(), notes.as_deref())
            .await?;
        let asset = self
            .repository
            .assets
            .set_status(&mut tx, assignment.asset_id, AssetStatus::Available)
            .await?;
        let employee = self
            .repository
            .employees
            .share_lock_by_id(&mut tx, assignment.employee_id)
            .await?;

        tx.commit().await?;

        tracing::info!(
            assignment_id,
            asset_id = assignment.asset_id,
            employee_id = assignment.employee_id,
            "Asset returned"
        );
        Ok(AssignmentDetails::new(assignment, asset, employee))
    }

    pub async fn list(&self) -> AppResult<Vec<AssignmentDetails>> {
        self.repository.assignments.list().await
    }

    pub async fn list_by_asset(&self, asset_id: i64) -> AppResult<Vec<AssignmentDetails>> {
        self.repository.assignments.list_by_asset(asset_id).await
    }

    pub async fn list_by_employee(&self, employee_id: i64) -> AppResult<Vec<AssignmentDetails>> {
        self.repository.assignments.list_by_employee(employee_id).await
    }

    /// The open assignment of an asset, `None` when it is not checked out
    pub async fn active_for_asset(&self, asset_id: i64) -> AppResult<Option<AssignmentDetails>> {
        self.repository.assignments.find_active_by_asset(asset_id).await
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Only AVAILABLE assets can be assigned
pub(crate) fn ensure_assignable(asset: &Asset) -> AppResult<()> {
    if asset.status != AssetStatus::Available {
        return Err(AppError::InvalidState(format!(
            "Asset {} is not available for assignment (status {})",
            asset.id, asset.status
        )));
    }
    Ok(())
}

/// An assignment can be returned once
pub(crate) fn ensure_returnable(assignment: &Assignment) -> AppResult<()> {
    if !assignment.is_active() {
        return Err(AppError::InvalidState(format!(
            "Assignment {} has already been returned",
            assignment.id
        )));
    }
    Ok(())
}
