//! Assignment history model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{asset::Asset, employee::Employee};

/// Assignment history row as stored
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Assignment {
    pub id: i64,
    pub asset_id: i64,
    pub employee_id: i64,
    pub assigned_date: NaiveDate,
    /// `None` while the asset is checked out
    pub returned_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Assignment {
    pub fn is_active(&self) -> bool {
        self.returned_date.is_none()
    }
}

/// Assignment with the referenced asset and employee
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDetails {
    pub id: i64,
    pub asset_id: i64,
    pub employee_id: i64,
    pub assigned_date: NaiveDate,
    pub returned_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub asset: Asset,
    pub employee: Employee,
}

impl AssignmentDetails {
    pub fn new(assignment: Assignment, asset: Asset, employee: Employee) -> Self {
        Self {
            id: assignment.id,
            asset_id: assignment.asset_id,
            employee_id: assignment.employee_id,
            assigned_date: assignment.assigned_date,
            returned_date: assignment.returned_date,
            notes: assignment.notes,
            asset,
            employee,
        }
    }
}

/// Assign asset request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequest {
    pub asset_id: i64,
    pub employee_id: i64,
    pub notes: Option<String>,
}

/// Return asset request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ReturnRequest {
    pub notes: Option<String>,
}

/// Append return notes to the notes recorded at assignment time.
///
/// Blank return notes leave the existing notes untouched.
pub fn append_return_notes(existing: Option<&str>, return_notes: Option<&str>) -> Option<String> {
    let return_notes = match return_notes.map(str::trim) {
        Some(notes) if !notes.is_empty() => notes,
        _ => return existing.map(str::to_string),
    };

    let line = format!("Return notes: {}", return_notes);
    match existing {
        Some(prior) if !prior.is_empty() => Some(format!("{}\n{}", prior, line)),
        _ => Some(line),
    }
}
