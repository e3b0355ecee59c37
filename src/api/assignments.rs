//! Assignment (checkout/return) endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::assignment::{AssignRequest, AssignmentDetails, ReturnRequest},
    AppState,
};

/// List all assignments
#[utoipa::path(
    get,
    path = "/assignments",
    tag = "assignments",
    responses(
        (status = 200, description = "All assignments", body = Vec<AssignmentDetails>)
    )
)]
pub async fn list_assignments(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AssignmentDetails>>> {
    let assignments = state.services.assignments.list().await?;
    Ok(Json(assignments))
}

/// Assign an available asset to an employee
#[utoipa::path(
    post,
    path = "/assignments/assign",
    tag = "assignments",
    request_body = AssignRequest,
    responses(
        (status = 201, description = "Asset assigned", body = AssignmentDetails),
        (status = 400, description = "Unknown asset or employee, asset not available, or already assigned", body = crate::error::ErrorResponse)
    )
)]
pub async fn assign_asset(
    State(state): State<AppState>,
    Json(request): Json<AssignRequest>,
) -> AppResult<(StatusCode, Json<AssignmentDetails>)> {
    let assignment = state
        .services
        .assignments
        .assign(request.asset_id, request.employee_id, request.notes.as_deref())
        .await
        .map_err(AppError::on_write)?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// Return an assigned asset
#[utoipa::path(
    put,
    path = "/assignments/return/{id}",
    tag = "assignments",
    params(("id" = i64, Path, description = "Assignment ID")),
    request_body = ReturnRequest,
    responses(
        (status = 200, description = "Asset returned", body = AssignmentDetails),
        (status = 400, description = "Unknown assignment or already returned", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_asset(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<ReturnRequest>,
) -> AppResult<Json<AssignmentDetails>> {
    let assignment = state
        .services
        .assignments
        .return_asset(id, request.notes.as_deref())
        .await
        .map_err(AppError::on_write)?;
    Ok(Json(assignment))
}

/// Assignment history of an asset
#[utoipa::path(
    get,
    path = "/assignments/asset/{id}",
    tag = "assignments",
    params(("id" = i64, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Assignments of the asset", body = Vec<AssignmentDetails>)
    )
)]
pub async fn list_asset_assignments(
    State(state): State<AppState>,
    Path(asset_id): Path<i64>,
) -> AppResult<Json<Vec<AssignmentDetails>>> {
    let assignments = state.services.assignments.list_by_asset(asset_id).await?;
    Ok(Json(assignments))
}

/// Assignment history of an employee
#[utoipa::path(
    get,
    path = "/assignments/employee/{id}",
    tag = "assignments",
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Assignments of the employee", body = Vec<AssignmentDetails>)
    )
)]
pub async fn list_employee_assignments(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> AppResult<Json<Vec<AssignmentDetails>>> {
    let assignments = state
        .services
        .assignments
        .list_by_employee(employee_id)
        .await?;
    Ok(Json(assignments))
}

/// Open assignment of an asset
#[utoipa::path(
    get,
    path = "/assignments/asset/{id}/active",
    tag = "assignments",
    params(("id" = i64, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Open assignment", body = AssignmentDetails),
        (status = 404, description = "Asset is not assigned", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_active_assignment(
    State(state): State<AppState>,
    Path(asset_id): Path<i64>,
) -> AppResult<Json<AssignmentDetails>> {
    state
        .services
        .assignments
        .active_for_asset(asset_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Asset {} has no active assignment", asset_id)))
}
