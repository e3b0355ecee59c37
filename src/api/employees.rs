//! Employee directory endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::employee::{Employee, EmployeeRequest},
    AppState,
};

/// List all employees
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "employees",
    responses(
        (status = 200, description = "All employees", body = Vec<Employee>)
    )
)]
pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.services.employees.list().await?;
    Ok(Json(employees))
}

/// List active employees
#[utoipa::path(
    get,
    path = "/api/employees/active",
    tag = "employees",
    responses(
        (status = 200, description = "Employees with status ACTIVE", body = Vec<Employee>)
    )
)]
pub async fn list_active_employees(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.services.employees.list_active().await?;
    Ok(Json(employees))
}

/// Get employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee details", body = Employee),
        (status = 404, description = "Employee not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let employee = state.services.employees.get_by_id(id).await?;
    Ok(Json(employee))
}

/// Create an employee
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "employees",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Invalid data or duplicate email", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(data): Json<EmployeeRequest>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let employee = state.services.employees.create(data).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Update an employee
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Unknown employee, invalid data or email in use", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<EmployeeRequest>,
) -> AppResult<Json<Employee>> {
    let employee = state
        .services
        .employees
        .update(id, data)
        .await
        .map_err(AppError::on_write)?;
    Ok(Json(employee))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 400, description = "Employee has assignment history", body = crate::error::ErrorResponse),
        (status = 404, description = "Employee not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.employees.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
