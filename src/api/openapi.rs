//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{assets, assignments, auth, employees, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Asset Tracker API",
        version = "1.0.0",
        description = "IT asset inventory and assignment REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::current_user,
        auth::login_hint,
        // Assets
        assets::list_assets,
        assets::list_assets_paginated,
        assets::get_asset,
        assets::create_asset,
        assets::update_asset,
        assets::delete_asset,
        assets::list_assets_by_type,
        assets::list_assets_by_status,
        assets::get_statistics,
        assets::get_counts_by_type,
        // Employees
        employees::list_employees,
        employees::list_active_employees,
        employees::get_employee,
        employees::create_employee,
        employees::update_employee,
        employees::delete_employee,
        // Assignments
        assignments::list_assignments,
        assignments::assign_asset,
        assignments::return_asset,
        assignments::list_asset_assignments,
        assignments::list_employee_assignments,
        assignments::get_active_assignment,
    ),
    components(
        schemas(
            // Enums
            crate::models::enums::AssetCondition,
            crate::models::enums::AssetStatus,
            crate::models::enums::EmployeeStatus,
            // Assets
            crate::models::asset::Asset,
            crate::models::asset::AssetRequest,
            crate::models::asset::AssetStatistics,
            crate::models::asset::AssetPage,
            // Employees
            crate::models::employee::Employee,
            crate::models::employee::EmployeeRequest,
            // Assignments
            crate::models::assignment::AssignmentDetails,
            crate::models::assignment::AssignRequest,
            crate::models::assignment::ReturnRequest,
            // Auth
            crate::models::auth::AuthStatus,
            auth::MessageResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication status"),
        (name = "assets", description = "Asset inventory"),
        (name = "employees", description = "Employee directory"),
        (name = "assignments", description = "Asset assignment and return")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
