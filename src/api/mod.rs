//! API handlers for the asset tracker REST endpoints

pub mod assets;
pub mod assignments;
pub mod auth;
pub mod employees;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
    routing::{get, post, put},
    Router,
};
use std::convert::Infallible;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{models::auth::UserClaims, AppState};

/// Caller identity from an optional bearer token.
///
/// Business endpoints are open, so a missing or invalid token is not an
/// error; it just leaves the caller anonymous.
pub struct MaybeUser(pub Option<UserClaims>);

#[async_trait]
impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        let Some(token) = token else {
            return Ok(MaybeUser(None));
        };

        match UserClaims::from_token(token, &state.config.auth.jwt_secret) {
            Ok(claims) => Ok(MaybeUser(Some(claims))),
            Err(e) => {
                tracing::debug!("Ignoring invalid bearer token: {}", e);
                Ok(MaybeUser(None))
            }
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // Open CORS: every origin, method and header
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Authentication status
        .route("/auth/user", get(auth::current_user))
        .route("/auth/login", get(auth::login_hint))
        // Assets
        .route("/assets", get(assets::list_assets).post(assets::create_asset))
        .route("/assets/paginated", get(assets::list_assets_paginated))
        .route("/assets/statistics", get(assets::get_statistics))
        .route("/assets/statistics/by-type", get(assets::get_counts_by_type))
        .route("/assets/type/:asset_type", get(assets::list_assets_by_type))
        .route("/assets/status/:status", get(assets::list_assets_by_status))
        .route(
            "/assets/:id",
            get(assets::get_asset)
                .put(assets::update_asset)
                .delete(assets::delete_asset),
        )
        // Employees
        .route(
            "/api/employees",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route("/api/employees/active", get(employees::list_active_employees))
        .route(
            "/api/employees/:id",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
        // Assignments
        .route("/assignments", get(assignments::list_assignments))
        .route("/assignments/assign", post(assignments::assign_asset))
        .route("/assignments/return/:id", put(assignments::return_asset))
        .route("/assignments/asset/:id", get(assignments::list_asset_assignments))
        .route(
            "/assignments/asset/:id/active",
            get(assignments::get_active_assignment),
        )
        .route(
            "/assignments/employee/:id",
            get(assignments::list_employee_assignments),
        )
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
