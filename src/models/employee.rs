//! Employee model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::EmployeeStatus;

/// Employee record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub full_name: String,
    pub department: String,
    /// Unique across all employees
    pub email: String,
    pub phone_number: String,
    pub designation: String,
    pub status: EmployeeStatus,
}

/// Create or update employee request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone_number: String,
    #[validate(length(min = 1, message = "Designation is required"))]
    pub designation: String,
    #[serde(default)]
    pub status: EmployeeStatus,
}

impl EmployeeRequest {
    pub fn normalized(mut self) -> Self {
        self.full_name = self.full_name.trim().to_string();
        self.department = self.department.trim().to_string();
        self.email = self.email.trim().to_string();
        self.phone_number = self.phone_number.trim().to_string();
        self.designation = self.designation.trim().to_string();
        self
    }
}
