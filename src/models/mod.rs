//! Data models for the asset tracker

pub mod asset;
pub mod assignment;
pub mod auth;
pub mod employee;
pub mod enums;

// Re-export commonly used types
pub use asset::{Asset, AssetRequest, AssetStatistics, Page, PageRequest};
pub use assignment::{AssignRequest, Assignment, AssignmentDetails, ReturnRequest};
pub use employee::{Employee, EmployeeRequest};
pub use enums::{AssetCondition, AssetStatus, EmployeeStatus};
