//! Asset model and related types

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::{AssetCondition, AssetStatus};
use crate::error::AppError;

/// Asset record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: i64,
    pub asset_name: String,
    /// Free-form category (Laptop, Monitor, ...)
    pub asset_type: String,
    pub make_model: String,
    /// Unique across all assets
    pub serial_number: String,
    pub purchase_date: NaiveDate,
    pub warranty_expiry_date: Option<NaiveDate>,
    #[sqlx(rename = "asset_condition")]
    pub condition: AssetCondition,
    pub status: AssetStatus,
    /// Held in reserve rather than in active rotation
    pub is_spare: bool,
    pub specifications: Option<String>,
}

/// Create or update asset request.
///
/// Updates replace every editable field.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetRequest {
    #[validate(length(min = 1, message = "Asset name is required"))]
    pub asset_name: String,
    #[validate(length(min = 1, message = "Asset type is required"))]
    pub asset_type: String,
    #[validate(length(min = 1, message = "Make/model is required"))]
    pub make_model: String,
    #[validate(length(min = 1, message = "Serial number is required"))]
    pub serial_number: String,
    pub purchase_date: NaiveDate,
    pub warranty_expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub condition: AssetCondition,
    #[serde(default)]
    pub status: AssetStatus,
    #[serde(default)]
    pub is_spare: bool,
    pub specifications: Option<String>,
}

impl AssetRequest {
    /// Trim surrounding whitespace so blank values fail validation
    pub fn normalized(mut self) -> Self {
        self.asset_name = self.asset_name.trim().to_string();
        self.asset_type = self.asset_type.trim().to_string();
        self.make_model = self.make_model.trim().to_string();
        self.serial_number = self.serial_number.trim().to_string();
        self
    }
}

/// Asset counts by status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetStatistics {
    pub total: i64,
    pub available: i64,
    pub assigned: i64,
    pub under_repair: i64,
    pub retired: i64,
    pub spare: i64,
}

impl AssetStatistics {
    /// Build from `(status, count)` rows of a `GROUP BY status` query
    pub fn from_status_counts(rows: &[(AssetStatus, i64)], spare: i64) -> Self {
        let mut stats = AssetStatistics {
            spare,
            ..Default::default()
        };
        for (status, count) in rows {
            stats.total += count;
            match status {
                AssetStatus::Available => stats.available += count,
                AssetStatus::Assigned => stats.assigned += count,
                AssetStatus::UnderRepair => stats.under_repair += count,
                AssetStatus::Retired => stats.retired += count,
            }
        }
        stats
    }
}

/// Asset type -> number of assets of that type
pub type AssetTypeCounts = BTreeMap<String, i64>;

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

pub const DEFAULT_PAGE_SIZE: u32 = 10;

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_sort_by() -> String {
    "id".to_string()
}

fn default_sort_dir() -> String {
    "ASC".to_string()
}

/// Paginated asset listing query
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AssetPageQuery {
    /// Zero-based page index
    #[serde(default)]
    pub page: u32,
    /// Page size (1-100)
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100, message = "Page size must be between 1 and 100"))]
    pub size: u32,
    /// Asset field to sort by (camelCase)
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    /// ASC or DESC
    #[serde(default = "default_sort_dir")]
    pub sort_dir: String,
}

impl Default for AssetPageQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort_by: default_sort_by(),
            sort_dir: default_sort_dir(),
        }
    }
}

/// Sortable asset columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSortField {
    Id,
    AssetName,
    AssetType,
    MakeModel,
    SerialNumber,
    PurchaseDate,
    WarrantyExpiryDate,
    Condition,
    Status,
    IsSpare,
}

impl AssetSortField {
    pub fn column(&self) -> &'static str {
        match self {
            AssetSortField::Id => "id",
            AssetSortField::AssetName => "asset_name",
            AssetSortField::AssetType => "asset_type",
            AssetSortField::MakeModel => "make_model",
            AssetSortField::SerialNumber => "serial_number",
            AssetSortField::PurchaseDate => "purchase_date",
            AssetSortField::WarrantyExpiryDate => "warranty_expiry_date",
            AssetSortField::Condition => "asset_condition",
            AssetSortField::Status => "status",
            AssetSortField::IsSpare => "is_spare",
        }
    }
}

impl std::str::FromStr for AssetSortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(AssetSortField::Id),
            "assetName" => Ok(AssetSortField::AssetName),
            "assetType" => Ok(AssetSortField::AssetType),
            "makeModel" => Ok(AssetSortField::MakeModel),
            "serialNumber" => Ok(AssetSortField::SerialNumber),
            "purchaseDate" => Ok(AssetSortField::PurchaseDate),
            "warrantyExpiryDate" => Ok(AssetSortField::WarrantyExpiryDate),
            "condition" => Ok(AssetSortField::Condition),
            "status" => Ok(AssetSortField::Status),
            "isSpare" => Ok(AssetSortField::IsSpare),
            _ => Err(AppError::Validation(format!("Cannot sort assets by '{}'", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Anything other than `DESC` (case-insensitive) sorts ascending
    pub fn from_param(s: &str) -> Self {
        if s.eq_ignore_ascii_case("DESC") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: AssetSortField,
    pub direction: SortDirection,
}

impl PageRequest {
    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    /// `ORDER BY` clause; ties broken by id so pages do not overlap
    pub fn order_by(&self) -> String {
        let dir = self.direction.as_sql();
        if self.sort == AssetSortField::Id {
            format!("id {}", dir)
        } else {
            format!("{} {}, id {}", self.sort.column(), dir, dir)
        }
    }
}

impl TryFrom<&AssetPageQuery> for PageRequest {
    type Error = AppError;

    fn try_from(query: &AssetPageQuery) -> Result<Self, Self::Error> {
        query.validate()?;
        Ok(PageRequest {
            page: query.page,
            size: query.size,
            sort: query.sort_by.parse()?,
            direction: SortDirection::from_param(&query.sort_dir),
        })
    }
}

/// One page of results
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[aliases(AssetPage = Page<Asset>)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    /// Zero-based page index
    pub number: u32,
    pub size: u32,
    pub first: bool,
    pub last: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total_elements: i64, request: &PageRequest) -> Self {
        let size = i64::from(request.size);
        let total_pages = (total_elements + size - 1) / size;
        Page {
            content,
            total_elements,
            total_pages,
            number: request.page,
            size: request.size,
            first: request.page == 0,
            last: i64::from(request.page) + 1 >= total_pages,
        }
    }
}
