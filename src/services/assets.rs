//! Asset directory service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        asset::{
            Asset, AssetPageQuery, AssetRequest, AssetStatistics, AssetTypeCounts, Page,
            PageRequest,
        },
        enums::AssetStatus,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct AssetsService {
    repository: Repository,
}

impl AssetsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Asset>> {
        self.repository.assets.list().await
    }

    pub async fn list_page(&self, query: &AssetPageQuery) -> AppResult<Page<Asset>> {
        let request = PageRequest::try_from(query)?;
        let (assets, total) = self.repository.assets.list_page(&request).await?;
        Ok(Page::new(assets, total, &request))
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Asset> {
        self.repository.assets.get_by_id(id).await
    }

    /// Create an asset; the serial number must not exist yet
    pub async fn create(&self, data: AssetRequest) -> AppResult<Asset> {
        let data = data.normalized();
        data.validate()?;
        check_status_edit(None, data.status)?;

        let mut tx = self.repository.begin().await?;

        if self
            .repository
            .assets
            .serial_number_owner(&mut tx, &data.serial_number)
            .await?
            .is_some()
        {
            tracing::warn!(serial_number = %data.serial_number, "Rejected duplicate serial number");
            return Err(AppError::Conflict(format!(
                "Asset with serial number {} already exists",
                data.serial_number
            )));
        }

        let asset = self.repository.assets.create(&mut tx, &data).await?;
        tx.commit().await?;

        tracing::info!(asset_id = asset.id, serial_number = %asset.serial_number, "Asset created");
        Ok(asset)
    }

    /// Replace an asset's fields.
    ///
    /// The serial number may only collide with the asset itself, and status
    /// edits may not bypass the assignment workflow.
    pub async fn update(&self, id: i64, data: AssetRequest) -> AppResult<Asset> {
        let data = data.normalized();
        data.validate()?;

        let mut tx = self.repository.begin().await?;
        let current = self.repository.assets.lock_by_id(&mut tx, id).await?;

        match self
            .repository
            .assets
            .serial_number_owner(&mut tx, &data.serial_number)
            .await?
        {
            Some(owner) if owner != id => {
                tracing::warn!(asset_id = id, owner, serial_number = %data.serial_number, "Rejected serial number in use");
                return Err(AppError::Conflict(
                    "Serial number already in use by another asset".to_string(),
                ));
            }
            _ => {}
        }

        check_status_edit(Some(current.status), data.status)?;

        let asset = self.repository.assets.update(&mut tx, id, &data).await?;
        tx.commit().await?;

        tracing::info!(asset_id = id, status = %asset.status, "Asset updated");
        Ok(asset)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.assets.delete(id).await?;
        tracing::info!(asset_id = id, "Asset deleted");
        Ok(())
    }

    pub async fn list_by_type(&self, asset_type: &str) -> AppResult<Vec<Asset>> {
        self.repository.assets.list_by_type(asset_type).await
    }

    pub async fn list_by_status(&self, status: AssetStatus) -> AppResult<Vec<Asset>> {
        self.repository.assets.list_by_status(status).await
    }

    /// Totals per status plus the number of spares
    pub async fn statistics(&self) -> AppResult<AssetStatistics> {
        let by_status = self.repository.assets.count_by_status().await?;
        let spare = self.repository.assets.count_spare().await?;
        Ok(AssetStatistics::from_status_counts(&by_status, spare))
    }

    pub async fn counts_by_type(&self) -> AppResult<AssetTypeCounts> {
        let rows = self.repository.assets.count_by_type().await?;
        Ok(rows.into_iter().collect())
    }
}

/// Direct edits may not move an asset into or out of `Assigned`; only the
/// assignment workflow does that. `current` is `None` for a new asset.
pub(crate) fn check_status_edit(current: Option<AssetStatus>, requested: AssetStatus) -> AppResult<()> {
    let currently_assigned = current == Some(AssetStatus::Assigned);
    let wants_assigned = requested == AssetStatus::Assigned;

    if wants_assigned && !currently_assigned {
        return Err(AppError::InvalidState(
            "Assets can only become ASSIGNED through an assignment".to_string(),
        ));
    }
    if currently_assigned && !wants_assigned {
        return Err(AppError::InvalidState(
            "Asset is currently assigned; return it before changing its status".to_string(),
        ));
    }
    Ok(())
}
