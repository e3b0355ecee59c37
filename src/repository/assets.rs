//! Assets repository for database operations

use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        asset::{Asset, AssetRequest, PageRequest},
        enums::AssetStatus,
    },
};

#[derive(Clone)]
pub struct AssetsRepository {
    pool: Pool<Postgres>,
}

impl AssetsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all assets
    pub async fn list(&self) -> AppResult<Vec<Asset>> {
        let assets = sqlx::query_as::<_, Asset>("SELECT * FROM assets ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(assets)
    }

    /// Fetch one page of assets and the total count
    pub async fn list_page(&self, request: &PageRequest) -> AppResult<(Vec<Asset>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM assets")
            .fetch_one(&self.pool)
            .await?;

        // ORDER BY is built from whitelisted column names only
        let query = format!(
            "SELECT * FROM assets ORDER BY {} LIMIT $1 OFFSET $2",
            request.order_by()
        );

        let assets = sqlx::query_as::<_, Asset>(&query)
            .bind(i64::from(request.size))
            .bind(request.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok((assets, total))
    }

    /// Get asset by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Get asset by ID and lock the row until the transaction ends
    pub async fn lock_by_id(&self, conn: &mut PgConnection, id: i64) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// ID of the asset holding this serial number, if any
    pub async fn serial_number_owner(
        &self,
        conn: &mut PgConnection,
        serial_number: &str,
    ) -> AppResult<Option<i64>> {
        let id = sqlx::query_scalar("SELECT id FROM assets WHERE serial_number = $1")
            .bind(serial_number)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(id)
    }

    /// Insert an asset
    pub async fn create(&self, conn: &mut PgConnection, data: &AssetRequest) -> AppResult<Asset> {
        let asset = sqlx::query_as::<_, Asset>(
            r#"
            INSERT INTO assets (
                asset_name, asset_type, make_model, serial_number, purchase_date,
                warranty_expiry_date, asset_condition, status, is_spare, specifications
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&data.asset_name)
        .bind(&data.asset_type)
        .bind(&data.make_model)
        .bind(&data.serial_number)
        .bind(data.purchase_date)
        .bind(data.warranty_expiry_date)
        .bind(data.condition)
        .bind(data.status)
        .bind(data.is_spare)
        .bind(&data.specifications)
        .fetch_one(&mut *conn)
        .await?;
        Ok(asset)
    }

    /// Replace every editable field of an asset
    pub async fn update(
        &self,
        conn: &mut PgConnection,
        id: i64,
        data: &AssetRequest,
    ) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>(
            r#"
            UPDATE assets SET
                asset_name = $1, asset_type = $2, make_model = $3, serial_number = $4,
                purchase_date = $5, warranty_expiry_date = $6, asset_condition = $7,
                status = $8, is_spare = $9, specifications = $10
            WHERE id = $11
            RETURNING *
            "#,
        )
        .bind(&data.asset_name)
        .bind(&data.asset_type)
        .bind(&data.make_model)
        .bind(&data.serial_number)
        .bind(data.purchase_date)
        .bind(data.warranty_expiry_date)
        .bind(data.condition)
        .bind(data.status)
        .bind(data.is_spare)
        .bind(&data.specifications)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| not_found(id))
    }

    /// Set the status of an asset
    pub async fn set_status(
        &self,
        conn: &mut PgConnection,
        id: i64,
        status: AssetStatus,
    ) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>("UPDATE assets SET status = $1 WHERE id = $2 RETURNING *")
            .bind(status)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Delete an asset
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    /// Assets of the given type
    pub async fn list_by_type(&self, asset_type: &str) -> AppResult<Vec<Asset>> {
        let assets =
            sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE asset_type = $1 ORDER BY id")
                .bind(asset_type)
                .fetch_all(&self.pool)
                .await?;
        Ok(assets)
    }

    /// Assets in the given status
    pub async fn list_by_status(&self, status: AssetStatus) -> AppResult<Vec<Asset>> {
        let assets =
            sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE status = $1 ORDER BY id")
                .bind(status)
                .fetch_all(&self.pool)
                .await?;
        Ok(assets)
    }

    /// `(status, count)` for every status present
    pub async fn count_by_status(&self) -> AppResult<Vec<(AssetStatus, i64)>> {
        let rows = sqlx::query_as::<_, (AssetStatus, i64)>(
            "SELECT status, COUNT(*) FROM assets GROUP BY status",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Number of assets flagged as spare
    pub async fn count_spare(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM assets WHERE is_spare")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// `(asset_type, count)` for every type present
    pub async fn count_by_type(&self) -> AppResult<Vec<(String, i64)>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT asset_type, COUNT(*) FROM assets GROUP BY asset_type ORDER BY asset_type",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Asset with id {} not found", id))
}
