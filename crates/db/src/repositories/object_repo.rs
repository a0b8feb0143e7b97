//! Repository for the `objects` table.

use sqlx::PgPool;
use vsp_core::types::DbId;

use crate::models::object::{CreateSiteObject, SiteObject};
use crate::repositories::{Collection, CollectionCounterRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, vsp_id, name, object_type, area_size, unit, \
    characteristics, cleaning_frequency, created_at, updated_at";

/// Provides create and list operations for site objects.
pub struct ObjectRepo;

impl ObjectRepo {
    /// Insert a new object under `vsp_id`, returning the created row.
    ///
    /// `input.vsp_id` is ignored; the caller passes the validated parent.
    pub async fn create(
        pool: &PgPool,
        vsp_id: DbId,
        input: &CreateSiteObject,
    ) -> Result<SiteObject, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let id = CollectionCounterRepo::next_id(&mut *tx, Collection::Objects).await?;

        let query = format!(
            "INSERT INTO objects
                (id, vsp_id, name, object_type, area_size, unit,
                 characteristics, cleaning_frequency, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW(), NOW())
             RETURNING {COLUMNS}"
        );
        let object = sqlx::query_as::<_, SiteObject>(&query)
            .bind(id)
            .bind(vsp_id)
            .bind(&input.name)
            .bind(&input.object_type)
            .bind(input.area_size)
            .bind(&input.unit)
            .bind(&input.characteristics)
            .bind(&input.cleaning_frequency)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(object)
    }

    /// List all objects belonging to a site, ordered by identifier.
    pub async fn list_by_vsp(pool: &PgPool, vsp_id: DbId) -> Result<Vec<SiteObject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM objects WHERE vsp_id = $1 ORDER BY id");
        sqlx::query_as::<_, SiteObject>(&query)
            .bind(vsp_id)
            .fetch_all(pool)
            .await
    }
}
