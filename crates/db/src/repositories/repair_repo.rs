//! Repository for the `repairs` table.

use sqlx::PgPool;
use vsp_core::types::DbId;

use crate::models::repair::{CreateRepair, Repair};
use crate::repositories::{Collection, CollectionCounterRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, vsp_id, description, date, area_size, status";

/// Provides create and list operations for repairs.
pub struct RepairRepo;

impl RepairRepo {
    /// Insert a new repair under `vsp_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        vsp_id: DbId,
        input: &CreateRepair,
    ) -> Result<Repair, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let id = CollectionCounterRepo::next_id(&mut *tx, Collection::Repairs).await?;

        let query = format!(
            "INSERT INTO repairs (id, vsp_id, description, date, area_size, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let repair = sqlx::query_as::<_, Repair>(&query)
            .bind(id)
            .bind(vsp_id)
            .bind(&input.description)
            .bind(input.date)
            .bind(input.area_size)
            .bind(input.status.as_str())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(repair)
    }

    /// List all repairs for a site, ordered by identifier.
    pub async fn list_by_vsp(pool: &PgPool, vsp_id: DbId) -> Result<Vec<Repair>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM repairs WHERE vsp_id = $1 ORDER BY id");
        sqlx::query_as::<_, Repair>(&query)
            .bind(vsp_id)
            .fetch_all(pool)
            .await
    }
}
