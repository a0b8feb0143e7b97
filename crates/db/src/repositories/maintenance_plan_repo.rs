//! Repository for the `maintenance_plans` table.

use sqlx::PgPool;
use vsp_core::types::DbId;

use crate::models::maintenance_plan::{CreateMaintenancePlan, MaintenancePlan};
use crate::repositories::{Collection, CollectionCounterRepo};

const COLUMNS: &str = "id, vsp_id, description, frequency, next_maintenance";

/// Provides create and list operations for maintenance plans.
pub struct MaintenancePlanRepo;

impl MaintenancePlanRepo {
    /// Insert a new plan under `vsp_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        vsp_id: DbId,
        input: &CreateMaintenancePlan,
    ) -> Result<MaintenancePlan, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let id = CollectionCounterRepo::next_id(&mut *tx, Collection::MaintenancePlans).await?;

        let query = format!(
            "INSERT INTO maintenance_plans (id, vsp_id, description, frequency, next_maintenance)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let plan = sqlx::query_as::<_, MaintenancePlan>(&query)
            .bind(id)
            .bind(vsp_id)
            .bind(&input.description)
            .bind(&input.frequency)
            .bind(input.next_maintenance)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(plan)
    }

    /// List all plans for a site, ordered by identifier.
    pub async fn list_by_vsp(
        pool: &PgPool,
        vsp_id: DbId,
    ) -> Result<Vec<MaintenancePlan>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM maintenance_plans WHERE vsp_id = $1 ORDER BY id");
        sqlx::query_as::<_, MaintenancePlan>(&query)
            .bind(vsp_id)
            .fetch_all(pool)
            .await
    }
}
