//! Repository for the `work_logs` table.

use sqlx::PgPool;
use vsp_core::types::DbId;

use crate::models::work_log::{CreateWorkLog, WorkLog};
use crate::repositories::{Collection, CollectionCounterRepo};

const COLUMNS: &str = "id, vsp_id, description, date";

/// Provides create and list operations for work log entries.
pub struct WorkLogRepo;

impl WorkLogRepo {
    /// Insert a new work log entry under `vsp_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        vsp_id: DbId,
        input: &CreateWorkLog,
    ) -> Result<WorkLog, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let id = CollectionCounterRepo::next_id(&mut *tx, Collection::WorkLogs).await?;

        let query = format!(
            "INSERT INTO work_logs (id, vsp_id, description, date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let log = sqlx::query_as::<_, WorkLog>(&query)
            .bind(id)
            .bind(vsp_id)
            .bind(&input.description)
            .bind(input.date)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(log)
    }

    /// List all work log entries for a site, ordered by identifier.
    pub async fn list_by_vsp(pool: &PgPool, vsp_id: DbId) -> Result<Vec<WorkLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM work_logs WHERE vsp_id = $1 ORDER BY id");
        sqlx::query_as::<_, WorkLog>(&query)
            .bind(vsp_id)
            .fetch_all(pool)
            .await
    }
}
