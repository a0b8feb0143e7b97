//! Repository for the `vsp` table.

use sqlx::PgPool;
use vsp_core::types::DbId;

use crate::models::vsp::{CreateVsp, Vsp};
use crate::repositories::{Collection, CollectionCounterRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, address, office_number, description, created_at, updated_at";

/// Provides create and read operations for sites.
pub struct VspRepo;

impl VspRepo {
    /// Insert a new site, returning the created row.
    ///
    /// `created_at` and `updated_at` both take the transaction timestamp, so
    /// they are always equal on a fresh row.
    pub async fn create(pool: &PgPool, input: &CreateVsp) -> Result<Vsp, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let id = CollectionCounterRepo::next_id(&mut *tx, Collection::Vsp).await?;

        let query = format!(
            "INSERT INTO vsp (id, address, office_number, description, created_at, updated_at)
             VALUES ($1, $2, $3, $4, NOW(), NOW())
             RETURNING {COLUMNS}"
        );
        let vsp = sqlx::query_as::<_, Vsp>(&query)
            .bind(id)
            .bind(&input.address)
            .bind(&input.office_number)
            .bind(&input.description)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(vsp)
    }

    /// Find a site by its identifier.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vsp>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vsp WHERE id = $1");
        sqlx::query_as::<_, Vsp>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all sites ordered by identifier.
    pub async fn list(pool: &PgPool) -> Result<Vec<Vsp>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vsp ORDER BY id");
        sqlx::query_as::<_, Vsp>(&query).fetch_all(pool).await
    }
}
