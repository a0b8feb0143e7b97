//! Repository for the `collection_counters` table.
//!
//! Identifier assignment is "largest stored id plus one, or 1 when empty",
//! performed as one atomic upsert:
//!
//! - The first create in a collection inserts the counter row, seeded from
//!   `MAX(id)` of the target table.
//! - Later creates hit `ON CONFLICT` and advance the row under its row lock,
//!   so concurrent callers serialize on the counter instead of racing on a
//!   read of `MAX(id)`.
//!
//! Callers run [`CollectionCounterRepo::next_id`] inside the transaction
//! that inserts the record. If the insert fails the counter rolls back with
//! it, which keeps ids gap-free.

use sqlx::{PgConnection, PgPool};
use vsp_core::attachment::AttachmentKind;
use vsp_core::types::DbId;

/// A named collection whose records receive sequential ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Vsp,
    Objects,
    Repairs,
    MaintenancePlans,
    WorkLogs,
    Photos,
    Maps,
}

impl Collection {
    /// Every collection, in schema order.
    pub const ALL: [Collection; 7] = [
        Self::Vsp,
        Self::Objects,
        Self::Repairs,
        Self::MaintenancePlans,
        Self::WorkLogs,
        Self::Photos,
        Self::Maps,
    ];

    /// Table holding this collection's records. Also used as the counter key.
    pub fn table(&self) -> &'static str {
        match self {
            Self::Vsp => "vsp",
            Self::Objects => "objects",
            Self::Repairs => "repairs",
            Self::MaintenancePlans => "maintenance_plans",
            Self::WorkLogs => "work_logs",
            Self::Photos => "photos",
            Self::Maps => "maps",
        }
    }
}

impl From<AttachmentKind> for Collection {
    fn from(kind: AttachmentKind) -> Self {
        match kind {
            AttachmentKind::Photo => Self::Photos,
            AttachmentKind::Map => Self::Maps,
        }
    }
}

/// Provides identifier assignment for every collection.
pub struct CollectionCounterRepo;

impl CollectionCounterRepo {
    /// Reserve the next identifier for `collection`.
    ///
    /// Must be called on the connection of the transaction that inserts the
    /// record; the counter row stays locked until that transaction ends.
    pub async fn next_id(
        conn: &mut PgConnection,
        collection: Collection,
    ) -> Result<DbId, sqlx::Error> {
        let table = collection.table();
        let query = format!(
            "INSERT INTO collection_counters (collection, last_id)
             VALUES ($1, (SELECT COALESCE(MAX(id), 0) FROM {table}) + 1)
             ON CONFLICT (collection) DO UPDATE SET
                last_id = GREATEST(collection_counters.last_id, EXCLUDED.last_id - 1) + 1,
                updated_at = NOW()
             RETURNING last_id"
        );
        let (id,): (DbId,) = sqlx::query_as(&query)
            .bind(table)
            .fetch_one(&mut *conn)
            .await?;

        tracing::debug!(collection = table, id, "Assigned identifier");
        Ok(id)
    }

    /// Last identifier handed out for `collection`, or `None` if no record
    /// has been created through the counter yet.
    pub async fn last_assigned(
        pool: &PgPool,
        collection: Collection,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let row: Option<(DbId,)> =
            sqlx::query_as("SELECT last_id FROM collection_counters WHERE collection = $1")
                .bind(collection.table())
                .fetch_optional(pool)
                .await?;
        Ok(row.map(|(id,)| id))
    }
}
