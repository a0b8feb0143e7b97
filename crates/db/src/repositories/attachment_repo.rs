//! Repository for the `photos` and `maps` tables.
//!
//! Both tables share one column layout; every method takes the
//! [`AttachmentKind`] selecting the table.

use sqlx::PgPool;
use vsp_core::types::DbId;

use crate::models::attachment::{Attachment, AttachmentKind, CreateAttachment};
use crate::repositories::{Collection, CollectionCounterRepo};

const COLUMNS: &str = "id, vsp_id, description, file_path";

/// Provides create and list operations for photo and map metadata.
pub struct AttachmentRepo;

impl AttachmentRepo {
    /// Insert attachment metadata, returning the created row.
    pub async fn create(
        pool: &PgPool,
        kind: AttachmentKind,
        input: &CreateAttachment,
    ) -> Result<Attachment, sqlx::Error> {
        let collection = Collection::from(kind);
        let table = collection.table();

        let mut tx = pool.begin().await?;
        let id = CollectionCounterRepo::next_id(&mut *tx, collection).await?;

        let query = format!(
            "INSERT INTO {table} (id, vsp_id, description, file_path)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let attachment = sqlx::query_as::<_, Attachment>(&query)
            .bind(id)
            .bind(input.vsp_id)
            .bind(&input.description)
            .bind(&input.file_path)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(attachment)
    }

    /// List all attachments of `kind` linked to a site, ordered by identifier.
    pub async fn list_by_vsp(
        pool: &PgPool,
        kind: AttachmentKind,
        vsp_id: DbId,
    ) -> Result<Vec<Attachment>, sqlx::Error> {
        let table = Collection::from(kind).table();
        let query = format!("SELECT {COLUMNS} FROM {table} WHERE vsp_id = $1 ORDER BY id");
        sqlx::query_as::<_, Attachment>(&query)
            .bind(vsp_id)
            .fetch_all(pool)
            .await
    }
}
