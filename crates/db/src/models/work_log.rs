//! Completed-work log entries.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vsp_core::types::{Date, DbId};

/// A row from the `work_logs` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct WorkLog {
    pub id: DbId,
    pub vsp_id: DbId,
    pub description: String,
    pub date: Date,
}

/// DTO for creating a work log entry.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWorkLog {
    #[serde(default, alias = "site_id")]
    pub vsp_id: Option<DbId>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
    pub date: Date,
}
