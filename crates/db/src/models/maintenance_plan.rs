//! Scheduled maintenance plans.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vsp_core::types::{Date, DbId};

/// A row from the `maintenance_plans` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct MaintenancePlan {
    pub id: DbId,
    pub vsp_id: DbId,
    pub description: String,
    /// Free-form cadence, e.g. "weekly" or "every 3 months".
    pub frequency: String,
    pub next_maintenance: Date,
}

/// DTO for creating a maintenance plan.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMaintenancePlan {
    #[serde(default, alias = "site_id")]
    pub vsp_id: Option<DbId>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub frequency: String,
    pub next_maintenance: Date,
}
