//! Repair records.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vsp_core::repair::RepairStatus;
use vsp_core::serde_helpers::f64_from_number_or_string;
use vsp_core::types::{Date, DbId};

/// A row from the `repairs` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Repair {
    pub id: DbId,
    pub vsp_id: DbId,
    pub description: String,
    pub date: Date,
    pub area_size: f64,
    #[sqlx(try_from = "String")]
    pub status: RepairStatus,
}

/// DTO for creating a repair. Unknown `status` values fail deserialization.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRepair {
    #[serde(default, alias = "site_id")]
    pub vsp_id: Option<DbId>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
    pub date: Date,
    #[serde(deserialize_with = "f64_from_number_or_string")]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub area_size: f64,
    pub status: RepairStatus,
}
