//! Site ("VSP") entity model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vsp_core::types::{DbId, Timestamp};

/// A row from the `vsp` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Vsp {
    pub id: DbId,
    pub address: String,
    pub office_number: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new site.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVsp {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub address: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub office_number: String,
    pub description: Option<String>,
}
