//! Physical objects located at a site (rooms, halls, equipment areas).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vsp_core::serde_helpers::f64_from_number_or_string;
use vsp_core::types::{DbId, Timestamp};

/// A row from the `objects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct SiteObject {
    pub id: DbId,
    pub vsp_id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub object_type: String,
    pub area_size: f64,
    pub unit: String,
    pub characteristics: Option<String>,
    pub cleaning_frequency: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an object.
///
/// `vsp_id` is optional at the serde level so the nested route can supply it
/// from the path; handlers reject a create that ends up without one.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSiteObject {
    #[serde(default, alias = "site_id")]
    pub vsp_id: Option<DbId>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub object_type: String,
    #[serde(deserialize_with = "f64_from_number_or_string")]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub area_size: f64,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub unit: String,
    pub characteristics: Option<String>,
    pub cleaning_frequency: Option<String>,
}
