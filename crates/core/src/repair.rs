//! Repair lifecycle status.
//!
//! Stored as lowercase text in the `repairs.status` column, which carries a
//! matching `CHECK` constraint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Status of a repair record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepairStatus {
    Planned,
    Completed,
    Cancelled,
}

/// All valid status values, in lifecycle order.
pub const VALID_REPAIR_STATUSES: &[&str] = &["planned", "completed", "cancelled"];

impl RepairStatus {
    /// Column value for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for RepairStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepairStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(Self::Planned),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(CoreError::Validation(format!(
                "Invalid repair status '{other}'. Must be one of: {VALID_REPAIR_STATUSES:?}"
            ))),
        }
    }
}

/// Used when decoding the text column back into the enum.
impl TryFrom<String> for RepairStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
