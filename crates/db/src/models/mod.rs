//! Row models and create DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct matching the stored row
//! - A `Deserialize` + `Validate` create DTO holding the caller-supplied fields
//!
//! There are no update DTOs: records are immutable once created.

pub mod attachment;
pub mod maintenance_plan;
pub mod object;
pub mod repair;
pub mod vsp;
pub mod work_log;
