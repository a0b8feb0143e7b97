//! Request handlers.
//!
//! Each submodule provides async handler functions (create, list) for a
//! single entity type. Handlers validate the input shape, confirm the parent
//! site via [`vsp::ensure_vsp_exists`], then delegate to the corresponding
//! repository in `vsp_db` and map errors via [`AppError`](crate::error::AppError).

pub mod attachment;
pub mod maintenance_plan;
pub mod object;
pub mod repair;
pub mod vsp;
pub mod work_log;
