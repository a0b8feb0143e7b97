//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Creates run in a transaction that
//! first draws the record's id from [`CollectionCounterRepo`].

pub mod attachment_repo;
pub mod collection_counter_repo;
pub mod maintenance_plan_repo;
pub mod object_repo;
pub mod repair_repo;
pub mod vsp_repo;
pub mod work_log_repo;

pub use attachment_repo::AttachmentRepo;
pub use collection_counter_repo::{Collection, CollectionCounterRepo};
pub use maintenance_plan_repo::MaintenancePlanRepo;
pub use object_repo::ObjectRepo;
pub use repair_repo::RepairRepo;
pub use vsp_repo::VspRepo;
pub use work_log_repo::WorkLogRepo;
