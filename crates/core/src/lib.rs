//! Domain types, errors and validation rules shared by the database and
//! API crates.

pub mod attachment;
pub mod error;
pub mod repair;
pub mod serde_helpers;
pub mod types;
pub mod validation;
