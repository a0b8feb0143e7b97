//! Input validation shared by every create operation.
//!
//! Create DTOs derive [`validator::Validate`]; [`validate_input`] runs the
//! derived rules and folds any failures into a single
//! [`CoreError::Validation`] so handlers can reject a request before touching
//! the database.

use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::error::CoreError;
use crate::types::DbId;

/// Run the derived validation rules for `input`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe_errors(&errors)))
}

/// Require that an optional parent reference was supplied.
pub fn require_parent(vsp_id: Option<DbId>) -> Result<DbId, CoreError> {
    vsp_id.ok_or_else(|| CoreError::Validation("vsp_id is required".to_string()))
}

/// Flatten `ValidationErrors` into `field: message; field: message`, sorted
/// by field name so messages are stable.
fn describe_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .errors()
        .iter()
        .flat_map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(list) => list
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => format!("{field}: {msg}"),
                    None => format!("{field}: {}", e.code),
                })
                .collect::<Vec<_>>(),
            ValidationErrorsKind::Struct(_) | ValidationErrorsKind::List(_) => {
                vec![format!("{field}: invalid")]
            }
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
