//! Photo and map attachments: kinds, storage namespaces and filename rules.
//!
//! Uploaded bytes land at `{namespace}/{filename}` relative to the upload
//! root. The path is a pure function of the kind and the filename, so a
//! second upload with the same name overwrites the first file on disk while
//! still producing its own metadata record.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// AttachmentKind
// ---------------------------------------------------------------------------

/// The two attachment collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Photo,
    Map,
}

impl AttachmentKind {
    /// Directory namespace the files of this kind are written under.
    pub fn namespace(&self) -> &'static str {
        match self {
            Self::Photo => "photos",
            Self::Map => "maps",
        }
    }
}

// ---------------------------------------------------------------------------
// Filename handling
// ---------------------------------------------------------------------------

/// Maximum accepted filename length in bytes.
pub const MAX_FILENAME_LEN: usize = 255;

/// Reduce a client-supplied filename to a safe final path component.
///
/// Clients may send full paths (`C:\Users\me\plan.png`, `../../etc/passwd`);
/// only the last component is kept. Empty names and the `.`/`..` specials
/// are rejected.
pub fn sanitize_filename(raw: &str) -> Result<String, CoreError> {
    let last = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if last.is_empty() || last == "." || last == ".." {
        return Err(CoreError::Validation(format!(
            "Invalid upload filename '{raw}'"
        )));
    }
    if last.len() > MAX_FILENAME_LEN {
        return Err(CoreError::Validation(format!(
            "Upload filename exceeds {MAX_FILENAME_LEN} bytes"
        )));
    }
    if last.chars().any(char::is_control) {
        return Err(CoreError::Validation(
            "Upload filename contains control characters".to_string(),
        ));
    }

    Ok(last.to_string())
}

/// Relative storage path for an already-sanitized filename, e.g. `photos/a.jpg`.
///
/// Always uses `/` so stored paths are identical across platforms.
pub fn relative_path(kind: AttachmentKind, filename: &str) -> String {
    format!("{}/{filename}", kind.namespace())
}

/// Returns `true` if `path` has exactly one normal component, i.e. joining
/// it onto a namespace directory cannot escape that directory.
pub fn is_single_component(path: &str) -> bool {
    let mut components = Path::new(path).components();
    matches!(
        (components.next(), components.next()),
        (Some(std::path::Component::Normal(_)), None)
    )
}
