//! Input validation: make sure the user-supplied path is a readable PDF.
//!
//! pdfium reports a missing or non-PDF file as a generic load failure. We
//! check existence, read permission and the `%PDF` magic bytes up front so
//! callers get a specific error instead.

use crate::error::Pdf2MdError;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Validate a local file path, returning it as an owned `PathBuf`.
pub fn resolve_local(path: impl AsRef<Path>) -> Result<PathBuf, Pdf2MdError> {
    let path = path.as_ref().to_path_buf();

    if !path.exists() {
        return Err(Pdf2MdError::FileNotFound { path });
    }

    match std::fs::File::open(&path) {
        Ok(mut f) => {
            let mut magic = [0u8; 4];
            if f.read_exact(&mut magic).is_ok() && &magic != b"%PDF" {
                return Err(Pdf2MdError::NotAPdf { path, magic });
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(Pdf2MdError::PermissionDenied { path });
        }
        Err(_) => {
            return Err(Pdf2MdError::FileNotFound { path });
        }
    }

    debug!("Resolved local PDF: {}", path.display());
    Ok(path)
}
