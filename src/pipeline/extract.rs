//! Page text extraction.
//!
//! Reading the PDF is delegated to pdfium through `pdfium-render`; this
//! crate never looks at fonts, images or layout. [`TextExtractor`] is the
//! seam: the orchestrator only needs "one string per page, in order", so
//! tests can feed canned pages without a pdfium library on the machine.
//!
//! ## Library lookup
//!
//! 1. `PDFIUM_LIB_PATH` — either the library file itself or the directory
//!    holding it (`libpdfium.so` / `libpdfium.dylib` / `pdfium.dll`).
//! 2. The platform's default library search path.

use crate::error::{PageError, Pdf2MdError};
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable pointing at an existing pdfium library.
pub const PDFIUM_LIB_PATH_ENV: &str = "PDFIUM_LIB_PATH";

/// Produces the raw text of every page of a PDF, in page order.
///
/// Opening the document is fatal on failure; a single unreadable page is
/// reported as an `Err(PageError)` entry and left to the caller.
pub trait TextExtractor {
    fn extract_pages(&self, pdf_path: &Path) -> Result<Vec<Result<String, PageError>>, Pdf2MdError>;
}

/// [`TextExtractor`] backed by the pdfium C++ library.
pub struct PdfiumExtractor {
    pdfium: Pdfium,
}

impl PdfiumExtractor {
    /// Bind to pdfium, honouring `PDFIUM_LIB_PATH` before the system library.
    pub fn bind() -> Result<Self, Pdf2MdError> {
        let bindings = match std::env::var(PDFIUM_LIB_PATH_ENV) {
            Ok(p) if !p.is_empty() => {
                let lib = library_file(Path::new(&p));
                debug!("Binding pdfium from {}", lib.display());
                Pdfium::bind_to_library(&lib).map_err(|e| {
                    Pdf2MdError::PdfiumBindingFailed(format!("{}: {}", lib.display(), e))
                })?
            }
            _ => Pdfium::bind_to_system_library()
                .map_err(|e| Pdf2MdError::PdfiumBindingFailed(e.to_string()))?,
        };

        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

impl TextExtractor for PdfiumExtractor {
    fn extract_pages(&self, pdf_path: &Path) -> Result<Vec<Result<String, PageError>>, Pdf2MdError> {
        let document = self
            .pdfium
            .load_pdf_from_file(pdf_path, None)
            .map_err(|e| load_error(pdf_path, e))?;

        let pages = document.pages();
        let total_pages = pages.len() as usize;
        info!("PDF loaded: {} pages", total_pages);

        let mut texts = Vec::with_capacity(total_pages);
        for idx in 0..total_pages {
            let text = pages
                .get(idx as u16)
                .and_then(|page| page.text().map(|t| t.all()))
                .map_err(|e| PageError::ExtractionFailed {
                    page: idx + 1,
                    detail: format!("{:?}", e),
                });
            texts.push(text);
        }

        Ok(texts)
    }
}

/// Resolve a `PDFIUM_LIB_PATH` value to the library file.
fn library_file(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(format!(
            "{}pdfium{}",
            std::env::consts::DLL_PREFIX,
            std::env::consts::DLL_SUFFIX
        ))
    } else {
        path.to_path_buf()
    }
}

/// Map a pdfium load failure to a fatal error.
fn load_error(pdf_path: &Path, e: PdfiumError) -> Pdf2MdError {
    let err_str = format!("{:?}", e);
    if err_str.contains("Password") || err_str.contains("password") {
        Pdf2MdError::PasswordRequired {
            path: pdf_path.to_path_buf(),
        }
    } else {
        Pdf2MdError::CorruptPdf {
            path: pdf_path.to_path_buf(),
            detail: err_str,
        }
    }
}
