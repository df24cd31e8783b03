//! Conversion entry points.
//!
//! [`convert`] and [`convert_to_file`] are the one-call APIs. They use the
//! pdfium-backed extractor; [`convert_with`] takes any [`TextExtractor`]
//! plus a progress callback, and [`render_document`] runs the pure text
//! pipeline on page strings that are already in memory.

use crate::config::ConversionOptions;
use crate::error::Pdf2MdError;
use crate::output::{ConversionOutput, ConversionStats};
use crate::pipeline::extract::{PdfiumExtractor, TextExtractor};
use crate::pipeline::{assemble, clean, input, render};
use crate::progress::{ConversionProgressCallback, NoopProgressCallback};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Convert a PDF file to Markdown.
///
/// # Errors
/// Returns `Err(Pdf2MdError)` when the input is missing, unreadable or not
/// a PDF, or when pdfium cannot be loaded. Pages whose text cannot be
/// extracted are not errors; they contribute nothing to the output.
pub fn convert(
    pdf_path: impl AsRef<Path>,
    options: &ConversionOptions,
) -> Result<ConversionOutput, Pdf2MdError> {
    let pdf_path = input::resolve_local(pdf_path)?;
    let extractor = PdfiumExtractor::bind()?;
    convert_with(&extractor, &pdf_path, options, &NoopProgressCallback)
}

/// Convert a PDF and write the Markdown to `out_path`.
///
/// Parent directories are created as needed; an existing file is replaced.
pub fn convert_to_file(
    pdf_path: impl AsRef<Path>,
    out_path: impl AsRef<Path>,
    options: &ConversionOptions,
) -> Result<ConversionStats, Pdf2MdError> {
    let output = convert(pdf_path, options)?;
    write_markdown(out_path, &output.markdown)?;
    Ok(output.stats)
}

/// Convert a PDF using the given extractor, reporting each page to `progress`.
///
/// The path is handed to the extractor as-is; call
/// [`input::resolve_local`] first for early, specific errors.
pub fn convert_with(
    extractor: &dyn TextExtractor,
    pdf_path: &Path,
    options: &ConversionOptions,
    progress: &dyn ConversionProgressCallback,
) -> Result<ConversionOutput, Pdf2MdError> {
    let start = Instant::now();
    info!("Starting conversion: {}", pdf_path.display());

    let extracted = extractor.extract_pages(pdf_path)?;
    let total_pages = extracted.len();
    progress.on_conversion_start(total_pages);

    let mut failed_pages = 0;
    let mut empty_pages = 0;
    let mut pages = Vec::with_capacity(total_pages);

    for (idx, result) in extracted.into_iter().enumerate() {
        let page_num = idx + 1;
        let lines = match result {
            Ok(text) => {
                let lines = clean::clean_page(&text);
                debug!("Page {}: {} lines kept", page_num, lines.len());
                progress.on_page_complete(page_num, total_pages, lines.len());
                lines
            }
            Err(e) => {
                warn!("Treating page {} as empty: {}", page_num, e);
                progress.on_page_error(page_num, total_pages, &e.to_string());
                failed_pages += 1;
                Vec::new()
            }
        };

        if lines.is_empty() {
            empty_pages += 1;
        }
        pages.push(lines);
    }

    let body = assemble_body(&pages, options);
    let markdown = render::render_markdown(&body);

    let stats = ConversionStats {
        total_pages,
        failed_pages,
        empty_pages,
        body_lines: body.len(),
        markdown_bytes: markdown.len(),
        total_duration_ms: start.elapsed().as_millis() as u64,
    };

    progress.on_conversion_complete(total_pages, total_pages - failed_pages);
    info!(
        "Conversion complete: {} pages ({} failed), {} bytes, {}ms",
        total_pages, failed_pages, stats.markdown_bytes, stats.total_duration_ms
    );

    Ok(ConversionOutput { markdown, stats })
}

/// Run the text pipeline on raw page texts: clean, filter, assemble,
/// collapse, render.
pub fn render_document(pages: &[String], options: &ConversionOptions) -> String {
    let pages: Vec<Vec<String>> = pages.iter().map(|p| clean::clean_page(p)).collect();
    render::render_markdown(&assemble_body(&pages, options))
}

/// Write Markdown as UTF-8, creating parent directories first.
pub fn write_markdown(out_path: impl AsRef<Path>, markdown: &str) -> Result<(), Pdf2MdError> {
    let path = out_path.as_ref();
    let write_err = |source: std::io::Error| Pdf2MdError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, markdown).map_err(write_err)?;

    debug!("Wrote {} bytes to {}", markdown.len(), path.display());
    Ok(())
}

/// Sibling path with the same stem and a `.md` extension.
pub fn default_output_path(pdf_path: impl AsRef<Path>) -> PathBuf {
    pdf_path.as_ref().with_extension("md")
}

fn assemble_body(pages: &[Vec<String>], options: &ConversionOptions) -> Vec<String> {
    let lines = assemble::assemble_pages(pages, options);
    assemble::collapse_blank_lines(lines, options.max_consecutive_blank_lines)
}
