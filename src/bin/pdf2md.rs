//! CLI binary for heuristic-pdf2md.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConversionOptions`, runs one conversion and prints the output path.

use anyhow::{Context, Result};
use clap::Parser;
use heuristic_pdf2md::pipeline::input::resolve_local;
use heuristic_pdf2md::{
    convert_with, default_output_path, write_markdown, ConversionOptions,
    ConversionProgressCallback, NoopProgressCallback, PdfiumExtractor,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::Cell;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// File converted when no INPUT is given, looked up next to the executable.
const DEFAULT_INPUT_NAME: &str = "SNMUI White Paper 2026.pdf";

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: one bar over the pages, a line per failed page.
struct CliProgressCallback {
    bar: ProgressBar,
    errors: Cell<usize>,
}

impl CliProgressCallback {
    /// Spinner until `on_conversion_start` tells us the page count.
    fn new() -> Self {
        let bar = ProgressBar::new(0);
        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(spinner_style);
        bar.set_prefix("Preparing");
        bar.set_message("Opening PDF…");
        bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            bar,
            errors: Cell::new(0),
        }
    }
}

impl ConversionProgressCallback for CliProgressCallback {
    fn on_conversion_start(&self, total_pages: usize) {
        let progress_style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  [{bar:42.green/238}] {pos:>3}/{len} pages  {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ");

        self.bar.set_length(total_pages as u64);
        self.bar.set_style(progress_style);
        self.bar.set_prefix("Extracting");
        self.bar.set_message("");
    }

    fn on_page_complete(&self, page_num: usize, _total_pages: usize, line_count: usize) {
        self.bar
            .set_message(dim(&format!("page {page_num}: {line_count} lines")));
        self.bar.inc(1);
    }

    fn on_page_error(&self, page_num: usize, total_pages: usize, error: &str) {
        self.errors.set(self.errors.get() + 1);
        self.bar.println(format!(
            "  {} Page {:>3}/{:<3}  {}",
            red("✗"),
            page_num,
            total_pages,
            red(error),
        ));
        self.bar.inc(1);
    }

    fn on_conversion_complete(&self, total_pages: usize, success_count: usize) {
        self.bar.finish_and_clear();
        if self.errors.get() == 0 {
            eprintln!(
                "{} {} pages extracted",
                green("✔"),
                bold(&success_count.to_string())
            );
        } else {
            eprintln!(
                "{} {}/{} pages extracted  ({} treated as empty)",
                red("⚠"),
                bold(&success_count.to_string()),
                total_pages,
                red(&self.errors.get().to_string()),
            );
        }
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert the default document next to the executable
  pdf2md

  # Convert a file; output goes to report.md beside it
  pdf2md report.pdf

  # Explicit output path, keep page breaks as horizontal rules
  pdf2md --keep-page-breaks report.pdf -o docs/report.md

  # Drop every blank line from the extracted text
  pdf2md --max-blank-lines 0 report.pdf

  # Print conversion statistics as JSON
  pdf2md --json report.pdf

ENVIRONMENT VARIABLES:
  PDFIUM_LIB_PATH   Path to libpdfium (file or directory); default: system library
  RUST_LOG          Overrides the log filter (e.g. heuristic_pdf2md=debug)
"#;

/// Convert a PDF file to Markdown using text-layout heuristics.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2md",
    version,
    about = "Convert a PDF file to readable Markdown using text-layout heuristics",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// PDF file to convert. Default: "SNMUI White Paper 2026.pdf" next to the executable.
    input: Option<PathBuf>,

    /// Write Markdown here instead of the sibling `.md` file.
    #[arg(short, long, env = "PDF2MD_OUTPUT")]
    output: Option<PathBuf>,

    /// Insert a `---` rule between pages.
    #[arg(long, env = "PDF2MD_KEEP_PAGE_BREAKS")]
    keep_page_breaks: bool,

    /// Longest run of blank lines kept from the extracted text.
    #[arg(long, env = "PDF2MD_MAX_BLANK_LINES", default_value_t = 2)]
    max_blank_lines: usize,

    /// Print conversion statistics as JSON instead of the confirmation line.
    #[arg(long, env = "PDF2MD_JSON")]
    json: bool,

    /// Disable progress bar.
    #[arg(long, env = "PDF2MD_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDF2MD_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors and the result line.
    #[arg(short, long, env = "PDF2MD_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // The progress bar replaces INFO-level library logs.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Resolve paths and options ────────────────────────────────────────
    let input = match cli.input.clone() {
        Some(path) => path,
        None => default_input()?,
    };
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&input));

    let options = ConversionOptions::builder()
        .keep_page_breaks(cli.keep_page_breaks)
        .max_consecutive_blank_lines(cli.max_blank_lines)
        .build();

    let pdf_path = resolve_local(&input)
        .with_context(|| format!("Cannot read input {:?}", input))?;
    let extractor = PdfiumExtractor::bind().context("Failed to load PDFium engine")?;

    // ── Run conversion ───────────────────────────────────────────────────
    let progress: Box<dyn ConversionProgressCallback> = if show_progress {
        Box::new(CliProgressCallback::new())
    } else {
        Box::new(NoopProgressCallback)
    };

    let converted = convert_with(&extractor, &pdf_path, &options, progress.as_ref())
        .context("Conversion failed")?;
    write_markdown(&output, &converted.markdown)
        .with_context(|| format!("Failed to write {:?}", output))?;

    if cli.json {
        let json = serde_json::to_string_pretty(&converted.stats)
            .context("Failed to serialise statistics")?;
        println!("{json}");
    } else {
        println!("Wrote: {}", output.display());
    }

    if !cli.quiet && !cli.json {
        let stats = &converted.stats;
        eprintln!(
            "   {} pages  /  {} lines  /  {} bytes  —  {}ms",
            dim(&stats.total_pages.to_string()),
            dim(&stats.body_lines.to_string()),
            dim(&stats.markdown_bytes.to_string()),
            stats.total_duration_ms,
        );
    }

    Ok(())
}

/// `DEFAULT_INPUT_NAME` in the directory holding the running executable.
fn default_input() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Cannot locate the pdf2md executable")?;
    let dir = exe
        .parent()
        .context("Executable path has no parent directory")?;
    Ok(dir.join(DEFAULT_INPUT_NAME))
}
