//! CLI binary for pdfocr.
//!
//! A thin shim over the library crate that maps CLI flags to
//! [`ExtractionConfig`] and prints results.
//!
//! Exit-code contract:
//! * `0` — normal completion, including processing failures that were
//!   absorbed here (diagnostic on stderr, empty stdout);
//! * `1` — missing argument (usage on stderr) or input path does not exist.
//!
//! "Succeeded with no text" and "failed during processing" both exit 0 and
//! are distinguishable only via stderr content; library callers who need
//! the distinction should use [`pdfocr::extract`] directly.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pdfocr::{
    extract, extract_to_file, ExtractionConfig, ExtractionProgressCallback, PageMode,
    ProgressCallback,
};
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: renders a live progress bar on stderr with
/// per-page log lines. Pages complete strictly in order (the pipeline is
/// sequential), so no out-of-order bookkeeping is needed.
struct CliProgressCallback {
    bar: ProgressBar,
}

impl CliProgressCallback {
    /// Create a callback whose progress-bar length is set by
    /// `on_extraction_start` (called before any pages are processed).
    fn new_dynamic() -> Arc<Self> {
        let bar = ProgressBar::new(0); // length set in on_extraction_start

        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        bar.set_style(spinner_style);
        bar.set_prefix("Preparing");
        bar.set_message("Opening PDF…");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self { bar })
    }

    fn activate_bar(&self, total: usize, ocr: bool) {
        let progress_style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  \
             [{bar:42.green/238}] {pos:>3}/{len} pages  ⏱ {elapsed_precise}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ")
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        self.bar.set_length(total as u64);
        self.bar.set_style(progress_style);
        self.bar
            .set_prefix(if ocr { "Recognising" } else { "Reading" });
    }
}

impl ExtractionProgressCallback for CliProgressCallback {
    fn on_extraction_start(&self, total_pages: usize, ocr: bool) {
        self.activate_bar(total_pages, ocr);
        let mode = if ocr { "OCR" } else { "text layer" };
        self.bar.println(format!(
            "{} {}",
            cyan("◆"),
            bold(&format!("Extracting {total_pages} pages via {mode}…"))
        ));
    }

    fn on_page_start(&self, page_num: usize, _total: usize) {
        self.bar.set_message(format!("page {page_num}"));
    }

    fn on_page_complete(&self, page_num: usize, total: usize, _mode: PageMode, chars: usize) {
        self.bar.println(format!(
            "  {} Page {:>3}/{:<3}  {}",
            green("✓"),
            page_num,
            total,
            dim(&format!("{chars:>5} chars")),
        ));
        self.bar.inc(1);
    }

    fn on_extraction_complete(&self, total_pages: usize, blank_pages: usize) {
        self.bar.finish_and_clear();
        if blank_pages == 0 {
            eprintln!(
                "{} {} pages extracted",
                green("✔"),
                bold(&total_pages.to_string())
            );
        } else {
            eprintln!(
                "{} {}/{} pages with text  ({} blank)",
                green("✔"),
                bold(&(total_pages - blank_pages).to_string()),
                total_pages,
                blank_pages,
            );
        }
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Basic extraction (stdout)
  pdfocr document.pdf

  # Extract to file
  pdfocr document.pdf -o output.txt

  # Skip the text layer, always OCR
  pdfocr --force-ocr scanned.pdf

  # JSON output with per-page records and stats
  pdfocr --json document.pdf > output.json

OUTPUT FORMAT:
  Each page with recognisable text contributes one block:

    --- Page N ---
    <page text>

  Pages whose text is blank after cleanup are skipped; page numbers always
  refer to positions in the source document.

RUNTIME REQUIREMENTS:
  pdfium     loadable as a shared library (system copy, or set the usual
             loader path to point at one)
  tesseract  installed with the 'eng' traineddata

EXIT CODES:
  0  extraction completed (the result may be empty; processing failures
     are reported on stderr but still exit 0)
  1  missing argument, or the input path does not exist
"#;

/// Extract text from a PDF via its text layer or Tesseract OCR.
#[derive(Parser, Debug)]
#[command(
    name = "pdfocr",
    version,
    about = "Extract text from a PDF via its text layer or Tesseract OCR",
    long_about = "Extract plain text from a PDF document. The embedded text layer is used when \
it carries real content; otherwise every page is rasterised at 200 DPI and recognised with \
Tesseract (English). Non-blank pages are assembled into '--- Page N ---' blocks.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Local PDF file path.
    input: String,

    /// Write the extracted text to this file instead of stdout.
    #[arg(short, long, env = "PDFOCR_OUTPUT")]
    output: Option<PathBuf>,

    /// Skip the embedded text layer and always OCR.
    #[arg(long, env = "PDFOCR_FORCE_OCR")]
    force_ocr: bool,

    /// Output structured JSON (pages + stats) instead of plain text.
    #[arg(long, env = "PDFOCR_JSON")]
    json: bool,

    /// Disable the progress bar.
    #[arg(long, env = "PDFOCR_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDFOCR_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors and the extracted text.
    #[arg(short, long, env = "PDFOCR_QUIET")]
    quiet: bool,
}

fn main() -> ExitCode {
    // `try_parse` instead of `parse`: clap exits with status 2 on a missing
    // argument, but the contract here is a usage message on stderr and
    // status 1. Help and version keep clap's stdout/exit-0 behaviour.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprint!("{e}");
            return ExitCode::from(1);
        }
    };

    // ── Pre-flight: input must exist ─────────────────────────────────────
    if !Path::new(&cli.input).exists() {
        eprintln!("Error: File not found: {}", cli.input);
        return ExitCode::from(1);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Processing failures are absorbed: diagnostic on stderr, empty
            // result on stdout, normal exit.
            eprintln!("Error: {e:#}");
            if cli.output.is_none() && !cli.json {
                println!();
            }
            ExitCode::SUCCESS
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    // ── Logging setup ────────────────────────────────────────────────────
    // Suppress INFO-level library logs when the progress bar is active;
    // the bar provides all the feedback that matters to the user.
    let show_progress =
        !cli.quiet && !cli.no_progress && !cli.json && io::stderr().is_terminal();
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

    // ── Build config ─────────────────────────────────────────────────────
    let progress_cb: Option<ProgressCallback> = if show_progress {
        let cb = CliProgressCallback::new_dynamic();
        Some(cb as Arc<dyn ExtractionProgressCallback>)
    } else {
        None
    };

    let mut builder = ExtractionConfig::builder().force_ocr(cli.force_ocr);
    if let Some(cb) = progress_cb {
        builder = builder.progress_callback(cb);
    }
    let config = builder.build().context("Invalid configuration")?;

    // ── Run extraction ───────────────────────────────────────────────────
    if let Some(ref output_path) = cli.output {
        let stats = extract_to_file(&cli.input, output_path, &config)?;

        if !cli.quiet {
            eprintln!(
                "{}  {}/{} pages  {}ms  →  {}",
                green("✔"),
                stats.total_pages - stats.blank_pages,
                stats.total_pages,
                stats.total_duration_ms,
                bold(&output_path.display().to_string()),
            );
        }
    } else {
        let output = extract(&cli.input, &config)?;

        if cli.json {
            let json = serde_json::to_string_pretty(&output)
                .context("Failed to serialise output")?;
            println!("{json}");
        } else {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(output.text.as_bytes())
                .context("Failed to write to stdout")?;
            // Ensure a trailing newline on stdout.
            if !output.text.ends_with('\n') {
                handle.write_all(b"\n").ok();
            }
        }

        if !cli.quiet && !show_progress && !cli.json {
            eprintln!(
                "Extracted {}/{} pages in {}ms",
                output.stats.total_pages - output.stats.blank_pages,
                output.stats.total_pages,
                output.stats.total_duration_ms
            );
        }
    }

    Ok(())
}
