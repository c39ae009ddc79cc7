//! CLI argument definitions for focusline.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `overview` | Show the overview and value domains of a series |
//! | `focus` | Apply one brush selection and show the focus chart |
//! | `replay` | Apply a sequence of brush gestures in order |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, ndjson, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as errors |
//! | `--stream` | `false` | Enable NDJSON event streaming |
//! | `--width` | `960` | Outer chart width in pixels |
//! | `--focus-height` | `500` | Outer focus chart height in pixels |
//! | `--context-height` | `80` | Outer context chart height in pixels |
//!
//! # Examples
//!
//! ```bash
//! # Overview of a monthly series
//! focusline overview sp500.csv --pretty
//!
//! # Zoom to a window
//! focusline focus sp500.csv --from "Jan 2008" --to "Dec 2009"
//!
//! # Drag, then clear with a zero-width drag
//! focusline replay sp500.csv --gesture "drag:120..480" --gesture "drag:300..300"
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use focusline_core::BrushGesture;

/// focusline - focus + context brushing for monthly price series
///
/// Loads a `date,price` CSV (dates as "Mon YYYY"), derives the overview
/// domain and reports how brush selections zoom the focus chart.
#[derive(Debug, Parser)]
#[command(
    name = "focusline",
    author,
    version,
    about = "Focus + context brushing for monthly price series",
    long_about = "focusline loads a monthly price series and reports how a brush on the \
overview (context) chart zooms the detail (focus) chart.\n\
\n\
Chart sizes default to 960x500 (focus) and 960x80 (context) and can be \
overridden with FOCUSLINE_WIDTH, FOCUSLINE_FOCUS_HEIGHT and \
FOCUSLINE_CONTEXT_HEIGHT, or the matching flags.\n\
\n\
Set RUST_LOG=debug to log every focus change on stderr."
)]
pub struct Cli {
    /// Output format for results.
    ///
    /// - json: Single JSON object (default)
    /// - ndjson: One JSON object per line
    /// - table: Plain text summary
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings and errors as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Enable NDJSON streaming mode.
    ///
    /// Outputs events as newline-delimited JSON:
    /// - start: Command initiated
    /// - progress: Status updates
    /// - chunk: One per focus update (or the whole envelope)
    /// - end: Command completed
    /// - error: Error occurred
    #[arg(long, global = true, default_value_t = false)]
    pub stream: bool,

    /// Outer chart width in pixels.
    #[arg(long, global = true)]
    pub width: Option<f64>,

    /// Outer focus chart height in pixels.
    #[arg(long, global = true)]
    pub focus_height: Option<f64>,

    /// Outer context chart height in pixels.
    #[arg(long, global = true)]
    pub context_height: Option<f64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text summary for terminal display.
    Table,
    /// Single JSON object output.
    Json,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the overview domain, value domain and layout of a series.
    ///
    /// # Examples
    ///
    ///   focusline overview sp500.csv
    ///   focusline overview sp500.csv --format table
    Overview(OverviewArgs),

    /// Apply one brush selection and show the resulting focus chart.
    ///
    /// Without --from/--to the brush is empty and the focus chart shows
    /// the whole series.
    ///
    /// # Examples
    ///
    ///   focusline focus sp500.csv
    ///   focusline focus sp500.csv --from "Jan 2008" --to "Dec 2009"
    Focus(FocusArgs),

    /// Apply brush gestures in order and report each focus domain.
    ///
    /// Gestures:
    ///   clear                   clear the brush
    ///   drag:<px>..<px>         drag on the overview axis, in pixels
    ///   <Mon YYYY>..<Mon YYYY>  select a window of months
    ///
    /// # Examples
    ///
    ///   focusline replay sp500.csv --gesture "Feb 2013..Mar 2013" --gesture clear
    Replay(ReplayArgs),
}

/// Arguments for the `overview` command.
#[derive(Debug, Args)]
pub struct OverviewArgs {
    /// Path to a `date,price` CSV file.
    pub csv: PathBuf,
}

/// Arguments for the `focus` command.
#[derive(Debug, Args)]
pub struct FocusArgs {
    /// Path to a `date,price` CSV file.
    pub csv: PathBuf,

    /// First month of the selection (e.g. "Jan 2013").
    #[arg(long)]
    pub from: Option<String>,

    /// Last month of the selection (e.g. "Mar 2013").
    #[arg(long)]
    pub to: Option<String>,
}

/// Arguments for the `replay` command.
#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Path to a `date,price` CSV file.
    pub csv: PathBuf,

    /// Brush gesture to apply; repeat to apply several in order.
    #[arg(long = "gesture", required = true)]
    pub gestures: Vec<BrushGesture>,
}
