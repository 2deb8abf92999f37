//! pecalc CLI binary.
//!
//! Computes trailing and forward P/E ratios for a list of tickers and prints
//! them as a table or writes them to CSV/JSON.

use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use pecalc::data::YahooSource;
use pecalc::output::{
    ExportFormat, Exporter, TableOptions, TableStyle, ValuationExport, render_table,
};
use pecalc::valuation::{BatchConfig, RatioPrecision, ValuationRecord, run_batch};
use pecalc::{TickerList, TickerOptions, load_tickers_from_csv, load_tickers_from_file};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pecalc")]
#[command(about = "Price/earnings ratio calculator for stock tickers", long_about = None)]
#[command(version)]
struct Cli {
    /// Tickers, e.g. GARAN.IS AKBNK.IS (comma-separated values are split)
    #[arg(long, num_args = 1..)]
    tickers: Vec<String>,

    /// File with one or more tickers per line
    #[arg(long)]
    file: Option<PathBuf>,

    /// CSV file containing a ticker column
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Ticker column name in the CSV file
    #[arg(long, default_value = "ticker")]
    ticker_col: String,

    /// Write results to this file instead of printing a table; the format's
    /// extension is added when the path has none
    #[arg(long)]
    output: Option<PathBuf>,

    /// Output file format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Write CSV output without the UTF-8 byte-order mark
    #[arg(long)]
    no_bom: bool,

    /// Pause after each request, in seconds
    #[arg(long, default_value_t = 0.5)]
    sleep: f64,

    /// Number of lookups in flight
    #[arg(long, default_value_t = 1)]
    concurrency: usize,

    /// Decimal places for derived ratios, or "exact" (default: 6, exact for dashboard style)
    #[arg(long)]
    precision: Option<RatioPrecision>,

    /// Table style
    #[arg(long, value_enum, default_value_t = Style::Plain)]
    style: Style,

    /// Suffix for prices in the dashboard style, e.g. ₺
    #[arg(long)]
    currency: Option<String>,

    /// Upper-case tickers before lookup
    #[arg(long)]
    uppercase: bool,

    /// Look up repeated tickers again instead of dropping them
    #[arg(long)]
    keep_duplicates: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
    PrettyJson,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => Self::Csv,
            OutputFormat::Json => Self::Json,
            OutputFormat::PrettyJson => Self::PrettyJson,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Style {
    Plain,
    Dashboard,
}

impl From<Style> for TableStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Plain => Self::Plain,
            Style::Dashboard => Self::Dashboard,
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let tickers = gather_tickers(&cli)?;
    let config = batch_config(&cli)?;
    info!(
        count = tickers.len(),
        concurrency = config.concurrency,
        precision = %config.precision,
        "starting lookup"
    );

    let source = YahooSource::new()?;
    let records = fetch_with_progress(&source, &tickers, &config).await;

    match &cli.output {
        Some(path) => {
            let format = ExportFormat::from(cli.format);
            let path = output_path(path, format);
            ValuationExport::new(&records)
                .with_byte_order_mark(!cli.no_bom)
                .export_to_file(&path, format)?;
            println!("Results saved to {}", path.display());
        }
        None => {
            let options = TableOptions {
                style: cli.style.into(),
                currency_suffix: cli.currency.clone(),
            };
            print!("{}", render_table(&records, &options));
        }
    }

    Ok(())
}

fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

const fn default_log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn output_path(path: &Path, format: ExportFormat) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(format.extension())
    }
}

fn gather_tickers(cli: &Cli) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut list = TickerList::new();

    for value in &cli.tickers {
        list.extend(pecalc::split_tickers(value));
    }
    if let Some(path) = &cli.file {
        list.extend(load_tickers_from_file(path)?);
    }
    if let Some(path) = &cli.csv {
        list.extend(load_tickers_from_csv(path, &cli.ticker_col)?);
    }

    let options = TickerOptions {
        uppercase: cli.uppercase,
        dedup: !cli.keep_duplicates,
    };
    list.finish(options)
        .map_err(|e| format!("{e}. Use --tickers, --file or --csv.").into())
}

fn batch_config(cli: &Cli) -> Result<BatchConfig, Box<dyn std::error::Error>> {
    let delay = Duration::try_from_secs_f64(cli.sleep)
        .map_err(|_| format!("invalid --sleep value: {}", cli.sleep))?;

    let precision = cli.precision.unwrap_or(match cli.style {
        Style::Plain => RatioPrecision::default(),
        Style::Dashboard => RatioPrecision::Exact,
    });

    Ok(BatchConfig::default()
        .with_delay(delay)
        .with_concurrency(cli.concurrency)
        .with_precision(precision))
}

async fn fetch_with_progress(
    source: &YahooSource,
    tickers: &[String],
    config: &BatchConfig,
) -> Vec<ValuationRecord> {
    let pb = ProgressBar::new(tickers.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("valid template")
            .progress_chars("█▓░"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Some(first) = tickers.first() {
        pb.set_message(format!("Fetching {}...", first));
    }

    let records = run_batch(source, tickers, config, |index, record| {
        if record.has_error() {
            pb.suspend(|| {
                eprintln!("Warning: {}: {}", record.ticker, record.notes);
            });
        }
        pb.inc(1);
        if let Some(next) = tickers.get(index + 1) {
            pb.set_message(format!("Fetching {}...", next));
        }
    })
    .await;

    let failed = records.iter().filter(|r| r.has_error()).count();
    pb.finish_with_message(format!(
        "Fetched {} tickers ({} failed)",
        records.len(),
        failed
    ));

    records
}
