//! CLI tool for consolidating weekly status reports.

mod render;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use report_core::{ConsolidatedTable, ReportPipeline, SourceFormat, TextRefiner};
use report_history::{HistoryStore, JsonFileHistory};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

/// Consolidate two-period weekly report sheets into one table per file.
#[derive(Parser, Debug)]
#[command(name = "report-consolidate")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input report file(s) (.xlsx or .csv)
    #[arg(required_unless_present = "list_history")]
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Output rendering
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Rows per rendered page
    #[arg(short = 'r', long, default_value = "6")]
    rows_per_page: usize,

    /// Skip the phrase-canonicalization stage
    #[arg(long)]
    no_refine: bool,

    /// Append each successful run to this JSON history file
    #[arg(long)]
    history: Option<PathBuf>,

    /// List runs stored in the history file and exit
    #[arg(long, requires = "history")]
    list_history: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if args.list_history {
        let path = args
            .history
            .as_deref()
            .context("--list-history requires --history")?;
        return list_history(path);
    }

    let mut pipeline = ReportPipeline::new();
    if args.no_refine {
        pipeline = pipeline.with_refiner(None);
    } else {
        pipeline = pipeline.with_refiner(Some(TextRefiner::new()));
    }

    let history = args.history.as_ref().map(JsonFileHistory::new);

    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        match process_file(input_path, &pipeline) {
            Ok(table) => {
                if table.is_empty() {
                    eprintln!(
                        "Warning: {} produced no records; nothing to report",
                        input_path.display()
                    );
                }

                let rendered = match args.format {
                    OutputFormat::Text => render::render_text(&table, args.rows_per_page),
                    OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&table)?),
                };

                if args.print {
                    print!("{}", rendered);
                } else {
                    let output_path =
                        get_output_path(input_path, args.output.as_ref(), args.format)?;
                    write_output(&output_path, &rendered)?;
                    if args.verbose {
                        eprintln!("Written to: {}", output_path.display());
                    }
                }

                if let Some(store) = &history {
                    let filename = input_path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or("unknown");
                    store
                        .append(filename, table.rows.clone())
                        .with_context(|| "Failed to append run to history")?;
                }
            }
            Err(e) => {
                eprintln!("Error processing {}: {}", input_path.display(), e);
            }
        }
    }

    Ok(())
}

/// Read, detect, and consolidate a single report file.
fn process_file(input_path: &Path, pipeline: &ReportPipeline) -> Result<ConsolidatedTable> {
    // Read magic bytes to detect format
    let file = File::open(input_path)
        .with_context(|| format!("Failed to open {}", input_path.display()))?;
    let mut reader = BufReader::new(file);

    let mut magic = [0u8; 4];
    let read = reader.read(&mut magic).with_context(|| "Failed to read file header")?;

    // Re-open for parsing
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let format = detect_format(input_path, &magic[..read])?;

    let grid = match format {
        SourceFormat::Xlsx => {
            log::debug!("Reading as XLSX");
            report_xlsx::XlsxReader::new()
                .parse(reader)
                .map_err(|e| anyhow::anyhow!("{}", e))?
        }
        SourceFormat::Csv => {
            log::debug!("Reading as CSV");
            report_csv::CsvReader::new()
                .parse(reader)
                .map_err(|e| anyhow::anyhow!("{}", e))?
        }
    };

    log::debug!("grid has {} rows", grid.row_count());

    let table = pipeline.convert(&grid).map_err(|e| anyhow::anyhow!("{}", e))?;
    Ok(table)
}

/// Detect the source format from magic bytes, falling back to the
/// file extension. CSV has no magic, so the fallback carries it.
fn detect_format(path: &Path, magic: &[u8]) -> report_core::Result<SourceFormat> {
    SourceFormat::from_magic(magic)
        .or_else(|| {
            path.extension()
                .and_then(|e| e.to_str())
                .and_then(SourceFormat::from_extension)
        })
        .ok_or_else(|| report_core::Error::UnsupportedFormat(path.display().to_string()))
}

/// Print stored history runs.
fn list_history(path: &Path) -> Result<()> {
    let store = JsonFileHistory::new(path);
    let entries = store.list().with_context(|| "Failed to read history")?;

    if entries.is_empty() {
        println!("No stored runs.");
        return Ok(());
    }

    for entry in entries {
        println!(
            "#{}  {}  {}  ({} projects)",
            entry.id,
            entry.created_at.format("%Y-%m-%d %H:%M:%S"),
            entry.source_filename,
            entry.rows.len()
        );
    }

    Ok(())
}

/// Determine the output path for a processed file.
fn get_output_path(
    input_path: &Path,
    output_dir: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let output_filename = format!("{}.{}", stem, format.extension());

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => {
            if let Some(parent) = input_path.parent() {
                parent.join(output_filename)
            } else {
                PathBuf::from(output_filename)
            }
        }
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
