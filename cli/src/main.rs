//! tablegrid CLI - table reconstruction from detection dumps

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use tablegrid::batch::DEFAULT_SCORE_THRESHOLD;
use tablegrid::{
    BatchOptions, BatchProcessor, BatchReport, JsonFormat, OutputFormat, RecognizeOptions,
    RenderOptions, DEFAULT_CONTAINMENT_THRESHOLD,
};

#[derive(Parser)]
#[command(name = "tablegrid")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Rebuild tables from structure detections and export them", long_about = None)]
struct Cli {
    /// Detection dump file or directory of dumps
    #[arg(value_name = "PATH")]
    input: PathBuf,

    /// Output format (json, csv, html, markdown)
    #[arg(short, long, default_value = "json")]
    format: String,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = "results")]
    outdir: PathBuf,

    /// Minimum detection score
    #[arg(long, default_value_t = DEFAULT_SCORE_THRESHOLD)]
    score: f32,

    /// Overlap ratio above which a box counts as contained in another
    #[arg(long, default_value_t = DEFAULT_CONTAINMENT_THRESHOLD)]
    containment: f64,

    /// Drop line breaks inside cell and paragraph contents
    #[arg(long)]
    ignore_line_break: bool,

    /// Markdown rendering mode for tables with merged cells
    #[arg(long, value_enum, default_value = "markdown")]
    table_mode: TableMode,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Disable parallel processing
    #[arg(long)]
    sequential: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum TableMode {
    /// Standard Markdown tables
    Markdown,
    /// HTML tables for merged cells
    Html,
}

impl From<TableMode> for tablegrid::TableFallback {
    fn from(mode: TableMode) -> Self {
        match mode {
            TableMode::Markdown => tablegrid::TableFallback::Markdown,
            TableMode::Html => tablegrid::TableFallback::Html,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let format: OutputFormat = cli.format.parse()?;
    let files = BatchProcessor::collect_inputs(&cli.input)?;

    let recognize = RecognizeOptions::new()
        .with_containment_threshold(cli.containment)
        .with_parallel(!cli.sequential);
    let render = RenderOptions::new()
        .with_ignore_line_break(cli.ignore_line_break)
        .with_table_fallback(cli.table_mode.into())
        .with_json_format(if cli.compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        });
    let options = BatchOptions::new()
        .with_format(format)
        .with_score_threshold(cli.score)
        .with_recognize_options(recognize)
        .with_render_options(render);

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    pb.set_message(format!("Rebuilding tables ({})", format));

    let start = Instant::now();
    let processor = BatchProcessor::new(&cli.outdir, options);
    let report = processor.process_files(&files, |_| pb.inc(1))?;
    pb.finish_with_message("Done!");

    print_summary(&report, start.elapsed().as_secs_f64());
    Ok(())
}

fn print_summary(report: &BatchReport, seconds: f64) {
    println!();
    println!("{}", "Batch Summary".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Files".bold(), report.files);
    println!("{}: {}", "Succeeded".bold(), report.succeeded());
    println!("{}: {}", "Artifacts".bold(), report.outputs.len());
    println!("{}: {:.2} sec", "Total Processing time".bold(), seconds);

    if !report.failures.is_empty() {
        println!();
        println!("{}", "Failed files:".red().bold());
        for failure in &report.failures {
            println!("  {} {}: {}", "├─".dimmed(), failure.path.display(), failure.error);
        }
    }
}
