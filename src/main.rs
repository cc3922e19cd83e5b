use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use quire::analysis::{BookAnalyzer, BoundaryRules};
use quire::discovery::{self, DiscoveryConfig};
use quire::processing::{self, SchedulerConfig};
use quire::reader::ReaderConfig;
use quire::report::DEFAULT_OUTPUT_DIR;

#[derive(Parser, Debug)]
#[command(name = "quire")]
#[command(about = "Concurrent book analyzer: sentence, word and letter statistics per .txt file")]
#[command(version)]
struct Args {
    /// Directory to scan for .txt files
    input_dir: PathBuf,

    /// Directory that receives one report per book
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Also scan subdirectories
    #[arg(long)]
    recursive: bool,

    /// Maximum number of books processed at once (defaults to CPU count)
    #[arg(long)]
    max_concurrency: Option<usize>,

    /// Split sentences after title abbreviations such as "Mr." too
    #[arg(long)]
    no_guard_abbreviations: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: structured JSON logging enables observability and debugging in production
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting quire");
    info!(?args, "Parsed CLI arguments");

    // WHY: validate input directory exists early to fail fast with clear error
    if !args.input_dir.exists() {
        anyhow::bail!("Input directory does not exist: {}", args.input_dir.display());
    }

    if !args.input_dir.is_dir() {
        anyhow::bail!("Input path is not a directory: {}", args.input_dir.display());
    }

    let discovery_config = DiscoveryConfig {
        recursive: args.recursive,
    };

    info!("Starting file discovery in: {}", args.input_dir.display());
    let discovered_files = discovery::collect_discovered_files(&args.input_dir, discovery_config).await?;

    let (valid_files, invalid_files): (Vec<_>, Vec<_>) = discovered_files
        .into_iter()
        .partition(|f| f.error.is_none());

    for file in &invalid_files {
        if let Some(ref error) = file.error {
            info!("Issue with {}: {}", file.path.display(), error);
        }
    }

    println!("quire v{} - File discovery complete", env!("CARGO_PKG_VERSION"));
    println!("Found {} .txt files", valid_files.len() + invalid_files.len());
    println!("Valid files: {}, Files with issues: {}", valid_files.len(), invalid_files.len());

    let rules = BoundaryRules {
        guard_title_abbreviations: !args.no_guard_abbreviations,
    };
    let analyzer = Arc::new(BookAnalyzer::new(rules)?);

    let scheduler_config = SchedulerConfig {
        output_dir: args.output_dir.clone(),
        max_concurrency: args.max_concurrency.unwrap_or_else(num_cpus::get),
        reader: ReaderConfig::default(),
    };

    let paths = valid_files.into_iter().map(|f| f.path).collect();
    let summary = processing::process_files_parallel(paths, analyzer, &scheduler_config).await;

    println!("Processing complete:");
    println!("  Successfully processed: {} files", summary.files_processed);
    if summary.files_failed > 0 {
        println!("  Failed to process: {} files", summary.files_failed);
    }
    println!("  Total characters processed: {}", summary.total_chars_processed);
    println!("  Reports written to: {}", args.output_dir.display());

    info!(summary = %serde_json::to_string(&summary)?, "Run summary");

    Ok(())
}
