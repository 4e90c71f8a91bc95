//! Sitescope main entry point
//!
//! Command-line interface for the Sitescope company website profiler.

use clap::{Parser, ValueEnum};
use sitescope::batch::{load_worklist, BatchOrchestrator, BatchOutcome, Checkpoint};
use sitescope::config::{load_config, validate, Config, Provider};
use sitescope::generator::{CloudGenerator, LocalGenerator, TextGenerator};
use sitescope::output::{print_batch_summary, print_site_report, write_site_result};
use sitescope::SiteAnalyzer;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Sitescope: a company website profiler
///
/// Sitescope crawls a company website, classifies its URLs into topical
/// buckets, selects a bounded set of representative pages, and generates an
/// executive profile from their content. Batch mode processes a worklist of
/// sites with checkpointed resumability.
#[derive(Parser, Debug)]
#[command(name = "sitescope")]
#[command(version)]
#[command(about = "Analyze company websites and generate executive profiles", long_about = None)]
struct Cli {
    /// Website URL to analyze (scheme defaults to https)
    #[arg(value_name = "URL", required_unless_present = "batch", conflicts_with = "batch")]
    url: Option<String>,

    /// Process a worklist file instead (one site URL per line)
    #[arg(long, value_name = "FILE")]
    batch: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output directory for JSON results
    #[arg(short, long, value_name = "DIR")]
    output: Option<String>,

    /// Generation backend to use
    #[arg(long, value_enum)]
    provider: Option<ProviderArg>,

    /// Model identifier override
    #[arg(long, value_name = "MODEL")]
    model: Option<String>,

    /// Ignore an existing checkpoint and start the batch fresh
    #[arg(long, requires = "batch")]
    fresh: bool,

    /// Print only the JSON record, no formatted report
    #[arg(long, conflicts_with = "batch")]
    json_only: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// CLI counterpart of [`Provider`]
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProviderArg {
    /// Local model server over loopback HTTP
    Local,
    /// Hosted cloud inference endpoint
    Cloud,
}

impl From<ProviderArg> for Provider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Local => Provider::Local,
            ProviderArg::Cloud => Provider::Cloud,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration and apply CLI overrides
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    if let Some(provider) = cli.provider {
        config.generator.provider = provider.into();
    }
    if let Some(model) = &cli.model {
        config.generator.model = model.clone();
    }
    if let Some(output) = &cli.output {
        config.output.directory = output.clone();
    }
    validate(&config)?;

    // Cancellation flag, set on ctrl-c and checked between batch items
    let cancel = Arc::new(AtomicBool::new(false));
    let cancel_handle = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, finishing current site...");
            cancel_handle.store(true, Ordering::SeqCst);
        }
    });

    match config.generator.provider {
        Provider::Local => {
            let generator = LocalGenerator::new(&config.generator)?;
            run(cli, config, generator, cancel).await
        }
        Provider::Cloud => {
            let generator = CloudGenerator::new(&config.generator)?;
            run(cli, config, generator, cancel).await
        }
    }
}

/// Dispatches to single-site or batch mode with the chosen backend
async fn run<G: TextGenerator>(
    cli: Cli,
    config: Config,
    generator: G,
    cancel: Arc<AtomicBool>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(worklist_path) = &cli.batch {
        run_batch(&config, &generator, cancel, worklist_path, cli.fresh).await
    } else if let Some(url) = cli.url.as_deref() {
        run_single(&config, &generator, url, cli.json_only).await
    } else {
        // clap enforces URL or --batch; keep a real error for safety
        Err("either a URL or --batch <FILE> is required".into())
    }
}

/// Analyzes one site and prints the report
async fn run_single<G: TextGenerator>(
    config: &Config,
    generator: &G,
    url: &str,
    json_only: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let analyzer = SiteAnalyzer::new(config, generator)?;

    let result = match analyzer.analyze(url).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Analysis failed: {}", e);
            std::process::exit(1);
        }
    };

    let out_dir = Path::new(&config.output.directory);
    std::fs::create_dir_all(out_dir)?;
    let saved_to = write_site_result(out_dir, &result)?;

    if json_only {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_site_report(&result, &saved_to);
    }

    Ok(())
}

/// Runs the batch orchestrator over a worklist file
async fn run_batch<G: TextGenerator>(
    config: &Config,
    generator: &G,
    cancel: Arc<AtomicBool>,
    worklist_path: &PathBuf,
    fresh: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let worklist = load_worklist(worklist_path)?;
    tracing::info!(
        "Loaded worklist with {} sites from {}",
        worklist.len(),
        worklist_path.display()
    );

    if fresh {
        let checkpoint_path =
            Path::new(&config.output.directory).join(&config.output.checkpoint_file);
        Checkpoint::remove(&checkpoint_path)?;
        tracing::info!("Starting fresh batch (existing checkpoint discarded)");
    }

    let orchestrator = BatchOrchestrator::new(config, generator, cancel)?;

    match orchestrator.run(&worklist).await? {
        BatchOutcome::Completed(summary) => {
            print_batch_summary(&summary);
            Ok(())
        }
        BatchOutcome::Interrupted {
            completed,
            remaining,
        } => {
            eprintln!(
                "Interrupted: {} sites completed this run, {} remaining. \
                 Re-run the same command to resume.",
                completed, remaining
            );
            std::process::exit(130);
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitescope=info,warn"),
            1 => EnvFilter::new("sitescope=debug,info"),
            2 => EnvFilter::new("sitescope=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
