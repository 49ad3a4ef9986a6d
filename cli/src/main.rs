//! Contract CLI
//!
//! Command-line interface for generating and validating HTTP contracts.
//!
//! ## Usage
//!
//! ```bash
//! # Translate the sample documents and persist them as YAML contracts
//! contract generate
//!
//! # Provider tests as reference, consumer mocks as candidates
//! contract validate --mode consumer
//!
//! # Reverse direction, reading the persisted contracts, JSON output
//! contract validate --mode provider --from-disk --format json
//! ```
//!
//! ## Exit Codes
//!
//! - 0: command ran (including validations that found mismatches)
//! - 1: error

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use contract_core::fixtures::{sample_mocks, sample_tests};
use contract_core::store::{self, DEFAULT_CONSUMER_DIR, DEFAULT_PROVIDER_DIR};
use contract_core::{
    translate, translate_all, validate, ContractLayout, HttpDocument, JsonRenderer, Mode, Render,
    TableRenderer,
};

/// Contract testing for recorded HTTP traffic
#[derive(Parser)]
#[command(name = "contract")]
#[command(version)]
#[command(about = "Generate and validate consumer/provider HTTP contracts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and save schemas from the sample documents
    Generate {
        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Validate contracts (consumer or provider mode)
    Validate {
        /// Validation mode: consumer or provider
        #[arg(short, long, default_value = "consumer")]
        mode: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Read contracts saved by `generate` instead of the sample documents
        #[arg(long)]
        from_disk: bool,

        /// Print the status column without ANSI colors
        #[arg(long)]
        no_color: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Download contract artifacts
    Download,
}

#[derive(Args)]
struct LayoutArgs {
    /// Directory for provider test contracts
    #[arg(long, env = "CONTRACT_PROVIDER_DIR", default_value = DEFAULT_PROVIDER_DIR)]
    provider_dir: PathBuf,

    /// Directory for consumer mock contracts
    #[arg(long, env = "CONTRACT_CONSUMER_DIR", default_value = DEFAULT_CONSUMER_DIR)]
    consumer_dir: PathBuf,
}

impl From<LayoutArgs> for ContractLayout {
    fn from(args: LayoutArgs) -> Self {
        ContractLayout {
            provider_dir: args.provider_dir,
            consumer_dir: args.consumer_dir,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { layout } => {
            let failed = generate_command(&layout.into());
            if failed > 0 {
                tracing::warn!(failed, "some schemas were not saved");
            }
            Ok(())
        }
        Commands::Validate {
            mode,
            format,
            from_disk,
            no_color,
            layout,
        } => validate_command(&mode, format, from_disk, !no_color, &layout.into()),
        Commands::Download => {
            println!("Downloading artifacts... (Not implemented)");
            Ok(())
        }
    }
}

/// Save provider tests and consumer mocks; returns how many saves failed.
fn generate_command(layout: &ContractLayout) -> usize {
    save_all("test", &sample_tests(), &layout.provider_dir)
        + save_all("mock", &sample_mocks(), &layout.consumer_dir)
}

fn save_all(
    kind: &str,
    docs: &std::collections::BTreeMap<String, HttpDocument>,
    dir: &Path,
) -> usize {
    let mut failed = 0;
    for (name, doc) in docs {
        let schema = translate(doc);
        match store::save_schema(&schema, dir, &format!("{name}.yaml")) {
            Ok(_) => println!("Saved schema for {kind} {name}"),
            Err(e) => {
                eprintln!("Error: {e}");
                failed += 1;
            }
        }
    }
    failed
}

fn validate_command(
    mode: &str,
    format: OutputFormat,
    from_disk: bool,
    color: bool,
    layout: &ContractLayout,
) -> Result<()> {
    let Ok(mode) = mode.parse::<Mode>() else {
        println!("Invalid mode. Use 'consumer' or 'provider'.");
        return Ok(());
    };

    let (tests, mocks) = if from_disk {
        let tests = store::load_catalog(&layout.provider_dir).with_context(|| {
            format!("Failed to load provider contracts from {:?}", layout.provider_dir)
        })?;
        let mocks = store::load_catalog(&layout.consumer_dir).with_context(|| {
            format!("Failed to load consumer contracts from {:?}", layout.consumer_dir)
        })?;
        (tests, mocks)
    } else {
        (translate_all(&sample_tests()), translate_all(&sample_mocks()))
    };

    let report = validate(&tests, &mocks, mode);

    match format {
        OutputFormat::Json => {
            println!("{}", JsonRenderer.render(&report)?);
        }
        OutputFormat::Text => {
            println!("Running {}:", mode.title());
            println!("Validation Results:");
            print!("{}", TableRenderer { color }.render(&report)?);
            println!("{} passed, {} failed", report.passed(), report.failed());
        }
    }
    Ok(())
}
