mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, emails, export, leads, stats, Context};
use crate::error::{exit_code_for, report_error};
use leadboard_config as config;
use leadboard_dataset::{paths, Dataset};

#[derive(Debug, Parser)]
#[command(name = "leadboard", version, about = "leadboard CLI")]
struct Cli {
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
    List(leads::ListArgs),
    Show(leads::ShowArgs),
    Export(export::ExportArgs),
    /// Print the valid emails of the matching leads
    Emails(emails::EmailsArgs),
    Stats(stats::StatsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        dataset: dataset_path,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    if let Command::Completions(args) = command {
        return completions::emit(args);
    }

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let dataset_path = paths::resolve_dataset_path(dataset_path, app_config.dataset.clone())
        .with_context(|| "resolve dataset path")?;
    debug!(path = %dataset_path.display(), "dataset path resolved");

    let dataset = Dataset::open(&dataset_path)
        .with_context(|| format!("load dataset {}", dataset_path.display()))?;
    debug!(leads = dataset.len(), "dataset loaded");

    let ctx = Context {
        dataset: &dataset,
        json,
        config: &app_config,
    };

    match command {
        Command::List(args) => leads::list_leads(&ctx, args),
        Command::Show(args) => leads::show_lead(&ctx, args),
        Command::Export(args) => export::export_csv(&ctx, args),
        Command::Emails(args) => emails::list_emails(&ctx, args),
        Command::Stats(args) => stats::show_stats(&ctx, args),
        Command::Completions(_) => {
            unreachable!("completions command handled before dataset load")
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
