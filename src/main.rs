//! Seorank: SEO opportunity analyzer CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use seorank::analyzer::{ScoreEngine, Signals};
use seorank::config::{load_config, starter_config, PartialInput, CONFIG_FILENAME};
use seorank::reporter::{ConsoleReporter, JsonReporter};
use seorank::AnalysisInput;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Seorank: opportunity score and growth roadmap for an SEO campaign
#[derive(Parser, Debug)]
#[command(name = "seorank")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Domain to analyze (e.g. midominio.com)
    #[arg(long, short)]
    domain: Option<String>,

    /// Comma-separated keyword list
    #[arg(long, short)]
    keywords: Option<String>,

    /// Direct competitor domain
    #[arg(long, short)]
    competitor: Option<String>,

    /// Target audience description
    #[arg(long, short)]
    audience: Option<String>,

    /// Use the sample form values for any field not otherwise set
    #[arg(long)]
    sample: bool,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Minimum score threshold (exit 1 if below)
    #[arg(long, short)]
    threshold: Option<u8>,

    /// Quiet mode (minimal output)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output and debug logging
    #[arg(long, short)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Path to config file (default: search .seorankrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .seorankrc.json with the sample defaults
    Init {
        /// Minimum score threshold (e.g. 70)
        #[arg(long)]
        threshold: Option<u8>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose, args.no_color);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

/// Log to stderr so stdout stays clean for reports. RUST_LOG takes precedence.
fn init_tracing(verbose: bool, no_color: bool) {
    let default_filter = if verbose { "seorank=debug" } else { "seorank=warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    if args.no_color {
        colored::control::set_override(false);
    }

    if let Some(Commands::Init { threshold, dir }) = args.command {
        return run_init(threshold, dir.as_deref());
    }

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config = load_config(&cwd, args.config.as_deref())
        .context("Failed to load configuration")?
        .merge_with_cli(args.threshold);
    debug!(threshold = ?config.threshold, "configuration resolved");

    let explicit = PartialInput {
        domain: args.domain,
        keywords: args.keywords,
        competitor: args.competitor,
        audience: args.audience,
    };
    let fallback = if args.sample {
        AnalysisInput::sample()
    } else {
        AnalysisInput::default()
    };
    let input = config.resolve_input(explicit, fallback);

    let signals = Signals::from_input(&input);
    debug!(
        keyword_count = signals.keyword_count,
        domain_length = signals.domain_length,
        similarity = signals.similarity,
        audience_focus = signals.audience_focus,
        "signals computed"
    );
    let result = ScoreEngine::analyze_signals(&signals);
    info!(score = result.score, difficulty = %result.difficulty, "analysis complete");

    if args.json {
        let reporter = JsonReporter::new().pretty();
        println!("{}", reporter.report_with_input(&input, &result));
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.no_color {
            reporter = reporter.without_colors();
        }
        if args.verbose {
            reporter = reporter.verbose();
        }
        if args.quiet {
            reporter.report_quiet(&input, &result);
        } else {
            reporter.report(&input, &result);
        }
    }

    if let Some(threshold) = config.threshold {
        if result.score < threshold {
            if !args.quiet {
                eprintln!(
                    "{}: score {} is below threshold {}",
                    "Warning".yellow(),
                    result.score,
                    threshold
                );
            }
            return Ok(ExitCode::from(1));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_init(threshold: Option<u8>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let json = starter_config(threshold.unwrap_or(70));
    std::fs::write(&config_path, format!("{}\n", json))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    info!(path = %config_path.display(), "config created");

    println!("{}: Created {}", "Success".green(), config_path.display());
    Ok(ExitCode::SUCCESS)
}
