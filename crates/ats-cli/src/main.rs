//! Command-line résumé analyzer.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commands::{analyze, batch, catalog, config};

/// ATS résumé analyzer - score résumés the way applicant tracking systems read them
#[derive(Parser)]
#[command(name = "ats")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single résumé
    Analyze(analyze::AnalyzeArgs),

    /// Analyze every résumé matching a glob pattern
    Batch(batch::BatchArgs),

    /// Inspect the keyword and section catalogs
    Catalog(catalog::CatalogArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG, when set, takes precedence over -v.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity(cli.verbose).as_str()));

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish(),
    )?;

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Analyze(args) => analyze::run(args, config_path).await,
        Commands::Batch(args) => batch::run(args, config_path).await,
        Commands::Catalog(args) => catalog::run(args, config_path).await,
        Commands::Config(args) => config::run(args, config_path).await,
    }
}

fn verbosity(count: u8) -> Level {
    match count {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
