//! Zone Map Console
//!
//! `zones run <MAP>`: load a map, then classify planes typed on stdin
//! `zones check <MAP>`: validate a map and print its zones

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "zones", version)]
#[command(about = "Classify planes against a zone map", long_about = None)]
struct Cli {
    /// Session config file (YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true, default_value = "false")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Load a map and answer plane queries from stdin
    Run {
        /// Map file path
        map: PathBuf,

        /// Command that ends the session
        #[arg(long)]
        exit_command: Option<String>,

        /// Print "nothing found" for planes outside every zone
        #[arg(long, default_value = "false")]
        report_unmatched: bool,
    },

    /// Validate a map file and list its zones in priority order
    Check {
        /// Map file path
        map: PathBuf,

        /// Print the zone map as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },
}

#[cfg(feature = "cli")]
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "zone_cli=debug,zone_core=debug" } else { "zone_cli=info,zone_core=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = zone_cli::SessionConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Run { map, exit_command, report_unmatched } => {
            if let Some(exit_command) = exit_command {
                config = config.with_exit_command(&exit_command);
            }
            config.report_unmatched |= report_unmatched;

            let zones = zone_cli::load_map_file(&map, &config)?;
            tracing::info!(map = %map.display(), zones = zones.len(), "map loaded");

            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            zone_cli::run_session(&zones, &config, stdin.lock(), stdout.lock())?;
        }

        Commands::Check { map, json } => {
            let zones = zone_cli::load_map_file(&map, &config)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&zones)?);
            } else {
                println!("✅ {} is valid", map.display());
                print!("{}", zone_cli::describe_map(&zones));
            }
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("zones CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
