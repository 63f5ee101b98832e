use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "eli5doc")]
#[command(
    version,
    about = "Explain-like-I'm-5 documentation generator for annotated code"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a source tree for marked elements
    Scan {
        #[arg(help = "Source directory to scan")]
        source: PathBuf,
    },

    /// Generate ELI5 documentation for a source tree
    Generate {
        #[arg(help = "Source directory to scan")]
        source: PathBuf,
        #[arg(long, short, help = "Output file for the generated document")]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Scan { source } => {
            eli5doc::cli::commands::scan::run(source)?;
        }
        Commands::Generate { source, output } => {
            let rt = Runtime::new()?;
            rt.block_on(eli5doc::cli::commands::generate::run(source, output))?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                eli5doc::cli::commands::config::show(format == "json")?;
            }
            ConfigAction::Path => {
                eli5doc::cli::commands::config::path();
            }
        },
    }

    Ok(())
}
