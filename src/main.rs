mod cli;
mod config;
mod display;
mod error;
mod formatter;
mod table;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::compare::CompareOptions;
use crate::cli::OutputArgs;

#[derive(Parser)]
#[command(name = "mdcompare")]
#[command(about = "Format marker text as HTML and compare two texts side by side", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format one text as an HTML fragment
    Format {
        /// Input file (stdin when omitted or "-")
        input: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Render two texts side by side in a comparison table
    Compare {
        /// Left-hand text file ("-" for stdin)
        left: PathBuf,

        /// Right-hand text file ("-" for stdin)
        right: PathBuf,

        /// Run both texts through the formatter
        #[arg(long)]
        format: bool,

        /// Title of the left column
        #[arg(long)]
        left_title: Option<String>,

        /// Title of the right column
        #[arg(long)]
        right_title: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize mdcompare.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

/// Initialize env_logger on stderr. RUST_LOG wins over the verbosity flag.
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .try_init()
        .ok();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let result = match cli.command {
        Commands::Format { input, output } => cli::format::run(input, output),
        Commands::Compare {
            left,
            right,
            format,
            left_title,
            right_title,
            output,
        } => cli::compare::run(
            CompareOptions {
                left,
                right,
                format,
                left_title,
                right_title,
            },
            output,
        ),
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
