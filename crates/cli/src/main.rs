mod serve;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use turnaround_core::{parse, render};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Ground-handling command toolchain.
#[derive(Parser)]
#[command(
    name = "turnaround",
    version,
    about = "Ground-handling command toolchain"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a pipe-delimited command string and report validity
    Parse {
        /// The command string, e.g. "CHK15|BAG25|CLEAN10|PBB90"
        command: String,
    },

    /// Parse a command string and print its human-readable summary
    Summarize {
        /// The command string, e.g. "CHK15|BAG25|CLEAN10|PBB90"
        command: String,
    },

    /// Start the turnaround HTTP API server
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8080")]
        port: u16,
        /// Flight roster JSON files to pre-load
        #[arg()]
        rosters: Vec<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { command } => {
            cmd_parse(&command, cli.output, cli.quiet);
        }
        Commands::Summarize { command } => {
            cmd_summarize(&command, cli.quiet);
        }
        Commands::Serve { port, rosters } => {
            let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");
            if let Err(e) = rt.block_on(serve::start_server(port, rosters)) {
                eprintln!("Server error: {}", e);
                process::exit(1);
            }
        }
    }
}

fn cmd_parse(command: &str, output: OutputFormat, quiet: bool) {
    let result = parse(command);

    if !quiet {
        match output {
            OutputFormat::Json => {
                let pretty = serde_json::to_string_pretty(&result)
                    .unwrap_or_else(|e| format!("serialization error: {}", e));
                println!("{}", pretty);
            }
            OutputFormat::Text => {
                if result.is_valid() {
                    println!("valid");
                } else {
                    println!("invalid");
                    for issue in result.issues() {
                        println!("  - {}", issue);
                    }
                }
                println!("{}", render(&result));
            }
        }
    }

    if !result.is_valid() {
        process::exit(1);
    }
}

fn cmd_summarize(command: &str, quiet: bool) {
    // The summary describes stored fields only; a partially invalid string
    // still summarizes what it captured.
    let result = parse(command);
    if !quiet {
        println!("{}", render(&result));
    }
}
