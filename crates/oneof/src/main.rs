use clap::{Parser, Subcommand};
use oneof::KnownUnion;
use oneof::commands::{run_decode, run_schema, run_validate};
use oneof::logging::init_tracing;
use oneof_common::config::{DEFAULT_CONFIG_FILE, OneofConfig};
use starbase::{App, AppResult, AppSession};
use std::path::PathBuf;

/// oneof CLI - decode and inspect oneOf union documents
#[derive(Parser)]
#[command(name = "oneof")]
#[command(about = "Decode, validate and describe oneOf union documents", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (missing file means defaults)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// Decode a document and print the matched variant
    Decode {
        /// Path to the JSON document
        #[arg(short, long)]
        input: PathBuf,
        /// Union to decode as
        #[arg(short, long, value_enum, default_value_t)]
        union: KnownUnion,
        /// Print a machine-readable JSON result
        #[arg(long)]
        json: bool,
    },
    /// Decode a document and report validation findings
    Validate {
        /// Path to the JSON document
        #[arg(short, long)]
        input: PathBuf,
        /// Union to decode as
        #[arg(short, long, value_enum, default_value_t)]
        union: KnownUnion,
        /// Print a machine-readable JSON result
        #[arg(long)]
        json: bool,
    },
    /// Generate JSON Schema for a union
    Schema {
        /// Union to describe
        #[arg(short, long, value_enum, default_value_t)]
        union: KnownUnion,
        /// Output file path (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Application session for oneof CLI
#[derive(Clone)]
struct OneofSession {
    command: Commands,
    config: OneofConfig,
}

impl OneofSession {
    /// Dispatch the selected command. Must not live in `execute`:
    /// `App::run` invokes that hook in addition to the op closure.
    fn run(&self) -> AppResult {
        match &self.command {
            Commands::Decode { input, union, json } => {
                run_decode(input, *union, *json, &self.config)
            }
            Commands::Validate { input, union, json } => {
                run_validate(input, *union, *json, &self.config)
            }
            Commands::Schema { union, output } => run_schema(*union, output.clone()),
        }
    }
}

#[async_trait::async_trait]
impl AppSession for OneofSession {}

#[tokio::main]
async fn main() -> starbase::MainResult {
    let cli = Cli::parse();

    let config = match OneofConfig::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{:#}", err);
            return Ok(std::process::ExitCode::from(2));
        }
    };
    init_tracing(&config.logging);

    let session = OneofSession {
        command: cli.command,
        config,
    };

    // Initialize and run starbase App
    let exit_code = App::default()
        .run(session, |session| async move { session.run() })
        .await?;

    Ok(std::process::ExitCode::from(exit_code))
}
