//! chainspec-inject CLI — genesis injection for Kusama chainspec templates.
//!
//! With no arguments it performs the canonical run: read `statefile`,
//! `wasmfile`, and `kusama.yml` from the current directory and write
//! `kusama_injected.yml` with the `HEAD`, `HASH`, and `WASM` placeholders
//! substituted. Every path can be overridden with a flag, and the `digest`
//! subcommand prints just the validation code hash.

mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use chainspec_inject_core::inject::{
    DEFAULT_OUTPUT_FILE, DEFAULT_STATE_FILE, DEFAULT_TEMPLATE_FILE, DEFAULT_WASM_FILE,
};

#[derive(Parser)]
#[command(
    name = "chainspec-inject",
    about = "Inject a parachain genesis head and validation code into a chainspec template",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    inject: InjectArgs,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the injected chainspec (the default when no subcommand is given)
    Inject(InjectArgs),

    /// Print only the BLAKE2b-256 hash of the wasm payload
    Digest {
        /// Path to the hex-encoded wasm payload file
        #[arg(long, default_value = DEFAULT_WASM_FILE)]
        wasm: PathBuf,
    },
}

#[derive(Args)]
struct InjectArgs {
    /// Path to the genesis head (state root) file
    #[arg(long, default_value = DEFAULT_STATE_FILE)]
    state: PathBuf,

    /// Path to the hex-encoded wasm payload file
    #[arg(long, default_value = DEFAULT_WASM_FILE)]
    wasm: PathBuf,

    /// Path to the chainspec template
    #[arg(long, default_value = DEFAULT_TEMPLATE_FILE)]
    template: PathBuf,

    /// Path the injected chainspec is written to
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Also write a JSON injection report to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Some(Commands::Inject(args)) => commands::inject::run(&args)?,
        Some(Commands::Digest { wasm }) => commands::digest::run(&wasm)?,
        None => commands::inject::run(&cli.inject)?,
    }

    Ok(())
}
