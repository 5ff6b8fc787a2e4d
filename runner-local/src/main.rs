use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use greeting_core::telemetry::init_tracing;
use greeting_core::{load_config, Handler, InvocationContext};
use serde_json::Value;
use tracing::info;

/// Invokes the greeting handler once outside of Lambda.
///
/// Reads one JSON event, runs it through the same handler the `bootstrap`
/// binary hosts and prints the response object as a single line.
#[derive(Parser, Debug)]
#[command(name = "runner-local", about = "Invoke the greeting handler with a local event")]
struct Cli {
    /// Event JSON file; stdin when omitted
    #[arg(long)]
    event: Option<PathBuf>,

    /// YAML handler configuration; falls back to GREETING_CONFIG, then to defaults
    #[arg(long, env = "GREETING_CONFIG_PATH")]
    config: Option<String>,

    /// Request id reported in logs
    #[arg(long, default_value = "local-invocation")]
    request_id: String,
}

fn read_event(reader: impl Read) -> Result<Value> {
    serde_json::from_reader(BufReader::new(reader)).context("event is not valid JSON")
}

fn run(cli: &Cli, stdin: impl Read, mut out: impl Write) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let handler = Handler::new(config);

    let event = match &cli.event {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening event file {}", path.display()))?;
            read_event(file)?
        }
        None => read_event(stdin)?,
    };

    let context = InvocationContext::new(cli.request_id.clone()).with_function_name("local");
    let response = handler.handle(&event, &context)?;

    serde_json::to_writer(&mut out, &response)?;
    writeln!(out)?;
    Ok(())
}

fn main() -> Result<()> {
    init_tracing(true);

    let cli = Cli::parse();
    info!("Running in local development mode");
    run(&cli, io::stdin().lock(), io::stdout().lock())
}
