//! advisor: pre-flight advisor for destructive commands.
//!
//! Thin binary entry point. All logic lives in the `advisor-core`
//! and `advisor-cli` crates.
use advisor_cli::Cli;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Structured logging on stderr; stdout carries only the advisory.
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("advisor starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    advisor_cli::run(&cli, &mut out)
}
