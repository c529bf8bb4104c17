use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use worldcup_scoreboard::cli::{display_error_with_suggestions, run_cli, Cli};

fn main() {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > verbose flag > default (error)
    // Rejected commands are already reported on stdout; -v shows their traces.
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match cli.verbose {
            0 => EnvFilter::new("error"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Summaries go to stdout, diagnostics to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(e) = run_cli(cli) {
        display_error_with_suggestions(&e, "scoreboard command failed");
        std::process::exit(1);
    }
}
