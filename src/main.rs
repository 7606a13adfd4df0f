mod catalog;
mod cli;
mod commands;
mod env;
mod error;
mod matching;
mod output;
mod preferences;
mod search;
mod tui;

use clap::Parser;

fn main() {
    init_logging();
    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli) {
        tracing::debug!(error = ?err, "command failed");
        eprintln!("{err}");
        let code = if err.is_usage_error() { 2 } else { 1 };
        std::process::exit(code);
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let format = fmt::format().with_target(true).compact();

    // RUST_LOG が未設定なら警告以上のみ
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("catalog=warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
