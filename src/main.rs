//! Copilot Dashboard - backend for the GitHub Copilot usage dashboard

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod output;
mod server;
mod usage;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise `info`, or `debug` with `--debug`.
fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", level))
        .format_timestamp_millis()
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Serve { bind, port } => cli::serve::run(&opts, bind, port).await,
        Commands::Report { org, token } => cli::report::run(&opts, &org, &token).await,
        Commands::User { username, token } => cli::user::run(&opts, &username, &token).await,
        Commands::Status => cli::status::run(&opts),
    }
}
