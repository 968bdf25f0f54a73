//! skitter binary entry point.

use clap::Parser;
use skitter::cli::{Cli, Commands};
use skitter::output;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logging goes to stderr so it never mixes with report output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Scan(cmd) => cmd.execute(cli.verbose, cli.quiet).await,
        Commands::History(cmd) => cmd.execute(cli.quiet),
        Commands::Export(cmd) => cmd.execute(cli.quiet),
    };

    if let Err(err) = result {
        output::print_error(&err.to_string());
        std::process::exit(1);
    }
}
