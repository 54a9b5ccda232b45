use anyhow::Context;
use clap::Parser;
use parolla_fetch::logging::init_logging;
use parolla_fetch::{handle_command, FetchArgs};

/// Downloads question sets from the parolla API into numbered JSON files.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(flatten)]
    fetch: FetchArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let logger = init_logging(cli.verbose);

    handle_command(cli.fetch, logger)
        .await
        .context("batch fetch aborted")?;

    Ok(())
}
