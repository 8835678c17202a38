use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use jsonkit::cli::{run, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.verbose);
    debug!(command = ?args.command, "running command");

    let lines = run(&args.command).map_err(|e| anyhow!(e.user_message()))?;
    for line in lines {
        println!("{}", line);
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set up logging: {}", e);
    }
}
