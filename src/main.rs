use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use dirjson::cli::{self, input, Args, CliConfig};
use dirjson::error::TreeError;
use dirjson::listing::ListingEngine;
use dirjson::logging;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(err) = run(args) {
        match err.downcast_ref::<TreeError>() {
            Some(tree_err) => cli::handle_error(tree_err),
            None => eprintln!("✗ {:#}", err),
        }
        std::process::exit(1);
    }

    Ok(())
}

fn run(args: Args) -> Result<()> {
    let config = CliConfig::from_args(args)?;

    let root = match &config.args.root {
        Some(root) => root.clone(),
        None => input::prompt_root_path()?,
    };
    tracing::debug!(root = %root.display(), "target path");

    let engine = ListingEngine::new(config.listing_config.clone())?;
    let result = engine.run(&root)?;

    if !config.is_quiet() {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(&result.json)
            .and_then(|_| writeln!(stdout))
            .context("Failed to print JSON to stdout")?;
    }

    cli::show_success(
        &format!(
            "write {} bytes to {}",
            result.bytes_written,
            engine.config().output_path.display()
        ),
        config.is_quiet(),
    );

    if config.want_stats() && !config.is_quiet() {
        println!("\nListing Statistics:");
        println!("{}", result.stats.summary());
    }

    Ok(())
}
