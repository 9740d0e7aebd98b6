//! CLI entry point for tiling PNG cell layouts

use clap::Parser;
use ghostgrid::io::cli::{Cli, FileProcessor};

fn main() -> ghostgrid::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    let processed = processor.process()?;
    log::info!("{processed} layouts processed");
    Ok(())
}
