use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use sapper_core::Game;

mod play;
mod settings;

#[derive(Parser, Debug)]
#[command(version, about = "Find the mines on a square field", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Side length of the field, 5 to 39
    #[arg(short, long)]
    dimension: Option<u8>,

    /// Number of mines, asked for on stdin when not given
    #[arg(short, long)]
    mines: Option<u16>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with `dimension`, `mines` and `seed` defaults
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let settings = settings::resolve(&args, &mut input, &mut output)?;
    log::debug!("settings: {:?}", settings);

    let mut game = Game::new(settings.config, settings.seed).context("Could not set up the field")?;
    let ending = play::play(&mut game, &mut input, &mut output)?;
    log::info!("Game over: {:?}", ending);

    Ok(())
}
