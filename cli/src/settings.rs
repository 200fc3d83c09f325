use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, bail};
use sapper_core::{CellCount, Coord, DEFAULT_DIMENSION, GameConfig};
use serde::Deserialize;

use crate::Args;

/// Defaults read from a JSON file, every key optional.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct FileSettings {
    pub dimension: Option<Coord>,
    pub mines: Option<CellCount>,
    pub seed: Option<u64>,
}

impl FileSettings {
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let file =
            File::open(path).with_context(|| format!("Could not open {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse {}", path.display()))
    }
}

#[derive(Debug, PartialEq)]
pub(crate) struct Settings {
    pub config: GameConfig,
    pub seed: u64,
}

/// Flags win over the config file, which wins over built-in defaults. The
/// mine count is asked for when neither gives one.
pub(crate) fn resolve(
    args: &Args,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<Settings> {
    let file = match &args.config {
        Some(path) => FileSettings::load(path)?,
        None => FileSettings::default(),
    };

    let dimension = args
        .dimension
        .or(file.dimension)
        .unwrap_or(DEFAULT_DIMENSION);
    let mines = match args.mines.or(file.mines) {
        Some(mines) => mines,
        None => ask_mines(input, output)?,
    };
    let seed = args.seed.or(file.seed).unwrap_or_else(rand::random);

    let config = GameConfig::new(dimension, mines).context("Invalid field settings")?;
    Ok(Settings { config, seed })
}

fn ask_mines(input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<CellCount> {
    writeln!(output, "How many mines do you want on the field?")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("No mine count given");
    }
    let line = line.trim();
    line.parse()
        .with_context(|| format!("{:?} is not a number of mines", line))
}
