//! The default `mquest` command: one worksheet to stdout or a file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use mquest_core::days::weekday_from_index;
use mquest_core::model::Mode;
use mquest_core::worksheet::{headings, Worksheet};

use super::make_rng;

pub fn execute(
    mode: Option<Mode>,
    operands: Vec<i64>,
    shuffle: bool,
    start_day: Option<u8>,
    file: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<()> {
    let mode = mode.context("--mode is required")?;
    let worksheet = Worksheet::new(mode, operands).with_shuffle(shuffle);

    let first_day = start_day.map(weekday_from_index).transpose()?;
    let mut rng = make_rng(seed);
    let output = worksheet.render_with(&headings(first_day), &mut rng)?;

    match file {
        Some(path) => {
            std::fs::write(&path, &output)
                .with_context(|| format!("failed to write output file: {}", path.display()))?;
            info!(path = %path.display(), "wrote questions");
        }
        None => println!("{output}"),
    }

    Ok(())
}
