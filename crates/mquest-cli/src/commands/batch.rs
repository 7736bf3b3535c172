//! The `mquest batch` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use mquest_core::config::{load_plan_from, WrittenFile};

use super::make_rng;

pub fn execute(
    config_path: Option<PathBuf>,
    output: Option<PathBuf>,
    start_day: Option<u8>,
    seed: Option<u64>,
) -> Result<()> {
    let mut plan = load_plan_from(config_path.as_deref())?;
    if let Some(dir) = output {
        plan.output_dir = dir;
    }
    if start_day.is_some() {
        plan.start_day = start_day;
    }

    if plan.worksheets.is_empty() {
        println!("Batch plan has no worksheets, nothing to write.");
        return Ok(());
    }

    let written = plan.write_with(&mut make_rng(seed))?;
    print_summary(&written);
    println!(
        "Wrote {} file(s) to {}",
        written.len(),
        plan.output_dir.display()
    );

    Ok(())
}

fn print_summary(written: &[WrittenFile]) {
    let mut table = Table::new();
    table.set_header(vec!["File", "Mode", "Blocks"]);

    for file in written {
        table.add_row(vec![
            Cell::new(file.path.display()),
            Cell::new(file.mode),
            Cell::new(file.blocks),
        ]);
    }

    println!("{table}");
}
