//! The `mquest init` command.

use std::path::Path;

use anyhow::{Context, Result};

use mquest_core::config::CONFIG_FILE_NAME;

pub fn execute() -> Result<()> {
    if Path::new(CONFIG_FILE_NAME).exists() {
        println!("{CONFIG_FILE_NAME} already exists, skipping.");
        return Ok(());
    }

    std::fs::write(CONFIG_FILE_NAME, SAMPLE_PLAN)
        .with_context(|| format!("failed to write {CONFIG_FILE_NAME}"))?;
    println!("Created {CONFIG_FILE_NAME}");

    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE_NAME} to choose your worksheets");
    println!("  2. Run: mquest batch");

    Ok(())
}

const SAMPLE_PLAN: &str = r#"# mquest batch plan

# Directory worksheet files are written into
output_dir = "output"

# First study day: 0 = Monday, ..., 6 = Sunday
start_day = 6

[[worksheets]]
file = "3_times_table_ordered.txt"
mode = "m"
operands = [3]

[[worksheets]]
file = "3_times_table_unordered.txt"
mode = "m"
operands = [3]
shuffle = true

[[worksheets]]
file = "divide_by_4.txt"
mode = "d"
operands = [4]

[[worksheets]]
file = "mixed_tables.txt"
mode = "mm"
operands = [2, 3, 4, 5, 6, 8, 10]
"#;
