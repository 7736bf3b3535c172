//! Batch plan configuration.
//!
//! A batch plan lists worksheets to write into an output directory, one file
//! each. Plans are read from `mquest.toml`; without one, the built-in plan
//! writes ordered, shuffled, and division sheets for every table 1 to 12.

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Weekday;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::days::weekday_from_index;
use crate::model::{Mode, QUESTIONS_PER_SET};
use crate::worksheet::{headings, Worksheet};

/// Name of the plan file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "mquest.toml";

/// One output file of a batch plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// File name, relative to the plan's output directory.
    pub file: PathBuf,
    #[serde(flatten)]
    pub worksheet: Worksheet,
}

/// Top-level batch plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchPlan {
    /// Directory files are written into; created if missing.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// First study day, 0 (Monday) ..= 6 (Sunday). `None` writes a single
    /// "Questions" block per file.
    #[serde(default = "default_start_day")]
    pub start_day: Option<u8>,
    #[serde(default = "default_worksheets")]
    pub worksheets: Vec<BatchEntry>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_start_day() -> Option<u8> {
    Some(Weekday::Sun.num_days_from_monday() as u8)
}

fn default_worksheets() -> Vec<BatchEntry> {
    let mut entries = Vec::new();
    for operand in 1..=QUESTIONS_PER_SET {
        entries.push(BatchEntry {
            file: PathBuf::from(format!("{operand}_times_table_ordered.txt")),
            worksheet: Worksheet::new(Mode::Multiplication, vec![operand]),
        });
        entries.push(BatchEntry {
            file: PathBuf::from(format!("{operand}_times_table_unordered.txt")),
            worksheet: Worksheet::new(Mode::Multiplication, vec![operand]).with_shuffle(true),
        });
        entries.push(BatchEntry {
            file: PathBuf::from(format!("divide_by_{operand}.txt")),
            worksheet: Worksheet::new(Mode::Division, vec![operand]),
        });
    }
    entries
}

impl Default for BatchPlan {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            start_day: default_start_day(),
            worksheets: default_worksheets(),
        }
    }
}

/// A file written by [`BatchPlan::write_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub mode: Mode,
    pub blocks: usize,
}

impl BatchPlan {
    /// Parse a plan from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let plan: BatchPlan = toml::from_str(content).context("failed to parse batch plan")?;
        plan.validate()?;
        Ok(plan)
    }

    /// Check the start day and every worksheet before anything is written.
    ///
    /// Worksheet file names must be relative paths that stay inside
    /// `output_dir`: no root, prefix, `.` or `..` components.
    pub fn validate(&self) -> Result<()> {
        self.first_day()?;
        for entry in &self.worksheets {
            let inside = entry
                .file
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
            if !inside || entry.file.as_os_str().is_empty() {
                anyhow::bail!(
                    "worksheet file must be a relative path inside the output directory: {}",
                    entry.file.display()
                );
            }
            entry
                .worksheet
                .validate()
                .with_context(|| format!("invalid worksheet for {}", entry.file.display()))?;
        }
        Ok(())
    }

    pub fn first_day(&self) -> Result<Option<Weekday>> {
        Ok(self.start_day.map(weekday_from_index).transpose()?)
    }

    /// Generate and write every worksheet, overwriting existing files.
    pub fn write_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<WrittenFile>> {
        self.validate()?;
        std::fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "failed to create output directory: {}",
                self.output_dir.display()
            )
        })?;

        let headings = headings(self.first_day()?);
        let mut written = Vec::with_capacity(self.worksheets.len());
        for entry in &self.worksheets {
            let path = self.output_dir.join(&entry.file);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create directory: {}", parent.display())
                })?;
            }
            let text = entry.worksheet.render_with(&headings, rng)?;
            std::fs::write(&path, text)
                .with_context(|| format!("failed to write worksheet: {}", path.display()))?;
            debug!(path = %path.display(), "wrote worksheet");
            written.push(WrittenFile {
                path,
                mode: entry.worksheet.mode,
                blocks: headings.len(),
            });
        }

        info!(
            files = written.len(),
            dir = %self.output_dir.display(),
            "batch complete"
        );
        Ok(written)
    }
}

/// Load a plan from an explicit path, or `mquest.toml` in the current
/// directory, or fall back to [`BatchPlan::default`].
pub fn load_plan_from(path: Option<&Path>) -> Result<BatchPlan> {
    let plan_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        local.exists().then_some(local)
    };

    match plan_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            info!(path = %path.display(), "loaded batch plan");
            BatchPlan::from_toml_str(&content)
                .with_context(|| format!("invalid config: {}", path.display()))
        }
        None => {
            debug!("no batch plan file, using the built-in plan");
            Ok(BatchPlan::default())
        }
    }
}
