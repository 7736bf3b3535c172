//! Worksheet assembly: a validated request rendered under one or more headings.

use chrono::Weekday;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::days::get_days_of_week;
use crate::error::MquestError;
use crate::format::format_questions;
use crate::generator::{
    divisor_in_range, generate_divisions_with, generate_mixed_multiplications_with,
    generate_multiplications_with,
};
use crate::model::{Mode, QuestionSet, DEFAULT_HEADING};

/// What to generate for each heading of a worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worksheet {
    pub mode: Mode,
    /// Multiplier or divisor; several multipliers for mixed multiplication.
    pub operands: Vec<i64>,
    /// Shuffle multiplicands. Only meaningful for [`Mode::Multiplication`].
    #[serde(default)]
    pub shuffle: bool,
}

impl Worksheet {
    pub fn new(mode: Mode, operands: Vec<i64>) -> Self {
        Self {
            mode,
            operands,
            shuffle: false,
        }
    }

    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Check the operand count against the mode.
    pub fn validate(&self) -> Result<(), MquestError> {
        if self.operands.is_empty() {
            return Err(MquestError::NoOperands);
        }
        if !self.mode.takes_many_operands() && self.operands.len() > 1 {
            return Err(MquestError::TooManyOperands {
                mode: self.mode,
                count: self.operands.len(),
            });
        }
        if self.mode == Mode::Division {
            if let Some(&divisor) = self.operands.iter().find(|d| !divisor_in_range(**d)) {
                return Err(MquestError::OperandOutOfRange(divisor));
            }
        }
        Ok(())
    }

    /// One fresh question set for this worksheet.
    pub fn questions_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<QuestionSet, MquestError> {
        let first = *self.operands.first().ok_or(MquestError::NoOperands)?;
        match self.mode {
            Mode::Multiplication => Ok(generate_multiplications_with(first, self.shuffle, rng)),
            Mode::MixedMultiplication => generate_mixed_multiplications_with(&self.operands, rng),
            Mode::Division => generate_divisions_with(first, rng),
        }
    }

    /// Validate, then render one formatted block per heading, each with its
    /// own question set.
    pub fn render_with<R: Rng + ?Sized>(
        &self,
        headings: &[String],
        rng: &mut R,
    ) -> Result<String, MquestError> {
        self.validate()?;
        if self.shuffle && self.mode != Mode::Multiplication {
            warn!(mode = %self.mode, "shuffle only applies to mode 'm', ignoring");
        }

        let mut output = String::new();
        for heading in headings {
            let questions = self.questions_with(rng)?;
            output.push_str(&format_questions(heading, &questions));
        }
        debug!(
            mode = %self.mode,
            blocks = headings.len(),
            "rendered worksheet"
        );
        Ok(output)
    }

    /// [`Worksheet::render_with`] using the thread-local generator.
    pub fn render(&self, headings: &[String]) -> Result<String, MquestError> {
        self.render_with(headings, &mut rand::rng())
    }
}

/// Block headings: the week starting at `start_day`, or a single
/// [`DEFAULT_HEADING`] when no day is given.
pub fn headings(start_day: Option<Weekday>) -> Vec<String> {
    match start_day {
        Some(day) => get_days_of_week(day)
            .into_iter()
            .map(str::to_string)
            .collect(),
        None => vec![DEFAULT_HEADING.to_string()],
    }
}
