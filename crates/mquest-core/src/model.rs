//! Core data model types for mquest.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MquestError;

/// A single formatted question, e.g. `" 7 x 3 = "`.
pub type Question = String;

/// The ordered questions produced by one generator call.
pub type QuestionSet = Vec<Question>;

/// Number of questions in every question set (multiplicands/indices 1..=12).
pub const QUESTIONS_PER_SET: i64 = 12;

/// Heading used when no start day is requested.
pub const DEFAULT_HEADING: &str = "Questions";

/// The kind of questions a worksheet contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Times table for a single multiplier.
    #[serde(rename = "m")]
    Multiplication,
    /// Shuffled multiplicands, each paired with a random multiplier.
    #[serde(rename = "mm")]
    MixedMultiplication,
    /// Shuffled divisions by a single divisor.
    #[serde(rename = "d")]
    Division,
}

impl Mode {
    /// The short code used on the command line and in config files.
    pub fn code(&self) -> &'static str {
        match self {
            Mode::Multiplication => "m",
            Mode::MixedMultiplication => "mm",
            Mode::Division => "d",
        }
    }

    /// Whether the mode accepts more than one operand.
    pub fn takes_many_operands(&self) -> bool {
        matches!(self, Mode::MixedMultiplication)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Mode {
    type Err = MquestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" => Ok(Mode::Multiplication),
            "mm" => Ok(Mode::MixedMultiplication),
            "d" => Ok(Mode::Division),
            other => Err(MquestError::UnknownMode(other.to_string())),
        }
    }
}
