//! Question generators.
//!
//! Each generator returns [`QUESTIONS_PER_SET`] formatted questions. The
//! plain functions draw from the thread-local generator; the `_with`
//! variants take any [`Rng`] so callers can seed a run.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::error::MquestError;
use crate::model::{QuestionSet, QUESTIONS_PER_SET};

/// Division sign (U+00F7).
pub const DIVISION_SIGN: char = '\u{00F7}';

/// Times table questions for `multiplier`, ascending unless `shuffle_order`.
pub fn generate_multiplications(multiplier: i64, shuffle_order: bool) -> QuestionSet {
    generate_multiplications_with(multiplier, shuffle_order, &mut rand::rng())
}

/// Same as [`generate_multiplications`], drawing from `rng`.
pub fn generate_multiplications_with<R: Rng + ?Sized>(
    multiplier: i64,
    shuffle_order: bool,
    rng: &mut R,
) -> QuestionSet {
    let mut multiplicands: Vec<i64> = (1..=QUESTIONS_PER_SET).collect();
    if shuffle_order {
        multiplicands.shuffle(rng);
    }

    multiplicands
        .into_iter()
        .map(|multiplicand| multiplication(multiplicand, multiplier))
        .collect()
}

/// Shuffled multiplicands, each paired with a multiplier drawn from
/// `multipliers` with replacement.
pub fn generate_mixed_multiplications(multipliers: &[i64]) -> Result<QuestionSet, MquestError> {
    generate_mixed_multiplications_with(multipliers, &mut rand::rng())
}

/// Same as [`generate_mixed_multiplications`], drawing from `rng`.
pub fn generate_mixed_multiplications_with<R: Rng + ?Sized>(
    multipliers: &[i64],
    rng: &mut R,
) -> Result<QuestionSet, MquestError> {
    if multipliers.is_empty() {
        return Err(MquestError::NoOperands);
    }

    let mut multiplicands: Vec<i64> = (1..=QUESTIONS_PER_SET).collect();
    multiplicands.shuffle(rng);

    let mut questions = Vec::with_capacity(multiplicands.len());
    for multiplicand in multiplicands {
        // Non-empty, checked above.
        let Some(&multiplier) = multipliers.choose(rng) else {
            return Err(MquestError::NoOperands);
        };
        questions.push(multiplication(multiplicand, multiplier));
    }
    Ok(questions)
}

/// Division questions with dividends `divisor..=12 * divisor`, always shuffled.
///
/// Fails with [`MquestError::OperandOutOfRange`] when `12 * divisor` does not
/// fit in an `i64`.
pub fn generate_divisions(divisor: i64) -> Result<QuestionSet, MquestError> {
    generate_divisions_with(divisor, &mut rand::rng())
}

/// Same as [`generate_divisions`], drawing from `rng`.
pub fn generate_divisions_with<R: Rng + ?Sized>(
    divisor: i64,
    rng: &mut R,
) -> Result<QuestionSet, MquestError> {
    let mut dividends = (1..=QUESTIONS_PER_SET)
        .map(|index| {
            index
                .checked_mul(divisor)
                .ok_or(MquestError::OperandOutOfRange(divisor))
        })
        .collect::<Result<Vec<i64>, _>>()?;
    dividends.shuffle(rng);

    Ok(dividends
        .into_iter()
        .map(|dividend| format!("{dividend:>3} {DIVISION_SIGN} {divisor} = "))
        .collect())
}

/// Whether every dividend of a division set for `divisor` is representable.
pub fn divisor_in_range(divisor: i64) -> bool {
    divisor.checked_mul(QUESTIONS_PER_SET).is_some()
}

fn multiplication(multiplicand: i64, multiplier: i64) -> String {
    format!("{multiplicand:>2} x {multiplier} = ")
}
