//! Weekly practice example — using mquest as a library.
//!
//! ```bash
//! cargo run -p mquest-core --example weekly_practice
//! ```

use chrono::Weekday;

use mquest_core::days::get_days_of_week;
use mquest_core::format::format_questions;
use mquest_core::generator::{
    generate_divisions, generate_mixed_multiplications, generate_multiplications,
};

fn main() -> anyhow::Result<()> {
    // The 11 times table, in order
    let times_11 = generate_multiplications(11, false);
    println!("{}", format_questions("11 x table questions", &times_11));

    // The 8 times table, shuffled
    println!(
        "{}",
        format_questions(
            "8 x table questions (shuffled)",
            &generate_multiplications(8, true)
        )
    );

    println!(
        "{}",
        format_questions("÷ (divide by) 4 questions", &generate_divisions(4)?)
    );

    let study_days = get_days_of_week(Weekday::Fri);

    // Daily 3 times table, in order
    for day in &study_days {
        println!("{}", format_questions(day, &generate_multiplications(3, false)));
    }

    // Daily mixed questions across several tables
    for day in &study_days {
        let questions = generate_mixed_multiplications(&[2, 3, 4, 5, 6, 8, 10])?;
        println!("{}", format_questions(day, &questions));
    }

    Ok(())
}
