//! Headed text blocks.

/// Render `questions` under `heading` with an underline one character longer
/// than the heading, followed by a blank line.
///
/// ```
/// use mquest_core::format::format_questions;
///
/// assert_eq!(format_questions("Test", &["a", "b"]), "Test:\n-----\na\nb\n\n");
/// ```
pub fn format_questions<S: AsRef<str>>(heading: &str, questions: &[S]) -> String {
    let underline = "-".repeat(heading.chars().count() + 1);
    let body = questions
        .iter()
        .map(|question| question.as_ref())
        .collect::<Vec<&str>>()
        .join("\n");
    format!("{heading}:\n{underline}\n{body}\n\n")
}
