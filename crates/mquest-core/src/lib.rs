//! mquest-core — arithmetic practice question generation.
//!
//! Builds multiplication, mixed multiplication, and division question sets,
//! sequences them across the days of a week, and formats them as headed
//! text blocks ready to print or write to a file.

pub mod config;
pub mod days;
pub mod error;
pub mod format;
pub mod generator;
pub mod model;
pub mod worksheet;

pub use error::MquestError;
