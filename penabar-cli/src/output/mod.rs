//! Output formatting for CLI.

mod json;
mod text;

pub use json::{
    CartOutput, DrinkOutput, JsonFormatter, OrderOutput, ProfileOutput, StatisticsOutput,
};
pub use text::TextFormatter;
#[cfg(test)]
mod tests;
