//! Command-line interface module.

mod args;
pub mod check;
mod report;
pub mod run;

pub use args::{Cli, Commands};
