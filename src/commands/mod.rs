//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - `execute.rs` producing a serializable result
//! - `output.rs` rendering that result as a table

mod resolve;
mod sets;

pub use resolve::ResolveCmd;
pub use sets::SetsCmd;

use clap::Subcommand;
use std::error::Error;

use crate::context::SharedModel;
use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, model: SharedModel) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the navigation source a query over an element type runs against
    Resolve(ResolveCmd),

    /// List the navigation sources declared in the model's container
    Sets(SetsCmd),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, model: SharedModel, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Resolve(cmd) => {
                let result = cmd.execute(model)?;
                Ok(result.format(format))
            }
            Command::Sets(cmd) => {
                let result = cmd.execute(model)?;
                Ok(result.format(format))
            }
        }
    }
}
