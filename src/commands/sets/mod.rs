mod execute;
mod execute_tests;
mod output;

use clap::Args;

/// List the navigation sources declared in the model's container
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  query_context sets                       # All entity sets and singletons
  query_context sets --type Shop.Order     # Only sources of Shop.Order")]
pub struct SetsCmd {
    /// Only list sources whose element type is this qualified type
    #[arg(short = 't', long = "type")]
    pub type_name: Option<String>,
}
