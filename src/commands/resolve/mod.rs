mod cli_tests;
mod execute;
mod execute_tests;
mod output;

use clap::{ArgGroup, Args};

/// Resolve the navigation source a query over an element type runs against
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("element").required(true).args(["type_name", "native"])))]
#[command(after_help = "\
Examples:
  query_context resolve --type Shop.Order                  # Scan the container for Shop.Order
  query_context resolve --native shop::Order               # Map a native type first
  query_context resolve --type Shop.Customer -p Me         # Trust the path's navigation source
  query_context -f json resolve --type Shop.Order          # JSON output")]
pub struct ResolveCmd {
    /// Schema-level element type, qualified (e.g. Shop.Order)
    #[arg(short = 't', long = "type")]
    pub type_name: Option<String>,

    /// Native element type name (e.g. shop::Order)
    #[arg(short, long)]
    pub native: Option<String>,

    /// Entity set or singleton the request path navigated to
    #[arg(short, long)]
    pub path_source: Option<String>,
}
