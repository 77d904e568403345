use std::error::Error;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use query_context::cli::Args;
use query_context::config::{load_model_file, ConfigFile};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let args = Args::parse();
    let model = match &args.model {
        Some(path) => load_model_file(path)?,
        None => ConfigFile::load()?.model.load_model()?,
    };
    let output = args.command.run(Arc::new(model), args.format)?;
    println!("{}", output);
    Ok(())
}
