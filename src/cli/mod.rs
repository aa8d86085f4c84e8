mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::CountError;

pub fn run() -> Result<(), CountError> {
    let cli = parse::Cli::parse();
    if cli.version {
        handlers::version();
        return Ok(());
    }
    if cli.dialects {
        handlers::dialects();
        return Ok(());
    }
    handlers::count(&cli)
}
