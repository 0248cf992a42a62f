//! Depscope CLI
//!
//! Builds a dependency graph from an extraction batch and answers context
//! queries against it.
//!
//! ## Commands
//!
//! - `upload` - Build the graph snapshot from an extraction batch,
//!   optionally running the external analyzer first
//! - `get-context` - Render the bounded caller/callee context of a function

use clap::Parser;

mod analyzer;
mod cli;
mod commands;
mod config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::Cli::parse();
    if let Err(err) = commands::run(args) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
