use crate::config;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "depscope", version, about = "Dependency graph context tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the dependency graph snapshot from an extraction batch
    Upload(UploadArgs),

    /// Get dependency context for a function/component
    GetContext(GetContextArgs),
}

#[derive(Args)]
pub struct UploadArgs {
    /// Path to the extraction batch JSON
    #[arg(short = 'f', long, default_value = config::DEFAULT_CONTEXT_FILE)]
    pub context_file: PathBuf,

    /// Run the external analyzer to generate the batch first
    #[arg(short, long)]
    pub run_analyzer: bool,

    /// Path to the source project, required with --run-analyzer
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Graph snapshot destination (env DEPSCOPE_GRAPH_FILE, default
    /// output/graph.json)
    #[arg(short, long)]
    pub graph_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct GetContextArgs {
    /// Function/component name
    #[arg(short = 'n', long)]
    pub function_name: String,

    /// Depth as PARENTS:CHILDREN; a bare value applies to both sides
    #[arg(short, long, default_value = "*:*")]
    pub depth: String,

    /// Graph snapshot to query (env DEPSCOPE_GRAPH_FILE, default
    /// output/graph.json)
    #[arg(short, long)]
    pub graph_file: Option<PathBuf>,

    /// Write the report here; "-" writes to stdout
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,

    /// Include function code if available
    #[arg(short = 'c', long)]
    pub include_function_code: bool,

    /// Attach each node's full file text
    #[arg(long)]
    pub full_file_content: bool,

    /// Show labels and files only
    #[arg(long)]
    pub filenames_only: bool,

    /// Exclude the trailing file-contents section
    #[arg(short = 'C', long)]
    pub no_files_content: bool,
}
