//! Environment-based configuration with hard defaults. CLI flags override
//! the environment.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_CONTEXT_FILE: &str = "output/context.json";
pub const DEFAULT_GRAPH_FILE: &str = "output/graph.json";
pub const DEFAULT_OUTPUT_FILE: &str = "output/context.txt";
pub const DEFAULT_ANALYZER: &str = "node ./gengraph.js";

pub const GRAPH_FILE_ENV: &str = "DEPSCOPE_GRAPH_FILE";
pub const ANALYZER_ENV: &str = "DEPSCOPE_ANALYZER";

/// Resolve the graph snapshot path: flag, then environment, then default.
pub fn graph_file(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| env::var_os(GRAPH_FILE_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_GRAPH_FILE))
}

/// The analyzer command line, whitespace-split.
pub fn analyzer_command() -> Vec<String> {
    let raw = env::var(ANALYZER_ENV).unwrap_or_else(|_| DEFAULT_ANALYZER.to_string());
    raw.split_whitespace().map(ToString::to_string).collect()
}
