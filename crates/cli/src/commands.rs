use anyhow::{Context, Result};
use depscope_graph::{render, traverse, DependencyGraph, DepthSpec, RenderOptions};
use depscope_protocol::ExtractionBatch;
use std::path::Path;

use crate::analyzer;
use crate::cli::{Cli, Command, GetContextArgs, UploadArgs};
use crate::config;

pub fn run(args: Cli) -> Result<()> {
    match args.command {
        Command::Upload(args) => upload(args),
        Command::GetContext(args) => get_context(args),
    }
}

fn upload(args: UploadArgs) -> Result<()> {
    if args.run_analyzer {
        let path = args
            .path
            .as_deref()
            .context("--path is required when using --run-analyzer")?;
        analyzer::run(path, &args.context_file)?;
    }

    // Read and validate the whole batch before building anything, so a bad
    // input never costs the previous snapshot.
    let batch = ExtractionBatch::from_path(&args.context_file)
        .with_context(|| format!("failed to read batch from {}", args.context_file.display()))?;

    let mut graph = DependencyGraph::new();
    graph.load(&batch);

    let graph_file = config::graph_file(args.graph_file);
    graph
        .save(&graph_file)
        .with_context(|| format!("failed to save graph to {}", graph_file.display()))?;

    println!(
        "Graph saved to {} ({} nodes, {} edges)",
        graph_file.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(())
}

fn get_context(args: GetContextArgs) -> Result<()> {
    let depth = DepthSpec::parse(&expand_depth(&args.depth))?;

    let graph_file = config::graph_file(args.graph_file);
    let graph = DependencyGraph::open(&graph_file).with_context(|| {
        format!(
            "failed to open graph snapshot {} (run `depscope upload` first?)",
            graph_file.display()
        )
    })?;

    let result = traverse(&graph, &args.function_name, &depth);
    let options = RenderOptions {
        include_code: args.include_function_code,
        include_file_content: args.full_file_content,
        filenames_only: args.filenames_only,
        include_file_contents: !args.no_files_content,
    };
    let report = render(&result, &options);

    if args.output_file == Path::new("-") {
        print!("{report}");
    } else {
        if let Some(parent) = args.output_file.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&args.output_file, &report)
            .with_context(|| format!("failed to write {}", args.output_file.display()))?;
        println!("Context saved to {}", args.output_file.display());
    }
    Ok(())
}

/// A bare depth value applies to both sides: `"2"` behaves as `"2:2"`.
fn expand_depth(raw: &str) -> String {
    if raw.contains(':') {
        raw.to_string()
    } else {
        format!("{raw}:{raw}")
    }
}
