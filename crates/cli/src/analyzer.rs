use anyhow::{ensure, Context, Result};
use std::path::Path;
use std::process::Command;

use crate::config;

/// Invoke the external source analyzer to produce an extraction batch.
///
/// Any spawn failure or non-zero exit aborts the load pipeline before the
/// graph store is touched.
pub fn run(project_path: &Path, output_file: &Path) -> Result<()> {
    let argv = config::analyzer_command();
    let (program, prefix_args) = argv
        .split_first()
        .with_context(|| format!("empty {} command", config::ANALYZER_ENV))?;

    log::info!(
        "Running analyzer: {} -p {} -o {}",
        argv.join(" "),
        project_path.display(),
        output_file.display()
    );

    let status = Command::new(program)
        .args(prefix_args)
        .arg("-p")
        .arg(project_path)
        .arg("-o")
        .arg(output_file)
        .status()
        .with_context(|| format!("failed to launch analyzer '{program}'"))?;

    ensure!(status.success(), "analyzer exited with {status}");
    Ok(())
}
