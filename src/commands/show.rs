//! The `show` command: look up a single job by its constructed name

use crate::builder::build_graph;
use crate::core::config::ReleaseConfig;
use crate::core::error::{GraphError, GraphResult};
use std::path::Path;

/// Run `relgraph show`
pub fn run_show(config_path: &Path, job_name: &str, json: bool) -> GraphResult<()> {
  let config = ReleaseConfig::load(config_path)?;
  let graph = build_graph(&config)?;

  let job = graph.get(job_name).ok_or_else(|| {
    GraphError::with_help(
      format!("Job '{}' not found in graph", job_name),
      "Run `relgraph build --config <file>` to list all job names.",
    )
  })?;

  if json {
    println!("{}", serde_json::to_string_pretty(job)?);
    return Ok(());
  }

  println!("{}", job.name);
  println!("  label:       {}", job.label);
  println!("  provisioner: {}", job.provisioner_id);
  println!("  worker type: {}", job.worker_type);
  if job.requires.is_empty() {
    println!("  requires:    (none)");
  } else {
    println!("  requires:    {}", job.requires.join(", "));
  }

  Ok(())
}
