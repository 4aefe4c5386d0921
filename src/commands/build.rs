//! The `build` command: construct and print the job graph

use crate::builder::build_graph;
use crate::core::config::ReleaseConfig;
use crate::core::error::GraphResult;
use crate::graph::taskgraph::TaskGraph;
use std::path::Path;

/// Run `relgraph build`
///
/// With `platform` set, the graph is restricted to that platform; a name
/// absent from the config is a user error, not an empty graph.
pub fn run_build(config_path: &Path, platform: Option<&str>, json: bool, dot: bool) -> GraphResult<()> {
  let config = ReleaseConfig::load(config_path)?;
  let config = match platform {
    Some(name) => config.scoped_to(name)?,
    None => config,
  };
  let graph = build_graph(&config)?;

  if json {
    println!("{}", graph.to_json()?);
    return Ok(());
  }

  let tasks = TaskGraph::from_jobs(&graph)?;

  if dot {
    println!("{}", tasks.to_dot());
    return Ok(());
  }

  println!("📦 Job graph: {} jobs\n", graph.len());
  for name in tasks.execution_order()? {
    // execution_order only returns names present in the graph
    if let Some(job) = graph.get(&name) {
      if job.requires.is_empty() {
        println!("  {}", name);
      } else {
        println!("  {}  ← {}", name, job.requires.join(", "));
      }
    }
  }
  println!("\nFingerprint: {}", graph.fingerprint()?);

  Ok(())
}
