//! The `validate` command: check a release config end to end

use crate::builder::build_graph;
use crate::core::config::ReleaseConfig;
use crate::core::error::GraphResult;
use std::path::Path;

/// Run `relgraph validate`
///
/// Loads the config, builds the full graph, and reports the fingerprint.
/// Building is cheap and exercises every integrity check, so validation is
/// simply a build whose output is discarded.
pub fn run_validate(config_path: &Path) -> GraphResult<()> {
  let config = ReleaseConfig::load(config_path)?;
  let graph = build_graph(&config)?;

  println!("✅ {} valid: {} jobs, fingerprint {}", config_path.display(), graph.len(), graph.fingerprint()?);

  Ok(())
}
