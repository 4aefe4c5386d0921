//! Graph construction
//!
//! `build_graph` is a pure function from a validated [`ReleaseConfig`] to a
//! [`JobGraph`]: no I/O, no shared state across invocations, and every
//! iteration runs in sorted order so two builds from identical configuration
//! produce byte-identical graphs.
//!
//! Factories, leaves first:
//!
//! - **chunks**: split a platform's locale list into ordered partitions
//! - **repack**: one repack + artifacts job pair per (platform, chunk)
//! - **updates**: generator → signing → balrog chain per
//!   (platform, chunk, patch version) with overlapping locales
//! - **beetmover**: candidate distribution job per such combination

pub mod beetmover;
pub mod chunks;
pub mod repack;
pub mod updates;

pub use chunks::{LocaleChunk, partition};

use crate::core::config::ReleaseConfig;
use crate::core::error::GraphResult;
use crate::graph::job::JobGraph;
use crate::graph::taskgraph::TaskGraph;

/// Build the complete job graph for a release configuration
///
/// Validates the configuration first; any `ConfigError` aborts before a
/// single job is emitted. Assembly re-checks the finished graph for duplicate
/// names and dangling dependency references, which would indicate a factory
/// bug rather than bad input.
pub fn build_graph(config: &ReleaseConfig) -> GraphResult<JobGraph> {
  config.validate()?;

  let mut graph = JobGraph::new();

  for (platform, pf) in &config.platforms {
    let chunks = partition(platform, &pf.locales, pf.chunks)?;

    for chunk in &chunks {
      let (repack, artifacts) = repack::repack_jobs(config, platform, pf, chunk);
      let repack_name = repack.name.clone();
      graph.insert(repack)?;
      graph.insert(artifacts)?;

      for (version, patch) in &config.partials {
        let Some(chain) = updates::update_chain(config, platform, chunk, version, patch, &repack_name) else {
          continue;
        };
        let balrog_name = chain.balrog.name.clone();
        graph.insert(chain.generator)?;
        graph.insert(chain.signing)?;
        graph.insert(chain.balrog)?;

        if let Some(candidates) = beetmover::candidates_job(config, platform, chunk, version, patch, &balrog_name) {
          graph.insert(candidates)?;
        }
      }
    }
  }

  // Dependency resolution doubles as the dangling-reference check
  TaskGraph::from_jobs(&graph)?;

  Ok(graph)
}
