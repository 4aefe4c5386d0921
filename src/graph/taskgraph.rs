//! Dependency analysis over an assembled job graph
//!
//! Builds a petgraph `DiGraph` where an edge `upstream → downstream` means
//! "downstream requires upstream", so topological order yields an execution
//! order the backend can respect. Construction doubles as the assembly-time
//! integrity check: a dependency name that resolves to no job is fatal.

use crate::core::error::{GraphResult, IntegrityError};
use crate::graph::job::JobGraph;
use petgraph::Direction;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Dependency view of a [`JobGraph`]
#[derive(Debug)]
pub struct TaskGraph {
  graph: DiGraph<String, ()>,
  name_to_node: HashMap<String, NodeIndex>,
}

impl TaskGraph {
  /// Build the dependency graph from assembled jobs
  ///
  /// Fails with a dangling-dependency error if any job requires a name absent
  /// from the graph. Node insertion follows the JobGraph's name order, so
  /// node indices are deterministic.
  pub fn from_jobs(jobs: &JobGraph) -> GraphResult<Self> {
    let mut graph = DiGraph::new();
    let mut name_to_node = HashMap::new();

    for job in jobs.iter() {
      let idx = graph.add_node(job.name.clone());
      name_to_node.insert(job.name.clone(), idx);
    }

    for job in jobs.iter() {
      let downstream_idx = name_to_node[&job.name];
      for upstream in &job.requires {
        let upstream_idx = name_to_node.get(upstream).ok_or_else(|| IntegrityError::DanglingDependency {
          job: job.name.clone(),
          requires: upstream.clone(),
        })?;
        graph.add_edge(*upstream_idx, downstream_idx, ());
      }
    }

    Ok(Self { graph, name_to_node })
  }

  /// Execution order: upstream jobs before the jobs that require them
  ///
  /// Factory construction only ever depends on already-emitted upstream jobs,
  /// so a cycle here indicates a factory bug.
  pub fn execution_order(&self) -> GraphResult<Vec<String>> {
    let sorted = toposort(&self.graph, None).map_err(|cycle| IntegrityError::Cycle {
      job: self.graph[cycle.node_id()].clone(),
    })?;

    Ok(sorted.into_iter().map(|idx| self.graph[idx].clone()).collect())
  }

  /// Direct upstream dependencies of a job (what it requires)
  pub fn upstream_of(&self, name: &str) -> Option<Vec<String>> {
    let idx = self.name_to_node.get(name)?;
    let mut upstream: Vec<String> = self
      .graph
      .neighbors_directed(*idx, Direction::Incoming)
      .map(|n| self.graph[n].clone())
      .collect();
    upstream.sort();
    Some(upstream)
  }

  /// Direct downstream dependents of a job (what requires it)
  pub fn downstream_of(&self, name: &str) -> Option<Vec<String>> {
    let idx = self.name_to_node.get(name)?;
    let mut downstream: Vec<String> = self
      .graph
      .neighbors_directed(*idx, Direction::Outgoing)
      .map(|n| self.graph[n].clone())
      .collect();
    downstream.sort();
    Some(downstream)
  }

  /// Number of jobs in the graph
  pub fn len(&self) -> usize {
    self.graph.node_count()
  }

  /// Check if the graph is empty
  pub fn is_empty(&self) -> bool {
    self.graph.node_count() == 0
  }

  /// Export to DOT format (Graphviz)
  pub fn to_dot(&self) -> String {
    use petgraph::dot::{Config, Dot};

    let dot = Dot::with_attr_getters(
      &self.graph,
      &[Config::EdgeNoLabel],
      &|_, _| String::new(),
      &|_, (_idx, name)| format!("label=\"{}\" shape=box", name),
    );

    format!("{:?}", dot)
  }
}
