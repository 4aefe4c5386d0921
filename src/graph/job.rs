//! Job and job-graph data model
//!
//! A `Job` is immutable once created: each factory either produces a complete
//! job or omits it entirely. A `JobGraph` maps job name → job; lookup by name
//! is the only traversal contract downstream consumers rely on. The map is a
//! BTreeMap so JSON output and fingerprints are byte-identical across builds
//! from the same configuration.

use crate::core::error::{GraphResult, IntegrityError};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// One per-locale differential-update descriptor carried by an
/// update-generator job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialUpdate {
  /// Locale this partial targets
  pub locale: String,
  /// Version label of the shipped build to diff against
  pub from_version: String,
  /// Build number of that shipped build
  pub from_build_number: u32,
}

/// A payload property value: a plain string or a list of partial descriptors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
  Text(String),
  Partials(Vec<PartialUpdate>),
}

impl PropertyValue {
  /// Borrow the text value, if this is one
  pub fn as_text(&self) -> Option<&str> {
    match self {
      PropertyValue::Text(s) => Some(s),
      PropertyValue::Partials(_) => None,
    }
  }

  /// Borrow the partial list, if this is one
  pub fn as_partials(&self) -> Option<&[PartialUpdate]> {
    match self {
      PropertyValue::Partials(p) => Some(p),
      PropertyValue::Text(_) => None,
    }
  }
}

/// Job payload: a property map or an ordered command-token sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobPayload {
  Properties {
    properties: BTreeMap<String, PropertyValue>,
  },
  Command {
    command: Vec<String>,
  },
}

impl JobPayload {
  /// Build a property payload from (key, value) pairs
  pub fn properties<I>(pairs: I) -> Self
  where
    I: IntoIterator<Item = (String, PropertyValue)>,
  {
    JobPayload::Properties {
      properties: pairs.into_iter().collect(),
    }
  }

  /// Build a command payload from ordered tokens
  pub fn command(tokens: Vec<String>) -> Self {
    JobPayload::Command { command: tokens }
  }

  /// Look up a property by key
  pub fn property(&self, key: &str) -> Option<&PropertyValue> {
    match self {
      JobPayload::Properties { properties } => properties.get(key),
      JobPayload::Command { .. } => None,
    }
  }

  /// Borrow the command tokens, if this is a command payload
  pub fn command_line(&self) -> Option<&[String]> {
    match self {
      JobPayload::Command { command } => Some(command),
      JobPayload::Properties { .. } => None,
    }
  }
}

/// A single release-automation job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
  /// Globally unique name; consumers locate jobs purely by this string
  pub name: String,

  /// Backend routing: provisioner/queue identifier
  pub provisioner_id: String,

  /// Backend routing: worker-type identifier
  pub worker_type: String,

  /// Human-readable display label
  pub label: String,

  /// Names of upstream jobs this one depends on
  #[serde(default)]
  pub requires: Vec<String>,

  /// Payload handed to the execution backend
  pub payload: JobPayload,
}

/// The assembled job graph: job name → job
///
/// Invariants (enforced here and by [`crate::graph::taskgraph::TaskGraph`]):
/// no two jobs share a name, and every dependency name resolves to a key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobGraph {
  jobs: BTreeMap<String, Job>,
}

impl JobGraph {
  /// Create an empty graph
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert a job, rejecting duplicate names
  pub fn insert(&mut self, job: Job) -> GraphResult<()> {
    if self.jobs.contains_key(&job.name) {
      return Err(IntegrityError::DuplicateName { name: job.name }.into());
    }
    self.jobs.insert(job.name.clone(), job);
    Ok(())
  }

  /// Look up a job by name
  pub fn get(&self, name: &str) -> Option<&Job> {
    self.jobs.get(name)
  }

  /// Check whether a job name resolves
  pub fn contains(&self, name: &str) -> bool {
    self.jobs.contains_key(name)
  }

  /// Number of jobs in the graph
  pub fn len(&self) -> usize {
    self.jobs.len()
  }

  /// Check if the graph is empty
  pub fn is_empty(&self) -> bool {
    self.jobs.is_empty()
  }

  /// Iterate jobs in name order
  pub fn iter(&self) -> impl Iterator<Item = &Job> {
    self.jobs.values()
  }

  /// All job names, sorted
  pub fn names(&self) -> Vec<&str> {
    self.jobs.keys().map(String::as_str).collect()
  }

  /// Canonical pretty-JSON encoding for CI consumption
  pub fn to_json(&self) -> GraphResult<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }

  /// SHA256 fingerprint of the canonical JSON encoding
  ///
  /// Identical configurations produce identical fingerprints; any change to a
  /// job name, payload, or dependency edge changes it.
  pub fn fingerprint(&self) -> GraphResult<String> {
    let canonical = serde_json::to_vec(self)?;
    let mut hasher = Sha256::new();
    hasher.update(&canonical);
    Ok(format!("{:x}", hasher.finalize()))
  }
}
