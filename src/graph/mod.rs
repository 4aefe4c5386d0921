//! Job graph data model and dependency analysis
//!
//! - **job**: Job, payload, and JobGraph types
//! - **names**: centralized job-name and label templates
//! - **taskgraph**: petgraph-backed integrity checks and traversals

pub mod job;
pub mod names;
pub mod taskgraph;

pub use job::{Job, JobGraph, JobPayload, PartialUpdate, PropertyValue};
pub use taskgraph::TaskGraph;
