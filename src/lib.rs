//! relgraph: deterministic release job graphs for localized builds
//!
//! Given a release configuration (platforms, locale lists, chunk counts,
//! changeset pins, prior patch versions), relgraph emits a directed acyclic
//! graph of named jobs: one localization repack per (platform, chunk),
//! followed by chained update-generation, signing, publication, and
//! candidate-distribution jobs for every shipped patch version.
//!
//! Graph construction is a pure computation over immutable input; it executes
//! nothing, talks to no service, and builds the same graph byte-for-byte from
//! the same configuration.

pub mod builder;
pub mod commands;
pub mod core;
pub mod graph;
