//! CLI commands for relgraph
//!
//! - **build**: construct the job graph and print it (table, JSON, or DOT)
//! - **show**: look up a single job by name
//! - **validate**: check a release config without emitting the graph

pub mod build;
pub mod show;
pub mod validate;

pub use build::run_build;
pub use show::run_show;
pub use validate::run_validate;
