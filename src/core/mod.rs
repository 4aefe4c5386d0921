//! Core types for relgraph
//!
//! - **config**: Release configuration (TOML) parsing and validation
//! - **error**: Error types with contextual help messages and exit codes

pub mod config;
pub mod error;
