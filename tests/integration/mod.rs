//! Integration test entry point
//!
//! Compiled as a single test binary (see `[[test]]` in Cargo.toml).

mod test_config;
mod test_l10n;
