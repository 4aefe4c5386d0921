//! Job name and label templates
//!
//! The naming scheme is load-bearing: downstream consumers locate jobs purely
//! by these constructed strings, so every template lives here as one pure
//! function per job type. Chunk indices are 1-based and never zero-padded.

/// Repack job name: `release-{branch}_{product}_{platform}_l10n_repack_{chunk}`
pub fn repack(branch: &str, product: &str, platform: &str, chunk: u32) -> String {
  format!("release-{}_{}_{}_l10n_repack_{}", branch, product, platform, chunk)
}

/// Paired artifacts job name: `..._l10n_repack_artifacts_{chunk}`
pub fn repack_artifacts(branch: &str, product: &str, platform: &str, chunk: u32) -> String {
  format!("release-{}_{}_{}_l10n_repack_artifacts_{}", branch, product, platform, chunk)
}

/// Builder identifier carried in the repack payload (no chunk suffix)
pub fn repack_builder(branch: &str, product: &str, platform: &str) -> String {
  format!("release-{}_{}_{}_l10n_repack", branch, product, platform)
}

/// Update-generator job name: `..._l10n_repack_{chunk}_{version}_update_generator`
pub fn update_generator(branch: &str, product: &str, platform: &str, chunk: u32, version: &str) -> String {
  format!(
    "release-{}_{}_{}_l10n_repack_{}_{}_update_generator",
    branch, product, platform, chunk, version
  )
}

/// MAR signing job name: `..._l10n_repack_{chunk}_{version}_signing_task`
pub fn signing(branch: &str, product: &str, platform: &str, chunk: u32, version: &str) -> String {
  format!(
    "release-{}_{}_{}_l10n_repack_{}_{}_signing_task",
    branch, product, platform, chunk, version
  )
}

/// Balrog publication job name: `..._l10n_repack_{chunk}_{version}_balrog_task`
pub fn balrog(branch: &str, product: &str, platform: &str, chunk: u32, version: &str) -> String {
  format!(
    "release-{}_{}_{}_l10n_repack_{}_{}_balrog_task",
    branch, product, platform, chunk, version
  )
}

/// Candidate-distribution job name:
/// `..._l10n_repack_partial_{version}build{build}_beetmover_candidates_{chunk}`
pub fn beetmover_candidates(
  branch: &str,
  product: &str,
  platform: &str,
  chunk: u32,
  version: &str,
  build_number: u32,
) -> String {
  format!(
    "release-{}_{}_{}_l10n_repack_partial_{}build{}_beetmover_candidates_{}",
    branch, product, platform, version, build_number, chunk
  )
}

/// Display label for the update-generator job
pub fn update_generator_label(platform: &str, chunk: u32, version: &str) -> String {
  format!("[funsize] Update generating task {} chunk {} for {}", platform, chunk, version)
}

/// Display label for the MAR signing job
pub fn signing_label(platform: &str, chunk: u32, version: &str) -> String {
  format!("[funsize] MAR signing task {} chunk {} for {}", platform, chunk, version)
}

/// Display label for the Balrog publication job
pub fn balrog_label(platform: &str, chunk: u32, version: &str) -> String {
  format!("[funsize] Publish to Balrog {} chunk {} for {}", platform, chunk, version)
}
