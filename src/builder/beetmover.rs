//! Candidate distribution factory
//!
//! Emits the beetmover job that pushes a chunk's partial-update artifacts to
//! the candidates location. The command token sequence carries one
//! `--locale <id>` pair per scoped locale, in sorted order, so the new-locale
//! exclusion is observable at the command level exactly as it is in the
//! generator's payload.

use crate::builder::chunks::LocaleChunk;
use crate::builder::updates::scoped_locales;
use crate::core::config::{PatchVersion, ReleaseConfig};
use crate::graph::job::{Job, JobPayload};
use crate::graph::names;

/// Provisioner for beetmover jobs
pub const BEETMOVER_PROVISIONER: &str = "aws-provisioner-v1";

/// Worker type for beetmover jobs
pub const BEETMOVER_WORKER: &str = "opt-linux64";

/// Emit the candidates job for one (platform, chunk, patch version)
///
/// Returns `None` when the scoped-locale intersection is empty, matching the
/// update chain it would otherwise depend on.
pub fn candidates_job(
  config: &ReleaseConfig,
  platform: &str,
  chunk: &LocaleChunk,
  version: &str,
  patch: &PatchVersion,
  balrog_name: &str,
) -> Option<Job> {
  let scoped = scoped_locales(chunk, patch);
  if scoped.is_empty() {
    return None;
  }

  let mut command = vec![
    "python".to_string(),
    "scripts/push_to_candidates.py".to_string(),
    "--product".to_string(),
    config.product.clone(),
    "--platform".to_string(),
    platform.to_string(),
    "--version".to_string(),
    version.to_string(),
    "--build-num".to_string(),
    patch.build_number.to_string(),
    "--partial".to_string(),
  ];
  for locale in &scoped {
    command.push("--locale".to_string());
    command.push(locale.clone());
  }

  Some(Job {
    name: names::beetmover_candidates(
      &config.branch,
      &config.product,
      platform,
      chunk.index,
      version,
      patch.build_number,
    ),
    provisioner_id: BEETMOVER_PROVISIONER.to_string(),
    worker_type: BEETMOVER_WORKER.to_string(),
    label: format!(
      "[beetmover] Push partial {}build{} to candidates {} chunk {}",
      version, patch.build_number, platform, chunk.index
    ),
    requires: vec![balrog_name.to_string()],
    payload: JobPayload::command(command),
  })
}
