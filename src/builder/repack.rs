//! Repack job factory
//!
//! Emits one repack job and one paired artifacts job per (platform, chunk).
//! The repack runs on the buildbot bridge; the artifacts job routes to the
//! null provisioner and exists to retrieve and forward the repack's artifacts
//! once it completes.

use crate::builder::chunks::LocaleChunk;
use crate::core::config::{PlatformConfig, ReleaseConfig};
use crate::graph::job::{Job, JobPayload, PropertyValue};
use crate::graph::names;

/// Provisioner and worker type for repack jobs
pub const BUILDBOT_BRIDGE: &str = "buildbot-bridge";

/// Provisioner for artifacts jobs
pub const NULL_PROVISIONER: &str = "null-provisioner";

/// Worker type for artifacts jobs
pub const BUILDBOT_WORKER: &str = "buildbot";

/// Emit the (repack, artifacts) job pair for one chunk
pub fn repack_jobs(config: &ReleaseConfig, platform: &str, pf: &PlatformConfig, chunk: &LocaleChunk) -> (Job, Job) {
  let repack_name = names::repack(&config.branch, &config.product, platform, chunk.index);

  // One space-separated "locale:changeset" pair per locale in the chunk,
  // resolved through the explicit fallback rule.
  let locale_pairs = chunk
    .locales
    .iter()
    .map(|locale| format!("{}:{}", locale, config.changeset_for(locale)))
    .collect::<Vec<_>>()
    .join(" ");

  let repack = Job {
    name: repack_name.clone(),
    provisioner_id: BUILDBOT_BRIDGE.to_string(),
    worker_type: BUILDBOT_BRIDGE.to_string(),
    label: format!("Localization repack {} chunk {}", platform, chunk.index),
    requires: vec![],
    payload: JobPayload::properties([
      ("repo_path".to_string(), PropertyValue::Text(config.repo_path.clone())),
      (
        "script_repo_revision".to_string(),
        PropertyValue::Text(config.script_repo_revision.clone()),
      ),
      (
        "builderName".to_string(),
        PropertyValue::Text(names::repack_builder(&config.branch, &config.product, platform)),
      ),
      ("locales".to_string(), PropertyValue::Text(locale_pairs)),
      (
        "en_us_binary_url".to_string(),
        PropertyValue::Text(pf.en_us_binary_url.clone()),
      ),
    ]),
  };

  let artifacts = Job {
    name: names::repack_artifacts(&config.branch, &config.product, platform, chunk.index),
    provisioner_id: NULL_PROVISIONER.to_string(),
    worker_type: BUILDBOT_WORKER.to_string(),
    label: format!("Localization repack artifacts {} chunk {}", platform, chunk.index),
    requires: vec![repack_name.clone()],
    payload: JobPayload::properties([("upstream".to_string(), PropertyValue::Text(repack_name))]),
  };

  (repack, artifacts)
}
