//! Patch update chain factory
//!
//! For every (platform, chunk, patch version) with a non-empty scoped-locale
//! intersection, emits the strict update-generator → signing → balrog chain.
//! The intersection is computed per (chunk, version) pair as a pure set
//! operation: a locale new to the platform but absent from an older version's
//! own locale list simply never enters that version's chain.

use crate::builder::chunks::LocaleChunk;
use crate::core::config::{PatchVersion, ReleaseConfig};
use crate::graph::job::{Job, JobPayload, PartialUpdate, PropertyValue};
use crate::graph::names;

/// Provisioner for the funsize chain
pub const FUNSIZE_PROVISIONER: &str = "aws-provisioner-v1";

/// Worker type for update generation
pub const FUNSIZE_GENERATOR_WORKER: &str = "funsize-mar-generator";

/// Worker type for MAR signing
pub const SIGNING_WORKER: &str = "signing-worker-v1";

/// Worker type for Balrog publication
pub const BALROG_WORKER: &str = "funsize-balrog";

/// The generator → signing → balrog triple for one (platform, chunk, version)
pub struct UpdateChain {
  pub generator: Job,
  pub signing: Job,
  pub balrog: Job,
}

/// Intersection of a chunk's locales with a patch version's own locale list
///
/// Chunk locales are already sorted, so the result is too.
pub fn scoped_locales(chunk: &LocaleChunk, patch: &PatchVersion) -> Vec<String> {
  chunk
    .locales
    .iter()
    .filter(|locale| patch.has_locale(locale))
    .cloned()
    .collect()
}

/// Emit the update chain for one (platform, chunk, patch version)
///
/// Returns `None` when the scoped-locale intersection is empty: a patch
/// version with no overlapping locales contributes nothing to this chunk.
pub fn update_chain(
  config: &ReleaseConfig,
  platform: &str,
  chunk: &LocaleChunk,
  version: &str,
  patch: &PatchVersion,
  repack_name: &str,
) -> Option<UpdateChain> {
  let scoped = scoped_locales(chunk, patch);
  if scoped.is_empty() {
    return None;
  }

  let generator_name = names::update_generator(&config.branch, &config.product, platform, chunk.index, version);
  let signing_name = names::signing(&config.branch, &config.product, platform, chunk.index, version);
  let balrog_name = names::balrog(&config.branch, &config.product, platform, chunk.index, version);

  let partials: Vec<PartialUpdate> = scoped
    .iter()
    .map(|locale| PartialUpdate {
      locale: locale.clone(),
      from_version: version.to_string(),
      from_build_number: patch.build_number,
    })
    .collect();

  let generator = Job {
    name: generator_name.clone(),
    provisioner_id: FUNSIZE_PROVISIONER.to_string(),
    worker_type: FUNSIZE_GENERATOR_WORKER.to_string(),
    label: names::update_generator_label(platform, chunk.index, version),
    requires: vec![repack_name.to_string()],
    payload: JobPayload::properties([("partials".to_string(), PropertyValue::Partials(partials))]),
  };

  let signing = Job {
    name: signing_name.clone(),
    provisioner_id: FUNSIZE_PROVISIONER.to_string(),
    worker_type: SIGNING_WORKER.to_string(),
    label: names::signing_label(platform, chunk.index, version),
    requires: vec![generator_name],
    payload: JobPayload::properties([("upstream".to_string(), PropertyValue::Text(generator.name.clone()))]),
  };

  let balrog = Job {
    name: balrog_name,
    provisioner_id: FUNSIZE_PROVISIONER.to_string(),
    worker_type: BALROG_WORKER.to_string(),
    label: names::balrog_label(platform, chunk.index, version),
    requires: vec![signing_name],
    payload: JobPayload::properties([
      ("upstream".to_string(), PropertyValue::Text(signing.name.clone())),
      ("version".to_string(), PropertyValue::Text(version.to_string())),
      (
        "build_number".to_string(),
        PropertyValue::Text(patch.build_number.to_string()),
      ),
    ]),
  };

  Some(UpdateChain { generator, signing, balrog })
}
