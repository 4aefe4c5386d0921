//! Release configuration parsing and validation
//!
//! A `ReleaseConfig` is built once, externally, from already-resolved inputs
//! (changesets pinned, platforms decided) and stays immutable for the duration
//! of graph construction. It is deserialized from a TOML file:
//!
//! ```toml
//! branch = "mozilla-beta"
//! product = "firefox"
//! repo_path = "releases/mozilla-beta"
//! script_repo_revision = "abcd"
//!
//! [platforms.win32]
//! en_us_binary_url = "https://queue.example.net/something/firefox.exe"
//! locales = ["de", "en-GB", "zh-TW"]
//! chunks = 1
//!
//! [changesets]
//! de = "default"
//!
//! [partials."37.0"]
//! build_number = 2
//! locales = ["de", "en-GB"]
//! ```

use crate::core::error::{ConfigError, GraphResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Fallback changeset for locales without an explicit pin
pub const DEFAULT_CHANGESET: &str = "default";

/// Top-level release configuration
///
/// Platform and patch-version maps are BTreeMaps so every iteration order in
/// graph construction is deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseConfig {
  /// Release branch, e.g. "mozilla-beta"
  pub branch: String,

  /// Product name, e.g. "firefox"
  pub product: String,

  /// Repository path, e.g. "releases/mozilla-beta"
  pub repo_path: String,

  /// Revision of the repack scripts to run
  pub script_repo_revision: String,

  /// Per-platform locale configuration
  pub platforms: BTreeMap<String, PlatformConfig>,

  /// Per-locale changeset pins; locales without an entry fall back to
  /// [`DEFAULT_CHANGESET`]
  #[serde(default)]
  pub changesets: BTreeMap<String, String>,

  /// Prior shipped versions needing differential updates, keyed by version
  /// label ("37.0"). Absence simply yields a graph with no update chains.
  #[serde(default)]
  pub partials: BTreeMap<String, PatchVersion>,
}

/// Locale configuration for one platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
  /// Where the en-US binary to repack lives
  pub en_us_binary_url: String,

  /// Full locale list for this platform
  pub locales: Vec<String>,

  /// How many repack chunks to split the locale list into (1-based indices)
  pub chunks: u32,
}

/// A previously shipped version needing a partial update
///
/// Its locale list may be a strict subset of a platform's current list; a
/// locale new to the platform is then silently excluded from this version's
/// update path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchVersion {
  /// Build number of the shipped version
  pub build_number: u32,

  /// The locales that version actually shipped with
  pub locales: Vec<String>,
}

impl PatchVersion {
  /// Check whether this version shipped the given locale
  pub fn has_locale(&self, locale: &str) -> bool {
    self.locales.iter().any(|l| l == locale)
  }
}

impl ReleaseConfig {
  /// Load and validate a release config from a TOML file
  pub fn load(path: &Path) -> GraphResult<Self> {
    if !path.is_file() {
      return Err(ConfigError::NotFound { path: path.to_path_buf() }.into());
    }

    let contents = fs::read_to_string(path)?;
    let config = Self::from_toml(&contents)?;
    Ok(config)
  }

  /// Parse and validate a release config from a TOML string
  pub fn from_toml(contents: &str) -> GraphResult<Self> {
    let config: ReleaseConfig = toml_edit::de::from_str(contents)?;
    config.validate()?;
    Ok(config)
  }

  /// Validate the configuration
  ///
  /// Every failure here aborts graph construction before any job is emitted:
  /// - each platform must have locales, and a chunk count between 1 and the
  ///   locale count (empty chunks are never allowed)
  /// - each patch-version locale must appear in at least one platform's
  ///   master locale list; the reverse (a platform locale absent from a
  ///   patch version) is the normal new-locale case, not an error
  pub fn validate(&self) -> GraphResult<()> {
    for (platform, pf) in &self.platforms {
      if pf.locales.is_empty() {
        return Err(ConfigError::NoLocales { platform: platform.clone() }.into());
      }
      if pf.chunks == 0 || pf.chunks as usize > pf.locales.len() {
        return Err(
          ConfigError::ChunkCount {
            platform: platform.clone(),
            chunks: pf.chunks,
            locales: pf.locales.len(),
          }
          .into(),
        );
      }
    }

    for (version, patch) in &self.partials {
      for locale in &patch.locales {
        let known = self
          .platforms
          .values()
          .any(|pf| pf.locales.iter().any(|l| l == locale));
        if !known {
          return Err(
            ConfigError::UnknownPartialLocale {
              version: version.clone(),
              locale: locale.clone(),
            }
            .into(),
          );
        }
      }
    }

    Ok(())
  }

  /// Look up a platform's locale configuration
  pub fn platform(&self, name: &str) -> GraphResult<&PlatformConfig> {
    self
      .platforms
      .get(name)
      .ok_or_else(|| ConfigError::PlatformNotConfigured { platform: name.to_string() }.into())
  }

  /// Restrict the configuration to a single platform
  ///
  /// Patch-version locale lists are pruned to that platform's list. Update
  /// chains only ever use the intersection, so the scoped graph carries
  /// exactly the full graph's jobs for the platform.
  pub fn scoped_to(&self, platform: &str) -> GraphResult<Self> {
    let pf = self.platform(platform)?;

    let mut scoped = self.clone();
    scoped.platforms = BTreeMap::from([(platform.to_string(), pf.clone())]);
    for patch in scoped.partials.values_mut() {
      patch.locales.retain(|locale| pf.locales.iter().any(|l| l == locale));
    }

    Ok(scoped)
  }

  /// Resolve the changeset pinned for a locale
  ///
  /// Modeled as an explicit fallback rule: a missing pin resolves to the
  /// literal string "default", never to ambient state.
  pub fn changeset_for(&self, locale: &str) -> &str {
    self
      .changesets
      .get(locale)
      .map(String::as_str)
      .unwrap_or(DEFAULT_CHANGESET)
  }
}
