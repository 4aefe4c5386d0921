//! Config loading and validation through the filesystem

use anyhow::Result;
use relgraph::builder::build_graph;
use relgraph::commands::run_build;
use relgraph::core::config::ReleaseConfig;
use tempfile::TempDir;

const VALID: &str = r#"
branch = "mozilla-beta"
product = "firefox"
repo_path = "releases/mozilla-beta"
script_repo_revision = "abcd"

[platforms.win32]
en_us_binary_url = "https://queue.example.net/something/firefox.exe"
locales = ["de", "en-GB", "zh-TW"]
chunks = 1
"#;

#[test]
fn test_load_from_file() -> Result<()> {
  let dir = TempDir::new()?;
  let path = dir.path().join("release.toml");
  std::fs::write(&path, VALID)?;

  let config = ReleaseConfig::load(&path).unwrap();
  assert_eq!(config.branch, "mozilla-beta");

  let graph = build_graph(&config).unwrap();
  assert_eq!(graph.len(), 2);

  Ok(())
}

#[test]
fn test_missing_file() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("nope.toml");

  let err = ReleaseConfig::load(&path).unwrap_err();
  assert!(err.to_string().contains("Release config not found"));
  assert_eq!(err.exit_code().as_i32(), 1);
}

#[test]
fn test_malformed_toml() -> Result<()> {
  let dir = TempDir::new()?;
  let path = dir.path().join("release.toml");
  std::fs::write(&path, "branch = [not toml")?;

  assert!(ReleaseConfig::load(&path).is_err());
  Ok(())
}

#[test]
fn test_invalid_chunk_count_from_file() -> Result<()> {
  let dir = TempDir::new()?;
  let path = dir.path().join("release.toml");
  std::fs::write(&path, VALID.replace("chunks = 1", "chunks = 0"))?;

  let err = ReleaseConfig::load(&path).unwrap_err();
  assert!(err.to_string().contains("Invalid chunk count 0"));
  Ok(())
}

#[test]
fn test_build_for_configured_platform() -> Result<()> {
  let dir = TempDir::new()?;
  let path = dir.path().join("release.toml");
  std::fs::write(&path, VALID)?;

  run_build(&path, Some("win32"), true, false).unwrap();
  Ok(())
}

#[test]
fn test_build_for_unknown_platform() -> Result<()> {
  let dir = TempDir::new()?;
  let path = dir.path().join("release.toml");
  std::fs::write(&path, VALID)?;

  let err = run_build(&path, Some("mac64"), true, false).unwrap_err();
  assert!(err.to_string().contains("Platform 'mac64' has no locale configuration"));
  assert_eq!(err.exit_code().as_i32(), 1);
  Ok(())
}

#[test]
fn test_changeset_pins_survive_roundtrip() -> Result<()> {
  let dir = TempDir::new()?;
  let path = dir.path().join("release.toml");
  let contents = format!("{}\n[changesets]\nde = \"e1c8a9fd06cb\"\n", VALID);
  std::fs::write(&path, contents)?;

  let config = ReleaseConfig::load(&path).unwrap();
  assert_eq!(config.changeset_for("de"), "e1c8a9fd06cb");
  assert_eq!(config.changeset_for("en-GB"), "default");

  let graph = build_graph(&config).unwrap();
  let repack = graph.get("release-mozilla-beta_firefox_win32_l10n_repack_1").unwrap();
  assert_eq!(
    repack.payload.property("locales").unwrap().as_text(),
    Some("de:e1c8a9fd06cb en-GB:default zh-TW:default")
  );

  Ok(())
}
