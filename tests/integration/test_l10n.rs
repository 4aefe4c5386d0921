//! End-to-end localization graph scenarios
//!
//! Covers the single-chunk, multi-chunk, and new-locale cases, asserting
//! against the constructed job names downstream consumers rely on.

use crate::helpers::{multi_chunk_config, new_locales_config, single_chunk_config};
use relgraph::builder::build_graph;
use relgraph::graph::names;

#[test]
fn test_single_chunk_repack_payload() {
  let graph = build_graph(&single_chunk_config()).unwrap();

  let task = graph.get("release-mozilla-beta_firefox_win32_l10n_repack_1").unwrap();
  let p = &task.payload;

  assert_eq!(task.provisioner_id, "buildbot-bridge");
  assert_eq!(task.worker_type, "buildbot-bridge");
  assert_eq!(p.property("repo_path").unwrap().as_text(), Some("releases/mozilla-beta"));
  assert_eq!(p.property("script_repo_revision").unwrap().as_text(), Some("abcd"));
  assert_eq!(
    p.property("builderName").unwrap().as_text(),
    Some("release-mozilla-beta_firefox_win32_l10n_repack")
  );
  assert_eq!(
    p.property("locales").unwrap().as_text(),
    Some("de:default en-GB:default zh-TW:default")
  );
  assert_eq!(
    p.property("en_us_binary_url").unwrap().as_text(),
    Some("https://queue.example.net/something/firefox.exe")
  );
}

#[test]
fn test_single_chunk_only_chunk_1_resolves() {
  let graph = build_graph(&single_chunk_config()).unwrap();

  assert!(graph.get("release-mozilla-beta_firefox_win32_l10n_repack_0").is_none());
  assert!(graph.get("release-mozilla-beta_firefox_win32_l10n_repack_1").is_some());
  assert!(graph.get("release-mozilla-beta_firefox_win32_l10n_repack_2").is_none());
}

#[test]
fn test_single_chunk_artifacts_task() {
  let graph = build_graph(&single_chunk_config()).unwrap();

  assert!(graph.get("release-mozilla-beta_firefox_win32_l10n_repack_artifacts_0").is_none());
  assert!(graph.get("release-mozilla-beta_firefox_win32_l10n_repack_artifacts_2").is_none());

  let art = graph.get("release-mozilla-beta_firefox_win32_l10n_repack_artifacts_1").unwrap();
  assert_eq!(art.provisioner_id, "null-provisioner");
  assert_eq!(art.worker_type, "buildbot");
  assert_eq!(art.requires, vec!["release-mozilla-beta_firefox_win32_l10n_repack_1"]);
}

#[test]
fn test_single_chunk_partials_present() {
  let graph = build_graph(&single_chunk_config()).unwrap();

  for platform in ["win32", "linux64"] {
    for version in ["37.0", "38.0"] {
      let name = format!(
        "release-mozilla-beta_firefox_{}_l10n_repack_1_{}_update_generator",
        platform, version
      );
      assert!(graph.get(&name).is_some(), "missing {}", name);
    }
  }
}

#[test]
fn test_single_chunk_funsize_labels() {
  let graph = build_graph(&single_chunk_config()).unwrap();

  for platform in ["win32", "linux64"] {
    for version in ["37.0", "38.0"] {
      let generator = graph
        .get(&names::update_generator("mozilla-beta", "firefox", platform, 1, version))
        .unwrap();
      let signing = graph
        .get(&names::signing("mozilla-beta", "firefox", platform, 1, version))
        .unwrap();
      let balrog = graph
        .get(&names::balrog("mozilla-beta", "firefox", platform, 1, version))
        .unwrap();

      assert_eq!(
        generator.label,
        format!("[funsize] Update generating task {} chunk 1 for {}", platform, version)
      );
      assert_eq!(
        signing.label,
        format!("[funsize] MAR signing task {} chunk 1 for {}", platform, version)
      );
      assert_eq!(
        balrog.label,
        format!("[funsize] Publish to Balrog {} chunk 1 for {}", platform, version)
      );
    }
  }
}

#[test]
fn test_multi_chunk_locale_split() {
  let graph = build_graph(&multi_chunk_config()).unwrap();

  let chunk1 = graph.get("release-mozilla-beta_firefox_win32_l10n_repack_1").unwrap();
  let chunk2 = graph.get("release-mozilla-beta_firefox_win32_l10n_repack_2").unwrap();

  assert_eq!(
    chunk1.payload.property("locales").unwrap().as_text(),
    Some("de:default en-GB:default ru:default")
  );
  assert_eq!(
    chunk2.payload.property("locales").unwrap().as_text(),
    Some("uk:default zh-TW:default")
  );
  assert_eq!(chunk2.payload.property("script_repo_revision").unwrap().as_text(), Some("abcd"));
}

#[test]
fn test_multi_chunk_no_chunk_3() {
  let graph = build_graph(&multi_chunk_config()).unwrap();

  assert!(graph.get("release-mozilla-beta_firefox_win32_l10n_repack_3").is_none());
  assert!(graph.get("release-mozilla-beta_firefox_win32_l10n_repack_artifacts_3").is_none());
}

#[test]
fn test_multi_chunk_artifacts_present() {
  let graph = build_graph(&multi_chunk_config()).unwrap();

  assert!(graph.get("release-mozilla-beta_firefox_win32_l10n_repack_artifacts_1").is_some());
  assert!(graph.get("release-mozilla-beta_firefox_win32_l10n_repack_artifacts_2").is_some());
}

#[test]
fn test_multi_chunk_partials_present() {
  let graph = build_graph(&multi_chunk_config()).unwrap();

  for platform in ["win32", "linux64"] {
    for version in ["37.0", "38.0"] {
      for chunk in [1, 2] {
        let generator = names::update_generator("mozilla-beta", "firefox", platform, chunk, version);
        let signing = names::signing("mozilla-beta", "firefox", platform, chunk, version);
        assert!(graph.get(&generator).is_some(), "missing {}", generator);
        assert!(graph.get(&signing).is_some(), "missing {}", signing);
      }
    }
  }
}

#[test]
fn test_multi_chunk_funsize_labels() {
  let graph = build_graph(&multi_chunk_config()).unwrap();

  for platform in ["win32", "linux64"] {
    for version in ["37.0", "38.0"] {
      for chunk in [1u32, 2] {
        let generator = graph
          .get(&names::update_generator("mozilla-beta", "firefox", platform, chunk, version))
          .unwrap();
        assert_eq!(
          generator.label,
          format!(
            "[funsize] Update generating task {} chunk {} for {}",
            platform, chunk, version
          )
        );
      }
    }
  }
}

#[test]
fn test_new_locale_not_in_update_generator() {
  let graph = build_graph(&new_locales_config()).unwrap();

  let t = graph
    .get("release-mozilla-beta_firefox_win32_l10n_repack_1_37.0_update_generator")
    .unwrap();
  let partials = t.payload.property("partials").unwrap().as_partials().unwrap();
  let locales: Vec<&str> = partials.iter().map(|p| p.locale.as_str()).collect();

  assert_eq!(locales, vec!["de", "en-GB", "ru", "uk"]);
}

#[test]
fn test_new_locale_in_update_generator() {
  let graph = build_graph(&new_locales_config()).unwrap();

  let t = graph
    .get("release-mozilla-beta_firefox_win32_l10n_repack_1_38.0_update_generator")
    .unwrap();
  let partials = t.payload.property("partials").unwrap().as_partials().unwrap();
  let locales: Vec<&str> = partials.iter().map(|p| p.locale.as_str()).collect();

  assert_eq!(locales, vec!["de", "en-GB", "ru", "uk", "zh-TW"]);
}

#[test]
fn test_new_locale_not_in_beetmover() {
  let graph = build_graph(&new_locales_config()).unwrap();

  let t = graph
    .get("release-mozilla-beta_firefox_win32_l10n_repack_partial_37.0build2_beetmover_candidates_1")
    .unwrap();
  let command = t.payload.command_line().unwrap().join(" ");

  assert!(!command.contains("--locale zh-TW"));
  assert!(command.contains("--locale en-GB"));
}

#[test]
fn test_new_locale_in_beetmover() {
  let graph = build_graph(&new_locales_config()).unwrap();

  let t = graph
    .get("release-mozilla-beta_firefox_win32_l10n_repack_partial_38.0build1_beetmover_candidates_1")
    .unwrap();
  let command = t.payload.command_line().unwrap().join(" ");

  assert!(command.contains("--locale zh-TW"));
  assert!(command.contains("--locale en-GB"));
}
