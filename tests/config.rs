//! Tests for configuration loading.

use coldcost::{Config, Region};
use std::fs;
use tempfile::tempdir;

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.general.region, "us-east");
    assert_eq!(config.retrieval.min_job_hours, 4.0);
    assert_eq!(config.retrieval.free_window_cap_hours, 24.0);
    assert_eq!(config.parse_region(), Region::UsEast);
}

#[test]
fn missing_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.general.region, "us-east");
    assert_eq!(config.retrieval.min_job_hours, 4.0);
}

#[test]
fn load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coldcost.toml");
    fs::write(
        &path,
        "[general]\nregion = \"asia\"\n\n[retrieval]\nmin_job_hours = 6.0\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.parse_region(), Region::Asia);
    assert_eq!(config.retrieval.min_job_hours, 6.0);
    // Unset fields keep their defaults.
    assert_eq!(config.retrieval.free_window_cap_hours, 24.0);
}

#[test]
fn partial_file_keeps_other_sections_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coldcost.toml");
    fs::write(&path, "[general]\nregion = \"europe\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.parse_region(), Region::Europe);
    assert_eq!(config.retrieval.min_job_hours, 4.0);
}

#[test]
fn unknown_region_falls_back_to_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coldcost.toml");
    fs::write(&path, "[general]\nregion = \"mars\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.parse_region(), Region::UsEast);
}

#[test]
fn invalid_toml_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coldcost.toml");
    fs::write(&path, "not [ valid toml").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn retrieval_policy_reflects_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coldcost.toml");
    fs::write(
        &path,
        "[retrieval]\nmin_job_hours = 2.0\nfree_window_cap_hours = 12.0\n",
    )
    .unwrap();

    let policy = Config::load_from(&path).unwrap().retrieval_policy();
    assert_eq!(policy.min_job_hours, 2.0);
    assert_eq!(policy.free_window_cap_hours, 12.0);
}
