//! Config file loading and execution-context resolution.

use runway::config::{ConfigLoader, RunwayConfig};
use runway::context::{ExecutionContext, GlobalOptions, Runner};
use runway::error::OptionsError;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("runway.yml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_all_fields_from_yaml() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "project: my-project\nregion: asia-northeast1\nservice: my-service\nrunner: github-actions\n",
    );

    let config = ConfigLoader::load_from_file(&path).unwrap();
    assert_eq!(config.project.as_deref(), Some("my-project"));
    assert_eq!(config.region.as_deref(), Some("asia-northeast1"));
    assert_eq!(config.service.as_deref(), Some("my-service"));
    assert_eq!(config.runner.as_deref(), Some("github-actions"));
}

#[test]
fn partial_file_leaves_other_fields_unset() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "project: my-project\nregion: asia-northeast1\n");

    let config = ConfigLoader::load_from_file(&path).unwrap();
    assert_eq!(config.project.as_deref(), Some("my-project"));
    assert!(config.service.is_none());
    assert!(config.runner.is_none());
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.yml");

    let err = ConfigLoader::load_from_file(&path).unwrap_err();
    assert!(matches!(err, OptionsError::Config(_)));
}

#[test]
fn file_values_feed_context_resolution() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "project: file-project\nregion: file-region\nservice: file-service\nrunner: cloud-build\n",
    );
    let config = ConfigLoader::load_from_file(&path).unwrap();

    let flags = GlobalOptions {
        service: "flag-service".to_string(),
        ..Default::default()
    };
    let ctx = ExecutionContext::resolve(&flags, Some(&config)).unwrap();

    assert_eq!(ctx.project, "file-project");
    assert_eq!(ctx.region, "file-region");
    assert_eq!(ctx.service, "flag-service");
    assert_eq!(ctx.runner, Runner::CloudBuild);
}

#[test]
fn incomplete_merge_reports_the_missing_field() {
    let config = RunwayConfig {
        project: Some("file-project".to_string()),
        ..Default::default()
    };
    let flags = GlobalOptions {
        runner: "local".to_string(),
        ..Default::default()
    };

    let err = ExecutionContext::resolve(&flags, Some(&config)).unwrap_err();
    assert!(matches!(err, OptionsError::MissingField("region")));
}
