//! Configuration loading from disk and its effect on a scan

use plagiarism_engine::config::{ConfigError, Preset, ScanConfig};
use plagiarism_engine::features::corpus_scan::ports::{InMemoryCorpus, NoopSink};
use plagiarism_engine::features::corpus_scan::{ScanUseCase, ScanUseCaseImpl};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_yaml(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_preset_with_overrides() {
    let file = write_yaml(
        r#"
version: 1
preset: strict
overrides:
  result_budget: 50
  progress_interval: 10
"#,
    );

    let config = ScanConfig::from_yaml(file.path()).unwrap();
    assert_eq!(config.threshold, Preset::Strict.threshold());
    assert_eq!(config.min_match_lines, Preset::Strict.min_match_lines());
    assert_eq!(config.result_budget, 50);
    assert_eq!(config.progress_interval, 10);
}

#[test]
fn test_yaml_roundtrip_through_file() {
    let original = ScanConfig::from_preset(Preset::Lenient)
        .with_result_budget(25)
        .with_template("#include <stdio.h>\n");

    let file = write_yaml(&original.to_yaml().unwrap());
    let loaded = ScanConfig::from_yaml(file.path()).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ScanConfig::from_yaml(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_out_of_range_override_rejected() {
    let file = write_yaml("version: 1\noverrides:\n  threshold: 1.7\n");
    let err = ScanConfig::from_yaml(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Range { .. }));
    assert!(err.to_string().contains("threshold"));
}

#[test]
fn test_unsupported_version_rejected() {
    let file = write_yaml("version: 2\npreset: balanced\n");
    let err = ScanConfig::from_yaml(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedVersion { found: 2, .. }));
}

#[test]
fn test_loaded_min_lines_changes_scan_outcome() {
    let a = "int x=1;\nint y=2;\nint z=3;\nint w=4;";
    let b = "int a=1;\nint b=2;\nint c=3;\nint d=4;";
    let corpus = InMemoryCorpus::new()
        .with_file("alice", "main.c", a)
        .with_file("bob", "main.c", b);

    let file = write_yaml("version: 1\npreset: balanced\noverrides:\n  min_match_lines: 5\n");
    let config = ScanConfig::from_yaml(file.path()).unwrap();
    let report = ScanUseCaseImpl::new(config).run(&corpus, &NoopSink).unwrap();

    // Four matching lines fall short of five: reported on token similarity instead
    assert_eq!(report.results.len(), 1);
    assert!(!report.results[0].is_exact_match);
    assert_eq!(report.results[0].similarity, 1.0);
    assert!(report.results[0].segments.is_empty());
}
