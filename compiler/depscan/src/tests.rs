use pretty_assertions::assert_eq;

use super::*;

#[test]
fn silent_without_env_or_verbose() {
    assert_eq!(filter_directives(None, false), None);
    assert_eq!(filter_directives(Some(String::new()), false), None);
}

#[test]
fn env_directives_pass_through() {
    assert_eq!(
        filter_directives(Some("depscan=trace".to_owned()), false).as_deref(),
        Some("depscan=trace")
    );
}

#[test]
fn verbose_adds_core_debug() {
    assert_eq!(
        filter_directives(None, true).as_deref(),
        Some("depscan_core=debug")
    );
    assert_eq!(
        filter_directives(Some("warn".to_owned()), true).as_deref(),
        Some("warn,depscan_core=debug")
    );
}

#[test]
fn run_over_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.js"), "import 'x'\n").unwrap();
    let config = ScanConfig {
        paths: vec![dir.path().to_path_buf()],
        no_warnings: true,
        ..ScanConfig::default()
    };
    assert!(run(&config).is_ok());
}

#[test]
fn run_reports_missing_paths() {
    let dir = tempfile::tempdir().unwrap();
    let config = ScanConfig {
        paths: vec![dir.path().join("missing")],
        ..ScanConfig::default()
    };
    let err = run(&config).unwrap_err();
    assert_eq!(err.exit_code(), 1);
}
