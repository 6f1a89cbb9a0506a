//! Exit codes and error reporting.

use crate::common::{app_layout, graph_cmd, stdout_of};
use predicates::prelude::*;

#[test]
fn test_missing_root_is_fatal() {
    let project = app_layout();

    graph_cmd(&project)
        .args(["-r", "does-not-exist", "src/App.vue"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cannot list root directory"));
}

#[test]
fn test_missing_target_prints_its_name() {
    let project = app_layout();

    let out = stdout_of(graph_cmd(&project).arg("src/Nope.vue"));

    assert_eq!(out, "Nope.vue\n");
}

#[test]
fn test_zero_depth_is_rejected() {
    let project = app_layout();

    graph_cmd(&project)
        .args(["--depth", "0", "src/App.vue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("depth must be at least 1"));
}

#[test]
fn test_usage_errors() {
    let project = app_layout();

    graph_cmd(&project).assert().failure().code(2);
    graph_cmd(&project).args(["-v", "-q", "src/App.vue"]).assert().failure().code(2);
    graph_cmd(&project).args(["-o", "svg", "src/App.vue"]).assert().failure().code(2);
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let project = app_layout();

    let assert = graph_cmd(&project).args(["-v", "src/App.vue"]).assert().success();
    let output = assert.get_output();

    assert_eq!(String::from_utf8_lossy(&output.stdout), "App.vue\n├── Header.vue\n└── Footer.vue\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Visiting"));
}
