//! `--config` loading and precedence.

use crate::common::{app_layout, graph_cmd, stdout_of};
use predicates::prelude::*;

#[test]
fn test_config_selects_output() {
    let project = app_layout();
    project.add_component("graph.toml", "output = \"json\"\n").unwrap();

    let out = stdout_of(graph_cmd(&project).args(["-c", "graph.toml", "src/App.vue"]));

    assert!(out.trim_start().starts_with('{'));
}

#[test]
fn test_flag_overrides_config() {
    let project = app_layout();
    project.add_component("graph.toml", "output = \"json\"\ndepth = 1\n").unwrap();

    let out = stdout_of(graph_cmd(&project).args([
        "--config",
        "graph.toml",
        "-o",
        "ascii",
        "src/App.vue",
    ]));

    assert_eq!(out, "App.vue\n├── Header.vue\n└── Footer.vue\n");
}

#[test]
fn test_config_root_is_relative_to_config_file() {
    let project = app_layout();
    project.add_component("conf/graph.toml", "root = \"../src/components\"\n").unwrap();
    project.add_component("Header.vue", "<template><Stray /></template>").unwrap();

    let out = stdout_of(graph_cmd(&project).args(["-c", "conf/graph.toml", "src/App.vue"]));

    assert_eq!(out, "App.vue\n├── Header.vue\n└── Footer.vue\n");
}

#[test]
fn test_missing_config_fails() {
    let project = app_layout();

    graph_cmd(&project)
        .args(["-c", "absent.toml", "src/App.vue"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_invalid_config_fails() {
    let project = app_layout();
    project.add_component("graph.toml", "output = \"pdf\"\n").unwrap();

    graph_cmd(&project)
        .args(["-c", "graph.toml", "src/App.vue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration file"));
}
