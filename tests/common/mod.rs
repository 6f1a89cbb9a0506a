//! Common helpers for the integration suite
//!
//! Builds small component trees on disk and runs the compiled binary against
//! them with color and logging turned off.

// Not every helper is used by every test module
#![allow(dead_code)]

use assert_cmd::Command;
use vue_component_graph::test_utils::{ComponentFixture, TestProject};

/// A binary invocation with the project root as working directory.
pub fn graph_cmd(project: &TestProject) -> Command {
    let mut cmd = Command::cargo_bin("vue-component-graph").unwrap();
    cmd.current_dir(project.root()).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// `src/App.vue` using `Header` and `Footer`, both leaves under `src/components/`.
pub fn app_layout() -> TestProject {
    let project = TestProject::new().unwrap();
    project
        .add_component("src/App.vue", &ComponentFixture::using(&["Header", "Footer"]).content)
        .unwrap();
    project.add_component("src/components/Header.vue", &ComponentFixture::leaf().content).unwrap();
    project.add_component("src/components/Footer.vue", &ComponentFixture::leaf().content).unwrap();
    project
}

/// Stdout of a successful run.
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}
