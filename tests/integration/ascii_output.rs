//! Text tree output.

use crate::common::{app_layout, graph_cmd, stdout_of};
use vue_component_graph::test_utils::{ComponentFixture, TestProject};

#[test]
fn test_header_and_footer_tree() {
    let project = app_layout();

    let out = stdout_of(graph_cmd(&project).arg("src/App.vue"));

    assert_eq!(out, "App.vue\n├── Header.vue\n└── Footer.vue\n");
}

#[test]
fn test_explicit_ascii_output_matches_default() {
    let project = app_layout();

    let default = stdout_of(graph_cmd(&project).arg("src/App.vue"));
    let explicit = stdout_of(graph_cmd(&project).args(["-o", "ascii", "src/App.vue"]));

    assert_eq!(default, explicit);
}

#[test]
fn test_nested_tree_and_kebab_tags() {
    let project = TestProject::new().unwrap();
    project
        .add_component("src/App.vue", &ComponentFixture::using(&["app-header", "Footer"]).content)
        .unwrap();
    project
        .add_component("src/app-header.vue", &ComponentFixture::using(&["Logo", "NavBar"]).content)
        .unwrap();
    project.add_component("src/Logo.vue", &ComponentFixture::leaf().content).unwrap();
    project.add_component("src/nav-bar.vue", &ComponentFixture::leaf().content).unwrap();
    project
        .add_component("src/Footer.vue", &ComponentFixture::using(&["Logo"]).content)
        .unwrap();

    let out = stdout_of(graph_cmd(&project).arg("src/App.vue"));

    let expected = "\
App.vue
├── app-header.vue
│   ├── Logo.vue
│   └── nav-bar.vue
└── Footer.vue
    └── Logo.vue
";
    assert_eq!(out, expected);
}

#[test]
fn test_imports_are_listed_before_tags() {
    let project = TestProject::new().unwrap();
    project
        .add_component(
            "src/App.vue",
            "<template>\n  <Footer />\n</template>\n<script setup>\nimport { Sidebar } from './Sidebar.vue'\n</script>\n",
        )
        .unwrap();
    project.add_component("src/Footer.vue", &ComponentFixture::leaf().content).unwrap();
    project.add_component("src/Sidebar.vue", &ComponentFixture::leaf().content).unwrap();

    let out = stdout_of(graph_cmd(&project).arg("src/App.vue"));

    assert_eq!(out, "App.vue\n├── Sidebar.vue\n└── Footer.vue\n");
}

#[test]
fn test_dependency_directory_is_not_resolved() {
    let project = TestProject::new().unwrap();
    project
        .add_component("src/App.vue", &ComponentFixture::using(&["FancyButton"]).content)
        .unwrap();
    project
        .add_component("node_modules/ui/FancyButton.vue", &ComponentFixture::leaf().content)
        .unwrap();

    let out = stdout_of(graph_cmd(&project).arg("src/App.vue"));

    assert_eq!(out, "App.vue\n");
}

#[test]
fn test_multiple_targets_print_in_order() {
    let project = app_layout();

    let out =
        stdout_of(graph_cmd(&project).args(["src/components/Footer.vue", "src/App.vue"]));

    assert_eq!(out, "Footer.vue\nApp.vue\n├── Header.vue\n└── Footer.vue\n");
}

#[test]
fn test_self_and_mutual_references_terminate() {
    let project = TestProject::new().unwrap();
    project
        .add_component("src/TreeItem.vue", &ComponentFixture::using(&["TreeItem", "Ping"]).content)
        .unwrap();
    project.add_component("src/Ping.vue", &ComponentFixture::using(&["Pong"]).content).unwrap();
    project.add_component("src/Pong.vue", &ComponentFixture::using(&["Ping"]).content).unwrap();

    let out = stdout_of(graph_cmd(&project).arg("src/TreeItem.vue"));

    let expected = "\
TreeItem.vue
├── TreeItem.vue
└── Ping.vue
    └── Pong.vue
        └── Ping.vue
";
    assert_eq!(out, expected);
}

#[test]
fn test_depth_limit() {
    let project = TestProject::new().unwrap();
    project.add_component("src/App.vue", &ComponentFixture::using(&["Header"]).content).unwrap();
    project.add_component("src/Header.vue", &ComponentFixture::using(&["Logo"]).content).unwrap();
    project.add_component("src/Logo.vue", &ComponentFixture::leaf().content).unwrap();

    let out = stdout_of(graph_cmd(&project).args(["--depth", "1", "src/App.vue"]));

    assert_eq!(out, "App.vue\n└── Header.vue\n");
}

#[test]
fn test_root_limits_resolution() {
    let project = app_layout();

    let out = stdout_of(graph_cmd(&project).args(["-r", "src/components", "src/App.vue"]));
    assert_eq!(out, "App.vue\n├── Header.vue\n└── Footer.vue\n");

    project.add_component("lib/Other.vue", &ComponentFixture::leaf().content).unwrap();
    let out = stdout_of(graph_cmd(&project).args(["--root", "lib", "src/App.vue"]));
    assert_eq!(out, "App.vue\n");
}

#[test]
fn test_unreadable_reference_is_a_leaf() {
    let project = TestProject::new().unwrap();
    project.add_component("src/App.vue", &ComponentFixture::using(&["Broken"]).content).unwrap();
    project.add_component("src/Logo.vue", &ComponentFixture::leaf().content).unwrap();
    // Not valid UTF-8, so reading it as text fails
    std::fs::write(project.path("src/Broken.vue"), b"\xff<template><Logo /></template>").unwrap();

    let out = stdout_of(graph_cmd(&project).arg("src/App.vue"));

    assert_eq!(out, "App.vue\n└── Broken.vue\n");
}
