//! HTML document output.

use crate::common::{app_layout, graph_cmd, stdout_of};
use predicates::prelude::*;
use vue_component_graph::test_utils::{ComponentFixture, TestProject};

#[test]
fn test_single_document_for_all_targets() {
    let project = app_layout();

    let html = stdout_of(graph_cmd(&project).args([
        "-o",
        "html",
        "src/App.vue",
        "src/components/Header.vue",
    ]));

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.ends_with("</html>\n"));
    assert_eq!(html.matches("<!DOCTYPE html>").count(), 1);
    assert_eq!(html.matches("<ul class=\"tree-root\">").count(), 2);
    assert_eq!(html.matches("<span class=\"label\">Header.vue</span>").count(), 2);
}

#[test]
fn test_parent_marker_only_on_nodes_with_children() {
    let project = app_layout();

    let html = stdout_of(graph_cmd(&project).args(["--output", "html", "src/App.vue"]));

    assert_eq!(html.matches("class=\"node parent\"").count(), 1);
    assert!(html.contains(
        "<div class=\"node parent\"><span class=\"toggle\"></span><span class=\"label\">App.vue</span>"
    ));
}

#[test]
fn test_same_named_files_share_a_label() {
    let project = TestProject::new().unwrap();
    project.add_component("ui/Icon.vue", &ComponentFixture::using(&["Glyph"]).content).unwrap();
    project.add_component("legacy/Icon.vue", &ComponentFixture::leaf().content).unwrap();
    project.add_component("ui/Glyph.vue", &ComponentFixture::leaf().content).unwrap();

    let html =
        stdout_of(graph_cmd(&project).args(["-o", "html", "ui/Icon.vue", "legacy/Icon.vue"]));

    // Hiding one label hides every item with the same text
    assert_eq!(html.matches("<span class=\"label\">Icon.vue</span>").count(), 2);
    assert_eq!(html.matches("title=\"Hide all 'Icon.vue'\"").count(), 2);
}

#[test]
fn test_interactive_script_is_embedded() {
    let project = app_layout();

    graph_cmd(&project)
        .args(["-o", "html", "src/App.vue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("event.shiftKey"))
        .stdout(predicate::str::contains("stopPropagation"))
        .stdout(predicate::str::contains("<title>Component Tree</title>"));
}

#[test]
fn test_parent_nodes_precede_their_lists() {
    let project = app_layout();
    project
        .add_component("src/components/Header.vue", &ComponentFixture::using(&["Logo"]).content)
        .unwrap();
    project.add_component("src/components/Logo.vue", &ComponentFixture::leaf().content).unwrap();

    let html = stdout_of(graph_cmd(&project).args(["-o", "html", "src/App.vue"]));
    let lines: Vec<&str> = html.lines().map(str::trim).collect();

    let mut parents = 0;
    for (i, line) in lines.iter().enumerate() {
        if !line.starts_with("<div class=\"node") {
            continue;
        }
        assert!(line.contains("<span class=\"label\">") && line.ends_with("</button></div>"));
        if line.starts_with("<div class=\"node parent\"") {
            parents += 1;
            assert_eq!(lines[i + 1], "<ul>");
        }
    }
    assert_eq!(parents, 2);
}
