//! JSON document output.

use crate::common::{app_layout, graph_cmd, stdout_of};
use serde_json::Value;
use vue_component_graph::test_utils::{ComponentFixture, TestProject};

#[test]
fn test_json_tree() {
    let project = app_layout();

    let out = stdout_of(graph_cmd(&project).args(["-o", "json", "src/App.vue"]));
    let doc: Value = serde_json::from_str(&out).unwrap();

    let app = &doc["roots"][0];
    assert_eq!(app["name"], "App.vue");
    assert_eq!(app["path"], project.path("src/App.vue").display().to_string());
    let names: Vec<&str> =
        app["dependencies"].as_array().unwrap().iter().map(|d| d["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Header.vue", "Footer.vue"]);
}

#[test]
fn test_sorted_scan_picks_first_name_in_order() {
    let project = TestProject::new().unwrap();
    project.add_component("App.vue", &ComponentFixture::using(&["Icon"]).content).unwrap();
    project.add_component("b/Icon.vue", &ComponentFixture::leaf().content).unwrap();
    project.add_component("a/Icon.vue", &ComponentFixture::leaf().content).unwrap();

    let out = stdout_of(graph_cmd(&project).args(["--sorted", "-o", "json", "App.vue"]));
    let doc: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(
        doc["roots"][0]["dependencies"][0]["path"],
        project.path("a/Icon.vue").display().to_string()
    );
}
