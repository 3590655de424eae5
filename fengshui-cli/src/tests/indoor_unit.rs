//! Focused unit tests covering the `indoor` command.

use super::helpers::{Workspace, output_json};
use super::*;
use indoor::{DEFAULT_ROOM, IndoorArgs, IndoorConfig, execute_indoor, run_indoor_with};
use rstest::rstest;

const BEDROOM_LAYOUT: &str = r#"[
    {"id": "bed-1", "type": "bed", "position": {"x": 2.0, "y": 3.0}},
    {"id": "mirror-1", "type": "mirror", "position": {"x": 2.0, "y": 0.5}}
]"#;

#[rstest]
fn converting_without_layout_errors() {
    let err = IndoorConfig::try_from(IndoorArgs::default()).expect_err("layout is required");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_LAYOUT);
            assert_eq!(env, ENV_LAYOUT);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn room_defaults_to_living() {
    let workspace = Workspace::new();
    let args = IndoorArgs {
        layout: Some(workspace.path("layout.json")),
        ..IndoorArgs::default()
    };
    let config = IndoorConfig::try_from(args).expect("config");
    assert_eq!(config.room, DEFAULT_ROOM);
}

#[rstest]
fn prints_camel_case_analysis() {
    let workspace = Workspace::new();
    let args = IndoorArgs {
        layout: Some(workspace.write("layout.json", BEDROOM_LAYOUT)),
        room: Some("bedroom".to_owned()),
        catalog: None,
    };
    let mut buffer = Vec::new();
    run_indoor_with(args, &mut buffer).expect("analysis succeeds");
    let json = output_json(&buffer);
    assert_eq!(json.get("functionalScore"), Some(&serde_json::json!(70)));
    assert!(json.pointer("/energyBalance/yang").is_some());
}

#[rstest]
fn unknown_item_type_is_reported() {
    let workspace = Workspace::new();
    let config = IndoorConfig {
        layout: workspace.write(
            "layout.json",
            r#"[{"id": "x", "type": "jacuzzi", "position": {"x": 0.0, "y": 0.0}}]"#,
        ),
        room: "bedroom".to_owned(),
        catalog: None,
    };
    let err = execute_indoor(&config).expect_err("unknown type");
    assert!(matches!(err, CliError::Indoor(_)), "found {err:?}");
}

#[rstest]
fn malformed_layout_is_reported() {
    let workspace = Workspace::new();
    let config = IndoorConfig {
        layout: workspace.write("layout.json", r#"{"items": []}"#),
        room: "office".to_owned(),
        catalog: None,
    };
    let err = execute_indoor(&config).expect_err("layout must be an array");
    assert!(matches!(err, CliError::ParseLayout { .. }), "found {err:?}");
}

#[rstest]
fn incomplete_catalog_is_rejected() {
    let workspace = Workspace::new();
    let config = IndoorConfig {
        layout: workspace.write("layout.json", BEDROOM_LAYOUT),
        room: "bedroom".to_owned(),
        catalog: Some(workspace.write(
            "catalog.json",
            r#"{"bed": {"element": "earth", "energy": "yin", "placement": "furniture", "bagua": "relationships"}}"#,
        )),
    };
    let err = execute_indoor(&config).expect_err("catalog lacks rule items");
    assert!(matches!(err, CliError::LoadCatalog { .. }), "found {err:?}");
}
