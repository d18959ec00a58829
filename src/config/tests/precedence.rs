//! Tests for configuration layer precedence.

use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::build_config_from_layers;

#[rstest]
#[case::file_overrides_defaults(
    vec![
        ("defaults", json!({"api_url": "http://localhost:8000"})),
        ("file", json!({"api_url": "http://file.example"}))
    ],
    "http://file.example",
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![
        ("file", json!({"api_url": "http://file.example"})),
        ("environment", json!({"api_url": "http://env.example"}))
    ],
    "http://env.example",
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![
        ("environment", json!({"api_url": "http://env.example"})),
        ("cli", json!({"api_url": "http://cli.example"}))
    ],
    "http://cli.example",
    "CLI should override environment"
)]
fn api_url_layer_precedence(
    #[case] layers: Vec<(&str, Value)>,
    #[case] expected: &str,
    #[case] message: &str,
) {
    let config = build_config_from_layers(&layers);

    assert_eq!(config.api_url, expected, "{message}");
}

#[rstest]
fn view_from_file_is_kept_when_cli_is_silent() {
    let config = build_config_from_layers(&[
        ("defaults", json!({"view": "#/"})),
        ("file", json!({"view": "#/admin"})),
        ("cli", json!({"api_url": "http://cli.example"})),
    ]);

    assert_eq!(config.view, "#/admin");
    assert_eq!(config.api_url, "http://cli.example");
}

#[rstest]
fn timeout_and_one_shot_fields_merge_across_layers() {
    let config = build_config_from_layers(&[
        ("file", json!({"request_timeout_seconds": 5, "rating": 3})),
        ("cli", json!({"review": "Great service!"})),
    ]);

    assert_eq!(config.request_timeout_seconds, 5);
    assert_eq!(config.rating, Some(3));
    assert_eq!(config.review.as_deref(), Some("Great service!"));
}

#[rstest]
fn defaults_apply_when_no_sources_provided() {
    let config = build_config_from_layers(&[(
        "defaults",
        json!({"submission_id": null, "log_file": null}),
    )]);

    assert_eq!(config.api_url, "http://localhost:8000");
    assert_eq!(config.view, "#/");
    assert_eq!(config.request_timeout_seconds, 30);
    assert!(config.submission_id.is_none());
    assert!(!config.stats);
    assert!(!config.telemetry);
    assert!(config.log_file.is_none());
}

#[rstest]
fn log_file_from_file_layer_is_a_utf8_path() {
    let config = build_config_from_layers(&[("file", json!({"log_file": "logs/console.log"}))]);

    let path = config.log_file.expect("log file should be set");
    assert_eq!(path.file_name(), Some("console.log"));
}
