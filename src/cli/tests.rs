//! Unit tests for CLI commands

use crate::cli::{load_and_register, render_table, Cli, Commands};
use clap::Parser;
use std::io::Write;

fn write_manifest(content: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_check_command_parses() {
    let cli = Cli::try_parse_from(["routereg", "check", "--manifest", "routes.yaml"]).unwrap();
    match cli.command {
        Commands::Check { manifest } => assert_eq!(manifest.to_string_lossy(), "routes.yaml"),
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn test_list_command_with_log_level() {
    let cli = Cli::try_parse_from(["routereg", "list", "-m", "r.json", "--log-level", "debug"])
        .unwrap();
    assert_eq!(cli.log_level, "debug");
    assert!(matches!(cli.command, Commands::List { .. }));
}

#[test]
fn test_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["routereg", "serve"]).is_err());
}

#[test]
fn test_list_renders_in_order() {
    let file = write_manifest(
        r#"
routes:
  - path: /users
    methods: [GET]
    handler: list_users
    name: users.list
  - path: /users
    methods: [POST, PUT]
    handler: save_user
  - path: /status
    handler: status
"#,
        ".yaml",
    );

    let registry = load_and_register(file.path()).unwrap();
    let table = render_table(&registry);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(
        lines,
        vec![
            "GET        /users  -> list_users  [users.list]",
            "POST, PUT  /users  -> save_user",
            "any        /status  -> status",
        ]
    );
}

#[test]
fn test_check_reports_duplicate() {
    let file = write_manifest(
        r#"{"routes": [
            {"path": "/a", "methods": ["GET", "POST"], "handler": "h1"},
            {"path": "/a", "methods": ["POST", "DELETE"], "handler": "h2"}
        ]}"#,
        ".json",
    );

    let err = load_and_register(file.path()).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("manifest entry #1 (`/a`)"));
    assert!(chain.contains("duplicate route: `/a` is already registered for GET, POST"));
    assert!(err
        .chain()
        .any(|cause| cause.downcast_ref::<crate::DuplicateRouteError>().is_some()));
}

#[test]
fn test_missing_manifest_file() {
    let err = load_and_register(std::path::Path::new("/nonexistent/routes.yaml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read route manifest"));
}
