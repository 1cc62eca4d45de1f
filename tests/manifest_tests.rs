//! Loading route tables from manifest files.

use std::io::Write;
use std::sync::Arc;

use view_router::config::{load_manifest, load_route_table, ConfigError, LogFormat};
use view_router::routing::{Resolution, RouteTable, RouteTableError};
use view_router::view::{StaticView, ViewRegistry};

mod common;

#[test]
fn test_linux_archive_manifest() {
    let manifest = load_manifest(&common::demo_manifest("linuxarchive.toml")).unwrap();
    assert_eq!(manifest.routes.len(), 2);
    assert_eq!(manifest.logging.format, LogFormat::Pretty);

    let registry = ViewRegistry::placeholders(manifest.components());
    let table = RouteTable::from_manifest(&manifest, &registry).unwrap();

    match table.resolve("/").unwrap() {
        Resolution::Matched(route) => {
            assert_eq!(route.component(), "HomeView");
            assert_eq!(route.title(), Some("Bienvenido a LinuxArchive"));
            assert!(!route.requires_auth());
        }
        Resolution::NotFound(_) => panic!("home route missing"),
    }
    assert!(table.get_by_name("git").is_some());
}

#[test]
fn test_github_box_manifest() {
    let registry = ViewRegistry::new().with(Arc::new(StaticView::new("GithubBox")));
    let table = load_route_table(&common::demo_manifest("github_box.toml"), &registry).unwrap();

    match table.resolve("/").unwrap() {
        Resolution::Matched(route) => assert_eq!(route.location.path, "/github-box"),
        Resolution::NotFound(_) => panic!("redirect target missing"),
    }
}

#[test]
fn test_unknown_component_rejected() {
    let err = load_route_table(&common::demo_manifest("linuxarchive.toml"), &ViewRegistry::new())
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Table(RouteTableError::UnknownComponent { ref component, .. }) if component == "HomeView"
    ));
}

#[test]
fn test_invalid_manifest_reports_all_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[[routes]]
path = "/git"
component = "GitView"

[[routes]]
path = "/git"
component = "GitView"

[[routes]]
path = "demo"
"#
    )
    .unwrap();

    match load_manifest(file.path()).unwrap_err() {
        ConfigError::Validation(errors) => assert_eq!(errors.len(), 3),
        other => panic!("expected validation errors, got {other}"),
    }
}
