// SPDX-License-Identifier: MIT OR Apache-2.0
//! Loading catalogs from files on disk.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use uerr_catalog::{
    Catalog, CatalogConfig, CatalogError, load_catalog, merge_catalogs, parse_toml,
};
use uerr_codes::{GrpcCode, HttpCode};
use uerr_core::{ErrorView, ProtocolView, Status};

fn write_catalog(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const USERS: &str = r#"
[errors.user_not_found]
id = 404001
status = "failed"
message = "user {{id}} not found"
grpc = 5
http = 404

[errors.user_locked]
id = "USR-LOCKED"
status = "error"
message = "account locked"
http = 423
"#;

// -- 1. Load from an explicit path -------------------------------------------

#[test]
fn load_from_path() {
    let file = write_catalog(USERS);
    let catalog = load_catalog(Some(file.path())).unwrap();
    assert_eq!(catalog.len(), 2);

    let err = catalog.builder("user_not_found").unwrap().grpc();
    assert_eq!(err.code(), Some(GrpcCode::NOT_FOUND));
    assert_eq!(err.status(), Status::Failed);
    assert_eq!(
        err.message(&[uerr_core::Binding::new("id", 42)]),
        "user 42 not found"
    );
}

// -- 2. Missing file ---------------------------------------------------------

#[test]
fn missing_file_is_reported() {
    let err = load_catalog(Some(Path::new("/nonexistent/uerr/catalog.toml"))).unwrap_err();
    match err {
        CatalogError::FileNotFound { path } => assert!(path.contains("catalog.toml")),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

// -- 3. Malformed file -------------------------------------------------------

#[test]
fn malformed_file_is_a_parse_error() {
    let file = write_catalog("[errors.x\nid = 1");
    let err = load_catalog(Some(file.path())).unwrap_err();
    assert!(matches!(err, CatalogError::ParseError { .. }));
    assert!(err.to_string().starts_with("failed to parse catalog"));
}

// -- 4. Invalid entries stop the load ----------------------------------------

#[test]
fn invalid_entry_fails_validation() {
    let file = write_catalog("[errors.blank]\nid = \"\"\nmessage = \"m\"");
    let err = load_catalog(Some(file.path())).unwrap_err();
    assert!(matches!(err, CatalogError::ValidationError { ref reasons } if reasons.len() == 1));
}

// -- 5. Layered catalogs -----------------------------------------------------

#[test]
fn overlay_file_replaces_base_entry() {
    let base = parse_toml(USERS).unwrap();
    let overlay = parse_toml(
        r#"
        [errors.user_locked]
        id = "USR-LOCKED"
        message = "locked"
        http = 403
        "#,
    )
    .unwrap();
    let catalog = Catalog::from_config(merge_catalogs(base, overlay)).unwrap();

    let locked = catalog.builder("user_locked").unwrap().http();
    assert_eq!(locked.code(), Some(HttpCode::FORBIDDEN));
    assert_eq!(locked.status(), Status::Unknown);
    assert_eq!(catalog.names().count(), 2);
}

// -- 6. Instances from one entry are independent -----------------------------

#[test]
fn builder_instances_are_independent() {
    let catalog = Catalog::from_config(parse_toml(USERS).unwrap()).unwrap();
    let builder = catalog.builder("user_locked").unwrap();
    let a = builder.basic().set_error(std::io::Error::other("disk"));
    let b = builder.basic();
    assert_eq!(a.error(), "disk");
    assert_eq!(b.error(), "");
}

// -- 7. Round trip through TOML ----------------------------------------------

#[test]
fn config_serializes_back_to_toml() {
    let cfg = parse_toml(USERS).unwrap();
    let text = toml::to_string(&cfg).unwrap();
    let reparsed: CatalogConfig = parse_toml(&text).unwrap();
    assert_eq!(reparsed, cfg);
}
