use hoist_core::manifest::{find_project_dir, Manifest};
use std::fs;
use tempfile::TempDir;

const FULL_MANIFEST: &str = r#"
[package]
group = "me.owdding"
name = "cats"
version = "1.0.0-beta.1"
description = "A small data file library"
license = "MIT"

[publish]
repository = "https://maven.example.com/repository/releases/"
"#;

#[test]
fn parse_full_manifest() {
    let manifest = Manifest::parse(FULL_MANIFEST).unwrap();
    assert_eq!(manifest.package.group, "me.owdding");
    assert_eq!(manifest.package.name, "cats");
    assert_eq!(manifest.package.version, "1.0.0-beta.1");

    let identity = manifest.identity();
    assert_eq!(identity.to_string(), "me.owdding:cats:1.0.0-beta.1");

    assert_eq!(
        manifest.repository().unwrap(),
        "https://maven.example.com/repository/releases/"
    );
}

#[test]
fn parse_manifest_without_publish_section() {
    let manifest = Manifest::parse(
        "[package]\ngroup = \"com.example\"\nname = \"lib\"\nversion = \"0.1\"\n",
    )
    .unwrap();
    assert!(manifest.publish.is_none());
    assert!(manifest.repository().is_err());
}

#[test]
fn parse_rejects_missing_package_fields() {
    let result = Manifest::parse("[package]\nname = \"lib\"\n");
    assert!(result.is_err());
}

#[test]
fn find_project_dir_walks_up() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Hoist.toml"), FULL_MANIFEST).unwrap();
    let nested = tmp.path().join("src/main/java");
    fs::create_dir_all(&nested).unwrap();

    let found = find_project_dir(&nested).unwrap();
    assert_eq!(found, tmp.path());
}

#[test]
fn find_project_dir_fails_without_manifest() {
    let tmp = TempDir::new().unwrap();
    let result = find_project_dir(tmp.path());
    assert!(result.is_err());
}
