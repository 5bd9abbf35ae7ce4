use super::artifacts;
use crate::analysis::{Manifest, Signals};

#[test]
fn test_manifest_dependencies_keep_declaration_order() {
    let manifest = Manifest::parse(
        r#"{
            "main": "server.js",
            "dependencies": { "zod": "^3", "express": "^4", "axios": "^1" },
            "devDependencies": { "jest": "^29" }
        }"#,
    )
    .unwrap();

    assert_eq!(manifest.main.as_deref(), Some("server.js"));
    assert_eq!(manifest.dependencies, vec!["zod", "express", "axios"]);
    assert_eq!(manifest.dev_dependencies, vec!["jest"]);
    assert!(manifest.scripts.is_none());
}

#[test]
fn test_empty_script_does_not_count() {
    let manifest = Manifest::parse(r#"{ "scripts": { "start": "", "dev": "vite" } }"#).unwrap();
    assert!(!manifest.has_script("start"));
    assert!(manifest.has_script("dev"));
    assert!(!manifest.has_script("build"));
}

#[test]
fn test_malformed_manifest_keeps_file_signals() {
    let raw = artifacts(Some("{ not json"), &["tests", ".github", "Dockerfile"]);
    let signals = Signals::extract(&raw);

    assert!(signals.manifest.is_none());
    assert!(signals.dependencies.is_empty());
    assert!(signals.files.test);
    assert!(signals.files.ci);
    assert!(signals.files.container);
}

#[test]
fn test_file_signals_are_case_insensitive() {
    let raw = artifacts(None, &["Vercel.json", "SPEC", "docker"]);
    let signals = Signals::extract(&raw);

    assert!(signals.files.deploy);
    assert!(signals.files.test);
    assert!(signals.files.container);
    assert!(!signals.files.ci);
    assert!(signals.has_listed_file("vercel.json"));
}

#[test]
fn test_no_listing_means_no_file_signals() {
    let signals = Signals::extract(&artifacts(None, &[]));
    assert_eq!(signals.files, Default::default());
    assert!(!signals.container_config);
    assert!(!signals.pyproject);
}

#[test]
fn test_fetched_config_files_are_signals() {
    let mut raw = artifacts(None, &[]);
    raw.files.push(("Dockerfile".to_string(), "FROM node:20".to_string()));
    raw.files.push(("pyproject.toml".to_string(), "[tool.poetry]".to_string()));

    let signals = Signals::extract(&raw);
    assert!(signals.container_config);
    assert!(signals.pyproject);
}
