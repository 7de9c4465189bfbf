mod fixtures;

use automanifest::attributes::AttributeName;
use automanifest::env::BuildEnvironment;
use automanifest::manifest::{Manifest, MemoryManifestStore};
use automanifest::source::load_declarations;
use automanifest::{ManifestProcessor, Round};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn main_attributes(store: &MemoryManifestStore) -> Vec<(String, String)> {
    store
        .manifest()
        .unwrap()
        .main
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn pair(k: &str, v: &str) -> (String, String) {
    (k.to_string(), v.to_string())
}

fn jdk17() -> BuildEnvironment {
    BuildEnvironment {
        runtime_version: Some("17.0.2".to_string()),
        runtime_vendor: Some("Eclipse Adoptium".to_string()),
        spec_version: Some("17".to_string()),
        user_name: Some("ci".to_string()),
        os_name: Some("Linux".to_string()),
        os_version: Some("6.1.0".to_string()),
        os_arch: Some("amd64".to_string()),
    }
}

#[test]
fn test_application_project() {
    let roots = load_declarations(&fixtures::java_project("app")).unwrap();
    let mut store = MemoryManifestStore::new();
    let mut processor = ManifestProcessor::new(
        Some("Main-Class,Automatic-Module-Name,Created-By,Built-By,Build-Jdk-Spec,Build-Os"),
        &jdk17(),
    );

    processor.process_round(&Round::new(&roots), &mut store);
    processor.process_round(&Round::terminal(), &mut store);

    assert_eq!(
        main_attributes(&store),
        vec![
            pair("Manifest-Version", "1.0"),
            pair("Main-Class", "com.example.app.App"),
            pair("Automatic-Module-Name", "com.example.app"),
            pair("Created-By", "17.0.2 (Eclipse Adoptium)"),
            pair("Built-By", "ci"),
            pair("Build-Jdk-Spec", "17"),
            pair("Build-Os", "Linux (6.1.0; amd64)"),
        ]
    );
    assert!(processor.diagnostics().warnings().is_empty());
}

#[test]
fn test_agent_project() {
    let roots = load_declarations(&fixtures::java_project("agent")).unwrap();
    let mut store = MemoryManifestStore::new();
    let mut processor = ManifestProcessor::new(
        Some("Premain-Class,Agent-Class,Launcher-Agent-Class,Main-Class,Automatic-Module-Name"),
        &BuildEnvironment::default(),
    );

    processor.process_round(&Round::new(&roots), &mut store);
    processor.process_round(&Round::terminal(), &mut store);

    assert_eq!(
        main_attributes(&store),
        vec![
            pair("Manifest-Version", "1.0"),
            pair("Premain-Class", "org.acme.agent.Agent"),
            pair("Agent-Class", "org.acme.agent.Agent"),
            pair("Launcher-Agent-Class", "org.acme.agent.Agent"),
            pair("Automatic-Module-Name", "org.acme.agent"),
        ]
    );
    assert_eq!(processor.diagnostics().warnings(), vec!["Found no main method"]);
}

#[test]
fn test_ambiguous_project_drops_attributes() {
    let roots = load_declarations(&fixtures::java_project("ambiguous")).unwrap();
    let mut store = MemoryManifestStore::new();
    let mut processor =
        ManifestProcessor::new(Some("Main-Class,Automatic-Module-Name"), &BuildEnvironment::default());

    processor.process_round(&Round::new(&roots), &mut store);
    processor.process_round(&Round::terminal(), &mut store);

    assert_eq!(main_attributes(&store), vec![pair("Manifest-Version", "1.0")]);
    assert_eq!(
        processor.diagnostics().warnings(),
        vec!["Found multiple main methods: [a.One, b.Two]", "Found no common package"]
    );
}

#[test]
fn test_missing_environment_fact_is_skipped() {
    let mut env = jdk17();
    env.user_name = None;
    let mut store = MemoryManifestStore::new();
    let mut processor = ManifestProcessor::new(Some("Built-By,Build-Jdk"), &env);

    processor.process_round(&Round::terminal(), &mut store);

    assert_eq!(
        main_attributes(&store),
        vec![pair("Manifest-Version", "1.0"), pair("Build-Jdk", "17.0.2 (Eclipse Adoptium)")]
    );
    assert_eq!(processor.diagnostics().warnings(), vec!["No value available for Built-By"]);
}

#[test]
fn test_rounds_from_separate_sources() {
    let app = load_declarations(&fixtures::java_project("app")).unwrap();
    let agent = load_declarations(&fixtures::java_project("agent")).unwrap();

    let mut existing = Manifest::new();
    existing
        .main
        .insert(AttributeName::new("Class-Path").unwrap(), "lib/asm.jar");
    let mut store = MemoryManifestStore::with_manifest(existing);
    let mut processor =
        ManifestProcessor::new(Some("Main-Class,Premain-Class,Automatic-Module-Name"), &BuildEnvironment::default());

    processor.process_round(&Round::new(&app), &mut store);
    processor.process_round(&Round::new(&agent), &mut store);
    processor.process_round(&Round::terminal(), &mut store);

    assert_eq!(
        main_attributes(&store),
        vec![
            pair("Class-Path", "lib/asm.jar"),
            pair("Manifest-Version", "1.0"),
            pair("Main-Class", "com.example.app.App"),
            pair("Premain-Class", "org.acme.agent.Agent"),
        ]
    );
    assert_eq!(processor.diagnostics().warnings(), vec!["Found no common package"]);
}

#[test]
fn test_packages_named_like_build_output_are_read() {
    let temp_dir = TempDir::new().unwrap();
    let build = temp_dir.path().join("com/acme/build");
    let core = temp_dir.path().join("com/acme/core");
    fs::create_dir_all(&build).unwrap();
    fs::create_dir_all(&core).unwrap();
    fs::write(
        build.join("Main.java"),
        "package com.acme.build;\npublic class Main {\n    public static void main(String[] args) {}\n}\n",
    )
    .unwrap();
    fs::write(core.join("Core.java"), "package com.acme.core;\nclass Core {}\n").unwrap();

    let roots = load_declarations(temp_dir.path()).unwrap();
    let mut store = MemoryManifestStore::new();
    let mut processor =
        ManifestProcessor::new(Some("Main-Class,Automatic-Module-Name"), &BuildEnvironment::default());
    processor.process_round(&Round::new(&roots), &mut store);
    processor.process_round(&Round::terminal(), &mut store);

    assert_eq!(
        main_attributes(&store),
        vec![
            pair("Manifest-Version", "1.0"),
            pair("Main-Class", "com.acme.build.Main"),
            pair("Automatic-Module-Name", "com.acme"),
        ]
    );
    assert!(processor.diagnostics().warnings().is_empty());
}
