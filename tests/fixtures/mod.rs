use std::path::PathBuf;

/// `tests/fixtures/java/<project>`
pub fn java_project(project: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("java")
        .join(project)
}
