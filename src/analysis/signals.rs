use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};
use tracing::debug;

use crate::fetch::RawArtifacts;

#[derive(Debug, Deserialize)]
struct PackageJson {
    #[serde(default)]
    main: Option<JsonValue>,
    #[serde(default)]
    scripts: Option<Map<String, JsonValue>>,
    #[serde(default)]
    dependencies: Option<Map<String, JsonValue>>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: Option<Map<String, JsonValue>>,
}

/// The parts of a `package.json` the analysis looks at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    pub main: Option<String>,
    pub scripts: Option<Map<String, JsonValue>>,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
}

impl Manifest {
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        let raw: PackageJson = serde_json::from_str(content)?;

        Ok(Self {
            main: raw
                .main
                .as_ref()
                .and_then(|m| m.as_str())
                .filter(|m| !m.is_empty())
                .map(String::from),
            scripts: raw.scripts,
            dependencies: raw.dependencies.map(keys).unwrap_or_default(),
            dev_dependencies: raw.dev_dependencies.map(keys).unwrap_or_default(),
        })
    }

    /// A script counts when it is declared with a non-empty command.
    pub fn has_script(&self, name: &str) -> bool {
        self.scripts
            .as_ref()
            .and_then(|scripts| scripts.get(name))
            .map(is_truthy)
            .unwrap_or(false)
    }
}

fn keys(map: Map<String, JsonValue>) -> Vec<String> {
    map.into_iter().map(|(name, _)| name).collect()
}

fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Presence flags derived from the top-level directory listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileSignals {
    pub test: bool,
    pub ci: bool,
    pub container: bool,
    pub deploy: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signals {
    pub manifest: Option<Manifest>,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
    pub files: FileSignals,
    /// A Dockerfile or compose file was fetched.
    pub container_config: bool,
    /// A pyproject.toml was fetched or listed.
    pub pyproject: bool,
    /// Lower-cased names from the directory listing, in listing order.
    pub file_names: Vec<String>,
}

impl Signals {
    pub fn extract(artifacts: &RawArtifacts) -> Self {
        let manifest = artifacts
            .file("package.json")
            .and_then(|content| match Manifest::parse(content) {
                Ok(manifest) => Some(manifest),
                Err(e) => {
                    debug!(error = %e, "package.json is not a valid manifest, skipping");
                    None
                }
            });

        let (dependencies, dev_dependencies) = manifest
            .as_ref()
            .map(|m| (dedup(&m.dependencies), dedup(&m.dev_dependencies)))
            .unwrap_or_default();

        let file_names: Vec<String> = artifacts
            .entries
            .iter()
            .map(|entry| entry.name.to_lowercase())
            .collect();

        let listed = |name: &str| file_names.iter().any(|f| f == name);
        let files = FileSignals {
            test: file_names
                .iter()
                .any(|f| f.contains("test") || f.contains("spec")),
            ci: listed(".github"),
            container: listed("dockerfile")
                || listed("docker-compose.yml")
                || file_names.iter().any(|f| f.contains("docker")),
            deploy: listed("vercel.json") || listed("netlify.toml"),
        };

        let container_config =
            artifacts.has_file("Dockerfile") || artifacts.has_file("docker-compose.yml");
        let pyproject = artifacts.has_file("pyproject.toml") || listed("pyproject.toml");

        Self {
            manifest,
            dependencies,
            dev_dependencies,
            files,
            container_config,
            pyproject,
            file_names,
        }
    }

    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.iter().any(|d| d == name)
    }

    pub fn has_dev_dependency(&self, name: &str) -> bool {
        self.dev_dependencies.iter().any(|d| d == name)
    }

    /// Runtime or dev dependency.
    pub fn declares(&self, name: &str) -> bool {
        self.has_dependency(name) || self.has_dev_dependency(name)
    }

    pub fn has_listed_file(&self, lowercase_name: &str) -> bool {
        self.file_names.iter().any(|f| f == lowercase_name)
    }
}

fn dedup(names: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if !unique.contains(name) {
            unique.push(name.clone());
        }
    }
    unique
}
