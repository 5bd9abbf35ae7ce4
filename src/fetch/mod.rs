use serde::Deserialize;

mod github;

pub use github::GitHubFetcher;
#[cfg(test)]
pub(crate) use github::decode_content;

use crate::error::AnalysisError;
use crate::repository::RepositoryReference;

/// Files whose contents are requested on every analysis, in request order.
pub const KEY_FILES: [&str; 9] = [
    "package.json",
    "README.md",
    "app.js",
    "index.js",
    "main.py",
    "requirements.txt",
    "Dockerfile",
    "docker-compose.yml",
    "pyproject.toml",
];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RepositoryMetadata {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub license: Option<LicenseInfo>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LicenseInfo {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl DirectoryEntry {
    pub fn file(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: "file".to_string(),
        }
    }

    pub fn dir(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: "dir".to_string(),
        }
    }
}

/// Outcome of one optional file request.
#[derive(Debug, Clone, PartialEq)]
pub enum FileFetch {
    Found(String),
    Absent,
    Failed(String),
}

/// Everything fetched for one analysis run, before any interpretation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawArtifacts {
    pub metadata: RepositoryMetadata,
    pub entries: Vec<DirectoryEntry>,
    /// Language byte counts in the order the provider reported them.
    pub languages: Vec<(String, u64)>,
    /// Decoded contents of the key files that were found, in request order.
    pub files: Vec<(String, String)>,
}

impl RawArtifacts {
    pub fn file(&self, name: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|(file, _)| file == name)
            .map(|(_, content)| content.as_str())
    }

    pub fn has_file(&self, name: &str) -> bool {
        self.file(name).is_some()
    }
}

#[async_trait::async_trait]
pub trait ArtifactSource {
    async fn fetch(&self, repo: &RepositoryReference) -> Result<RawArtifacts, AnalysisError>;
}
