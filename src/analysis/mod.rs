use chrono::DateTime;
use serde::Serialize;
use tracing::info;

use crate::config::GitHubConfig;
use crate::error::AnalysisError;
use crate::fetch::{ArtifactSource, GitHubFetcher, RawArtifacts};
use crate::repository::RepositoryReference;

pub mod classifier;
mod commands;
mod framework;
mod language;
mod signals;

#[cfg(test)]
mod tests;

pub use classifier::{Capabilities, Narrative};
pub use commands::{CommandPlan, CommandSynthesizer, PackageManager, GENERIC_ENTRY_POINT};
pub use framework::FrameworkDetector;
pub use language::{LanguageDetector, LanguageSummary};
pub use signals::{FileSignals, Manifest, Signals};

pub const MAX_DEPENDENCIES: usize = 15;
pub const MAX_TREE_ENTRIES: usize = 20;
const MAX_MAIN_FILES: usize = 5;
const SOURCE_EXTENSIONS: [&str; 8] = [".js", ".ts", ".py", ".java", ".go", ".rs", ".cpp", ".c"];

/// Structured result of analysing one repository. Built once, never patched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub name: String,
    pub description: String,
    pub owner: String,
    pub url: String,
    pub stars: u64,
    pub forks: u64,
    pub license: Option<String>,
    pub last_commit: String,

    pub language: LanguageSummary,
    pub language_percentage: String,
    pub project_type: String,
    pub frameworks: Vec<String>,
    pub dependencies: Vec<String>,

    #[serde(flatten)]
    pub narrative: Narrative,

    pub entry_point: String,
    pub package_managers: Vec<PackageManager>,
    pub start_commands: Vec<String>,
    pub has_container: bool,

    pub file_structure: Vec<String>,
    pub main_files: Vec<String>,
    pub has_readme: bool,
}

impl Profile {
    /// Listing entries shown in a tree view, and how many were left out.
    pub fn displayed_files(&self) -> (&[String], usize) {
        let shown = self.file_structure.len().min(MAX_TREE_ENTRIES);
        (&self.file_structure[..shown], self.file_structure.len() - shown)
    }
}

/// Pure step from fetched artifacts to a profile.
pub fn build_profile(repo: &RepositoryReference, artifacts: &RawArtifacts) -> Profile {
    let metadata = &artifacts.metadata;
    let signals = Signals::extract(artifacts);

    let language = LanguageDetector::new()
        .summarize(&artifacts.languages, metadata.language.as_deref());
    let detector = FrameworkDetector::new();
    let frameworks = detector.detect(&signals);
    let project_type = detector.project_type(&signals, &language.name);
    let narrative = classifier::classify(&signals);
    let plan = CommandSynthesizer::synthesize(&signals, &language.name);

    let dependencies = signals
        .dependencies
        .iter()
        .filter(|dep| !dep.starts_with("@types/"))
        .take(MAX_DEPENDENCIES)
        .cloned()
        .collect();

    let file_structure: Vec<String> = artifacts.entries.iter().map(|e| e.name.clone()).collect();
    let main_files = file_structure
        .iter()
        .filter(|name| is_main_file(name))
        .take(MAX_MAIN_FILES)
        .cloned()
        .collect();
    let has_readme = signals.file_names.iter().any(|f| f.starts_with("readme"));

    let name = if metadata.name.is_empty() {
        repo.name().to_string()
    } else {
        metadata.name.clone()
    };

    Profile {
        name,
        description: metadata.description.clone().unwrap_or_default(),
        owner: repo.owner().to_string(),
        url: repo.canonical_url(),
        stars: metadata.stargazers_count,
        forks: metadata.forks_count,
        license: metadata
            .license
            .as_ref()
            .map(|l| l.name.clone())
            .filter(|l| !l.is_empty()),
        last_commit: month_label(metadata.updated_at.as_deref()),
        language_percentage: language.percentage_label(),
        language,
        project_type,
        frameworks,
        dependencies,
        has_container: narrative.capabilities.has_container,
        narrative,
        entry_point: plan.entry_point,
        package_managers: plan.package_managers,
        start_commands: plan.start_commands,
        file_structure,
        main_files,
        has_readme,
    }
}

fn is_main_file(name: &str) -> bool {
    SOURCE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
        || matches!(name, "index.html" | "main.py" | "app.js")
}

/// Upper-case month abbreviation of an RFC 3339 timestamp, e.g. "MAR".
fn month_label(timestamp: Option<&str>) -> String {
    timestamp
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
        .map(|date| date.format("%b").to_string().to_uppercase())
        .unwrap_or_default()
}

pub struct RepositoryAnalyzer<S> {
    source: S,
}

impl RepositoryAnalyzer<GitHubFetcher> {
    pub fn from_config(config: &GitHubConfig) -> Result<Self, AnalysisError> {
        Ok(Self::new(GitHubFetcher::new(config)?))
    }
}

impl<S: ArtifactSource + Send + Sync> RepositoryAnalyzer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn analyze(&self, repo_url: &str) -> Result<Profile, AnalysisError> {
        let repo = RepositoryReference::parse(repo_url)?;
        let artifacts = self.source.fetch(&repo).await?;
        let profile = build_profile(&repo, &artifacts);

        info!(
            repository = %repo,
            project_type = %profile.project_type,
            frameworks = profile.frameworks.len(),
            "analysis complete"
        );
        Ok(profile)
    }
}
