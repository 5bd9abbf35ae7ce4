pub mod analysis;
pub mod config;
pub mod error;
pub mod fetch;
pub mod render;
pub mod repository;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use analysis::{build_profile, Profile, RepositoryAnalyzer};
pub use config::Config;
pub use error::AnalysisError;
pub use fetch::{ArtifactSource, GitHubFetcher, RawArtifacts};
pub use render::{render, Document, HeaderStyle};
pub use repository::RepositoryReference;

/// Fetches, analyses and renders one repository against the GitHub API.
pub async fn generate(
    repo_url: &str,
    config: &Config,
    style: HeaderStyle,
) -> Result<(Profile, Document), AnalysisError> {
    // Validate before building an HTTP client.
    RepositoryReference::parse(repo_url)?;

    let analyzer = RepositoryAnalyzer::from_config(&config.github)?;
    let profile = analyzer.analyze(repo_url).await?;
    let document = render(&profile, style);
    Ok((profile, document))
}
