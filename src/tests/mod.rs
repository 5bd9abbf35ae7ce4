use crate::error::AnalysisError;
use crate::fetch::{
    ArtifactSource, DirectoryEntry, LicenseInfo, RawArtifacts, RepositoryMetadata,
};
use crate::repository::RepositoryReference;
use std::sync::atomic::{AtomicUsize, Ordering};


/// In-memory artifact source that counts how often it was asked.
pub(crate) struct StubSource {
    result: Result<RawArtifacts, (String, u16)>,
    pub calls: AtomicUsize,
}

impl StubSource {
    pub fn with(artifacts: RawArtifacts) -> Self {
        Self {
            result: Ok(artifacts),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(endpoint: &str, status: u16) -> Self {
        Self {
            result: Err((endpoint.to_string(), status)),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl ArtifactSource for StubSource {
    async fn fetch(&self, _repo: &RepositoryReference) -> Result<RawArtifacts, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.result {
            Ok(artifacts) => Ok(artifacts.clone()),
            Err((endpoint, status)) => Err(AnalysisError::Fetch {
                endpoint: endpoint.clone(),
                status: *status,
            }),
        }
    }
}

// Test utilities and helpers
pub(crate) struct TestUtils;

impl TestUtils {
    pub fn metadata(name: &str) -> RepositoryMetadata {
        RepositoryMetadata {
            name: name.to_string(),
            description: Some("A widget for testing".to_string()),
            language: None,
            stargazers_count: 42,
            forks_count: 7,
            license: Some(LicenseInfo {
                name: "MIT License".to_string(),
            }),
            updated_at: Some("2024-03-14T09:26:53Z".to_string()),
        }
    }

    pub fn artifacts(entries: &[&str], files: &[(&str, &str)], languages: &[(&str, u64)]) -> RawArtifacts {
        RawArtifacts {
            metadata: Self::metadata("widget"),
            entries: entries
                .iter()
                .map(|name| {
                    if name.contains('.') {
                        DirectoryEntry::file(name)
                    } else {
                        DirectoryEntry::dir(name)
                    }
                })
                .collect(),
            languages: languages
                .iter()
                .map(|(name, bytes)| (name.to_string(), *bytes))
                .collect(),
            files: files
                .iter()
                .map(|(name, content)| (name.to_string(), content.to_string()))
                .collect(),
        }
    }

    pub fn repo() -> RepositoryReference {
        RepositoryReference::parse("https://github.com/acme/widget").unwrap()
    }

    /// Text from `start` up to, not including, `end`.
    pub fn section<'a>(content: &'a str, start: &str, end: &str) -> &'a str {
        let from = content
            .find(start)
            .unwrap_or_else(|| panic!("missing {}", start));
        let to = content[from..]
            .find(end)
            .map(|offset| from + offset)
            .unwrap_or(content.len());
        &content[from..to]
    }
}
