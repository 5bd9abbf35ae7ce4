use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use futures::future::join_all;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use super::{ArtifactSource, DirectoryEntry, FileFetch, RawArtifacts, RepositoryMetadata, KEY_FILES};
use crate::config::GitHubConfig;
use crate::error::AnalysisError;
use crate::repository::RepositoryReference;

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    encoding: Option<String>,
}

/// Reads repository artifacts from the GitHub REST API.
pub struct GitHubFetcher {
    client: reqwest::Client,
    api_url: String,
}

impl GitHubFetcher {
    pub fn new(config: &GitHubConfig) -> Result<Self, AnalysisError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn repo_url(&self, repo: &RepositoryReference) -> String {
        format!("{}/repos/{}/{}", self.api_url, repo.owner(), repo.name())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        url: &str,
    ) -> Result<T, AnalysisError> {
        debug!(endpoint, url, "requesting");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AnalysisError::Network(format!("{}: {}", endpoint, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::Fetch {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::Network(format!("Failed to read {} body: {}", endpoint, e)))?;

        serde_json::from_str(&body)
            .map_err(|e| AnalysisError::Parse(format!("Failed to parse {} response: {}", endpoint, e)))
    }

    async fn fetch_languages(
        &self,
        repo: &RepositoryReference,
    ) -> Result<Vec<(String, u64)>, AnalysisError> {
        let url = format!("{}/languages", self.repo_url(repo));
        let languages: serde_json::Map<String, serde_json::Value> =
            self.get_json("languages", &url).await?;

        Ok(languages
            .into_iter()
            .map(|(name, bytes)| (name, bytes.as_u64().unwrap_or(0)))
            .collect())
    }

    /// Requests one key file. Never fails: a missing or unreadable file is
    /// reported through the returned variant.
    pub async fn fetch_file(&self, repo: &RepositoryReference, file_name: &str) -> FileFetch {
        let url = format!("{}/contents/{}", self.repo_url(repo), file_name);
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return FileFetch::Failed(e.to_string()),
        };

        match response.status() {
            StatusCode::NOT_FOUND => return FileFetch::Absent,
            status if !status.is_success() => {
                return FileFetch::Failed(format!("status {}", status.as_u16()))
            }
            _ => {}
        }

        let body: ContentResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => return FileFetch::Failed(e.to_string()),
        };

        match body.content {
            Some(content) => match decode_content(&content, body.encoding.as_deref()) {
                Ok(text) => FileFetch::Found(text),
                Err(reason) => FileFetch::Failed(reason),
            },
            // Directories and submodules have no inline content.
            None => FileFetch::Absent,
        }
    }
}

/// Decodes a contents API payload. Base64 bodies arrive wrapped in newlines.
pub(crate) fn decode_content(content: &str, encoding: Option<&str>) -> Result<String, String> {
    match encoding {
        Some("base64") | None => {
            let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
            let bytes = STANDARD.decode(compact).map_err(|e| e.to_string())?;
            String::from_utf8(bytes).map_err(|e| e.to_string())
        }
        Some(_) => Ok(content.to_string()),
    }
}

#[async_trait::async_trait]
impl ArtifactSource for GitHubFetcher {
    async fn fetch(&self, repo: &RepositoryReference) -> Result<RawArtifacts, AnalysisError> {
        info!(repository = %repo, "fetching repository artifacts");
        let repo_url = self.repo_url(repo);
        let contents_url = format!("{}/contents", repo_url);

        let (metadata, entries, languages) = tokio::try_join!(
            self.get_json::<RepositoryMetadata>("repository", &repo_url),
            self.get_json::<Vec<DirectoryEntry>>("contents", &contents_url),
            self.fetch_languages(repo),
        )?;

        let results = join_all(KEY_FILES.iter().map(|name| self.fetch_file(repo, name))).await;

        let mut files = Vec::new();
        for (name, result) in KEY_FILES.iter().zip(results) {
            match result {
                FileFetch::Found(text) => files.push((name.to_string(), text)),
                FileFetch::Absent => debug!(file = name, "key file not present"),
                FileFetch::Failed(reason) => debug!(file = name, %reason, "key file unavailable"),
            }
        }

        info!(
            entries = entries.len(),
            languages = languages.len(),
            files = files.len(),
            "artifacts fetched"
        );

        Ok(RawArtifacts {
            metadata,
            entries,
            languages,
            files,
        })
    }
}
