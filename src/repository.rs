use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::error::AnalysisError;

static RE_GITHUB_REPO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"github\.com/([^/\s?#]+)/([^/\s?#]+)").unwrap());

/// Owner and name of a GitHub repository, parsed from a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryReference {
    owner: String,
    name: String,
}

impl RepositoryReference {
    pub fn parse(input: &str) -> Result<Self, AnalysisError> {
        let captures = RE_GITHUB_REPO
            .captures(input.trim())
            .ok_or_else(|| AnalysisError::InvalidUrl(input.to_string()))?;

        let owner = captures[1].to_string();
        let name = captures[2].trim_end_matches(".git").to_string();
        if name.is_empty() {
            return Err(AnalysisError::InvalidUrl(input.to_string()));
        }

        Ok(Self { owner, name })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn canonical_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_url() {
        let repo = RepositoryReference::parse("https://github.com/vercel/next.js").unwrap();
        assert_eq!(repo.owner(), "vercel");
        assert_eq!(repo.name(), "next.js");
        assert_eq!(repo.canonical_url(), "https://github.com/vercel/next.js");
    }

    #[test]
    fn test_parse_strips_git_suffix_and_extra_segments() {
        let repo = RepositoryReference::parse("git@github.com/acme/widget.git").unwrap();
        assert_eq!(repo.to_string(), "acme/widget");

        let repo =
            RepositoryReference::parse("https://github.com/acme/widget/tree/main/src").unwrap();
        assert_eq!(repo.name(), "widget");
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in ["", "https://gitlab.com/acme/widget", "https://github.com/acme", "github.com/acme/.git"] {
            let err = RepositoryReference::parse(input).unwrap_err();
            assert!(err.is_input_error(), "expected input error for {:?}", input);
        }
    }
}
