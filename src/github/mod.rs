pub mod types;

pub use types::RepoContext;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::Config;
use types::{AddLabelsRequest, LabelResponse};

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("GitHub API request failed: {0}")]
    ApiRequest(#[from] reqwest::Error),

    #[error("GitHub token not found in config or environment")]
    MissingToken,

    #[error("Invalid repository (expected owner/repo): {0}")]
    InvalidRepository(String),

    #[error("GITHUB_REPOSITORY not set and no --repo given")]
    MissingRepository,
}

/// The slice of the issues API the labeler needs.
#[async_trait]
pub trait IssuesClient: Send + Sync {
    /// Add labels to an issue or pull request.
    /// Returns the names of all labels now on the issue.
    async fn add_labels(
        &self,
        owner: &str,
        repo: &str,
        issue_number: i64,
        labels: &[&str],
    ) -> Result<Vec<String>, GitHubError>;
}

/// Authenticated GitHub REST client.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
}

impl GitHubClient {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Build a client from resolved configuration.
    pub fn from_config(config: &Config) -> Result<Self, GitHubError> {
        let token = config.github_token().ok_or(GitHubError::MissingToken)?;
        Ok(Self::new(config.api_url(), token))
    }

    fn labels_url(&self, owner: &str, repo: &str, issue_number: i64) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}/labels",
            self.api_url, owner, repo, issue_number
        )
    }
}

#[async_trait]
impl IssuesClient for GitHubClient {
    #[instrument(skip(self), fields(pr = issue_number))]
    async fn add_labels(
        &self,
        owner: &str,
        repo: &str,
        issue_number: i64,
        labels: &[&str],
    ) -> Result<Vec<String>, GitHubError> {
        let url = self.labels_url(owner, repo, issue_number);

        debug!(%url, "adding labels via GitHub API");
        let response = self
            .http
            .post(&url)
            .header("User-Agent", "pr-labeler")
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .bearer_auth(&self.token)
            .json(&AddLabelsRequest { labels })
            .send()
            .await?
            .error_for_status()?;

        let current = response.json::<Vec<LabelResponse>>().await?;
        debug!(labels = current.len(), "labels now on issue");

        Ok(current.into_iter().map(|l| l.name).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_url() {
        let client = GitHubClient::new("https://api.github.com", "t");
        assert_eq!(
            client.labels_url("org", "repo", 42),
            "https://api.github.com/repos/org/repo/issues/42/labels"
        );
    }

    #[test]
    fn test_api_url_trailing_slash_trimmed() {
        let client = GitHubClient::new("https://ghe.example.com/api/v3/", "t");
        assert_eq!(
            client.labels_url("org", "repo", 7),
            "https://ghe.example.com/api/v3/repos/org/repo/issues/7/labels"
        );
    }

    #[test]
    fn test_from_config_uses_configured_token() {
        let mut config = Config::default();
        config.github.token = Some("abc".to_string());
        config.github.api_url = Some("https://ghe.example.com/api/v3".to_string());
        let client = GitHubClient::from_config(&config).unwrap();
        assert_eq!(client.token, "abc");
        assert_eq!(client.api_url, "https://ghe.example.com/api/v3");
    }
}
