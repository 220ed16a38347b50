use super::GitHubError;

/// The repository the workflow is running against.
/// Built from `--repo` or the GITHUB_REPOSITORY variable Actions sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoContext {
    pub owner: String,
    pub repo: String,
}

impl RepoContext {
    /// Parse an `owner/repo` slug.
    pub fn parse(slug: &str) -> Result<RepoContext, GitHubError> {
        let (owner, repo) = slug
            .trim()
            .split_once('/')
            .ok_or_else(|| GitHubError::InvalidRepository(slug.to_string()))?;

        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(GitHubError::InvalidRepository(slug.to_string()));
        }

        Ok(RepoContext {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// Read the context from GITHUB_REPOSITORY.
    pub fn from_env() -> Result<RepoContext, GitHubError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Like [`RepoContext::from_env`], reading variables through `env`.
    pub fn from_env_with<E>(env: E) -> Result<RepoContext, GitHubError>
    where
        E: Fn(&str) -> Option<String>,
    {
        let slug = env("GITHUB_REPOSITORY")
            .filter(|s| !s.is_empty())
            .ok_or(GitHubError::MissingRepository)?;
        Self::parse(&slug)
    }
}

impl std::fmt::Display for RepoContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Body of `POST /repos/{owner}/{repo}/issues/{n}/labels`.
#[derive(Debug, serde::Serialize)]
pub(crate) struct AddLabelsRequest<'a> {
    pub labels: &'a [&'a str],
}

/// One entry of the label list GitHub returns after adding labels.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct LabelResponse {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repo_slug() {
        let ctx = RepoContext::parse("acme/widgets").unwrap();
        assert_eq!(ctx.owner, "acme");
        assert_eq!(ctx.repo, "widgets");
        assert_eq!(ctx.to_string(), "acme/widgets");
    }

    #[test]
    fn test_parse_invalid_repo_slug() {
        assert!(RepoContext::parse("acme").is_err());
        assert!(RepoContext::parse("/widgets").is_err());
        assert!(RepoContext::parse("acme/").is_err());
        assert!(RepoContext::parse("acme/widgets/extra").is_err());
    }

    #[test]
    fn test_from_env_reads_github_repository() {
        let ctx = RepoContext::from_env_with(|key| {
            (key == "GITHUB_REPOSITORY").then(|| "acme/widgets".to_string())
        })
        .unwrap();
        assert_eq!(ctx.owner, "acme");
        assert_eq!(ctx.repo, "widgets");
    }

    #[test]
    fn test_from_env_missing_repository() {
        let err = RepoContext::from_env_with(|_| None).unwrap_err();
        assert!(matches!(err, GitHubError::MissingRepository));

        let err = RepoContext::from_env_with(|_| Some(String::new())).unwrap_err();
        assert!(matches!(err, GitHubError::MissingRepository));
    }

    #[test]
    fn test_from_env_malformed_repository() {
        let err = RepoContext::from_env_with(|_| Some("widgets".to_string())).unwrap_err();
        assert!(matches!(err, GitHubError::InvalidRepository(_)));
    }

    #[test]
    fn test_add_labels_request_body() {
        let labels = ["ai:reviewed"];
        let body = serde_json::to_value(AddLabelsRequest { labels: &labels }).unwrap();
        assert_eq!(body, serde_json::json!({ "labels": ["ai:reviewed"] }));
    }

    #[test]
    fn test_label_response_ignores_extra_fields() {
        let json = r#"[{"id": 1, "name": "ai:reviewed", "color": "FB923C", "default": false}]"#;
        let parsed: Vec<LabelResponse> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed[0].name, "ai:reviewed");
    }
}
