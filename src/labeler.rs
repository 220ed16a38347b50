use tracing::{debug, info};

use crate::actions::Logger;
use crate::github::{GitHubError, IssuesClient, RepoContext};
use crate::label::{LabelDefinition, AI_REVIEWED};

/// Environment variable carrying the pull request number.
pub const PR_NUMBER_VAR: &str = "PR_NUMBER";

/// Label applied by [`run`].
pub const LABEL: LabelDefinition = AI_REVIEWED;

/// Which path a labeling run took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The label was added to this PR.
    Labeled(i64),
    /// PR_NUMBER was missing or not a number; the step was marked failed.
    InvalidInput,
}

/// Parse a PR number the way the workflow passes it around.
///
/// Leading whitespace and a `+` or `-` sign are allowed, then the leading run
/// of digits is taken and anything after it is ignored. Leading zeros are fine.
/// Returns None only when there are no digits. Values that are not valid issue
/// numbers (zero, negative) still parse and are left for GitHub to reject;
/// a digit run too long for i64 saturates.
pub fn parse_pr_number(raw: Option<&str>) -> Option<i64> {
    let s = raw?.trim_start();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let digits = &s[..end];
    if digits.is_empty() {
        return None;
    }

    let signed = if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    };
    // Only overflow can fail here.
    Some(signed.parse().unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}

/// Add the `ai:reviewed` label to the PR named by `PR_NUMBER`.
///
/// Input problems are reported through `logger.set_failed` and do not touch
/// the client. Errors from the client are returned untouched, with nothing
/// logged, so the host surfaces them as a step failure.
pub async fn run<E, C, L>(
    env: E,
    repo: &RepoContext,
    client: &C,
    logger: &L,
) -> Result<Outcome, GitHubError>
where
    E: Fn(&str) -> Option<String>,
    C: IssuesClient + ?Sized,
    L: Logger + ?Sized,
{
    let raw = env(PR_NUMBER_VAR);
    let Some(pr_number) = parse_pr_number(raw.as_deref()) else {
        debug!(raw = ?raw, "PR_NUMBER missing or not numeric");
        logger.set_failed("PR_NUMBER not set");
        return Ok(Outcome::InvalidInput);
    };

    info!(owner = %repo.owner, repo = %repo.repo, pr = pr_number, label = %LABEL, "adding label");
    debug!(color = LABEL.color, description = LABEL.description, "label definition");
    let current = client
        .add_labels(&repo.owner, &repo.repo, pr_number, &[LABEL.name])
        .await?;
    debug!(labels = ?current, "labels on PR after update");

    logger.info(&format!("Added {} label to PR #{}", LABEL, pr_number));
    Ok(Outcome::Labeled(pr_number))
}
