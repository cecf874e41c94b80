use std::path::Path;
use std::process::Command;

/// Failure from the version-inference collaborator. Carries the
/// underlying tool's stderr so the caller can surface it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInferenceError(pub String);

impl std::fmt::Display for VersionInferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "version inference failed: {}", self.0)
    }
}

impl std::error::Error for VersionInferenceError {}

/// Resolves a module's version for the package-version component of the
/// symbol grammar.
///
/// Implementations answer for a source directory: the newest semver tag
/// pointing at `HEAD`, else any tag pointing at `HEAD`, else the
/// 12-character prefix of the `HEAD` commit hash.
pub trait VersionInferrer {
    fn infer_version(&self, source_dir: &Path) -> Result<String, VersionInferenceError>;
}

/// Shells out to `git` to implement [`VersionInferrer`]'s three-tier
/// fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitVersionInferrer;

impl GitVersionInferrer {
    fn run(&self, dir: &Path, args: &[&str]) -> Result<String, VersionInferenceError> {
        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|e| VersionInferenceError(e.to_string()))?;
        if !output.status.success() {
            return Err(VersionInferenceError(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn newest_semver_tag(&self, tags: &str) -> Option<String> {
        tags.lines()
            .filter(|t| !t.is_empty())
            .filter(|t| is_semver_like(t))
            .max_by(|a, b| compare_semver_like(a, b))
            .map(str::to_string)
    }
}

impl VersionInferrer for GitVersionInferrer {
    fn infer_version(&self, source_dir: &Path) -> Result<String, VersionInferenceError> {
        let tags = self.run(source_dir, &["tag", "--points-at", "HEAD"])?;
        if let Some(semver) = self.newest_semver_tag(&tags) {
            return Ok(semver);
        }
        if let Some(any) = tags.lines().find(|t| !t.is_empty()) {
            return Ok(any.to_string());
        }
        let hash = self.run(source_dir, &["rev-parse", "HEAD"])?;
        Ok(hash.chars().take(12).collect())
    }
}

fn is_semver_like(tag: &str) -> bool {
    let t = tag.strip_prefix('v').unwrap_or(tag);
    let core = t.split(['-', '+']).next().unwrap_or(t);
    let parts: Vec<&str> = core.split('.').collect();
    parts.len() == 3 && parts.iter().all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}

fn compare_semver_like(a: &str, b: &str) -> std::cmp::Ordering {
    let parse = |s: &str| -> (u64, u64, u64) {
        let t = s.strip_prefix('v').unwrap_or(s);
        let core = t.split(['-', '+']).next().unwrap_or(t);
        let mut parts = core.split('.').map(|p| p.parse::<u64>().unwrap_or(0));
        (
            parts.next().unwrap_or(0),
            parts.next().unwrap_or(0),
            parts.next().unwrap_or(0),
        )
    };
    parse(a).cmp(&parse(b))
}
