//! Rendering and writing generated artifacts.

use std::fs;
use std::path::Path;

use crate::config::Rewrite;
use crate::generator::GeneratedArtifact;
use crate::Result;

/// Default file name of the platform routing file.
pub const DEFAULT_OUTPUT: &str = "vercel.json";

/// Renders an artifact as pretty-printed JSON with two-space indentation.
///
/// # Errors
///
/// Returns an error if serialization fails.
///
/// # Examples
///
/// ```
/// use envroute::output::render_artifact;
/// use envroute::GeneratedArtifact;
///
/// let json = render_artifact(&GeneratedArtifact::default()).unwrap();
/// assert_eq!(json, "{}");
/// ```
pub fn render_artifact(artifact: &GeneratedArtifact) -> Result<String> {
    Ok(serde_json::to_string_pretty(artifact)?)
}

/// Renders `artifact` and writes it to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if rendering fails or the file cannot be written.
pub fn write_artifact(path: &Path, artifact: &GeneratedArtifact) -> Result<()> {
    let rendered = render_artifact(artifact)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, rendered)?;
    log::debug!("Wrote routing artifact to {}", path.display());
    Ok(())
}

/// Rule counts and a sample rewrite, for console summaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSummary<'a> {
    /// Number of rewrites.
    pub rewrites: usize,
    /// Number of header rules.
    pub headers: usize,
    /// Number of redirects.
    pub redirects: usize,
    /// The first rewrite, if any.
    pub sample_rewrite: Option<&'a Rewrite>,
}

/// Summarises an artifact.
#[must_use]
pub fn summarize(artifact: &GeneratedArtifact) -> ArtifactSummary<'_> {
    ArtifactSummary {
        rewrites: artifact.rewrites.len(),
        headers: artifact.headers.len(),
        redirects: artifact.redirects.len(),
        sample_rewrite: artifact.rewrites.first(),
    }
}
