use crate::error::*;
use crate::jenkins::models::build_report::Artifact;
use regex::Regex;
use snafu::ResultExt;

/// Decides which artifacts get downloaded, based on an optional `--match` pattern.
#[derive(Debug, Clone, Default)]
pub struct ArtifactFilter {
    pattern: Option<Regex>,
}

impl ArtifactFilter {
    /// Compiles the pattern up front so a bad regex fails before any request is sent.
    /// An empty pattern matches everything.
    pub fn new(pattern: Option<&str>) -> Result<Self, Error> {
        let pattern = pattern
            .filter(|p| !p.is_empty())
            .map(Regex::new)
            .transpose()
            .context(InvalidRegexSnafu)?;

        Ok(Self { pattern })
    }

    /// Unanchored: the pattern may match anywhere in the file name.
    pub fn should_download(&self, artifact: &Artifact) -> bool {
        self.pattern
            .as_ref()
            .is_none_or(|regex| regex.is_match(&artifact.file_name))
    }
}
