//! Artifact reference grammar: `name`, `name:latest` or `name:vN`.

use std::fmt;
use std::str::FromStr;

use crate::error::ArtifactError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSelector {
    Latest,
    Exact(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactReference {
    pub name: String,
    pub version: VersionSelector,
}

impl ArtifactReference {
    pub fn latest(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: VersionSelector::Latest,
        }
    }

    pub fn exact(name: impl Into<String>, version: u32) -> Self {
        Self {
            name: name.into(),
            version: VersionSelector::Exact(version),
        }
    }
}

/// Check that an artifact name is usable as a single path component.
pub(crate) fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("name is empty".to_string());
    }
    if name == "." || name == ".." {
        return Err("name cannot be a relative path component".to_string());
    }
    if let Some(ch) = name.chars().find(|ch| matches!(ch, '/' | '\\' | ':')) {
        return Err(format!("name contains '{ch}'"));
    }
    Ok(())
}

impl FromStr for ArtifactReference {
    type Err = ArtifactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| ArtifactError::InvalidReference {
            reference: s.to_string(),
            reason,
        };
        let (name, version) = match s.rsplit_once(':') {
            None => (s, VersionSelector::Latest),
            Some((name, "latest")) => (name, VersionSelector::Latest),
            Some((name, tag)) => {
                let number = tag
                    .strip_prefix('v')
                    .and_then(|digits| digits.parse::<u32>().ok())
                    .ok_or_else(|| invalid(format!("unknown version tag '{tag}'")))?;
                (name, VersionSelector::Exact(number))
            }
        };
        validate_name(name).map_err(invalid)?;
        Ok(Self {
            name: name.to_string(),
            version,
        })
    }
}

impl fmt::Display for ArtifactReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version {
            VersionSelector::Latest => write!(f, "{}:latest", self.name),
            VersionSelector::Exact(version) => write!(f, "{}:v{version}", self.name),
        }
    }
}
