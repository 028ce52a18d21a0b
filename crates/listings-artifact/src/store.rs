use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A file to register as a new artifact version.
#[derive(Debug, Clone)]
pub struct PublishRequest {
    pub name: String,
    pub artifact_type: String,
    pub description: String,
    pub file: PathBuf,
}

impl PublishRequest {
    pub fn new(
        name: impl Into<String>,
        artifact_type: impl Into<String>,
        description: impl Into<String>,
        file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            artifact_type: artifact_type.into(),
            description: description.into(),
            file: file.into(),
        }
    }
}

/// Stored description of one artifact version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub name: String,
    pub version: u32,
    #[serde(rename = "type")]
    pub artifact_type: String,
    pub description: String,
    pub file_name: String,
    pub sha256: String,
    pub size_bytes: u64,
    pub created_at: String,
}

/// A resolved, readable artifact version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactHandle {
    pub metadata: ArtifactMetadata,
    pub path: PathBuf,
}

impl ArtifactHandle {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `name:vN` reference pinning this exact version.
    pub fn reference(&self) -> String {
        format!("{}:v{}", self.metadata.name, self.metadata.version)
    }
}

/// Immutable, versioned storage for pipeline files.
pub trait ArtifactStore {
    /// Resolve `name`, `name:latest` or `name:vN` to a readable file.
    fn resolve(&self, reference: &str) -> Result<ArtifactHandle>;

    /// Register `request.file` as the next version of `request.name`.
    fn publish(&self, request: &PublishRequest) -> Result<ArtifactHandle>;
}
