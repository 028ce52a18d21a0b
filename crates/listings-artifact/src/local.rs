//! Filesystem-backed artifact store.
//!
//! Layout: `<root>/<name>/v<N>/<file>` with an `artifact.json` beside each
//! stored file. Stored versions are never rewritten.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info};

use crate::error::{ArtifactError, Result};
use crate::hash::sha256_hex;
use crate::reference::{ArtifactReference, VersionSelector, validate_name};
use crate::store::{ArtifactHandle, ArtifactMetadata, ArtifactStore, PublishRequest};

/// Name of the metadata file stored next to each version.
pub const METADATA_FILE: &str = "artifact.json";

#[derive(Debug, Clone)]
pub struct LocalArtifactStore {
    root: PathBuf,
}

impl LocalArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn artifact_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn version_dir(&self, name: &str, version: u32) -> PathBuf {
        self.artifact_dir(name).join(format!("v{version}"))
    }

    /// Stored versions of `name`, ascending. Empty when the name is unknown.
    pub fn versions(&self, name: &str) -> Result<Vec<u32>> {
        let dir = self.artifact_dir(name);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&dir).map_err(|e| ArtifactError::io(&dir, e))?;
        let mut versions = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ArtifactError::io(&dir, e))?;
            let file_name = entry.file_name();
            let Some(version) = file_name
                .to_str()
                .and_then(|n| n.strip_prefix('v'))
                .and_then(|n| n.parse::<u32>().ok())
            else {
                continue;
            };
            if entry.path().join(METADATA_FILE).is_file() {
                versions.push(version);
            }
        }
        versions.sort_unstable();
        Ok(versions)
    }

    fn load(&self, name: &str, version: u32) -> Result<ArtifactHandle> {
        let dir = self.version_dir(name, version);
        let metadata_path = dir.join(METADATA_FILE);
        let raw = fs::read(&metadata_path).map_err(|e| ArtifactError::io(&metadata_path, e))?;
        let metadata: ArtifactMetadata =
            serde_json::from_slice(&raw).map_err(|e| ArtifactError::Metadata {
                path: metadata_path.clone(),
                source: e,
            })?;
        let path = dir.join(&metadata.file_name);
        Ok(ArtifactHandle { metadata, path })
    }

    fn resolve_parsed(&self, reference: &ArtifactReference) -> Result<ArtifactHandle> {
        let versions = self.versions(&reference.name)?;
        let version = match reference.version {
            VersionSelector::Latest => {
                *versions.last().ok_or_else(|| ArtifactError::NotFound {
                    name: reference.name.clone(),
                })?
            }
            VersionSelector::Exact(version) => {
                if versions.is_empty() {
                    return Err(ArtifactError::NotFound {
                        name: reference.name.clone(),
                    });
                }
                if !versions.contains(&version) {
                    return Err(ArtifactError::VersionNotFound {
                        name: reference.name.clone(),
                        version,
                    });
                }
                version
            }
        };
        self.load(&reference.name, version)
    }
}

impl ArtifactStore for LocalArtifactStore {
    fn resolve(&self, reference: &str) -> Result<ArtifactHandle> {
        let parsed: ArtifactReference = reference.parse()?;
        let handle = self.resolve_parsed(&parsed)?;
        debug!(
            reference = %reference,
            resolved = %handle.reference(),
            path = %handle.path.display(),
            "resolved artifact"
        );
        Ok(handle)
    }

    /// Writes the next version unless the latest one already holds the same
    /// bytes under the same file name, type and description.
    fn publish(&self, request: &PublishRequest) -> Result<ArtifactHandle> {
        validate_name(&request.name).map_err(|reason| ArtifactError::InvalidReference {
            reference: request.name.clone(),
            reason,
        })?;
        if !request.file.is_file() {
            return Err(ArtifactError::SourceMissing {
                path: request.file.clone(),
            });
        }
        let file_name = request
            .file
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ArtifactError::SourceMissing {
                path: request.file.clone(),
            })?
            .to_string();
        let bytes = fs::read(&request.file).map_err(|e| ArtifactError::io(&request.file, e))?;
        let sha256 = sha256_hex(&bytes);

        let versions = self.versions(&request.name)?;
        if let Some(&latest) = versions.last() {
            let existing = self.load(&request.name, latest)?;
            if existing.metadata.sha256 == sha256
                && existing.metadata.file_name == file_name
                && existing.metadata.artifact_type == request.artifact_type
                && existing.metadata.description == request.description
            {
                debug!(
                    artifact = %existing.reference(),
                    "content unchanged, reusing latest version"
                );
                return Ok(existing);
            }
        }

        let version = versions.last().map_or(0, |latest| latest + 1);
        let dir = self.version_dir(&request.name, version);
        fs::create_dir_all(&dir).map_err(|e| ArtifactError::io(&dir, e))?;
        let path = dir.join(&file_name);
        fs::write(&path, &bytes).map_err(|e| ArtifactError::io(&path, e))?;

        let metadata = ArtifactMetadata {
            name: request.name.clone(),
            version,
            artifact_type: request.artifact_type.clone(),
            description: request.description.clone(),
            file_name,
            sha256,
            size_bytes: bytes.len() as u64,
            created_at: Utc::now().to_rfc3339(),
        };
        let metadata_path = dir.join(METADATA_FILE);
        let json = serde_json::to_string_pretty(&metadata).map_err(|e| ArtifactError::Metadata {
            path: metadata_path.clone(),
            source: e,
        })?;
        // Written last: a version only counts once its metadata exists.
        fs::write(&metadata_path, format!("{json}\n"))
            .map_err(|e| ArtifactError::io(&metadata_path, e))?;

        let handle = ArtifactHandle { metadata, path };
        info!(
            artifact = %handle.reference(),
            artifact_type = %handle.metadata.artifact_type,
            size_bytes = handle.metadata.size_bytes,
            "published artifact"
        );
        Ok(handle)
    }
}
