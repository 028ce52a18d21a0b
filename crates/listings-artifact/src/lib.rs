//! Artifact storage for pipeline stages.
//!
//! Stages never touch storage directly: they resolve an input reference to
//! a readable file and publish their output through an [`ArtifactStore`].
//! [`LocalArtifactStore`] keeps versions on the local filesystem.

#![deny(unsafe_code)]

mod error;
mod hash;
mod local;
mod reference;
mod store;

pub use error::{ArtifactError, Result};
pub use hash::sha256_hex;
pub use local::{LocalArtifactStore, METADATA_FILE};
pub use reference::{ArtifactReference, VersionSelector};
pub use store::{ArtifactHandle, ArtifactMetadata, ArtifactStore, PublishRequest};
