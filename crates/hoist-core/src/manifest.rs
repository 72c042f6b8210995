use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use hoist_util::errors::HoistError;

use crate::identity::ProjectIdentity;

/// Name of the manifest file marking a project root.
pub const MANIFEST_FILE: &str = "Hoist.toml";

/// The parsed representation of a `Hoist.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub package: PackageMetadata,

    #[serde(default)]
    pub publish: Option<PublishConfig>,
}

/// Package identity and metadata from the `[package]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub group: String,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default, rename = "java-target")]
    pub java_target: Option<String>,
}

/// Publish settings from the `[publish]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Target Maven repository URL.
    pub repository: String,
}

impl Manifest {
    /// Parse a manifest from TOML text.
    pub fn parse(text: &str) -> miette::Result<Self> {
        toml::from_str(text).map_err(|e| {
            HoistError::Manifest {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Load and parse `<dir>/Hoist.toml`.
    pub fn load(dir: &Path) -> miette::Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        let text = std::fs::read_to_string(&path).map_err(HoistError::Io)?;
        Self::parse(&text)
    }

    /// The project identity from the `[package]` section.
    pub fn identity(&self) -> ProjectIdentity {
        ProjectIdentity::new(
            &self.package.group,
            &self.package.name,
            &self.package.version,
        )
    }

    /// The publish repository URL, or an error when `[publish]` is missing.
    pub fn repository(&self) -> miette::Result<&str> {
        self.publish
            .as_ref()
            .map(|p| p.repository.as_str())
            .ok_or_else(|| {
                HoistError::Manifest {
                    message: "Hoist.toml has no [publish] section with a repository URL"
                        .to_string(),
                }
                .into()
            })
    }
}

/// Walk up from `start` looking for a directory containing `Hoist.toml`.
pub fn find_project_dir(start: &Path) -> miette::Result<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join(MANIFEST_FILE).is_file() {
            return Ok(dir.to_path_buf());
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }
    Err(HoistError::Manifest {
        message: format!(
            "Could not find Hoist.toml in {} or any parent directory",
            start.display()
        ),
    }
    .into())
}
