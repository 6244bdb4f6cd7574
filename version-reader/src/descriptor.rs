//! The static version descriptor.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::Errors;

/// The numbers held in the version descriptor file.
///
/// Keys other than these three are ignored. The numbers are taken as written.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionDescriptor {
    /// Major version number
    pub major: u64,

    /// Minor version number
    #[serde(default)]
    pub minor: Option<u64>,

    /// Patch version number
    #[serde(default)]
    pub patch: Option<u64>,
}

impl VersionDescriptor {
    /// Parse a descriptor from yaml text
    pub fn parse(data: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(data)
    }

    /// Read and parse the descriptor file at the given path
    pub fn load(path: &Path) -> Result<Self, Errors> {
        debug!("loading version descriptor from {}", path.to_string_lossy());
        let data = std::fs::read_to_string(path)
            .map_err(|source| Errors::DescriptorRead { path: path.to_owned(), source })?;
        Self::parse(&data)
            .map_err(|source| Errors::DescriptorParse { path: path.to_owned(), source })
    }

    /// The components that are present, most significant first
    pub fn components(&self) -> impl Iterator<Item = u64> {
        [Some(self.major), self.minor, self.patch].into_iter().flatten()
    }

    /// Present components joined with dots
    pub fn dotted(&self) -> String {
        self.components().map(|part| part.to_string()).collect::<Vec<_>>().join(".")
    }
}
