//! Objects describing where version data is read from.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default name of the version descriptor
pub const DEFAULT_DESCRIPTOR: &str = "VERSION.yml";

/// Default name of the frozen revision marker
pub const DEFAULT_REVISION: &str = "REVISION";

/// Default name of the repository metadata directory
pub const DEFAULT_GIT_DIR: &str = ".git";

/// Names of the resources consulted by the reader, relative to its root.
///
/// Any field left out when loading this block from a configuration file takes its default.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Resources {
    /// YAML mapping holding `major`, `minor` and `patch`
    pub descriptor: PathBuf,

    /// Plain text file holding a revision frozen into a packaged build
    pub revision: PathBuf,

    /// Repository metadata directory containing `HEAD`
    pub git_dir: PathBuf,
}

impl Default for Resources {
    fn default() -> Self {
        Self {
            descriptor: DEFAULT_DESCRIPTOR.into(),
            revision: DEFAULT_REVISION.into(),
            git_dir: DEFAULT_GIT_DIR.into(),
        }
    }
}
