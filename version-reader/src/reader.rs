//! Reading version data from a project root.

use std::path::{Path, PathBuf};

use log::debug;

use crate::config::Resources;
use crate::descriptor::VersionDescriptor;
use crate::errors::Errors;
use crate::info::VersionInfo;
use crate::revision::{resolve, RESOLVERS};

/// Location of this crate's sources
const SOURCE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src");

/// The fixed root resources are resolved against, two directories above the sources
pub fn default_root() -> PathBuf {
    let mut root = PathBuf::from(SOURCE_DIR);
    root.pop();
    root.pop();
    root
}

/// Reads the version descriptor and revision resources under a root directory.
///
/// This does no caching, each call to [`VersionReader::read`] goes back to the files.
#[derive(Debug, Clone)]
pub struct VersionReader {
    /// Directory that resource names are relative to
    root: PathBuf,
    /// Names of the resources consulted
    resources: Resources,
}

impl Default for VersionReader {
    fn default() -> Self {
        Self::new(default_root())
    }
}

impl VersionReader {
    /// Create a reader using the default resource names under the given root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_resources(root, Resources::default())
    }

    /// Create a reader with custom resource names
    pub fn with_resources(root: impl Into<PathBuf>, resources: Resources) -> Self {
        Self { root: root.into(), resources }
    }

    /// Directory that resource names are relative to
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of the resources consulted
    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    /// Resolve a name relative to the root
    pub fn scope(&self, name: impl AsRef<Path>) -> PathBuf {
        self.root.join(name)
    }

    /// Load the descriptor and resolve the revision
    pub fn read(&self) -> Result<VersionInfo, Errors> {
        let descriptor = VersionDescriptor::load(&self.scope(&self.resources.descriptor))?;
        let rev = resolve(self, RESOLVERS)?;
        match &rev {
            Some(rev) => debug!("resolved revision {rev}"),
            None => debug!("no revision available under {}", self.root.to_string_lossy()),
        }
        Ok(VersionInfo::new(&descriptor, rev))
    }
}

#[cfg(test)]
mod test {
    use std::path::{Path, PathBuf};

    use super::{default_root, VersionReader};

    #[test]
    fn scoping() {
        let reader = VersionReader::new("/opt/library");
        assert_eq!(reader.scope("VERSION.yml"), PathBuf::from("/opt/library/VERSION.yml"));
        assert_eq!(reader.scope(".git/refs/heads/main"), PathBuf::from("/opt/library/.git/refs/heads/main"));
    }

    #[test]
    fn root_above_sources() {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
        assert_eq!(Some(default_root().as_path()), manifest.parent());
    }
}
