#![warn(missing_docs, non_ascii_idents, trivial_numeric_casts,
    unused_crate_dependencies, noop_method_call, single_use_lifetimes, trivial_casts,
    unused_lifetimes, nonstandard_style)]
#![deny(keyword_idents)]
#![warn(clippy::missing_docs_in_private_items)]
#![allow(clippy::needless_return)]

//! Library for reporting the version of a library along with the source control revision it came from.

pub mod errors;
pub mod config;
pub mod descriptor;
pub mod revision;
pub mod info;
pub mod reader;


use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};

pub use config::Resources;
pub use errors::Errors;
pub use info::VersionInfo;
pub use reader::VersionReader;
pub use revision::Revision;

/// A slot holding a version once it has been read.
///
/// The slot is filled at most once. Concurrent first calls are serialized so the
/// resources are only read by one of them. A failed read leaves the slot empty.
pub struct VersionCache {
    /// The memoized version
    value: OnceLock<VersionInfo>,
    /// Held while the value is being read
    init: Mutex<()>,
}

impl Default for VersionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionCache {
    /// Create an empty cache
    pub const fn new() -> Self {
        Self { value: OnceLock::new(), init: Mutex::new(()) }
    }

    /// The memoized version if it has been loaded
    pub fn get(&self) -> Option<&VersionInfo> {
        self.value.get()
    }

    /// Return the memoized version, reading it with the given reader on first use
    pub fn get_or_load(&self, reader: &VersionReader) -> Result<&VersionInfo, Errors> {
        if let Some(value) = self.value.get() {
            return Ok(value)
        }

        let _guard = self.init.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = self.value.get() {
            return Ok(value)
        }

        let version = reader.read()?;
        log::info!("version {version} loaded from {}", reader.root().to_string_lossy());
        Ok(self.value.get_or_init(|| version))
    }
}

/// Process wide version used by [`version`]
static VERSION: VersionCache = VersionCache::new();

/// Get the version of this library.
///
/// The first call reads the version descriptor and revision resources from the project root,
/// later calls return the same value without touching the filesystem.
pub fn version() -> Result<&'static VersionInfo, Errors> {
    VERSION.get_or_load(&VersionReader::default())
}

/// Returns the path of a file relative to the project root
pub fn scope(name: impl AsRef<Path>) -> PathBuf {
    reader::default_root().join(name)
}
