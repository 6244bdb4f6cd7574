//! Error types and error handling functions

use std::path::PathBuf;

/// An enumeration of all errors that can occur in the library
#[derive(thiserror::Error, Debug)]
pub enum Errors {
    /// The version descriptor could not be found or read
    #[error("Could not read version descriptor {}: {source}", path.to_string_lossy())]
    DescriptorRead {
        /// Location the descriptor was expected at
        path: PathBuf,
        /// Underlying io error
        #[source]
        source: std::io::Error,
    },

    /// The version descriptor was read but isn't a valid descriptor
    #[error("Could not parse version descriptor {}: {source}", path.to_string_lossy())]
    DescriptorParse {
        /// Location of the descriptor
        path: PathBuf,
        /// Underlying yaml error
        #[source]
        source: serde_yaml::Error,
    },

    /// A revision resource exists but reading it failed
    #[error("Could not read revision resource {}: {source}", path.to_string_lossy())]
    RevisionRead {
        /// Location of the resource
        path: PathBuf,
        /// Underlying io error
        #[source]
        source: std::io::Error,
    },

    /// The repository head names a reference that can't be found
    #[error("Repository head points to {reference} which does not exist")]
    DanglingRef {
        /// Name of the reference as written in the head file
        reference: String,
    },

    /// A string that isn't a hex hash or a parenthesized placeholder was used as a revision
    #[error("An invalid revision string was provided: {0}")]
    InvalidRevision(String),
}
