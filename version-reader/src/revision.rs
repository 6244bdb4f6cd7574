//! Revision markers and the resolvers used to find them.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use log::debug;
use serde::Serialize;

use crate::errors::Errors;
use crate::reader::VersionReader;

/// Placeholder frozen into builds made without knowing the revision
pub const UNKNOWN_REVISION: &str = "(unknown)";

/// Number of revision characters appended to the display string
pub const SHORT_LENGTH: usize = 7;

/// Regex every revision candidate must match
const REGEX: &str = r"^([a-f0-9]+|\(.*\))$";

/// Prefix marking the repository head as a symbolic reference
const SYMBOLIC_REF: &str = "ref: ";

/// Check a trimmed string against the accepted revision forms
pub fn is_valid_revision(candidate: &str) -> bool {
    static PARSER: OnceLock<regex::Regex> = OnceLock::new();
    PARSER.get_or_init(|| regex::Regex::new(REGEX).expect("Failed to compile hard coded regex"))
        .is_match(candidate)
}

/// A revision marker. Either a hex commit hash or a parenthesized placeholder.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Revision(String);

impl std::str::FromStr for Revision {
    type Err = Errors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let data = s.trim();
        if !is_valid_revision(data) {
            return Err(Errors::InvalidRevision(data.to_owned()))
        }
        Ok(Self(data.to_owned()))
    }
}

impl core::ops::Deref for Revision {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl core::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Revision {
    /// Access the raw string data behind this object
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Placeholders are parenthesized and never shown in the display string
    pub fn is_placeholder(&self) -> bool {
        self.0.starts_with('(')
    }

    /// Is this exactly the unknown placeholder
    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_REVISION
    }

    /// The leading characters used in the display string
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(SHORT_LENGTH) {
            Some((index, _)) => &self.0[..index],
            None => &self.0,
        }
    }
}

/// A strategy for finding the current revision
pub type Resolver = fn(&VersionReader) -> Result<Option<Revision>, Errors>;

/// Resolvers in the order they are consulted
pub const RESOLVERS: &[Resolver] = &[revision_file, repository_head];

/// Run the resolvers in order returning the first usable revision.
///
/// An unknown placeholder doesn't stop the search, it is only returned if nothing
/// after it produces a revision.
pub fn resolve(reader: &VersionReader, resolvers: &[Resolver]) -> Result<Option<Revision>, Errors> {
    let mut fallback = None;
    for resolver in resolvers {
        match resolver(reader)? {
            Some(rev) if rev.is_unknown() => {
                if fallback.is_none() {
                    fallback = Some(rev);
                }
            },
            Some(rev) => return Ok(Some(rev)),
            None => continue,
        }
    }
    Ok(fallback)
}

/// Read the frozen revision marker
pub fn revision_file(reader: &VersionReader) -> Result<Option<Revision>, Errors> {
    let path = reader.scope(&reader.resources().revision);
    Ok(read_optional(&path)?.and_then(|data| candidate(&path, &data)))
}

/// Read the revision from repository metadata, following a symbolic ref one level
pub fn repository_head(reader: &VersionReader) -> Result<Option<Revision>, Errors> {
    let git_dir = reader.scope(&reader.resources().git_dir);
    // worktrees and submodules carry a `.git` file instead of a directory
    if !git_dir.is_dir() {
        debug!("repository metadata {} is not a directory", git_dir.to_string_lossy());
        return Ok(None)
    }
    let head_path = git_dir.join("HEAD");
    let head = match read_optional(&head_path)? {
        Some(head) => head,
        None => return Ok(None),
    };

    let head = head.trim();
    match head.strip_prefix(SYMBOLIC_REF) {
        Some(reference) => {
            let (path, target) = follow_ref(&git_dir, reference.trim())?;
            Ok(candidate(&path, &target))
        },
        None => Ok(candidate(&head_path, head)),
    }
}

/// Read a file, a missing file is not an error
fn read_optional(path: &Path) -> Result<Option<String>, Errors> {
    match std::fs::read_to_string(path) {
        Ok(data) => {
            debug!("read revision resource {}", path.to_string_lossy());
            Ok(Some(data))
        },
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("revision resource {} not present", path.to_string_lossy());
            Ok(None)
        },
        Err(source) => Err(Errors::RevisionRead { path: path.to_owned(), source }),
    }
}

/// Validate text read from a resource, discarding anything that isn't a revision
fn candidate(source: &Path, data: &str) -> Option<Revision> {
    match data.parse() {
        Ok(rev) => Some(rev),
        Err(_) => {
            debug!("discarding content of {} as a revision", source.to_string_lossy());
            None
        }
    }
}

/// Find the content a reference points to, either as a loose ref file or in packed-refs
fn follow_ref(git_dir: &Path, reference: &str) -> Result<(PathBuf, String), Errors> {
    let loose = git_dir.join(reference);
    if let Some(data) = read_optional(&loose)? {
        return Ok((loose, data.trim().to_owned()))
    }

    let packed = git_dir.join("packed-refs");
    if let Some(data) = read_optional(&packed)? {
        if let Some(hash) = find_packed_ref(&data, reference) {
            return Ok((packed, hash.to_owned()))
        }
    }

    Err(Errors::DanglingRef { reference: reference.to_owned() })
}

/// Look up a reference in the body of a packed-refs file
fn find_packed_ref<'a>(data: &'a str, reference: &str) -> Option<&'a str> {
    for line in data.lines() {
        let line = line.trim();
        // header comments and peeled tag lines
        if line.is_empty() || line.starts_with('#') || line.starts_with('^') {
            continue
        }
        if let Some((hash, name)) = line.split_once(' ') {
            if name.trim() == reference {
                return Some(hash)
            }
        }
    }
    None
}
