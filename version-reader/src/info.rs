//! The assembled version record.

use serde::Serialize;

use crate::descriptor::VersionDescriptor;
use crate::revision::Revision;

/// Version of the library along with the revision it was built from, when known.
///
/// Serializes to a flat mapping with the keys `major`, `minor`, `teeny`, `string` and `rev`.
/// Components that are absent are left out of the mapping.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    /// Major version number
    major: u64,
    /// Minor version number
    #[serde(skip_serializing_if = "Option::is_none")]
    minor: Option<u64>,
    /// Patch version number
    #[serde(skip_serializing_if = "Option::is_none")]
    teeny: Option<u64>,
    /// Human readable form, always derived from the other fields
    string: String,
    /// Source control revision
    #[serde(skip_serializing_if = "Option::is_none")]
    rev: Option<Revision>,
}

impl VersionInfo {
    /// Combine a descriptor with the revision found for it
    pub fn new(descriptor: &VersionDescriptor, rev: Option<Revision>) -> Self {
        let mut string = descriptor.dotted();
        if let Some(rev) = &rev {
            if !rev.is_placeholder() {
                string.push('.');
                string.push_str(rev.short());
            }
        }

        Self {
            major: descriptor.major,
            minor: descriptor.minor,
            teeny: descriptor.patch,
            string,
            rev,
        }
    }

    /// Major version number
    pub fn major(&self) -> u64 { self.major }

    /// Minor version number
    pub fn minor(&self) -> Option<u64> { self.minor }

    /// Patch version number
    pub fn teeny(&self) -> Option<u64> { self.teeny }

    /// The human readable version string
    pub fn as_str(&self) -> &str { &self.string }

    /// The revision, if one was found
    pub fn rev(&self) -> Option<&Revision> { self.rev.as_ref() }
}

impl core::fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.string)
    }
}

#[cfg(test)]
mod test {
    use crate::descriptor::VersionDescriptor;

    use super::VersionInfo;

    #[test]
    fn display_string() {
        let full = VersionDescriptor { major: 1, minor: Some(2), patch: Some(3) };
        let major = VersionDescriptor { major: 4, minor: None, patch: None };

        assert_eq!(VersionInfo::new(&full, None).as_str(), "1.2.3");
        assert_eq!(VersionInfo::new(&major, None).as_str(), "4");

        let hash = "fedcba9876543210fedcba9876543210fedcba98";
        let info = VersionInfo::new(&full, Some(hash.parse().unwrap()));
        assert_eq!(info.as_str(), "1.2.3.fedcba9");
        assert_eq!(info.rev().unwrap().as_str(), hash);
        assert_eq!(info.to_string(), "1.2.3.fedcba9");

        let info = VersionInfo::new(&major, Some("(unknown)".parse().unwrap()));
        assert_eq!(info.as_str(), "4");
        assert_eq!(info.rev().unwrap().as_str(), "(unknown)");
    }

    #[test]
    fn structured_form() {
        let desc = VersionDescriptor { major: 3, minor: Some(0), patch: None };
        let info = VersionInfo::new(&desc, Some("abcdef0123".parse().unwrap()));
        assert_eq!(serde_json::to_value(&info).unwrap(), serde_json::json!({
            "major": 3,
            "minor": 0,
            "string": "3.0.abcdef0",
            "rev": "abcdef0123",
        }));

        let info = VersionInfo::new(&desc, None);
        assert_eq!(serde_json::to_value(&info).unwrap(), serde_json::json!({
            "major": 3,
            "minor": 0,
            "string": "3.0",
        }));
    }
}
