use std::fmt;

use serde::{Deserialize, Serialize};

/// Two-part schema version stamp, serialized as `[major, minor]`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct SchemaVersion {
    pub major: u32,
    pub minor: u32,
}

/// How a stored version relates to the version this crate writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compatibility {
    Current,
    /// Older shape; an external migration should upgrade it.
    Outdated,
    /// Written by a newer schema than this crate knows.
    Newer,
}

impl SchemaVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    pub fn compatibility(self, stored: SchemaVersion) -> Compatibility {
        match stored.cmp(&self) {
            std::cmp::Ordering::Equal => Compatibility::Current,
            std::cmp::Ordering::Less => Compatibility::Outdated,
            std::cmp::Ordering::Greater => Compatibility::Newer,
        }
    }
}

impl From<[u32; 2]> for SchemaVersion {
    fn from([major, minor]: [u32; 2]) -> Self {
        Self { major, minor }
    }
}

impl From<SchemaVersion> for [u32; 2] {
    fn from(v: SchemaVersion) -> Self {
        [v.major, v.minor]
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.major, self.minor)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/version.rs"]
mod tests;
