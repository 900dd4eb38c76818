//! Pre-release markers shared by the compact and dashed version forms
//!
//! The compact form spells markers `a`, `b` and `rc` directly after the patch
//! number (`1.0.0b2`). The dashed form spells them `alpha`, `beta` and `rc`
//! after a hyphen with a dotted iteration (`1.0.0-beta.2`).

use std::fmt;
use std::str::FromStr;

use crate::error::PrepareError;

/// Pre-release identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreReleaseKind {
    Alpha,
    Beta,
    ReleaseCandidate,
}

impl PreReleaseKind {
    /// Marker as written in the compact form
    pub fn compact_marker(&self) -> &'static str {
        match self {
            PreReleaseKind::Alpha => "a",
            PreReleaseKind::Beta => "b",
            PreReleaseKind::ReleaseCandidate => "rc",
        }
    }

    /// Identifier as written in the dashed form
    pub fn dashed_identifier(&self) -> &'static str {
        match self {
            PreReleaseKind::Alpha => "alpha",
            PreReleaseKind::Beta => "beta",
            PreReleaseKind::ReleaseCandidate => "rc",
        }
    }
}

impl FromStr for PreReleaseKind {
    type Err = PrepareError;

    /// Accepts only the compact markers; case matters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" => Ok(PreReleaseKind::Alpha),
            "b" => Ok(PreReleaseKind::Beta),
            "rc" => Ok(PreReleaseKind::ReleaseCandidate),
            other => Err(PrepareError::InvalidVersion(other.to_string())),
        }
    }
}

impl fmt::Display for PreReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dashed_identifier())
    }
}

/// Pre-release marker with its required iteration number
///
/// # Examples
/// - `a7` -> PreRelease { kind: Alpha, number: 7 }
/// - `rc1` -> PreRelease { kind: ReleaseCandidate, number: 1 }
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreRelease {
    pub kind: PreReleaseKind,
    pub number: u64,
}

impl PreRelease {
    pub fn new(kind: PreReleaseKind, number: u64) -> Self {
        PreRelease { kind, number }
    }
}

impl fmt::Display for PreRelease {
    /// Renders the dashed suffix without the leading hyphen (`alpha.7`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.kind.dashed_identifier(), self.number)
    }
}
