use crate::domain::prerelease::{PreRelease, PreReleaseKind};
use crate::error::{PrepareError, Result};
use std::fmt;
use std::str::FromStr;

/// A release version as supplied on the command line
///
/// Holds the compact input (`0.1.0a7`) and renders the dashed form
/// (`0.1.0-alpha.7`) that Cargo manifests and revision pins use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion {
    raw: String,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Option<PreRelease>,
}

impl ReleaseVersion {
    /// Parse a compact version string.
    ///
    /// Accepts `MAJOR.MINOR.PATCH` or `MAJOR.MINOR.PATCH` followed directly by
    /// `a`, `b` or `rc` and one or more digits. Anything else is rejected as a
    /// whole; there is no partial parse.
    ///
    /// # Example
    /// ```ignore
    /// let v = ReleaseVersion::parse("0.1.0a7")?;
    /// assert_eq!(v.to_dashed(), "0.1.0-alpha.7");
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || PrepareError::InvalidVersion(input.to_string());

        let split_at = input
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(input.len());
        let (base, suffix) = input.split_at(split_at);

        let parts: Vec<&str> = base.split('.').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }
        let mut numbers = [0u64; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            *slot = parse_digits(part).ok_or_else(invalid)?;
        }

        let pre = if suffix.is_empty() {
            None
        } else {
            let marker_len = suffix
                .find(|c: char| !c.is_ascii_alphabetic())
                .unwrap_or(suffix.len());
            let (marker, digits) = suffix.split_at(marker_len);
            let kind = marker.parse::<PreReleaseKind>().map_err(|_| invalid())?;
            let number = parse_digits(digits).ok_or_else(invalid)?;
            Some(PreRelease::new(kind, number))
        };

        let version = ReleaseVersion {
            raw: input.to_string(),
            major: numbers[0],
            minor: numbers[1],
            patch: numbers[2],
            pre,
        };

        // The dashed form ends up in Cargo manifests, so it has to be valid semver.
        semver::Version::parse(&version.to_dashed()).map_err(|_| invalid())?;

        Ok(version)
    }

    /// The version exactly as supplied
    pub fn compact(&self) -> &str {
        &self.raw
    }

    /// Dashed rendering: the base alone for stable releases, otherwise
    /// `base-{alpha|beta|rc}.N`
    pub fn to_dashed(&self) -> String {
        match &self.pre {
            None => format!("{}.{}.{}", self.major, self.minor, self.patch),
            Some(pre) => format!("{}.{}.{}-{}", self.major, self.minor, self.patch, pre),
        }
    }

    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some()
    }
}

fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u64>().ok()
}

impl FromStr for ReleaseVersion {
    type Err = PrepareError;

    fn from_str(s: &str) -> Result<Self> {
        ReleaseVersion::parse(s)
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stable() {
        let v = ReleaseVersion::parse("1.2.3").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (1, 2, 3));
        assert!(!v.is_prerelease());
        assert_eq!(v.to_dashed(), "1.2.3");
    }

    #[test]
    fn test_stable_dashed_form_is_unchanged() {
        for input in ["0.0.0", "0.1.0", "1.0.0", "10.20.30", "2.0.15"] {
            let v = ReleaseVersion::parse(input).unwrap();
            assert_eq!(v.to_dashed(), input);
            assert_eq!(v.compact(), input);
        }
    }

    #[test]
    fn test_prerelease_conversion() {
        let cases = [
            ("0.1.0a7", "0.1.0-alpha.7"),
            ("1.0.0b2", "1.0.0-beta.2"),
            ("2.0.0rc1", "2.0.0-rc.1"),
            ("3.4.5a0", "3.4.5-alpha.0"),
            ("0.1.0rc12", "0.1.0-rc.12"),
        ];
        for (input, expected) in cases {
            let v = ReleaseVersion::parse(input).unwrap();
            assert!(v.is_prerelease());
            assert_eq!(v.to_dashed(), expected, "input {}", input);
        }
    }

    #[test]
    fn test_prerelease_components() {
        let v = ReleaseVersion::parse("0.1.0rc3").unwrap();
        let pre = v.pre.unwrap();
        assert_eq!(pre.kind, PreReleaseKind::ReleaseCandidate);
        assert_eq!(pre.number, 3);
    }

    #[test]
    fn test_rejects_malformed_inputs() {
        for input in [
            "",
            "1.0",
            "1.0.0.0",
            "v1.0.0",
            "1.0.0a",
            "1.0.0rc",
            "1.0.0-alpha.1",
            "1.0.0alpha1",
            "1.0.0a1b",
            "1.0.0 ",
            " 1.0.0",
            "1..0",
            "1.0.0dev1",
            "1.0.0A1",
            "a.b.c",
        ] {
            assert!(
                ReleaseVersion::parse(input).is_err(),
                "expected '{}' to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_rejects_leading_zero_base() {
        assert!(ReleaseVersion::parse("01.0.0").is_err());
        assert!(ReleaseVersion::parse("1.00.0").is_err());
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        assert!(ReleaseVersion::parse("1.0.٣").is_err());
    }

    #[test]
    fn test_invalid_error_carries_input() {
        let err = ReleaseVersion::parse("1.0").unwrap_err();
        assert!(matches!(err, PrepareError::InvalidVersion(ref s) if s == "1.0"));
    }

    #[test]
    fn test_display_is_compact_form() {
        let v: ReleaseVersion = "0.1.0a7".parse().unwrap();
        assert_eq!(v.to_string(), "0.1.0a7");
    }
}
