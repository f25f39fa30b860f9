//! `PACKAGER:ARCH[@VERSION]` platform references.
//!
//! The selector syntax callers use to name a platform on the command
//! line, e.g. `arduino:avr` or `arduino:avr@1.8.3`.

use std::fmt;

use crate::catalog::Platform;
use crate::error::{CatalogError, Result};

/// A parsed platform reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformReference {
    /// Packager/vendor name.
    pub package: String,
    /// Platform architecture.
    pub architecture: String,
    /// Exact installed version to select, when given.
    pub version: Option<semver::Version>,
}

impl PlatformReference {
    /// Parse a `PACKAGER:ARCH` or `PACKAGER:ARCH@VERSION` reference.
    pub fn parse(reference: &str) -> Result<Self> {
        let invalid = |detail: &str| CatalogError::InvalidPlatformReference {
            reference: reference.to_string(),
            detail: detail.to_string(),
        };

        let (spec, version) = match reference.split_once('@') {
            Some((spec, raw)) => {
                let version = semver::Version::parse(raw)
                    .map_err(|e| invalid(&format!("version '{raw}': {e}")))?;
                (spec, Some(version))
            }
            None => (reference, None),
        };

        let Some((package, architecture)) = spec.split_once(':') else {
            return Err(invalid("expected PACKAGER:ARCH"));
        };
        if package.is_empty() || architecture.is_empty() || architecture.contains(':') {
            return Err(invalid("expected PACKAGER:ARCH"));
        }

        Ok(PlatformReference {
            package: package.to_string(),
            architecture: architecture.to_string(),
            version,
        })
    }

    /// Check whether this reference selects the given platform of the
    /// given package.
    ///
    /// A reference without a version matches any installed version; a
    /// reference with a version matches only a platform installed at
    /// exactly that version.
    pub fn matches(&self, package: &str, platform: &Platform) -> bool {
        if self.package != package || self.architecture != platform.architecture {
            return false;
        }
        match &self.version {
            Some(version) => platform.version.as_ref() == Some(version),
            None => true,
        }
    }
}

impl fmt::Display for PlatformReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.package, self.architecture)?;
        if let Some(version) = &self.version {
            write!(f, "@{version}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_without_version() {
        let r = PlatformReference::parse("arduino:avr").unwrap();
        assert_eq!(r.package, "arduino");
        assert_eq!(r.architecture, "avr");
        assert!(r.version.is_none());
    }

    #[test]
    fn parse_with_version() {
        let r = PlatformReference::parse("arduino:avr@1.8.3").unwrap();
        assert_eq!(r.version, Some(semver::Version::new(1, 8, 3)));
        assert_eq!(r.to_string(), "arduino:avr@1.8.3");
    }

    #[test]
    fn reject_malformed_references() {
        assert!(PlatformReference::parse("arduino").is_err());
        assert!(PlatformReference::parse(":avr").is_err());
        assert!(PlatformReference::parse("arduino:").is_err());
        assert!(PlatformReference::parse("a:b:c").is_err());
        assert!(PlatformReference::parse("arduino:avr@not-a-version").is_err());
    }

    #[test]
    fn versionless_reference_matches_any_version() {
        let mut platform = Platform::new("avr");
        platform.version = Some(semver::Version::new(1, 8, 3));
        let r = PlatformReference::parse("arduino:avr").unwrap();
        assert!(r.matches("arduino", &platform));
        assert!(!r.matches("other", &platform));
    }

    #[test]
    fn versioned_reference_requires_exact_version() {
        let mut platform = Platform::new("avr");
        platform.version = Some(semver::Version::new(1, 8, 3));

        let exact = PlatformReference::parse("arduino:avr@1.8.3").unwrap();
        assert!(exact.matches("arduino", &platform));

        let other = PlatformReference::parse("arduino:avr@1.8.4").unwrap();
        assert!(!other.matches("arduino", &platform));

        // A platform with no declared version never matches a versioned reference.
        let unversioned = Platform::new("avr");
        assert!(!exact.matches("arduino", &unversioned));
    }
}
