//! Firmware version values — parsing and total ordering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A parsed firmware version: `major.minor.patch`.
///
/// Ordering is lexicographic over `(major, minor, patch)`, so the derived
/// `Ord` backs all relational operators directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a version from its numeric components.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = Error;

    /// Parse a dotted version string with 1 to 3 components.
    ///
    /// Missing components default to 0 (`"18"` parses as `18.0.0`); anything
    /// past the third component is ignored. Devices report all three forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_part =
            |part: &str| part.parse::<u32>().map_err(|_| Error::InvalidVersion(s.to_string()));

        let parts: Vec<&str> = s.split('.').collect();
        let major = parse_part(parts[0])?;
        let minor = parts.get(1).map(|&p| parse_part(p)).transpose()?.unwrap_or(0);
        let patch = parts.get(2).map(|&p| parse_part(p)).transpose()?.unwrap_or(0);

        Ok(Self::new(major, minor, patch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let v: Version = "17.7.1".parse().unwrap();
        assert_eq!(v, Version::new(17, 7, 1));
        assert_eq!(v.to_string(), "17.7.1");
    }

    #[test]
    fn test_parse_defaults_missing_components() {
        assert_eq!("18".parse::<Version>().unwrap(), Version::new(18, 0, 0));
        assert_eq!("18.2".parse::<Version>().unwrap(), Version::new(18, 2, 0));
    }

    #[test]
    fn test_parse_ignores_surplus_components() {
        assert_eq!("1.2.3.4".parse::<Version>().unwrap(), Version::new(1, 2, 3));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("abc".parse::<Version>().is_err());
        assert!("".parse::<Version>().is_err());
        assert!("17.x".parse::<Version>().is_err());
        assert!("17.7.".parse::<Version>().is_err());
        assert!("-1.0.0".parse::<Version>().is_err());
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let v1 = Version::new(16, 9, 9);
        let v2 = Version::new(17, 0, 0);
        let v3 = Version::new(17, 7, 1);
        let v4 = Version::new(18, 0, 0);

        assert!(v1 < v2);
        assert!(v2 < v3);
        assert!(v3 < v4);
        // transitivity across the chain
        assert!(v1 < v4);
        assert_eq!(v3, "17.7.1".parse().unwrap());
    }

    #[test]
    fn test_ordering_totality() {
        let a: Version = "17.7".parse().unwrap();
        let b: Version = "17.7.0".parse().unwrap();
        // exactly one of <, ==, > holds
        assert!(!(a < b));
        assert!(!(a > b));
        assert_eq!(a, b);
    }
}
