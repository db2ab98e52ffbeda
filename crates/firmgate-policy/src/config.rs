//! Eligibility boundaries — static, process-wide policy configuration.

use std::collections::HashSet;

use firmgate_core::Version;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// First version considered unsupported.
const MAX_SUPPORTED: Version = Version::new(26, 1, 0);
/// Excluded range `[start, end)`: versions here are unsupported outright.
const UNSUPPORTED_RANGE_START: Version = Version::new(17, 7, 1);
const UNSUPPORTED_RANGE_END: Version = Version::new(18, 0, 0);

/// Builds that stay supported regardless of reported version.
const LEGACY_BUILD_EXCEPTIONS: [&str; 4] = ["22B5007p", "22B5023e", "22B5034e", "22B5045g"];

static DEFAULT_CONFIG: Lazy<EligibilityConfig> = Lazy::new(EligibilityConfig::default);

/// Version boundaries and build exceptions backing the support decision.
///
/// Immutable after construction; pass a different value to evaluate a
/// different policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityConfig {
    /// First version considered unsupported.
    pub max_supported: Version,
    /// Start of the excluded version range (inclusive).
    pub unsupported_range_start: Version,
    /// End of the excluded version range (exclusive).
    pub unsupported_range_end: Version,
    /// Build identifiers supported regardless of version.
    pub legacy_build_exceptions: HashSet<String>,
}

impl EligibilityConfig {
    /// Shared process-wide default boundaries.
    pub fn shared() -> &'static EligibilityConfig {
        &DEFAULT_CONFIG
    }
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            max_supported: MAX_SUPPORTED,
            unsupported_range_start: UNSUPPORTED_RANGE_START,
            unsupported_range_end: UNSUPPORTED_RANGE_END,
            legacy_build_exceptions: LEGACY_BUILD_EXCEPTIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
