//! Tweak name table — labels and the configuration profiles they touch.
//!
//! Pure static data consulted by callers after a device passes the support
//! check; unrelated to the eligibility decision itself.

use serde::{Deserialize, Serialize};

/// Tweaks that can be applied to a supported device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tweak {
    SkipSetup,
}

impl Tweak {
    pub fn all() -> &'static [Tweak] {
        &[Self::SkipSetup]
    }

    /// Human-readable label shown for this tweak.
    pub fn label(&self) -> &'static str {
        match self {
            Tweak::SkipSetup => "Setup Options",
        }
    }

    /// On-device configuration profile path this tweak manipulates.
    pub fn profile_path(&self) -> &'static str {
        match self {
            Tweak::SkipSetup => {
                "SkipSetup/ConfigProfileDomain/Library/ConfigurationProfiles/CloudConfigurationDetails.plist"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_setup_table() {
        assert_eq!(Tweak::SkipSetup.label(), "Setup Options");
        assert!(Tweak::SkipSetup.profile_path().ends_with(".plist"));
        assert_eq!(Tweak::all().len(), 1);
    }
}
