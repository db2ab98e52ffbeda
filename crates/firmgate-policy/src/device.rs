//! Device metadata records.

use std::fmt;

use firmgate_core::Result;

use crate::config::EligibilityConfig;
use crate::policy;

/// Metadata for a connected device, plus the caller-owned session handle.
///
/// Built by the device-management layer once metadata has been fetched over
/// an established session. The eligibility check reads only the metadata
/// fields; the session handle is carried for the caller and never touched
/// here.
pub struct DeviceRecord<S> {
    pub udid: String,
    pub name: String,
    pub version: String,
    pub build: String,
    pub model: String,
    pub locale: String,
    pub session: S,
}

impl<S> DeviceRecord<S> {
    pub fn new(
        udid: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        build: impl Into<String>,
        model: impl Into<String>,
        locale: impl Into<String>,
        session: S,
    ) -> Self {
        Self {
            udid: udid.into(),
            name: name.into(),
            version: version.into(),
            build: build.into(),
            model: model.into(),
            locale: locale.into(),
            session,
        }
    }

    /// Whether this device qualifies for firmware-dependent operations.
    pub fn is_supported(&self, config: &EligibilityConfig) -> Result<bool> {
        policy::is_supported(self, config)
    }
}

impl<S> fmt::Debug for DeviceRecord<S> {
    // session omitted: opaque and caller-owned
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceRecord")
            .field("udid", &self.udid)
            .field("name", &self.name)
            .field("version", &self.version)
            .field("build", &self.build)
            .field("model", &self.model)
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}
