//! The support decision — version boundaries and legacy-build exceptions.

use firmgate_core::{Result, Version};
use tracing::debug;

use crate::config::EligibilityConfig;
use crate::device::DeviceRecord;

/// Decide whether a device qualifies for firmware-dependent operations.
///
/// The excluded version range is checked first and wins even when the build
/// is a legacy exception. A version string that fails to parse propagates as
/// an error rather than defaulting either way: silently misclassifying a
/// device is worse than a loud failure.
pub fn is_supported<S>(device: &DeviceRecord<S>, config: &EligibilityConfig) -> Result<bool> {
    let version: Version = device.version.parse()?;

    if version >= config.unsupported_range_start && version < config.unsupported_range_end {
        debug!("device {} on {} falls in excluded range", device.udid, version);
        return Ok(false);
    }

    if version < config.max_supported || config.legacy_build_exceptions.contains(&device.build) {
        return Ok(true);
    }

    debug!(
        "device {} on {} (build {}) above supported ceiling",
        device.udid, version, device.build
    );
    Ok(false)
}
