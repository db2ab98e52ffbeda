//! FirmGate Policy — device records, eligibility boundaries, and the
//! support decision.
//!
//! Decides whether a connected device's firmware qualifies for the
//! firmware-dependent operations the caller gates behind it. Pure
//! computation: the caller owns all device communication.

pub mod config;
pub mod device;
pub mod policy;
pub mod profiles;

pub use config::EligibilityConfig;
pub use device::DeviceRecord;
pub use policy::is_supported;
pub use profiles::Tweak;
