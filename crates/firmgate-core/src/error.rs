//! Error types for FirmGate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid version string: {0}")]
    InvalidVersion(String),
}

pub type Result<T> = std::result::Result<T, Error>;
