//! Error types and error handling.
//!
//! Reading a network status descriptor fails in exactly two ways: the file exists but
//! cannot be read, or it was read but does not decode as a network status document.
//! A missing file is not an error. It means the container has no network yet.
//!
//! Error codes follow the CNI convention for the same failures so that tools which
//! already understand CNI error results can consume them unchanged.
//! <https://github.com/containernetworking/cni/blob/v1.3.0/SPEC.md#Error>

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned while looking up network status.
///
/// # Error Codes
///
/// - 5: I/O failure
/// - 6: Failed to decode/parse data
#[derive(Debug, Error)]
pub enum Error {
    /// I/O failure (Error code: 5)
    ///
    /// Returned when `network.status` exists but reading it fails,
    /// for example because of permissions or because the path is a directory.
    IOFailure(String),

    /// Failed to decode/parse data (Error code: 6)
    ///
    /// Returned when the content is not JSON or does not match the network status schema.
    FailedToDecode(String),
}

impl Error {
    /// Outputs details
    #[must_use]
    pub fn details(&self) -> String {
        match self {
            Self::IOFailure(details) | Self::FailedToDecode(details) => details.clone(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IOFailure(_) => write!(f, "I/O failure"),
            Self::FailedToDecode(_) => write!(f, "Failed to decode content"),
        }
    }
}

impl From<&Error> for u32 {
    fn from(value: &Error) -> Self {
        match value {
            Error::IOFailure(_) => 5,
            Error::FailedToDecode(_) => 6,
        }
    }
}

/// `ErrorResult` is the serialized form of [`Error`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResult {
    /// A numeric error code.
    pub code: u32,
    /// A short message characterizing the error.
    pub msg: String,
    /// A longer message describing the error.
    pub details: String,
}

impl From<&Error> for ErrorResult {
    fn from(e: &Error) -> Self {
        Self {
            code: e.into(),
            msg: e.to_string(),
            details: e.details(),
        }
    }
}
