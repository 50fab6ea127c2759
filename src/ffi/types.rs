//! C ABI types: status codes for FFI consumers.

use crate::error::KernelError;

/// Status codes returned by the fallible C ABI functions.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TanhStatus {
    Ok = 0,
    InvalidArg = -1,
    Unsupported = -5,
}

impl From<KernelError> for TanhStatus {
    fn from(e: KernelError) -> Self {
        match e {
            KernelError::Unsupported { .. } => TanhStatus::Unsupported,
            KernelError::InvalidIsaOverride(_) => TanhStatus::InvalidArg,
        }
    }
}
