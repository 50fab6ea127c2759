use thiserror::Error;

use crate::dispatch::{OpKind, Precision};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    #[error("unsupported operation: {op} ({precision}) has no kernel for this host")]
    Unsupported { op: OpKind, precision: Precision },
    #[error("invalid ISA override: {0}")]
    InvalidIsaOverride(String),
}

pub type KernelResult<T> = Result<T, KernelError>;
