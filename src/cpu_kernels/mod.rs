//! # CPU Kernel Layout
//!
//! One module per instruction set, each exposing raw-pointer kernels with the
//! same signature so they can sit behind a single dispatch slot:
//!
//! | Module | Lanes | Requires | Kernels |
//! |---|---|---|---|
//! | `scalar` | 4 (`wide::f32x4`) + scalar tail | nothing | `tanh_f32`, `softcap_f32` |
//! | `neon` | 4 | aarch64 | `tanh_f32` |
//! | `avx2` | 8 | AVX2 + FMA (+ F16C for f16) | `tanh_f32`, `tanh_f16`, `softcap_f16` |
//! | `avx512` | 16 | AVX-512F | `tanh_f32` |
//!
//! All variants read [`constants::TANH_CONSTANTS`]. The generic kernel is the
//! numerical reference; FMA variants differ from it only by rounding.

use std::fmt;
use std::str::FromStr;

use crate::error::KernelError;

pub mod avx2;
pub mod avx512;
pub mod constants;
pub mod neon;
pub mod scalar;

/// Instruction-set tier of a registered kernel, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IsaLevel {
    Scalar,
    Neon,
    Avx2,
    Avx512,
}

impl IsaLevel {
    pub fn name(&self) -> &'static str {
        match self {
            IsaLevel::Scalar => "scalar",
            IsaLevel::Neon => "neon",
            IsaLevel::Avx2 => "avx2",
            IsaLevel::Avx512 => "avx512",
        }
    }
}

impl fmt::Display for IsaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IsaLevel {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("scalar") || value.eq_ignore_ascii_case("generic") {
            return Ok(IsaLevel::Scalar);
        }
        if value.eq_ignore_ascii_case("neon") {
            return Ok(IsaLevel::Neon);
        }
        if value.eq_ignore_ascii_case("avx2") {
            return Ok(IsaLevel::Avx2);
        }
        if value.eq_ignore_ascii_case("avx512") || value.eq_ignore_ascii_case("avx512f") {
            return Ok(IsaLevel::Avx512);
        }
        Err(KernelError::InvalidIsaOverride(value.to_string()))
    }
}
