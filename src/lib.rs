//! tanh-kernels: vectorized hyperbolic-tangent activation kernels.
//!
//! This crate provides the `tanh` family of elementwise transforms with:
//! - **Rational Approximation**: degree-13/6 Padé polynomial clamped to `[-9, 9]`
//! - **NaN Passthrough**: two-step clamp that never turns NaN into a bound
//! - **Runtime ISA Dispatch**: AVX-512 / AVX2+FMA / NEON variants chosen once per process
//! - **f16 Gate**: half-precision only through registered hardware kernels
//!
//! # Quick Start
//!
//! ```
//! use tanh_kernels::{tanh, softcap};
//!
//! let input = [0.0f32, 1.0, -1.0, 100.0];
//! let mut output = [0.0f32; 4];
//! tanh(&input, &mut output);
//! softcap(&input, &mut output, 30.0);
//! ```

pub mod cpu_kernels;
pub mod dispatch;
pub mod error;
pub mod ffi;
pub mod ops;

pub use cpu_kernels::constants::{TanhConstants, TANH_CONSTANTS};
pub use cpu_kernels::scalar::tanh_approx;
pub use cpu_kernels::IsaLevel;
pub use dispatch::{dispatch_table, DispatchTable, IsaFeatures, OpKind, Precision};
pub use error::{KernelError, KernelResult};

pub use ops::softcap::{softcap, softcap_f16, softcap_f16_with, softcap_inplace};
pub use ops::tanh::{tanh, tanh_f16, tanh_f16_with, tanh_inplace, tanh_with};

pub use half::f16;
