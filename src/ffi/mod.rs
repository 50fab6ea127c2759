//! C ABI wrapper for the tanh kernels.
//!
//! Provides `#[no_mangle] extern "C"` functions over raw `(pointer, length)`
//! buffers. f32 entry points cannot fail; f16 entry points return
//! `TanhStatus` codes.

pub mod types;

pub use types::TanhStatus;

use half::f16;

use crate::cpu_kernels::scalar;
use crate::dispatch::{dispatch_table, OpKind, Precision};
use crate::error::KernelError;

/// `output[i] = tanh(input[i])` for `i < n`.
///
/// # Safety
/// `input` must be valid for `n` reads and `output` for `n` writes; they may
/// be equal but must not otherwise overlap. Null pointers are ignored.
#[no_mangle]
pub unsafe extern "C" fn tanh_kernels_tanh_f32(input: *const f32, output: *mut f32, n: usize) {
    if n == 0 || input.is_null() || output.is_null() {
        return;
    }
    (dispatch_table().tanh_f32())(input, output, n);
}

/// `output[i] = tanh(input[i] / cap) * cap` for `i < n`.
///
/// # Safety
/// Same as [`tanh_kernels_tanh_f32`]. `cap` must be non-zero.
#[no_mangle]
pub unsafe extern "C" fn tanh_kernels_softcap_f32(
    input: *const f32,
    output: *mut f32,
    n: usize,
    cap: f32,
) {
    if n == 0 || input.is_null() || output.is_null() {
        return;
    }
    scalar::softcap_f32(input, output, n, cap);
}

/// Half-precision tanh over IEEE binary16 values.
///
/// # Safety
/// Same as [`tanh_kernels_tanh_f32`].
#[no_mangle]
pub unsafe extern "C" fn tanh_kernels_tanh_f16(input: *const u16, output: *mut u16, n: usize) -> i32 {
    let Some(kernel) = dispatch_table().tanh_f16() else {
        return TanhStatus::from(KernelError::Unsupported { op: OpKind::Tanh, precision: Precision::F16 }) as i32;
    };
    if n == 0 {
        return TanhStatus::Ok as i32;
    }
    if input.is_null() || output.is_null() {
        return TanhStatus::InvalidArg as i32;
    }
    kernel(input as *const f16, output as *mut f16, n);
    TanhStatus::Ok as i32
}

/// Half-precision softcap; `cap` is an IEEE binary16 bit pattern.
///
/// # Safety
/// Same as [`tanh_kernels_softcap_f32`].
#[no_mangle]
pub unsafe extern "C" fn tanh_kernels_softcap_f16(
    input: *const u16,
    output: *mut u16,
    n: usize,
    cap: u16,
) -> i32 {
    let Some(kernel) = dispatch_table().softcap_f16() else {
        return TanhStatus::from(KernelError::Unsupported { op: OpKind::Softcap, precision: Precision::F16 }) as i32;
    };
    if n == 0 {
        return TanhStatus::Ok as i32;
    }
    if input.is_null() || output.is_null() {
        return TanhStatus::InvalidArg as i32;
    }
    kernel(input as *const f16, output as *mut f16, n, f16::from_bits(cap));
    TanhStatus::Ok as i32
}
