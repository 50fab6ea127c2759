pub mod math;

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

#[cfg(target_arch = "aarch64")]
pub const LANES: usize = 4;

/// # Safety
/// Buffer contract as in [`crate::cpu_kernels::scalar::tanh_f32`]. NEON is
/// part of the aarch64 baseline.
#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
pub unsafe fn tanh_f32(input: *const f32, output: *mut f32, n: usize) {
    let mut i = 0;
    while i + LANES <= n {
        let v = vld1q_f32(input.add(i));
        vst1q_f32(output.add(i), math::tanh_ps(v));
        i += LANES;
    }
    crate::cpu_kernels::scalar::tanh_f32_tail(input, output, i, n);
}
