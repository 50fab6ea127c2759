pub mod math;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[cfg(target_arch = "x86_64")]
pub const LANES: usize = 16;

/// 16-lane `tanh`. The remainder is handled with a masked load/store instead
/// of the scalar loop.
///
/// # Safety
/// Host must support AVX-512F. Buffer contract as in
/// [`crate::cpu_kernels::scalar::tanh_f32`].
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx512f")]
pub unsafe fn tanh_f32(input: *const f32, output: *mut f32, n: usize) {
    let mut i = 0;
    while i + LANES <= n {
        let v = _mm512_loadu_ps(input.add(i));
        _mm512_storeu_ps(output.add(i), math::avx512_tanh_f32(v));
        i += LANES;
    }
    let rem = n - i;
    if rem > 0 {
        let mask: __mmask16 = (1u16 << rem) - 1;
        let v = _mm512_maskz_loadu_ps(mask, input.add(i));
        _mm512_mask_storeu_ps(output.add(i), mask, math::avx512_tanh_f32(v));
    }
}
