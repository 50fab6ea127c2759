//! AVX2+FMA kernels (8 lanes) and the F16C-backed half-precision path.

pub mod math;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[cfg(target_arch = "x86_64")]
use half::f16;

#[cfg(target_arch = "x86_64")]
use self::math::avx2_tanh_f32;

#[cfg(target_arch = "x86_64")]
pub const LANES: usize = 8;

/// # Safety
/// Host must support AVX2 and FMA. Buffer contract as in
/// [`crate::cpu_kernels::scalar::tanh_f32`].
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
#[target_feature(enable = "fma")]
pub unsafe fn tanh_f32(input: *const f32, output: *mut f32, n: usize) {
    let mut i = 0;
    while i + LANES <= n {
        let v = _mm256_loadu_ps(input.add(i));
        _mm256_storeu_ps(output.add(i), avx2_tanh_f32(v));
        i += LANES;
    }
    crate::cpu_kernels::scalar::tanh_f32_tail(input, output, i, n);
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
#[target_feature(enable = "fma")]
#[target_feature(enable = "f16c")]
#[inline]
unsafe fn load_f16x8(src: *const f16) -> __m256 {
    _mm256_cvtph_ps(_mm_loadu_si128(src as *const __m128i))
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
#[target_feature(enable = "fma")]
#[target_feature(enable = "f16c")]
#[inline]
unsafe fn store_f16x8(dst: *mut f16, v: __m256) {
    _mm_storeu_si128(dst as *mut __m128i, _mm256_cvtps_ph::<_MM_FROUND_TO_NEAREST_INT>(v));
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
#[target_feature(enable = "fma")]
#[inline]
unsafe fn tanh_or_softcap(v: __m256, cap: Option<__m256>) -> __m256 {
    match cap {
        Some(vcap) => _mm256_mul_ps(avx2_tanh_f32(_mm256_div_ps(v, vcap)), vcap),
        None => avx2_tanh_f32(v),
    }
}

/// `tanh` (or softcap when `cap` is set) over `n` f16 elements, 8 at a time.
/// The tail is staged through a zero-padded block so every element sees the
/// same conversion and rounding.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
#[target_feature(enable = "fma")]
#[target_feature(enable = "f16c")]
#[inline]
unsafe fn tanh_f16_impl(input: *const f16, output: *mut f16, n: usize, cap: Option<f32>) {
    let vcap = match cap {
        Some(c) => Some(_mm256_set1_ps(c)),
        None => None,
    };

    let mut i = 0;
    while i + LANES <= n {
        store_f16x8(output.add(i), tanh_or_softcap(load_f16x8(input.add(i)), vcap));
        i += LANES;
    }
    let rem = n - i;
    if rem > 0 {
        let mut block = [f16::ZERO; LANES];
        std::ptr::copy_nonoverlapping(input.add(i), block.as_mut_ptr(), rem);
        let r = tanh_or_softcap(load_f16x8(block.as_ptr()), vcap);
        store_f16x8(block.as_mut_ptr(), r);
        std::ptr::copy_nonoverlapping(block.as_ptr(), output.add(i), rem);
    }
}

/// # Safety
/// Host must support AVX2, FMA and F16C. Buffer contract as in
/// [`crate::cpu_kernels::scalar::tanh_f32`].
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
#[target_feature(enable = "fma")]
#[target_feature(enable = "f16c")]
pub unsafe fn tanh_f16(input: *const f16, output: *mut f16, n: usize) {
    tanh_f16_impl(input, output, n, None);
}

/// # Safety
/// Host must support AVX2, FMA and F16C. Buffer contract as in
/// [`crate::cpu_kernels::scalar::tanh_f32`].
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
#[target_feature(enable = "fma")]
#[target_feature(enable = "f16c")]
pub unsafe fn softcap_f16(input: *const f16, output: *mut f16, n: usize, cap: f16) {
    tanh_f16_impl(input, output, n, Some(cap.to_f32()));
}
