#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[cfg(target_arch = "x86_64")]
use crate::cpu_kernels::constants::TANH_CONSTANTS;

/// Vectorized rational `tanh` for AVX2+FMA.
/// Input clamped to [-9, 9] with ordered compares so NaN lanes pass through.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
#[target_feature(enable = "fma")]
#[inline]
pub unsafe fn avx2_tanh_f32(v: __m256) -> __m256 {
    let c = &TANH_CONSTANTS;
    let lower = _mm256_set1_ps(c.lower_range);
    let upper = _mm256_set1_ps(c.upper_range);

    let t = _mm256_blendv_ps(v, lower, _mm256_cmp_ps::<_CMP_LT_OQ>(v, lower));
    let x = _mm256_blendv_ps(t, upper, _mm256_cmp_ps::<_CMP_GT_OQ>(t, upper));
    let x2 = _mm256_mul_ps(x, x);

    // Numerator, odd degree 13 (Horner over x^2)
    let mut p = _mm256_fmadd_ps(x2, _mm256_set1_ps(c.alpha_13), _mm256_set1_ps(c.alpha_11));
    p = _mm256_fmadd_ps(p, x2, _mm256_set1_ps(c.alpha_9));
    p = _mm256_fmadd_ps(p, x2, _mm256_set1_ps(c.alpha_7));
    p = _mm256_fmadd_ps(p, x2, _mm256_set1_ps(c.alpha_5));
    p = _mm256_fmadd_ps(p, x2, _mm256_set1_ps(c.alpha_3));
    p = _mm256_fmadd_ps(p, x2, _mm256_set1_ps(c.alpha_1));
    p = _mm256_mul_ps(p, x);

    // Denominator, even degree 6
    let mut q = _mm256_fmadd_ps(x2, _mm256_set1_ps(c.beta_6), _mm256_set1_ps(c.beta_4));
    q = _mm256_fmadd_ps(q, x2, _mm256_set1_ps(c.beta_2));
    q = _mm256_fmadd_ps(q, x2, _mm256_set1_ps(c.beta_0));

    _mm256_div_ps(p, q)
}
