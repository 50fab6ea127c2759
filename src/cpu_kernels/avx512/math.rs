#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[cfg(target_arch = "x86_64")]
use crate::cpu_kernels::constants::TANH_CONSTANTS;

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx512f")]
#[inline]
pub unsafe fn avx512_tanh_f32(v: __m512) -> __m512 {
    let c = &TANH_CONSTANTS;
    let lower = _mm512_set1_ps(c.lower_range);
    let upper = _mm512_set1_ps(c.upper_range);

    // Ordered compares are false on NaN, so those lanes keep the input.
    let t = _mm512_mask_blend_ps(_mm512_cmp_ps_mask::<_CMP_LT_OQ>(v, lower), v, lower);
    let x = _mm512_mask_blend_ps(_mm512_cmp_ps_mask::<_CMP_GT_OQ>(t, upper), t, upper);
    let x2 = _mm512_mul_ps(x, x);

    let mut p = _mm512_fmadd_ps(x2, _mm512_set1_ps(c.alpha_13), _mm512_set1_ps(c.alpha_11));
    p = _mm512_fmadd_ps(p, x2, _mm512_set1_ps(c.alpha_9));
    p = _mm512_fmadd_ps(p, x2, _mm512_set1_ps(c.alpha_7));
    p = _mm512_fmadd_ps(p, x2, _mm512_set1_ps(c.alpha_5));
    p = _mm512_fmadd_ps(p, x2, _mm512_set1_ps(c.alpha_3));
    p = _mm512_fmadd_ps(p, x2, _mm512_set1_ps(c.alpha_1));
    p = _mm512_mul_ps(p, x);

    let mut q = _mm512_fmadd_ps(x2, _mm512_set1_ps(c.beta_6), _mm512_set1_ps(c.beta_4));
    q = _mm512_fmadd_ps(q, x2, _mm512_set1_ps(c.beta_2));
    q = _mm512_fmadd_ps(q, x2, _mm512_set1_ps(c.beta_0));

    _mm512_div_ps(p, q)
}
