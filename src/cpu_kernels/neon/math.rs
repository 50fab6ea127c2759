#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

#[cfg(target_arch = "aarch64")]
use crate::cpu_kernels::constants::TANH_CONSTANTS;

#[cfg(target_arch = "aarch64")]
#[inline]
pub unsafe fn tanh_ps(v: float32x4_t) -> float32x4_t {
    let c = &TANH_CONSTANTS;
    let lower = vdupq_n_f32(c.lower_range);
    let upper = vdupq_n_f32(c.upper_range);

    // vclt/vcgt are false for NaN lanes, so vbsl keeps the input there.
    let t = vbslq_f32(vcltq_f32(v, lower), lower, v);
    let x = vbslq_f32(vcgtq_f32(t, upper), upper, t);
    let x2 = vmulq_f32(x, x);

    // vfmaq_f32(a, b, c) = a + b * c
    let mut p = vfmaq_f32(vdupq_n_f32(c.alpha_11), x2, vdupq_n_f32(c.alpha_13));
    p = vfmaq_f32(vdupq_n_f32(c.alpha_9), p, x2);
    p = vfmaq_f32(vdupq_n_f32(c.alpha_7), p, x2);
    p = vfmaq_f32(vdupq_n_f32(c.alpha_5), p, x2);
    p = vfmaq_f32(vdupq_n_f32(c.alpha_3), p, x2);
    p = vfmaq_f32(vdupq_n_f32(c.alpha_1), p, x2);
    p = vmulq_f32(p, x);

    let mut q = vfmaq_f32(vdupq_n_f32(c.beta_4), x2, vdupq_n_f32(c.beta_6));
    q = vfmaq_f32(vdupq_n_f32(c.beta_2), q, x2);
    q = vfmaq_f32(vdupq_n_f32(c.beta_0), q, x2);

    vdivq_f32(p, q)
}
