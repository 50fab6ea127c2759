//! Generic kernels: portable 4-lane batches via `wide::f32x4` plus a scalar
//! remainder loop.
//!
//! This is the reference every ISA variant is tested against. Multiply and
//! add are kept separate (no FMA) so that a lane of the batched path and the
//! scalar path perform the same IEEE operations in the same order.

use std::ptr;

use wide::{f32x4, CmpGt, CmpLt};

use super::constants::TANH_CONSTANTS;

/// Batch width of the generic kernel.
pub const LANES: usize = 4;

/// Clamp `x` to `[-9, 9]` so that NaN passes through unchanged.
///
/// Both comparisons are false for NaN, so neither bound is substituted.
#[inline(always)]
pub fn clamp_preserving_nan(x: f32) -> f32 {
    let c = &TANH_CONSTANTS;
    let t = if x < c.lower_range { c.lower_range } else { x };
    if t > c.upper_range {
        c.upper_range
    } else {
        t
    }
}

/// Rational approximation of `tanh` for a single value.
#[inline(always)]
pub fn tanh_approx(x: f32) -> f32 {
    let c = &TANH_CONSTANTS;
    let x = clamp_preserving_nan(x);
    let x2 = x * x;

    let mut p = x2 * c.alpha_13 + c.alpha_11;
    p = p * x2 + c.alpha_9;
    p = p * x2 + c.alpha_7;
    p = p * x2 + c.alpha_5;
    p = p * x2 + c.alpha_3;
    p = p * x2 + c.alpha_1;
    p = p * x;

    let mut q = x2 * c.beta_6 + c.beta_4;
    q = q * x2 + c.beta_2;
    q = q * x2 + c.beta_0;

    p / q
}

/// Lane-wise [`tanh_approx`]; identical operation order.
#[inline(always)]
pub(crate) fn tanh_approx_x4(v: f32x4) -> f32x4 {
    let c = &TANH_CONSTANTS;
    let lower = f32x4::splat(c.lower_range);
    let upper = f32x4::splat(c.upper_range);

    // mask.blend(bound, v) keeps v wherever the comparison is false (NaN included)
    let t = v.cmp_lt(lower).blend(lower, v);
    let x = t.cmp_gt(upper).blend(upper, t);
    let x2 = x * x;

    let mut p = x2 * f32x4::splat(c.alpha_13) + f32x4::splat(c.alpha_11);
    p = p * x2 + f32x4::splat(c.alpha_9);
    p = p * x2 + f32x4::splat(c.alpha_7);
    p = p * x2 + f32x4::splat(c.alpha_5);
    p = p * x2 + f32x4::splat(c.alpha_3);
    p = p * x2 + f32x4::splat(c.alpha_1);
    p = p * x;

    let mut q = x2 * f32x4::splat(c.beta_6) + f32x4::splat(c.beta_4);
    q = q * x2 + f32x4::splat(c.beta_2);
    q = q * x2 + f32x4::splat(c.beta_0);

    p / q
}

/// Generic `tanh` kernel: `output[i] = tanh_approx(input[i])` for `i < n`.
///
/// # Safety
/// `input` must be valid for `n` reads and `output` for `n` writes. The two
/// may be the same pointer (each element is read before it is written) but
/// must not otherwise overlap.
pub unsafe fn tanh_f32(input: *const f32, output: *mut f32, n: usize) {
    let mut i = 0;
    while i + LANES <= n {
        let v = f32x4::from(ptr::read_unaligned(input.add(i) as *const [f32; LANES]));
        let r = tanh_approx_x4(v);
        ptr::write_unaligned(output.add(i) as *mut [f32; LANES], r.to_array());
        i += LANES;
    }
    tanh_f32_tail(input, output, i, n);
}

/// Scalar remainder `[start, n)`; shared with the ISA kernels.
///
/// # Safety
/// Same contract as [`tanh_f32`].
#[inline(always)]
pub(crate) unsafe fn tanh_f32_tail(input: *const f32, output: *mut f32, start: usize, n: usize) {
    for i in start..n {
        *output.add(i) = tanh_approx(*input.add(i));
    }
}

/// All-scalar `tanh` over a slice, bypassing the batched path.
pub fn tanh_scalar_slice(input: &[f32], output: &mut [f32]) {
    debug_assert_eq!(input.len(), output.len());
    for (o, &x) in output.iter_mut().zip(input.iter()) {
        *o = tanh_approx(x);
    }
}

/// Softcap kernel: `output[i] = tanh(input[i] / cap) * cap` with the
/// platform `tanh`.
///
/// # Safety
/// Same contract as [`tanh_f32`]. `cap == 0` yields NaN/inf, not UB.
pub unsafe fn softcap_f32(input: *const f32, output: *mut f32, n: usize, cap: f32) {
    for i in 0..n {
        let v = *input.add(i) / cap;
        *output.add(i) = v.tanh() * cap;
    }
}
