//! Softcap: `x -> tanh(x / cap) * cap`, a smooth bound to `±cap`.
//!
//! The f32 path uses the platform `f32::tanh`, not the rational
//! approximation, so `softcap(x, c)` is not `tanh_approx(x / c) * c`. It is
//! not dispatched. The f16 path goes through the dispatch table like
//! [`crate::ops::tanh::tanh_f16`].
//!
//! `cap` must be non-zero; `cap == 0` yields NaN/inf and is not checked.

use half::f16;

use crate::cpu_kernels::scalar;
use crate::dispatch::{dispatch_table, DispatchTable, OpKind, Precision};
use crate::error::{KernelError, KernelResult};

/// Softcap: `output[i] = tanh(input[i] / cap) * cap`.
#[inline(always)]
pub fn softcap(input: &[f32], output: &mut [f32], cap: f32) {
    debug_assert_eq!(input.len(), output.len());
    let n = input.len().min(output.len());
    // SAFETY: both slices cover n elements and cannot overlap.
    unsafe { scalar::softcap_f32(input.as_ptr(), output.as_mut_ptr(), n, cap) }
}

/// Softcap in-place.
#[inline(always)]
pub fn softcap_inplace(data: &mut [f32], cap: f32) {
    let ptr = data.as_mut_ptr();
    // SAFETY: element i is read before it is written.
    unsafe { scalar::softcap_f32(ptr, ptr, data.len(), cap) }
}

/// Half-precision softcap. No generic fallback exists.
pub fn softcap_f16(input: &[f16], output: &mut [f16], cap: f16) -> KernelResult<()> {
    softcap_f16_with(dispatch_table(), input, output, cap)
}

/// Half-precision softcap through an explicit dispatch table.
pub fn softcap_f16_with(
    table: &DispatchTable,
    input: &[f16],
    output: &mut [f16],
    cap: f16,
) -> KernelResult<()> {
    let kernel = table.softcap_f16().ok_or(KernelError::Unsupported {
        op: OpKind::Softcap,
        precision: Precision::F16,
    })?;
    debug_assert_eq!(input.len(), output.len());
    let n = input.len().min(output.len());
    // SAFETY: both slices cover n elements and cannot overlap.
    unsafe { kernel(input.as_ptr(), output.as_mut_ptr(), n, cap) };
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::hint::black_box;

    use super::*;
    use crate::cpu_kernels::scalar::tanh_approx;

    /// Runtime `tanh(x / cap) * cap`. Inputs go through `black_box` so release
    /// builds cannot constant-fold `tanhf` on one side of a comparison only.
    fn platform_softcap(x: f32, cap: f32) -> f32 {
        (black_box(x) / black_box(cap)).tanh() * cap
    }

    #[test]
    fn test_softcap_scale_law() {
        let cap = black_box(30.0f32);
        let input = black_box(vec![-100.0, -30.0, -1.0, 0.0, 1.0, 30.0, 100.0]);
        let mut output = vec![0.0; input.len()];

        softcap(&input, &mut output, cap);

        for (&x, &y) in input.iter().zip(output.iter()) {
            assert_eq!(y, platform_softcap(x, cap), "x={x}");
            assert!(y.abs() <= cap);
        }
    }

    #[test]
    fn test_softcap_zero_input() {
        for cap in [0.5f32, 1.0, 50.0, -3.0] {
            let mut output = [1.0f32];
            softcap(&[0.0], &mut output, cap);
            assert_eq!(output[0], 0.0, "cap={cap}");
        }
    }

    #[test]
    fn test_softcap_uses_platform_tanh() {
        // Some inputs differ between f32::tanh and the rational approximation.
        let cap = black_box(1.0f32);
        let input: Vec<f32> = black_box((0..2000).map(|i| i as f32 * 0.0043 - 4.3).collect());
        let mut output = vec![0.0; input.len()];

        softcap(&input, &mut output, cap);

        for (&x, &y) in input.iter().zip(output.iter()) {
            assert_eq!(y, platform_softcap(x, cap), "x={x}");
        }
        assert!(input.iter().any(|&x| platform_softcap(x, 1.0) != tanh_approx(x)));
    }

    #[test]
    fn test_softcap_inplace_matches_out_of_place() {
        let cap = black_box(15.0f32);
        let input: Vec<f32> = black_box((0..17).map(|i| i as f32 * 3.0 - 25.0).collect());
        let mut expected = vec![0.0; input.len()];
        softcap(&input, &mut expected, cap);

        let mut data = black_box(input.clone());
        softcap_inplace(&mut data, cap);

        assert_eq!(data, expected);
        for (&x, &y) in input.iter().zip(data.iter()) {
            assert_eq!(y, platform_softcap(x, cap), "x={x}");
        }
    }

    #[test]
    fn test_softcap_zero_cap_propagates_nan() {
        let mut output = [0.0f32; 2];
        softcap(&[0.0, 1.0], &mut output, 0.0);
        // 0/0 = NaN; 1/0 = inf -> tanh = 1 -> 1 * 0 = 0
        assert!(output[0].is_nan());
        assert_eq!(output[1], 0.0);
    }

    #[test]
    fn test_softcap_f16_unsupported_on_generic_table() {
        let input = vec![f16::ONE; 3];
        let mut output = vec![f16::ZERO; 3];

        let err = softcap_f16_with(&DispatchTable::generic(), &input, &mut output, f16::from_f32(2.0))
            .unwrap_err();

        assert_eq!(
            err,
            KernelError::Unsupported { op: OpKind::Softcap, precision: Precision::F16 }
        );
        assert_eq!(err.to_string(), "unsupported operation: softcap (f16) has no kernel for this host");
    }
}
