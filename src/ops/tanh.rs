//! Tanh activation entry points.
//!
//! f32 calls always succeed: the dispatch table holds at least the generic
//! kernel. f16 calls go through the reduced-precision gate and fail with
//! [`KernelError::Unsupported`] when no hardware kernel is registered.

use half::f16;

use crate::dispatch::{dispatch_table, DispatchTable, OpKind, Precision};
use crate::error::{KernelError, KernelResult};

// ============================================================================
// f32
// ============================================================================

/// Tanh activation: `output[i] = tanh_approx(input[i])`.
#[inline(always)]
pub fn tanh(input: &[f32], output: &mut [f32]) {
    tanh_with(dispatch_table(), input, output);
}

/// Tanh activation through an explicit dispatch table.
#[inline(always)]
pub fn tanh_with(table: &DispatchTable, input: &[f32], output: &mut [f32]) {
    debug_assert_eq!(input.len(), output.len());
    let n = input.len().min(output.len());
    // SAFETY: both slices cover n elements and cannot overlap.
    unsafe { (table.tanh_f32())(input.as_ptr(), output.as_mut_ptr(), n) }
}

/// Tanh activation in-place.
#[inline(always)]
pub fn tanh_inplace(data: &mut [f32]) {
    let ptr = data.as_mut_ptr();
    // SAFETY: kernels read element i before writing it.
    unsafe { (dispatch_table().tanh_f32())(ptr, ptr, data.len()) }
}

// ============================================================================
// f16 (reduced precision)
// ============================================================================

/// Half-precision tanh. No generic fallback exists.
pub fn tanh_f16(input: &[f16], output: &mut [f16]) -> KernelResult<()> {
    tanh_f16_with(dispatch_table(), input, output)
}

/// Half-precision tanh through an explicit dispatch table.
pub fn tanh_f16_with(table: &DispatchTable, input: &[f16], output: &mut [f16]) -> KernelResult<()> {
    let kernel = table.tanh_f16().ok_or(KernelError::Unsupported {
        op: OpKind::Tanh,
        precision: Precision::F16,
    })?;
    debug_assert_eq!(input.len(), output.len());
    let n = input.len().min(output.len());
    // SAFETY: both slices cover n elements and cannot overlap.
    unsafe { kernel(input.as_ptr(), output.as_mut_ptr(), n) };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_kernels::scalar::tanh_approx;

    #[test]
    fn test_tanh() {
        let input = vec![0.0, 1.0, -1.0];
        let mut output = vec![0.0; 3];

        tanh(&input, &mut output);

        assert_eq!(output[0], 0.0);
        assert!((output[1] - 0.7616).abs() < 1e-4);
        assert!((output[2] - (-0.7616)).abs() < 1e-4);
    }

    #[test]
    fn test_tanh_inplace_matches_out_of_place() {
        let input: Vec<f32> = (0..29).map(|i| i as f32 * 0.4 - 6.0).collect();
        let mut expected = vec![0.0; input.len()];
        tanh(&input, &mut expected);

        let mut data = input.clone();
        tanh_inplace(&mut data);

        assert_eq!(data, expected);
    }

    #[test]
    fn test_tanh_with_generic_is_bit_exact() {
        let input = vec![-12.0, -3.25, -0.5, 0.0, 0.125, 2.0, 8.75, 12.0, f32::NAN];
        let mut output = vec![0.0; input.len()];

        tanh_with(&DispatchTable::generic(), &input, &mut output);

        for (&x, &y) in input.iter().zip(output.iter()) {
            assert_eq!(y.to_bits(), tanh_approx(x).to_bits(), "x={x}");
        }
    }

    #[test]
    fn test_tanh_empty() {
        let mut output: Vec<f32> = vec![];
        tanh(&[], &mut output);
        tanh_inplace(&mut output);
    }

    #[test]
    fn test_tanh_f16_unsupported_on_generic_table() {
        let input = vec![f16::from_f32(0.5); 4];
        let mut output = vec![f16::from_f32(3.0); 4];

        let err = tanh_f16_with(&DispatchTable::generic(), &input, &mut output).unwrap_err();

        assert_eq!(err, KernelError::Unsupported { op: OpKind::Tanh, precision: Precision::F16 });
        // output untouched
        assert!(output.iter().all(|&v| v == f16::from_f32(3.0)));
    }

    #[test]
    fn test_tanh_f16_global() {
        let input: Vec<f16> = [0.0f32, 0.5, -0.5, 20.0].iter().map(|&x| f16::from_f32(x)).collect();
        let mut output = vec![f16::ZERO; 4];

        match tanh_f16(&input, &mut output) {
            Ok(()) => {
                assert_eq!(output[0].to_f32(), 0.0);
                assert!((output[1].to_f32() - 0.5f32.tanh()).abs() < 1e-3);
                assert!((output[2].to_f32() + 0.5f32.tanh()).abs() < 1e-3);
                assert!((output[3].to_f32() - 1.0).abs() < 1e-3);
            }
            Err(KernelError::Unsupported { .. }) => {
                println!("Skipping f16 check: no f16 kernel on this host");
            }
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
}
