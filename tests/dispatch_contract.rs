//! Dispatch table and reduced-precision gate contract tests.
//!
//! Hardware-dependent checks detect the host first and skip gracefully when
//! the relevant features are missing.

use std::sync::Arc;
use std::thread;

use tanh_kernels::dispatch::{parse_isa_override, ISA_OVERRIDE_ENV};
use tanh_kernels::{
    dispatch_table, f16, softcap_f16, softcap_f16_with, tanh, tanh_f16, tanh_f16_with, tanh_with,
    DispatchTable, IsaFeatures, IsaLevel, KernelError, OpKind, Precision,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn ramp(n: usize) -> Vec<f32> {
    (0..n).map(|i| ((i * 37 % 101) as f32 - 50.0) * 0.23).collect()
}

#[test]
fn test_reduced_precision_gate_reports_unsupported() {
    init_logger();
    let table = DispatchTable::generic();
    let input = vec![f16::from_f32(1.5); 9];
    let mut output = vec![f16::ZERO; 9];

    assert_eq!(
        tanh_f16_with(&table, &input, &mut output),
        Err(KernelError::Unsupported { op: OpKind::Tanh, precision: Precision::F16 })
    );
    assert_eq!(
        softcap_f16_with(&table, &input, &mut output, f16::from_f32(2.0)),
        Err(KernelError::Unsupported { op: OpKind::Softcap, precision: Precision::F16 })
    );
    assert!(output.iter().all(|v| *v == f16::ZERO));
}

#[test]
fn test_global_gate_matches_table_contents() {
    init_logger();
    let table = dispatch_table();
    let input = vec![f16::from_f32(0.75); 13];
    let mut output = vec![f16::ZERO; 13];

    let tanh_result = tanh_f16(&input, &mut output);
    assert_eq!(tanh_result.is_ok(), table.tanh_f16().is_some());
    if tanh_result.is_ok() {
        let expected = 0.75f32.tanh();
        assert!(output.iter().all(|v| (v.to_f32() - expected).abs() < 1e-3));
    }

    let softcap_result = softcap_f16(&input, &mut output, f16::from_f32(3.0));
    assert_eq!(softcap_result.is_ok(), table.softcap_f16().is_some());
}

#[test]
fn test_detected_tables_agree_with_generic() {
    init_logger();
    let input = ramp(203);
    let mut reference = vec![0.0f32; input.len()];
    tanh_with(&DispatchTable::generic(), &input, &mut reference);

    for ceiling in [IsaLevel::Scalar, IsaLevel::Neon, IsaLevel::Avx2, IsaLevel::Avx512] {
        let table = DispatchTable::detect(ceiling);
        let selected = table.isa(OpKind::Tanh, Precision::F32).unwrap();
        assert!(selected <= ceiling);

        let mut out = vec![0.0f32; input.len()];
        tanh_with(&table, &input, &mut out);
        for i in 0..input.len() {
            assert!(
                (out[i] - reference[i]).abs() < 1e-6,
                "{selected}: x={} got {} want {}",
                input[i],
                out[i],
                reference[i]
            );
        }
    }
}

#[test]
fn test_scalar_ceiling_is_bit_exact() {
    let input = ramp(64);
    let mut a = vec![0.0f32; 64];
    let mut b = vec![0.0f32; 64];
    tanh_with(&DispatchTable::detect(IsaLevel::Scalar), &input, &mut a);
    tanh_with(&DispatchTable::generic(), &input, &mut b);
    assert_eq!(a, b);
}

#[test]
fn test_best_available_priority() {
    let features = IsaFeatures { avx2: true, fma: true, f16c: true, avx512f: true, neon: false };
    let table = unsafe { DispatchTable::from_features(features, IsaLevel::Avx512) };
    #[cfg(target_arch = "x86_64")]
    assert_eq!(table.isa(OpKind::Tanh, Precision::F32), Some(IsaLevel::Avx512));
    #[cfg(not(target_arch = "x86_64"))]
    assert_eq!(table.isa(OpKind::Tanh, Precision::F32), Some(IsaLevel::Scalar));
}

#[test]
fn test_concurrent_calls_share_table() {
    init_logger();
    let input = Arc::new(ramp(1000));
    let mut expected = vec![0.0f32; input.len()];
    tanh(&input, &mut expected);
    let expected = Arc::new(expected);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let input = Arc::clone(&input);
            let expected = Arc::clone(&expected);
            thread::spawn(move || {
                let mut out = vec![0.0f32; input.len()];
                tanh(&input, &mut out);
                assert_eq!(out, *expected);
                dispatch_table() as *const DispatchTable as usize
            })
        })
        .collect();

    let ptrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(ptrs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_isa_override_parsing() {
    assert_eq!(ISA_OVERRIDE_ENV, "TANH_KERNELS_ISA");
    assert_eq!(parse_isa_override(Some("Scalar")), Ok(Some(IsaLevel::Scalar)));
    assert!(matches!(
        parse_isa_override(Some("avx9000")),
        Err(KernelError::InvalidIsaOverride(v)) if v == "avx9000"
    ));
}
