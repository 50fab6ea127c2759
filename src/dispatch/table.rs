//! Kernel dispatch table: one slot per {operation, precision}.

use std::fmt;

use half::f16;

use super::hw_info::IsaFeatures;
use crate::cpu_kernels::{self, IsaLevel};

pub type TanhF32Fn = unsafe fn(input: *const f32, output: *mut f32, n: usize);
pub type TanhF16Fn = unsafe fn(input: *const f16, output: *mut f16, n: usize);
pub type SoftcapF16Fn = unsafe fn(input: *const f16, output: *mut f16, n: usize, cap: f16);

/// Operation kind of a dispatch slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Tanh,
    Softcap,
}

/// Element precision of a dispatch slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    F32,
    F16,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpKind::Tanh => f.write_str("tanh"),
            OpKind::Softcap => f.write_str("softcap"),
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::F32 => f.write_str("f32"),
            Precision::F16 => f.write_str("f16"),
        }
    }
}

/// A registered kernel and the ISA tier that provided it.
#[derive(Debug, Clone, Copy)]
pub struct Slot<F> {
    pub kernel: F,
    pub isa: IsaLevel,
}

/// Immutable table of the best kernels for one set of ISA features.
///
/// f32 `tanh` always holds at least the generic kernel. f16 slots stay empty
/// unless a hardware variant registers them. f32 softcap is not dispatched.
#[derive(Debug, Clone, Copy)]
pub struct DispatchTable {
    tanh_f32: Slot<TanhF32Fn>,
    tanh_f16: Option<Slot<TanhF16Fn>>,
    softcap_f16: Option<Slot<SoftcapF16Fn>>,
}

impl DispatchTable {
    /// Table with only the generic kernel registered.
    pub fn generic() -> Self {
        DispatchTable {
            tanh_f32: Slot {
                kernel: cpu_kernels::scalar::tanh_f32,
                isa: IsaLevel::Scalar,
            },
            tanh_f16: None,
            softcap_f16: None,
        }
    }

    /// Probe the host and build the best table at or below `ceiling`.
    pub fn detect(ceiling: IsaLevel) -> Self {
        // SAFETY: the features come from the host probe.
        unsafe { Self::from_features(IsaFeatures::detect(), ceiling) }
    }

    /// Build a table from `features`, registering variants in ascending
    /// priority so the most specialized tier at or below `ceiling` wins.
    ///
    /// # Safety
    /// Every flag set in `features` must be supported by the host before any
    /// kernel in the returned table is called.
    pub unsafe fn from_features(features: IsaFeatures, ceiling: IsaLevel) -> Self {
        let mut table = Self::generic();

        if features.neon && IsaLevel::Neon <= ceiling {
            table.register_neon();
        }
        if features.avx2 && features.fma && IsaLevel::Avx2 <= ceiling {
            table.register_avx2(features.f16c);
        }
        if features.avx512f && IsaLevel::Avx512 <= ceiling {
            table.register_avx512();
        }

        table
    }

    fn register_neon(&mut self) {
        #[cfg(target_arch = "aarch64")]
        {
            log::debug!("tanh dispatch: registering NEON f32 tanh");
            self.tanh_f32 = Slot { kernel: cpu_kernels::neon::tanh_f32, isa: IsaLevel::Neon };
        }
    }

    fn register_avx2(&mut self, f16c: bool) {
        #[cfg(target_arch = "x86_64")]
        {
            log::debug!("tanh dispatch: registering AVX2+FMA f32 tanh");
            self.tanh_f32 = Slot { kernel: cpu_kernels::avx2::tanh_f32, isa: IsaLevel::Avx2 };
            if f16c {
                log::debug!("tanh dispatch: registering F16C f16 tanh/softcap");
                self.tanh_f16 = Some(Slot { kernel: cpu_kernels::avx2::tanh_f16, isa: IsaLevel::Avx2 });
                self.softcap_f16 = Some(Slot { kernel: cpu_kernels::avx2::softcap_f16, isa: IsaLevel::Avx2 });
            }
        }
        #[cfg(not(target_arch = "x86_64"))]
        let _ = f16c;
    }

    fn register_avx512(&mut self) {
        #[cfg(target_arch = "x86_64")]
        {
            log::debug!("tanh dispatch: registering AVX-512F f32 tanh");
            self.tanh_f32 = Slot { kernel: cpu_kernels::avx512::tanh_f32, isa: IsaLevel::Avx512 };
        }
    }

    #[inline(always)]
    pub fn tanh_f32(&self) -> TanhF32Fn {
        self.tanh_f32.kernel
    }

    #[inline(always)]
    pub fn tanh_f16(&self) -> Option<TanhF16Fn> {
        self.tanh_f16.map(|s| s.kernel)
    }

    #[inline(always)]
    pub fn softcap_f16(&self) -> Option<SoftcapF16Fn> {
        self.softcap_f16.map(|s| s.kernel)
    }

    /// ISA tier registered for `{op, precision}`, `None` when the slot is
    /// empty. f32 softcap is never dispatched and reports `Scalar`.
    pub fn isa(&self, op: OpKind, precision: Precision) -> Option<IsaLevel> {
        match (op, precision) {
            (OpKind::Tanh, Precision::F32) => Some(self.tanh_f32.isa),
            (OpKind::Tanh, Precision::F16) => self.tanh_f16.map(|s| s.isa),
            (OpKind::Softcap, Precision::F32) => Some(IsaLevel::Scalar),
            (OpKind::Softcap, Precision::F16) => self.softcap_f16.map(|s| s.isa),
        }
    }
}

impl fmt::Display for DispatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |level: Option<IsaLevel>| level.map_or("unset", |l| l.name());
        write!(
            f,
            "tanh/f32={} tanh/f16={} softcap/f16={}",
            self.tanh_f32.isa,
            show(self.isa(OpKind::Tanh, Precision::F16)),
            show(self.isa(OpKind::Softcap, Precision::F16)),
        )
    }
}
