//! Hardware capability probe.
//!
//! Collects the ISA feature flags that decide which `tanh` kernels can be
//! registered. The probe runs once, when the dispatch table is built.

use std::fmt;

use crate::cpu_kernels::IsaLevel;

/// ISA feature set relevant to kernel selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsaFeatures {
    pub avx2: bool,
    pub fma: bool,
    pub f16c: bool,
    pub avx512f: bool,
    pub neon: bool,
}

impl fmt::Display for IsaFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut feats = Vec::new();
        if self.avx512f {
            feats.push("AVX-512F");
        }
        if self.avx2 {
            feats.push("AVX2");
        }
        if self.fma {
            feats.push("FMA");
        }
        if self.f16c {
            feats.push("F16C");
        }
        if self.neon {
            feats.push("NEON");
        }
        if feats.is_empty() {
            feats.push("Scalar");
        }
        write!(f, "{}", feats.join("+"))
    }
}

impl IsaFeatures {
    /// No accelerated features; only the generic kernel is usable.
    pub const NONE: IsaFeatures = IsaFeatures {
        avx2: false,
        fma: false,
        f16c: false,
        avx512f: false,
        neon: false,
    };

    /// Detect ISA features of the current machine.
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            return IsaFeatures {
                avx2: is_x86_feature_detected!("avx2"),
                fma: is_x86_feature_detected!("fma"),
                f16c: is_x86_feature_detected!("f16c"),
                avx512f: is_x86_feature_detected!("avx512f"),
                neon: false,
            };
        }
        #[cfg(target_arch = "aarch64")]
        {
            return IsaFeatures {
                neon: std::arch::is_aarch64_feature_detected!("neon"),
                ..IsaFeatures::NONE
            };
        }
        #[allow(unreachable_code)]
        IsaFeatures::NONE
    }

    /// Highest tier these features can run, ignoring any ceiling.
    pub fn best_level(&self) -> IsaLevel {
        if self.avx512f {
            IsaLevel::Avx512
        } else if self.avx2 && self.fma {
            IsaLevel::Avx2
        } else if self.neon {
            IsaLevel::Neon
        } else {
            IsaLevel::Scalar
        }
    }
}
