//! Capability dispatch for the `tanh` family.
//!
//! The host is probed once and the resulting [`DispatchTable`] is cached for
//! the process lifetime; kernels are never re-selected per call.
//!
//! Configuration:
//! - `TANH_KERNELS_ISA`: highest tier to use (`scalar`, `neon`, `avx2`,
//!   `avx512`). Read once when the table is built; invalid values are logged
//!   and ignored.

pub mod hw_info;
pub mod table;

pub use hw_info::IsaFeatures;
pub use table::{DispatchTable, OpKind, Precision, Slot, SoftcapF16Fn, TanhF16Fn, TanhF32Fn};

use std::env;
use std::sync::OnceLock;

use crate::cpu_kernels::IsaLevel;
use crate::error::KernelResult;

/// Environment variable capping the ISA tier of the global table.
pub const ISA_OVERRIDE_ENV: &str = "TANH_KERNELS_ISA";

static TABLE: OnceLock<DispatchTable> = OnceLock::new();

/// Get the global dispatch table (detected once, cached for process lifetime).
pub fn dispatch_table() -> &'static DispatchTable {
    TABLE.get_or_init(build_table)
}

/// Parse an ISA ceiling override. `None` when the variable is unset.
pub fn parse_isa_override(value: Option<&str>) -> KernelResult<Option<IsaLevel>> {
    match value {
        None => Ok(None),
        Some(v) => v.parse::<IsaLevel>().map(Some),
    }
}

fn isa_ceiling() -> IsaLevel {
    let value = env::var(ISA_OVERRIDE_ENV).ok();
    match parse_isa_override(value.as_deref()) {
        Ok(Some(level)) => {
            log::info!("{ISA_OVERRIDE_ENV} caps tanh kernels at {level}");
            level
        }
        Ok(None) => IsaLevel::Avx512,
        Err(err) => {
            log::warn!("ignoring {ISA_OVERRIDE_ENV}: {err}");
            IsaLevel::Avx512
        }
    }
}

fn build_table() -> DispatchTable {
    let features = IsaFeatures::detect();
    let ceiling = isa_ceiling();
    // SAFETY: features come from the host probe.
    let table = unsafe { DispatchTable::from_features(features, ceiling) };
    log::info!("tanh dispatch: host {features}, selected {table}");
    table
}
