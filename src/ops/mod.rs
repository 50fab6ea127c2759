//! Slice-level activation operators.
//!
//! - **tanh**: rational approximation, ISA-dispatched
//! - **softcap**: `tanh(x / cap) * cap` with the platform `tanh`
//!
//! Out-of-place variants take equal-length input and output slices; in-place
//! variants overwrite their argument.

pub mod softcap;
pub mod tanh;
