//! Biquad IIR filters from design to streaming.
//!
//! The design side turns cookbook band descriptions into cells, regroups
//! poles and zeros into well-conditioned sections, normalizes the gain
//! distribution and quantizes to Q31 or float with a stability check. The
//! runtime side runs a cascade over interleaved 16 bit, 32 bit or float
//! audio, optionally with zero-stuffing upsampling and decimation.

pub mod design;
pub mod equalizer;
pub mod error;
pub mod mem_pool;
pub mod runtime;
pub mod tables;

pub use crate::design::{
    design, normalize, quantize, sort_and_repair, BiquadConfig, IirFilter, IirType,
    NormalizeMode, SampleFormat, SortMode, Steepness,
};
pub use crate::equalizer::{EqualizerConfig, IirEqualizer};
pub use crate::error::{Error, Result};
pub use crate::mem_pool::{MemPool, PoolKind};
pub use crate::runtime::{FilterContext, F32, Q15, Q31};
