//! Precompiled cascades that run without the design pipeline.
//!
//! DC remove tables are high-pass filters with a 50 Hz stop edge (60 dB
//! rejection) and a 200 Hz pass edge (0.1 dB ripple), one per family for
//! 8, 12, 16, 24, 32, 48 and 96 kHz. Resampling tables are anti-imaging /
//! anti-aliasing low-passes for an integer ratio against an 8 kHz base rate:
//! they run at 8000.ratio Hz with the pass edge at 3500 Hz and the stop edge
//! at 4000 Hz.

mod dc_remove_coefs;
mod resampling_coefs;

pub use crate::tables::{dc_remove_coefs::*, resampling_coefs::*};

use serde::{Deserialize, Serialize};

use crate::runtime::*;

/// Float and Q31 versions of one filter.
#[derive(Debug)]
pub struct CoefficientTable {
    pub float: &'static [SosCoefs],
    pub fixed: &'static [SosCoefsQ31],
    pub fixed_gain: FixedGain,
}

impl CoefficientTable {
    pub fn float_cascade(&self) -> FloatCascade<'static> {
        FloatCascade::from_table(self.float, 1.0)
    }

    pub fn fixed_cascade(&self) -> FixedCascade<'static> {
        FixedCascade::from_table(self.fixed, self.fixed_gain)
    }
}

/// Prototype the tables were designed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterFamily {
    Butterworth,
    Chebyshev1,
    Chebyshev2,
    Elliptic,
}

/// sampling rates with a DC remove table
pub const DC_REMOVE_RATES: [u32; 7] = [8000, 12000, 16000, 24000, 32000, 48000, 96000];

/// up/downsampling ratios with a resampling table
pub const RESAMPLING_RATIOS: [u32; 6] = [2, 3, 4, 6, 8, 12];

/// DC remove table for `family` at `sampling_rate`, if one is compiled in.
pub fn dc_remove(family: FilterFamily, sampling_rate: u32) -> Option<&'static CoefficientTable> {
    use FilterFamily::*;
    let table = match (family, sampling_rate) {
        (Butterworth, 8000) => &BUTTERWORTH_DC_REMOVE_8000,
        (Chebyshev1, 8000) => &CHEBYSHEV1_DC_REMOVE_8000,
        (Chebyshev2, 8000) => &CHEBYSHEV2_DC_REMOVE_8000,
        (Elliptic, 8000) => &ELLIPTIC_DC_REMOVE_8000,
        (Butterworth, 12000) => &BUTTERWORTH_DC_REMOVE_12000,
        (Chebyshev1, 12000) => &CHEBYSHEV1_DC_REMOVE_12000,
        (Chebyshev2, 12000) => &CHEBYSHEV2_DC_REMOVE_12000,
        (Elliptic, 12000) => &ELLIPTIC_DC_REMOVE_12000,
        (Butterworth, 16000) => &BUTTERWORTH_DC_REMOVE_16000,
        (Chebyshev1, 16000) => &CHEBYSHEV1_DC_REMOVE_16000,
        (Chebyshev2, 16000) => &CHEBYSHEV2_DC_REMOVE_16000,
        (Elliptic, 16000) => &ELLIPTIC_DC_REMOVE_16000,
        (Butterworth, 24000) => &BUTTERWORTH_DC_REMOVE_24000,
        (Chebyshev1, 24000) => &CHEBYSHEV1_DC_REMOVE_24000,
        (Chebyshev2, 24000) => &CHEBYSHEV2_DC_REMOVE_24000,
        (Elliptic, 24000) => &ELLIPTIC_DC_REMOVE_24000,
        (Butterworth, 32000) => &BUTTERWORTH_DC_REMOVE_32000,
        (Chebyshev1, 32000) => &CHEBYSHEV1_DC_REMOVE_32000,
        (Chebyshev2, 32000) => &CHEBYSHEV2_DC_REMOVE_32000,
        (Elliptic, 32000) => &ELLIPTIC_DC_REMOVE_32000,
        (Butterworth, 48000) => &BUTTERWORTH_DC_REMOVE_48000,
        (Chebyshev1, 48000) => &CHEBYSHEV1_DC_REMOVE_48000,
        (Chebyshev2, 48000) => &CHEBYSHEV2_DC_REMOVE_48000,
        (Elliptic, 48000) => &ELLIPTIC_DC_REMOVE_48000,
        (Butterworth, 96000) => &BUTTERWORTH_DC_REMOVE_96000,
        (Chebyshev1, 96000) => &CHEBYSHEV1_DC_REMOVE_96000,
        (Chebyshev2, 96000) => &CHEBYSHEV2_DC_REMOVE_96000,
        (Elliptic, 96000) => &ELLIPTIC_DC_REMOVE_96000,
        _ => return None,
    };
    Some(table)
}

/// Low-pass for `ratio` times up- or downsampling against 8 kHz.
pub fn resampling(family: FilterFamily, ratio: u32) -> Option<&'static CoefficientTable> {
    use FilterFamily::*;
    let table = match (family, ratio) {
        (Butterworth, 2) => &BUTTERWORTH_RESAMPLING_RATIO2,
        (Chebyshev1, 2) => &CHEBYSHEV1_RESAMPLING_RATIO2,
        (Chebyshev2, 2) => &CHEBYSHEV2_RESAMPLING_RATIO2,
        (Elliptic, 2) => &ELLIPTIC_RESAMPLING_RATIO2,
        (Butterworth, 3) => &BUTTERWORTH_RESAMPLING_RATIO3,
        (Chebyshev1, 3) => &CHEBYSHEV1_RESAMPLING_RATIO3,
        (Chebyshev2, 3) => &CHEBYSHEV2_RESAMPLING_RATIO3,
        (Elliptic, 3) => &ELLIPTIC_RESAMPLING_RATIO3,
        (Butterworth, 4) => &BUTTERWORTH_RESAMPLING_RATIO4,
        (Chebyshev1, 4) => &CHEBYSHEV1_RESAMPLING_RATIO4,
        (Chebyshev2, 4) => &CHEBYSHEV2_RESAMPLING_RATIO4,
        (Elliptic, 4) => &ELLIPTIC_RESAMPLING_RATIO4,
        (Butterworth, 6) => &BUTTERWORTH_RESAMPLING_RATIO6,
        (Chebyshev1, 6) => &CHEBYSHEV1_RESAMPLING_RATIO6,
        (Chebyshev2, 6) => &CHEBYSHEV2_RESAMPLING_RATIO6,
        (Elliptic, 6) => &ELLIPTIC_RESAMPLING_RATIO6,
        (Butterworth, 8) => &BUTTERWORTH_RESAMPLING_RATIO8,
        (Chebyshev1, 8) => &CHEBYSHEV1_RESAMPLING_RATIO8,
        (Chebyshev2, 8) => &CHEBYSHEV2_RESAMPLING_RATIO8,
        (Elliptic, 8) => &ELLIPTIC_RESAMPLING_RATIO8,
        (Butterworth, 12) => &BUTTERWORTH_RESAMPLING_RATIO12,
        (Chebyshev1, 12) => &CHEBYSHEV1_RESAMPLING_RATIO12,
        (Chebyshev2, 12) => &CHEBYSHEV2_RESAMPLING_RATIO12,
        (Elliptic, 12) => &ELLIPTIC_RESAMPLING_RATIO12,
        _ => return None,
    };
    Some(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mem_pool::{MemPool, PoolKind};

    const FAMILIES: [FilterFamily; 4] = [
        FilterFamily::Butterworth,
        FilterFamily::Chebyshev1,
        FilterFamily::Chebyshev2,
        FilterFamily::Elliptic,
    ];

    fn dc_tables() -> Vec<(&'static CoefficientTable, f32)> {
        let mut tables = Vec::new();
        for family in FAMILIES.iter() {
            for fs in DC_REMOVE_RATES.iter() {
                tables.push((dc_remove(*family, *fs).unwrap(), *fs as f32));
            }
        }
        tables
    }

    fn resampling_tables() -> Vec<(&'static CoefficientTable, f32)> {
        let mut tables = Vec::new();
        for family in FAMILIES.iter() {
            for ratio in RESAMPLING_RATIOS.iter() {
                tables.push((resampling(*family, *ratio).unwrap(), 8000.0 * *ratio as f32));
            }
        }
        tables
    }

    #[test]
    fn test_lookup() {
        for family in FAMILIES.iter() {
            for fs in DC_REMOVE_RATES.iter() {
                let table = dc_remove(*family, *fs).unwrap();
                assert!(!table.fixed.is_empty());
                assert_eq!(table.float.len(), table.fixed.len());
            }
            for ratio in RESAMPLING_RATIOS.iter() {
                let table = resampling(*family, *ratio).unwrap();
                assert_eq!(table.float.len(), table.fixed.len());
            }
            assert!(dc_remove(*family, 44100).is_none());
            assert!(resampling(*family, 5).is_none());
        }
        assert_eq!(dc_remove(FilterFamily::Chebyshev1, 48000).unwrap().fixed.len(), 3);
        assert_eq!(dc_remove(FilterFamily::Elliptic, 8000).unwrap().fixed.len(), 2);
        assert_eq!(resampling(FilterFamily::Butterworth, 2).unwrap().fixed.len(), 23);
        assert!(std::ptr::eq(
            resampling(FilterFamily::Chebyshev1, 2).unwrap(),
            &CHEBYSHEV1_RESAMPLING_RATIO2
        ));
    }

    #[test]
    fn test_dc_remove_response() {
        for (table, fs) in dc_tables() {
            for grid in [table.float_cascade().response(), table.fixed_cascade().response()].iter() {
                // elliptic tables only reach the 60 dB floor, the others null dc
                assert!(grid.magnitude_db(0.0, fs) < -59.5, "{} Hz", fs);
                // passband within the ripple
                assert_approx_eq::assert_approx_eq!(grid.magnitude_db(1000.0, fs), 0.0, 0.15);
            }
        }
    }

    #[test]
    fn test_resampling_response() {
        for (table, fs) in resampling_tables() {
            for grid in [table.float_cascade().response(), table.fixed_cascade().response()].iter() {
                assert_approx_eq::assert_approx_eq!(grid.magnitude_db(1000.0, fs), 0.0, 0.15);
                assert!(grid.magnitude_db(4800.0, fs) < -60.0, "{} Hz", fs);
            }
        }
    }

    #[test]
    fn test_fixed_and_float_tables_agree() {
        let pool = MemPool::unbounded();
        let mut rng = fastrand::Rng::with_seed(3);
        let input_f: Vec<f32> = (0..1024).map(|_| (rng.f32() - 0.5) * 0.25).collect();
        let input_q: Vec<i32> = input_f.iter().map(|x| round_q31(*x as f64 * Q31_ONE)).collect();

        for (table, _) in dc_tables().into_iter().chain(resampling_tables()) {
            let mut ctx_f =
                FilterContext::<F32>::init(table.float_cascade(), 1, 1, 1, &pool, PoolKind::Tcm).unwrap();
            let mut ctx_q =
                FilterContext::<Q31>::init(table.fixed_cascade(), 1, 1, 1, &pool, PoolKind::Tcm).unwrap();

            let mut out_f = vec![0.0; 1024];
            let mut out_q = vec![0; 1024];
            ctx_f.process(&input_f, &mut out_f);
            ctx_q.process(&input_q, &mut out_q);
            for (q, f) in out_q.iter().zip(out_f.iter()) {
                assert_approx_eq::assert_approx_eq!(*q as f64 / Q31_ONE, *f as f64, 1e-3);
            }
        }
    }

    #[test]
    fn test_dc_is_removed() {
        let pool = MemPool::unbounded();
        let table = dc_remove(FilterFamily::Butterworth, 16000).unwrap();
        let mut ctx = FilterContext::<Q15>::init(table.fixed_cascade(), 2, 1, 1, &pool, PoolKind::Tcm).unwrap();
        // half a second of a constant offset on both channels
        let input = vec![8000i16; 16000];
        let mut output = vec![0i16; 16000];
        assert_eq!(ctx.process(&input, &mut output), 8000);
        assert!(output[15998].abs() <= 1);
        assert!(output[15999].abs() <= 1);
    }

    #[test]
    fn test_upsampling_through_lowpass() {
        let pool = MemPool::unbounded();
        let mut ctx = FilterContext::<F32>::init(
            CHEBYSHEV1_RESAMPLING_RATIO2.float_cascade(),
            1,
            1,
            2,
            &pool,
            PoolKind::RamInt,
        )
        .unwrap();
        // constant input comes out at twice the rate with the same level
        let input = vec![0.25f32; 400];
        let mut output = vec![0.0; 800];
        assert_eq!(ctx.process(&input, &mut output), 800);
        assert_approx_eq::assert_approx_eq!(output[799], 0.25, 1e-3);
    }
}
