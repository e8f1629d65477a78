use std::fmt::Debug;

// generic second-order section, direct form I with a monic denominator:
//
// y = b0.x + b1.x[-1] + b2.x[-2] - a1.y[-1] - a2.y[-2]
//
// The history of a whole cascade lives in one slice per channel. Cell n
// reads hist[2n..2n+2] as its input history and hist[2n+2..2n+4] as its
// output history, which is the input history of cell n+1.

pub const Q31_ONE: f64 = 2147483648.0;
pub const Q30_ONE: f64 = 1073741824.0;

/// Round half away from zero and saturate into i32.
pub fn round_q31(x: f64) -> i32 {
    x.round().clamp(i32::MIN as f64, i32::MAX as f64) as i32
}

/// Float cell coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SosCoefs {
    pub b0: f32,
    pub b1: f32,
    pub b2: f32,
    pub a1: f32,
    pub a2: f32,
}

impl SosCoefs {
    pub const fn new(b0: f32, b1: f32, b2: f32, a1: f32, a2: f32) -> Self {
        SosCoefs { b0, b1, b2, a1, a2 }
    }
}

/// Fixed-point cell coefficients: b0, b1, b2 and a2 in Q31, a1 in Q30 so
/// that it can reach magnitude 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SosCoefsQ31 {
    pub b0: i32,
    pub b1: i32,
    pub b2: i32,
    pub a1: i32,
    pub a2: i32,
}

impl SosCoefsQ31 {
    /// from raw two's complement words, the way coefficient tables are written
    pub const fn from_bits(b0: u32, b1: u32, b2: u32, a1: u32, a2: u32) -> Self {
        SosCoefsQ31 {
            b0: b0 as i32,
            b1: b1 as i32,
            b2: b2 as i32,
            a1: a1 as i32,
            a2: a2 as i32,
        }
    }

    pub fn quantize(b0: f64, b1: f64, b2: f64, a1: f64, a2: f64) -> Self {
        SosCoefsQ31 {
            b0: round_q31(b0 * Q31_ONE),
            b1: round_q31(b1 * Q31_ONE),
            b2: round_q31(b2 * Q31_ONE),
            a1: round_q31(a1 * Q30_ONE),
            a2: round_q31(a2 * Q31_ONE),
        }
    }
}

/// Mantissa/exponent gain, value = mantissa / 2^31 * 2^exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedGain {
    pub mantissa: i32,
    pub exponent: u8,
}

impl FixedGain {
    /// largest mantissa, exponent 0, i.e. 1 - 2^-31
    pub const UNITY: FixedGain = FixedGain::new(i32::MAX, 0);

    pub const fn new(mantissa: i32, exponent: u8) -> Self {
        FixedGain { mantissa, exponent }
    }

    /// Smallest exponent that keeps the mantissa representable. `None` for
    /// gains that need an exponent above 31 or aren't finite.
    pub fn from_linear(gain: f64) -> Option<Self> {
        if !gain.is_finite() {
            return None;
        }
        let mut g = gain * Q31_ONE;
        let mut shift = 0u8;
        while g > i32::MAX as f64 {
            g *= 0.5;
            shift += 1;
            if shift > 31 {
                return None;
            }
        }
        Some(FixedGain::new(round_q31(g), shift))
    }

    pub fn linear(&self) -> f64 {
        self.mantissa as f64 / Q31_ONE * (1u64 << self.exponent) as f64
    }

    /// multiply by an integer factor, moving overflow into the exponent
    pub fn scaled(&self, factor: usize) -> Option<Self> {
        let mut mantissa = self.mantissa as i64 * factor as i64;
        let mut exponent = self.exponent;
        while mantissa > i32::MAX as i64 {
            mantissa /= 2;
            exponent += 1;
        }
        if exponent > 31 {
            return None;
        }
        Some(FixedGain::new(mantissa as i32, exponent))
    }
}

/// What a runtime cell type needs to expose to the cascade and the
/// response evaluator.
pub trait CellFormat: Copy + Default + Debug + Send + Sync + 'static {
    type Gain: Copy + Debug + PartialEq + Send + Sync;

    /// b0, b1, b2, a1, a2 as plain numbers
    fn coefficients(&self) -> [f64; 5];

    fn linear_gain(gain: &Self::Gain) -> f64;
}

impl CellFormat for SosCoefs {
    type Gain = f32;

    fn coefficients(&self) -> [f64; 5] {
        [
            self.b0 as f64,
            self.b1 as f64,
            self.b2 as f64,
            self.a1 as f64,
            self.a2 as f64,
        ]
    }

    fn linear_gain(gain: &f32) -> f64 {
        *gain as f64
    }
}

impl CellFormat for SosCoefsQ31 {
    type Gain = FixedGain;

    fn coefficients(&self) -> [f64; 5] {
        [
            self.b0 as f64 / Q31_ONE,
            self.b1 as f64 / Q31_ONE,
            self.b2 as f64 / Q31_ONE,
            self.a1 as f64 / Q30_ONE,
            self.a2 as f64 / Q31_ONE,
        ]
    }

    fn linear_gain(gain: &FixedGain) -> f64 {
        gain.linear()
    }
}

#[inline(always)]
pub fn process_sos_sample(coefs: &SosCoefs, hist: &mut [f32], x: f32) -> f32 {
    let y = (coefs.b0 * x) + (coefs.b1 * hist[0]) + (coefs.b2 * hist[1])
        - (coefs.a1 * hist[2])
        - (coefs.a2 * hist[3]);
    hist[1] = hist[0];
    hist[0] = x;
    y
}

/// Q31 cell in a 64 bit accumulator, rounded back to 32 bit and saturated.
#[inline(always)]
pub fn process_sos_sample_q31(coefs: &SosCoefsQ31, hist: &mut [i32], x: i32) -> i32 {
    let acc = (coefs.b0 as i64 * x as i64)
        .saturating_add(coefs.b1 as i64 * hist[0] as i64)
        .saturating_add(coefs.b2 as i64 * hist[1] as i64)
        // a1 is Q30
        .saturating_sub((coefs.a1 as i64 * hist[2] as i64).saturating_mul(2))
        .saturating_sub(coefs.a2 as i64 * hist[3] as i64);
    let y = saturate_i32(round_shift(acc, 31));
    hist[1] = hist[0];
    hist[0] = x;
    y
}

/// arithmetic right shift, rounding half up
#[inline(always)]
pub fn round_shift(v: i64, shift: u32) -> i64 {
    if shift == 0 {
        v
    } else {
        v.saturating_add(1 << (shift - 1)) >> shift
    }
}

#[inline(always)]
pub fn saturate_i32(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_q31() {
        assert_eq!(round_q31(0.5), 1);
        assert_eq!(round_q31(-0.5), -1);
        assert_eq!(round_q31(1.49), 1);
        assert_eq!(round_q31(Q31_ONE), i32::MAX);
        assert_eq!(round_q31(-Q31_ONE), i32::MIN);
        assert_eq!(round_q31(-3.0 * Q31_ONE), i32::MIN);
    }

    #[test]
    fn test_fixed_gain_split() {
        let unity = FixedGain::from_linear(1.0).unwrap();
        assert_eq!(unity, FixedGain::new(0x4000_0000, 1));
        assert_eq!(unity.linear(), 1.0);

        let eight = FixedGain::from_linear(8.0).unwrap();
        assert_eq!(eight, FixedGain::new(0x4000_0000, 4));

        let half = FixedGain::from_linear(0.5).unwrap();
        assert_eq!(half, FixedGain::new(0x4000_0000, 0));

        assert!(FixedGain::from_linear(f64::INFINITY).is_none());
        assert!(FixedGain::from_linear(2.0f64.powi(40)).is_none());
    }

    #[test]
    fn test_fixed_gain_scaled() {
        // 3 x 0x40000000 overflows once
        let g = FixedGain::new(0x4000_0000, 1).scaled(3).unwrap();
        assert_eq!(g, FixedGain::new(0x6000_0000, 2));
        assert_approx_eq::assert_approx_eq!(g.linear(), 3.0, 1e-9);
        assert_eq!(FixedGain::UNITY.scaled(1).unwrap(), FixedGain::UNITY);
    }

    #[test]
    fn test_float_cell_impulse() {
        // one pole at 0.5
        let coefs = SosCoefs::new(1.0, 0.0, 0.0, -0.5, 0.0);
        let mut hist = [0.0; 4];
        let mut out = Vec::new();
        for n in 0..4 {
            let x = if n == 0 { 1.0 } else { 0.0 };
            let y = process_sos_sample(&coefs, &mut hist, x);
            // output history is kept by the caller
            hist[3] = hist[2];
            hist[2] = y;
            out.push(y);
        }
        assert_eq!(out, vec![1.0, 0.5, 0.25, 0.125]);
    }

    #[test]
    fn test_q31_cell_matches_float() {
        let float = SosCoefs::new(0.2, 0.4, 0.2, -0.6, 0.25);
        let fixed = SosCoefsQ31::quantize(0.2, 0.4, 0.2, -0.6, 0.25);
        let mut hist_f = [0.0f32; 4];
        let mut hist_q = [0i32; 4];
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..256 {
            let x = rng.f32() - 0.5;
            let yf = process_sos_sample(&float, &mut hist_f, x);
            let yq = process_sos_sample_q31(&fixed, &mut hist_q, round_q31(x as f64 * Q31_ONE));
            hist_f[3] = hist_f[2];
            hist_f[2] = yf;
            hist_q[3] = hist_q[2];
            hist_q[2] = yq;
            assert_approx_eq::assert_approx_eq!(yq as f64 / Q31_ONE, yf as f64, 1e-5);
        }
    }

    #[test]
    fn test_q31_saturates() {
        let coefs = SosCoefsQ31::quantize(0.9, 0.9, 0.9, 0.0, 0.0);
        let mut hist = [i32::MAX; 4];
        hist[2] = 0;
        hist[3] = 0;
        assert_eq!(process_sos_sample_q31(&coefs, &mut hist, i32::MAX), i32::MAX);
    }
}
