use serde::{Deserialize, Serialize};

use crate::design::roots::*;
use crate::error::{Error, Result};

/// cookbook filter shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IirType {
    Notch,
    Peaking,
    LowPass,
    HighPass,
    BandPass,
    LowShelf,
    HighShelf,
}

/// how the steepness value is to be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Steepness {
    #[default]
    Q,
    /// bandwidth in Hz between the -3 dB points
    Bandwidth,
}

/// One band, as a tuning tool would describe it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiquadConfig {
    pub iir_type: IirType,
    #[serde(default)]
    pub steepness_mode: Steepness,
    pub steepness: f32,
    pub center_frequency: f32,
    /// only used by peaking and shelf shapes
    #[serde(default)]
    pub gain_db: f32,
}

impl BiquadConfig {
    pub fn new(iir_type: IirType, q: f32, center_frequency: f32, gain_db: f32) -> Self {
        BiquadConfig {
            iir_type,
            steepness_mode: Steepness::Q,
            steepness: q,
            center_frequency,
            gain_db,
        }
    }

    pub fn with_bandwidth(
        iir_type: IirType,
        bandwidth: f32,
        center_frequency: f32,
        gain_db: f32,
    ) -> Self {
        BiquadConfig {
            iir_type,
            steepness_mode: Steepness::Bandwidth,
            steepness: bandwidth,
            center_frequency,
            gain_db,
        }
    }
}

/// A biquad in design form: both polynomials and their roots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadCell {
    pub num: Quad,
    pub den: Quad,
    pub zeros: [Root; 2],
    pub poles: [Root; 2],
}

impl BiquadCell {
    pub fn from_quads(num: Quad, den: Quad) -> Result<Self> {
        Ok(BiquadCell {
            num,
            den,
            zeros: quad_roots(&num)?,
            poles: quad_roots(&den)?,
        })
    }

    /// pass-through, zeros and poles all at the origin
    pub fn flat() -> Self {
        BiquadCell {
            num: Quad::unity(),
            den: Quad::unity(),
            zeros: [Root::real(0.0, 1.0), Root::real(0.0, 1.0)],
            poles: [Root::real(0.0, 1.0), Root::real(0.0, 1.0)],
        }
    }

    /// |H(e^{j.theta})|, leading denominator coefficient included
    pub fn magnitude(&self, theta: f32) -> f32 {
        self.num.eval(theta).norm() / self.den.eval(theta).norm()
    }
}

/// Q from a bandwidth in Hz.
///
/// With r = bw / f0 the band edges sit at f0.a and f0/a where
/// a = (r + sqrt(r^2 + 4)) / 2, so the bandwidth in octaves is 2.log2(a)
/// and Q = 1 / (2.sinh(ln(a).w0/sin(w0))).
fn bandwidth_to_q(bandwidth: f32, center: f32, omega: f32, sn: f32) -> Result<f32> {
    let rbw = bandwidth / center;
    let mut q = rbw * rbw + 4.0;
    q = if q < 0.0 { 0.0 } else { 0.5 * (rbw + q.sqrt()) };
    q = if q <= 0.0 {
        0.0
    } else {
        0.5 / (q.ln() * omega / sn).sinh()
    };

    if !q.is_finite() || q <= 0.0 {
        return Err(Error::config(format!(
            "bandwidth {} Hz at {} Hz gives no usable Q ({})",
            bandwidth, center, q
        )));
    }
    Ok(q)
}

/// Bilinear-transform (RBJ cookbook) design of a single cell.
///
/// Numeric inputs aren't range checked here, the equalizer config does
/// that. Only a bandwidth that maps to a non-positive or infinite Q is
/// refused.
pub fn design(config: &BiquadConfig, sampling_rate: f32) -> Result<BiquadCell> {
    let omega = 2.0 * std::f32::consts::PI * config.center_frequency / sampling_rate;
    let sn = omega.sin();
    let cs = omega.cos();

    let q = match config.steepness_mode {
        Steepness::Q => config.steepness,
        Steepness::Bandwidth => bandwidth_to_q(config.steepness, config.center_frequency, omega, sn)?,
    };
    let alpha = sn / (2.0 * q);

    // shared by the shapes without gain
    let plain_den = Quad::new(1.0 + alpha, -2.0 * cs, 1.0 - alpha);

    let (num, den) = match config.iir_type {
        IirType::LowPass => {
            let b1 = 1.0 - cs;
            (Quad::new(0.5 * b1, b1, 0.5 * b1), plain_den)
        }
        IirType::HighPass => {
            let b1 = -1.0 - cs;
            (Quad::new(-0.5 * b1, b1, -0.5 * b1), plain_den)
        }
        IirType::BandPass => (Quad::new(alpha, 0.0, -alpha), plain_den),
        IirType::Notch => (Quad::new(1.0, -2.0 * cs, 1.0), plain_den),
        IirType::Peaking => {
            let a = 10.0f32.powf(config.gain_db / 40.0);
            let b1 = -2.0 * cs;
            (
                Quad::new(1.0 + alpha * a, b1, 1.0 - alpha * a),
                Quad::new(1.0 + alpha / a, b1, 1.0 - alpha / a),
            )
        }
        IirType::LowShelf | IirType::HighShelf => {
            let a = 10.0f32.powf(config.gain_db / 40.0);
            let t0 = a + 1.0;
            let t1 = a - 1.0;
            let t2 = 2.0 * a.sqrt() * alpha;
            if config.iir_type == IirType::LowShelf {
                let t3 = t0 - t1 * cs;
                let t4 = t0 + t1 * cs;
                (
                    Quad::new(a * (t3 + t2), 2.0 * a * (t1 - t0 * cs), a * (t3 - t2)),
                    Quad::new(t4 + t2, -2.0 * (t1 + t0 * cs), t4 - t2),
                )
            } else {
                let t3 = t0 + t1 * cs;
                let t4 = t0 - t1 * cs;
                (
                    Quad::new(a * (t3 + t2), -2.0 * a * (t1 + t0 * cs), a * (t3 - t2)),
                    Quad::new(t4 + t2, 2.0 * (t1 - t0 * cs), t4 - t2),
                )
            }
        }
    };

    BiquadCell::from_quads(num, den)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TYPES: [IirType; 7] = [
        IirType::Notch,
        IirType::Peaking,
        IirType::LowPass,
        IirType::HighPass,
        IirType::BandPass,
        IirType::LowShelf,
        IirType::HighShelf,
    ];

    fn db(x: f32) -> f32 {
        20.0 * x.log10()
    }

    #[test]
    fn test_lowpass_quarter_rate_is_minus_3db() {
        let cell = design(&BiquadConfig::new(IirType::LowPass, 0.707, 12000.0, 0.0), 48000.0).unwrap();
        let mag = cell.magnitude(std::f32::consts::FRAC_PI_2);
        assert_approx_eq::assert_approx_eq!(db(mag), -3.01, 0.05);
        // unity at dc, nothing at nyquist
        assert_approx_eq::assert_approx_eq!(cell.magnitude(0.0), 1.0, 1e-4);
        assert!(cell.magnitude(std::f32::consts::PI) < 1e-3);
    }

    #[test]
    fn test_poles_inside_unit_circle() {
        let sr = 48000.0;
        for iir_type in ALL_TYPES.iter() {
            for q in [0.5, 0.707, 1.0, 4.0, 10.0].iter() {
                for gain in [-12.0, 0.0, 12.0].iter() {
                    let mut f = 0.002;
                    while f <= 0.498 {
                        let cfg = BiquadConfig::new(*iir_type, *q, f * sr, *gain);
                        let cell = design(&cfg, sr).unwrap();
                        for p in cell.poles.iter() {
                            assert!(
                                p.modulus() < 1.0,
                                "{:?} q {} f {} gain {}: pole {:?}",
                                iir_type,
                                q,
                                f,
                                gain,
                                p
                            );
                        }
                        f += 0.008;
                    }
                }
            }
        }
    }

    #[test]
    fn test_peaking_gain_at_center() {
        let cell = design(&BiquadConfig::new(IirType::Peaking, 2.0, 1000.0, 6.0), 48000.0).unwrap();
        let theta = 2.0 * std::f32::consts::PI * 1000.0 / 48000.0;
        assert_approx_eq::assert_approx_eq!(db(cell.magnitude(theta)), 6.0, 0.01);
        assert_approx_eq::assert_approx_eq!(db(cell.magnitude(0.0)), 0.0, 0.01);
    }

    #[test]
    fn test_shelves() {
        let sr = 48000.0;
        let low = design(&BiquadConfig::new(IirType::LowShelf, 0.707, 2000.0, 9.0), sr).unwrap();
        let high = design(&BiquadConfig::new(IirType::HighShelf, 0.707, 2000.0, 9.0), sr).unwrap();
        assert_approx_eq::assert_approx_eq!(db(low.magnitude(0.0)), 9.0, 0.01);
        assert_approx_eq::assert_approx_eq!(db(low.magnitude(std::f32::consts::PI)), 0.0, 0.01);
        assert_approx_eq::assert_approx_eq!(db(high.magnitude(0.0)), 0.0, 0.01);
        assert_approx_eq::assert_approx_eq!(db(high.magnitude(std::f32::consts::PI)), 9.0, 0.01);
    }

    #[test]
    fn test_notch_and_bandpass() {
        let sr = 16000.0;
        let theta = 2.0 * std::f32::consts::PI * 1000.0 / sr;
        let notch = design(&BiquadConfig::new(IirType::Notch, 1.0, 1000.0, 0.0), sr).unwrap();
        assert!(notch.magnitude(theta) < 1e-3);
        assert!(notch.zeros.iter().all(|z| z.is_complex()));
        let bp = design(&BiquadConfig::new(IirType::BandPass, 1.0, 1000.0, 0.0), sr).unwrap();
        assert_approx_eq::assert_approx_eq!(bp.magnitude(theta), 1.0, 1e-3);
    }

    #[test]
    fn test_plain_shapes_ignore_gain() {
        let sr = 48000.0;
        for iir_type in [IirType::LowPass, IirType::HighPass, IirType::BandPass, IirType::Notch].iter() {
            let flat = design(&BiquadConfig::new(*iir_type, 2.0, 3000.0, 0.0), sr).unwrap();
            let loud = design(&BiquadConfig::new(*iir_type, 2.0, 3000.0, 12.0), sr).unwrap();
            assert_eq!(flat, loud, "{:?}", iir_type);
        }

        // notch zeros sit on the unit circle at the center frequency
        let notch = design(&BiquadConfig::new(IirType::Notch, 2.0, 3000.0, 0.0), sr).unwrap();
        let w0 = 2.0 * std::f32::consts::PI * 3000.0 / sr;
        assert_eq!(notch.num.q0, 1.0);
        assert_eq!(notch.num.q2, 1.0);
        assert_approx_eq::assert_approx_eq!(notch.num.q1, -2.0 * w0.cos(), 1e-6);
        assert_eq!(notch.num.q1, notch.den.q1);
        let z = notch.zeros[0].position().unwrap();
        assert_approx_eq::assert_approx_eq!(z.norm(), 1.0, 1e-5);
        assert_approx_eq::assert_approx_eq!(z.arg().abs(), w0, 1e-4);
    }

    #[test]
    fn test_bandwidth_matches_equivalent_q() {
        let sr = 48000.0;
        // 1 kHz wide around 2 kHz
        let cfg = BiquadConfig::with_bandwidth(IirType::BandPass, 1000.0, 2000.0, 0.0);
        let cell = design(&cfg, sr).unwrap();
        // the -3 dB points of a bandpass sit at f0.a and f0/a
        let rbw = 0.5f32;
        let a = 0.5 * (rbw + (rbw * rbw + 4.0).sqrt());
        let to_theta = |f: f32| 2.0 * std::f32::consts::PI * f / sr;
        assert_approx_eq::assert_approx_eq!(db(cell.magnitude(to_theta(2000.0 * a))), -3.01, 0.1);
        assert_approx_eq::assert_approx_eq!(db(cell.magnitude(to_theta(2000.0 / a))), -3.01, 0.1);
    }

    #[test]
    fn test_degenerate_bandwidth_rejected() {
        let sr = 48000.0;
        let zero_bw = BiquadConfig::with_bandwidth(IirType::Peaking, 0.0, 1000.0, 3.0);
        assert!(matches!(design(&zero_bw, sr), Err(Error::Config(_))));
        let negative_bw = BiquadConfig::with_bandwidth(IirType::Peaking, -200.0, 1000.0, 3.0);
        assert!(matches!(design(&negative_bw, sr), Err(Error::Config(_))));
    }

    #[test]
    fn test_flat_cell() {
        let flat = BiquadCell::flat();
        assert_eq!(flat.magnitude(1.0), 1.0);
        assert_eq!(flat.poles[0].modulus(), 0.0);
    }
}
