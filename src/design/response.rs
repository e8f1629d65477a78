use crate::design::roots::Quad;
use crate::design::IirFilter;

/// angular resolution of the evaluator over a full turn
pub const IIR_RESPONSE_ACCURACY: usize = 2048;

/// number of grid points, covering [0, pi)
pub const RESPONSE_POINTS: usize = IIR_RESPONSE_ACCURACY / 2;

// below this |D|^2 a point is left alone
const DEN_FLOOR: f32 = 1e-10;

// -200 dB, keeps exact nulls finite
const MODULE2_FLOOR: f32 = 1e-20;

/// Squared magnitude response on a fixed grid, accumulated cell by cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseGrid {
    module2: Vec<f32>,
}

impl Default for ResponseGrid {
    fn default() -> Self {
        ResponseGrid::new()
    }
}

impl ResponseGrid {
    pub fn new() -> Self {
        ResponseGrid {
            module2: vec![1.0; RESPONSE_POINTS],
        }
    }

    pub fn reset(&mut self) {
        self.module2.iter_mut().for_each(|m| *m = 1.0);
    }

    /// angle of grid point i
    pub fn theta(i: usize) -> f32 {
        2.0 * std::f32::consts::PI / IIR_RESPONSE_ACCURACY as f32 * i as f32
    }

    /// Multiply in one cell (monic denominator) and return the running
    /// maximum over the grid.
    pub fn accumulate(&mut self, b0: f32, b1: f32, b2: f32, a1: f32, a2: f32) -> f32 {
        let num = Quad::new(b0, b1, b2);
        let den = Quad::new(1.0, a1, a2);
        let mut max = 0.0f32;
        for (i, m) in self.module2.iter_mut().enumerate() {
            let theta = ResponseGrid::theta(i);
            let n = num.eval(theta).norm_sqr();
            let d = den.eval(theta).norm_sqr();
            if d.abs() > DEN_FLOOR {
                *m *= n / d;
            }
            max = max.max(*m);
        }
        max
    }

    pub fn scale(&mut self, k: f32) {
        self.module2.iter_mut().for_each(|m| *m *= k);
    }

    pub fn max(&self) -> f32 {
        self.module2.iter().fold(0.0, |acc, m| acc.max(*m))
    }

    pub fn points(&self) -> &[f32] {
        &self.module2
    }

    /// magnitude in dB at the grid point closest to `freq`
    pub fn magnitude_db(&self, freq: f32, sampling_rate: f32) -> f32 {
        let pos = freq / sampling_rate * IIR_RESPONSE_ACCURACY as f32;
        let i = (pos.round().max(0.0) as usize).min(RESPONSE_POINTS - 1);
        10.0 * self.module2[i].max(MODULE2_FLOOR).log10()
    }
}

/// what `normalize` should do with response peaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizeMode {
    /// only evaluate the response
    ComputeOnly,
    /// fold peaks above unity into the global gain
    #[default]
    ComputeAndNormalize,
}

/// result of a normalization pass
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub gain: f32,
    pub response: ResponseGrid,
}

/// Make every denominator monic and, when asked to, keep each cell's
/// accumulated response at or below unity. Whatever gets scaled out of the
/// numerators ends up in the returned global gain, so
/// `gain * cascade(after) == cascade(before)`.
pub fn normalize(filter: &mut IirFilter, mode: NormalizeMode) -> Normalized {
    let mut response = ResponseGrid::new();
    let mut global_gain = 1.0f32;

    for cell in filter.cells_mut().iter_mut() {
        let norm = 1.0 / cell.den.q0;
        let b0 = cell.num.q0 * norm;
        let b1 = cell.num.q1 * norm;
        let b2 = cell.num.q2 * norm;
        let a1 = cell.den.q1 * norm;
        let a2 = cell.den.q2 * norm;
        let max = response.accumulate(b0, b1, b2, a1, a2);

        let mut num_norm = norm;
        if mode == NormalizeMode::ComputeAndNormalize && max > 1.0 {
            response.scale(1.0 / max);
            let g = max.sqrt();
            global_gain *= g;
            num_norm /= g;
        }

        cell.num = Quad::new(cell.num.q0 * num_norm, cell.num.q1 * num_norm, cell.num.q2 * num_norm);
        cell.den = Quad::new(1.0, a1, a2);
        // keep root gains in step with the scaled polynomials
        cell.zeros[0].scale_gain(num_norm);
        cell.poles[0].scale_gain(norm);
    }

    log::debug!(
        "normalized {} cells, global gain {}",
        filter.len(),
        global_gain
    );

    Normalized {
        gain: global_gain,
        response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::*;

    #[test]
    fn test_flat_grid() {
        let mut grid = ResponseGrid::new();
        assert_eq!(grid.points().len(), 1024);
        assert_eq!(grid.accumulate(1.0, 0.0, 0.0, 0.0, 0.0), 1.0);
        grid.scale(4.0);
        assert_approx_eq::assert_approx_eq!(grid.magnitude_db(1000.0, 48000.0), 6.0206, 1e-3);
    }

    #[test]
    fn test_accumulate_composes() {
        let mut grid = ResponseGrid::new();
        // two identical moving averages
        grid.accumulate(0.5, 0.5, 0.0, 0.0, 0.0);
        let max = grid.accumulate(0.5, 0.5, 0.0, 0.0, 0.0);
        assert_approx_eq::assert_approx_eq!(max, 1.0, 1e-6);
        // |cos(theta/2)|^4 at a quarter of the rate
        assert_approx_eq::assert_approx_eq!(grid.points()[512], 0.25, 1e-5);
    }

    #[test]
    fn test_gain_round_trip() {
        let sr = 48000.0;
        let configs = [
            BiquadConfig::new(IirType::Peaking, 1.5, 1000.0, 12.0),
            BiquadConfig::new(IirType::LowShelf, 0.707, 300.0, 6.0),
            BiquadConfig::new(IirType::LowPass, 2.0, 8000.0, 0.0),
        ];
        let original = IirFilter::design(&configs, sr).unwrap();
        let mut filter = original.clone();
        let normalized = normalize(&mut filter, NormalizeMode::ComputeAndNormalize);
        assert!(normalized.gain > 1.0);
        assert!(normalized.response.max() <= 1.0 + 1e-5);

        for f in [0.0, 300.0, 1000.0, 8000.0].iter() {
            let theta = 2.0 * std::f32::consts::PI * f / sr;
            let before = 20.0 * original.magnitude(theta).log10();
            let after = 20.0 * (normalized.gain * filter.magnitude(theta)).log10();
            assert!((before - after).abs() < 0.1, "{} Hz: {} vs {}", f, before, after);
        }
        for cell in filter.cells().iter() {
            assert_eq!(cell.den.q0, 1.0);
        }
    }

    #[test]
    fn test_compute_only_keeps_gain() {
        let configs = [BiquadConfig::new(IirType::Peaking, 1.0, 1000.0, 12.0)];
        let mut filter = IirFilter::design(&configs, 48000.0).unwrap();
        let normalized = normalize(&mut filter, NormalizeMode::ComputeOnly);
        assert_eq!(normalized.gain, 1.0);
        // +12 dB peak shows up in the grid
        assert_approx_eq::assert_approx_eq!(10.0 * normalized.response.max().log10(), 12.0, 0.1);
    }
}
