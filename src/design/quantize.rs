use serde::{Deserialize, Serialize};

use crate::design::{IirFilter, ResponseGrid};
use crate::error::{Error, Result};
use crate::mem_pool::{MemPool, PoolKind};
use crate::runtime::*;

// largest pole modulus left alone by the stability pass
const MAX_POLE_MODULUS: f64 = 0.999;

/// Sample format a cascade is specialized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleFormat {
    Fixed16,
    Fixed32,
    Float,
}

impl SampleFormat {
    pub fn is_fixed(&self) -> bool {
        !matches!(self, SampleFormat::Float)
    }
}

/// A cascade owned by the design call that produced it.
#[derive(Debug)]
pub enum DesignedCascade {
    Fixed(FixedCascade<'static>),
    Float(FloatCascade<'static>),
}

impl DesignedCascade {
    pub fn len(&self) -> usize {
        match self {
            DesignedCascade::Fixed(c) => c.len(),
            DesignedCascade::Float(c) => c.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
pub struct Quantized {
    pub cascade: DesignedCascade,
    /// squared magnitude of the final cascade, global gain included
    pub response: ResponseGrid,
}

// scale factor that brings 0, b0, b1, b2 into the Q31 range
fn headroom_scale(b: &[f64; 3]) -> f64 {
    let b_min = b.iter().fold(0.0f64, |acc, x| acc.min(*x)) * Q31_ONE;
    let b_max = b.iter().fold(0.0f64, |acc, x| acc.max(*x)) * Q31_ONE;
    let mut coef = 1.0;
    if b_min < -Q31_ONE {
        coef = -Q31_ONE / b_min;
    }
    if b_max > i32::MAX as f64 {
        coef = coef.min(i32::MAX as f64 / b_max);
    }
    coef
}

// largest pole modulus of 1 + a1.z^-1 + a2.z^-2
fn pole_modulus(a1: f64, a2: f64) -> f64 {
    let delta = a1 * a1 - 4.0 * a2;
    if delta < 0.0 {
        a2.sqrt()
    } else {
        (a1.abs() + delta.sqrt()) * 0.5
    }
}

// move both poles radially inside the circle of radius 0.999
fn pull_poles_inside(cell: usize, a1: f64, a2: f64) -> (f64, f64) {
    let modulus = pole_modulus(a1, a2);
    if modulus > MAX_POLE_MODULUS {
        let coef = MAX_POLE_MODULUS / modulus;
        log::warn!(
            "cell {}: pole modulus {:.4} pulled back to {}",
            cell,
            modulus,
            MAX_POLE_MODULUS
        );
        (a1 * coef, a2 * coef * coef)
    } else {
        (a1, a2)
    }
}

fn check_stability(cell: usize, a1: f64, a2: f64) -> Result<()> {
    let modulus = pole_modulus(a1, a2);
    let stable = modulus < 1.0 && a2 <= 1.0 && a2 >= a1 - 1.0 && a2 >= -a1 - 1.0;
    if stable {
        Ok(())
    } else {
        log::error!(
            "cell {} unstable after quantization: a1 {}, a2 {}, pole modulus {}",
            cell,
            a1,
            a2,
            modulus
        );
        Err(Error::config(format!("cell {} is not stable", cell)))
    }
}

fn split_gain(gain: f64) -> Result<FixedGain> {
    FixedGain::from_linear(gain)
        .ok_or_else(|| Error::config(format!("global gain {} out of range", gain)))
}

/// Turn a design-form filter into a runtime cascade for `format`, allocated
/// from `pool`. Poles are pulled inside the unit circle where needed; a
/// cell that still violates the stability triangle after quantization is a
/// configuration error.
pub fn quantize(
    filter: &IirFilter,
    gain0: f32,
    format: SampleFormat,
    pool: &MemPool,
    kind: PoolKind,
) -> Result<Quantized> {
    let quantized = if format.is_fixed() {
        quantize_fixed(filter, gain0 as f64, pool, kind)?
    } else {
        quantize_float(filter, gain0, pool, kind)?
    };
    log::debug!(
        "quantized {} cells for {:?}, peak {:.2} dB",
        quantized.cascade.len(),
        format,
        10.0 * quantized.response.max().log10()
    );
    Ok(quantized)
}

fn quantize_fixed(filter: &IirFilter, gain0: f64, pool: &MemPool, kind: PoolKind) -> Result<Quantized> {
    let mut response = ResponseGrid::new();

    if filter.is_empty() {
        let gain = if gain0 == 1.0 {
            FixedGain::UNITY
        } else {
            split_gain(gain0)?
        };
        let g = gain.linear() as f32;
        response.scale(g * g);
        let cells = pool.alloc_zeroed::<SosCoefsQ31>(0, kind)?;
        return Ok(Quantized {
            cascade: DesignedCascade::Fixed(Cascade::<SosCoefsQ31>::designed(cells, gain)),
            response,
        });
    }

    let mut cells = pool.alloc_zeroed::<SosCoefsQ31>(filter.len(), kind)?;
    let mut gain = gain0;

    for (slot, cell) in cells.iter_mut().zip(filter.cells().iter()) {
        let norm = 1.0 / cell.den.q0 as f64;
        let b = [
            cell.num.q0 as f64 * norm,
            cell.num.q1 as f64 * norm,
            cell.num.q2 as f64 * norm,
        ];
        let coef = headroom_scale(&b);
        gain /= coef;
        *slot = SosCoefsQ31::quantize(
            b[0] * coef,
            b[1] * coef,
            b[2] * coef,
            cell.den.q1 as f64 * norm,
            cell.den.q2 as f64 * norm,
        );
    }

    // stability pass, may move gain out of the numerators again
    let mut correction = 1.0f64;
    for (i, slot) in cells.iter_mut().enumerate() {
        let [b0, b1, b2, a1, a2] = slot.coefficients();
        let (a1, a2) = pull_poles_inside(i, a1, a2);
        let mut b = [b0, b1, b2];

        let max = response.accumulate(b0 as f32, b1 as f32, b2 as f32, a1 as f32, a2 as f32) as f64;
        if max > 1.0 {
            response.scale((1.0 / max) as f32);
            let coef = max.sqrt();
            b.iter_mut().for_each(|x| *x /= coef);
            correction *= coef;
        }

        let coef = headroom_scale(&b);
        if coef < 1.0 {
            log::warn!("cell {}: numerator clipped by {}", i, coef);
            b.iter_mut().for_each(|x| *x *= coef);
            correction /= coef;
        }

        *slot = SosCoefsQ31::quantize(b[0], b[1], b[2], a1, a2);
        let [_, _, _, a1, a2] = slot.coefficients();
        check_stability(i, a1, a2)?;
    }

    let gain = split_gain(gain * correction)?;
    let g = gain.linear() as f32;
    response.scale(g * g);

    Ok(Quantized {
        cascade: DesignedCascade::Fixed(Cascade::<SosCoefsQ31>::designed(cells, gain)),
        response,
    })
}

fn quantize_float(filter: &IirFilter, gain0: f32, pool: &MemPool, kind: PoolKind) -> Result<Quantized> {
    let mut response = ResponseGrid::new();
    let mut cells = pool.alloc_zeroed::<SosCoefs>(filter.len(), kind)?;

    for (slot, cell) in cells.iter_mut().zip(filter.cells().iter()) {
        let norm = 1.0 / cell.den.q0;
        *slot = SosCoefs::new(
            cell.num.q0 * norm,
            cell.num.q1 * norm,
            cell.num.q2 * norm,
            cell.den.q1 * norm,
            cell.den.q2 * norm,
        );
    }

    let cascade_gain = match cells.last_mut() {
        Some(last) => {
            last.b0 *= gain0;
            last.b1 *= gain0;
            last.b2 *= gain0;
            1.0
        }
        None => gain0,
    };

    for (i, slot) in cells.iter_mut().enumerate() {
        let (a1, a2) = pull_poles_inside(i, slot.a1 as f64, slot.a2 as f64);
        slot.a1 = a1 as f32;
        slot.a2 = a2 as f32;
        response.accumulate(slot.b0, slot.b1, slot.b2, slot.a1, slot.a2);
        check_stability(i, slot.a1 as f64, slot.a2 as f64)?;
    }
    response.scale(cascade_gain * cascade_gain);

    Ok(Quantized {
        cascade: DesignedCascade::Float(Cascade::<SosCoefs>::designed(cells, cascade_gain)),
        response,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::*;

    fn eq_filter() -> IirFilter {
        let configs = [
            BiquadConfig::new(IirType::Peaking, 1.5, 1000.0, 12.0),
            BiquadConfig::new(IirType::LowShelf, 0.707, 120.0, -6.0),
            BiquadConfig::new(IirType::HighShelf, 0.707, 6000.0, 9.0),
            BiquadConfig::new(IirType::HighPass, 0.9, 30.0, 0.0),
        ];
        IirFilter::design(&configs, 48000.0).unwrap()
    }

    fn fixed(q: &Quantized) -> &FixedCascade<'static> {
        match &q.cascade {
            DesignedCascade::Fixed(c) => c,
            DesignedCascade::Float(_) => panic!("expected a fixed cascade"),
        }
    }

    fn float(q: &Quantized) -> &FloatCascade<'static> {
        match &q.cascade {
            DesignedCascade::Float(c) => c,
            DesignedCascade::Fixed(_) => panic!("expected a float cascade"),
        }
    }

    #[test]
    fn test_fixed_cells_in_triangle() {
        let pool = MemPool::unbounded();
        let mut filter = eq_filter();
        let normalized = normalize(&mut filter, NormalizeMode::ComputeAndNormalize);
        let q = quantize(&filter, normalized.gain, SampleFormat::Fixed32, &pool, PoolKind::RamInt).unwrap();
        let cascade = fixed(&q);
        assert_eq!(cascade.len(), 4);
        for cell in cascade.cells().iter() {
            let [_, _, _, a1, a2] = cell.coefficients();
            assert!(a2 <= 1.0 && a2 >= a1 - 1.0 && a2 >= -a1 - 1.0);
            assert!(pole_modulus(a1, a2) < 1.0);
        }
        // the grid tracks the cascade it describes
        let grid = cascade.response();
        for (a, b) in grid.points().iter().zip(q.response.points().iter()).step_by(16) {
            assert!((a - b).abs() <= 1e-3 * a.max(1e-3), "{} vs {}", a, b);
        }
        // the +12 dB peak survives quantization
        let sr = 48000.0;
        assert_approx_eq::assert_approx_eq!(
            q.response.magnitude_db(1000.0, sr),
            20.0 * eq_filter().magnitude(2.0 * std::f32::consts::PI * 1000.0 / sr).log10(),
            0.1
        );
        assert!(pool.in_use(PoolKind::RamInt) > 0);
        drop(q);
        assert_eq!(pool.in_use(PoolKind::RamInt), 0);
    }

    #[test]
    fn test_flat_fixed_cell() {
        let filter = IirFilter::from_cells(vec![BiquadCell::flat()]).unwrap();
        let q = quantize(&filter, 1.0, SampleFormat::Fixed16, &MemPool::default(), PoolKind::RamInt).unwrap();
        let cascade = fixed(&q);
        assert_eq!(cascade.cells()[0], SosCoefsQ31::from_bits(0x7FFF_FFFF, 0, 0, 0, 0));
        // headroom leaves 1 + 2^-31 in the gain
        assert_eq!(cascade.gain(), FixedGain::new(0x4000_0001, 1));
        assert_approx_eq::assert_approx_eq!(q.response.points()[100], 1.0, 1e-6);
    }

    #[test]
    fn test_unstable_poles_pulled_inside() {
        // poles at modulus 1.2
        let cell = BiquadCell::from_quads(Quad::unity(), Quad::new(1.0, -1.2, 1.44)).unwrap();
        let filter = IirFilter::from_cells(vec![cell]).unwrap();
        let pool = MemPool::unbounded();

        let q = quantize(&filter, 1.0, SampleFormat::Float, &pool, PoolKind::RamInt).unwrap();
        let c = float(&q).cells()[0];
        assert_approx_eq::assert_approx_eq!(c.a1, -0.999, 1e-6);
        assert_approx_eq::assert_approx_eq!(c.a2, 0.998001, 1e-6);

        // a2 saturates in Q31 first, the pull still applies
        let q = quantize(&filter, 1.0, SampleFormat::Fixed32, &pool, PoolKind::RamInt).unwrap();
        let [_, _, _, a1, a2] = fixed(&q).cells()[0].coefficients();
        assert!(pole_modulus(a1, a2) <= 0.999 + 1e-6);
        assert_approx_eq::assert_approx_eq!(a2, 0.998001, 1e-6);
    }

    #[test]
    fn test_float_gain_in_last_cell() {
        let pool = MemPool::unbounded();
        let filter = eq_filter();
        let q = quantize(&filter, 0.5, SampleFormat::Float, &pool, PoolKind::RamInt).unwrap();
        let cascade = float(&q);
        assert_eq!(cascade.gain(), 1.0);
        let last = filter.cells()[3];
        assert_approx_eq::assert_approx_eq!(cascade.cells()[3].b0, 0.5 * last.num.q0 / last.den.q0, 1e-6);
    }

    #[test]
    fn test_empty_filter() {
        let pool = MemPool::unbounded();
        let q = quantize(&IirFilter::new(), 1.0, SampleFormat::Fixed32, &pool, PoolKind::Tcm).unwrap();
        assert!(q.cascade.is_empty());
        assert_eq!(fixed(&q).gain(), FixedGain::UNITY);

        let q = quantize(&IirFilter::new(), 2.0, SampleFormat::Float, &pool, PoolKind::Tcm).unwrap();
        assert_eq!(float(&q).gain(), 2.0);
        assert_approx_eq::assert_approx_eq!(q.response.points()[0], 4.0, 1e-6);
    }

    #[test]
    fn test_allocation_failure() {
        let pool = MemPool::with_capacity(0, 16, 0);
        let err = quantize(&eq_filter(), 1.0, SampleFormat::Fixed32, &pool, PoolKind::RamInt).unwrap_err();
        assert!(matches!(err, Error::Allocation { .. }));
    }
}
