use num_complex::Complex32;

use crate::error::{Error, Result};

// conjugate check tolerance, on |re1 - re2| + |im1 + im2|
const CONJUGATE_TOLERANCE: f32 = 1e-7;

/// q0 + q1.z^-1 + q2.z^-2
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub q0: f32,
    pub q1: f32,
    pub q2: f32,
}

impl Quad {
    pub const fn new(q0: f32, q1: f32, q2: f32) -> Self {
        Quad { q0, q1, q2 }
    }

    /// the constant 1
    pub const fn unity() -> Self {
        Quad::new(1.0, 0.0, 0.0)
    }

    /// evaluate at z^-1 = e^{-j.theta}
    pub fn eval(&self, theta: f32) -> Complex32 {
        let z1 = Complex32::from_polar(1.0, -theta);
        let z2 = z1 * z1;
        self.q0 + z1 * self.q1 + z2 * self.q2
    }
}

/// One root of a quad, with its share of the leading coefficient and its
/// distance to the unit circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Root {
    NoRoot,
    Real { value: f32, gain: f32, dist: f32 },
    Complex { value: Complex32, gain: f32, dist: f32 },
}

impl Root {
    pub fn real(value: f32, gain: f32) -> Self {
        Root::Real {
            value,
            gain,
            dist: (value.abs() - 1.0).abs(),
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Root::Complex { .. })
    }

    /// distance to the unit circle, a missing root is infinitely far away
    pub fn dist(&self) -> f32 {
        match self {
            Root::NoRoot => f32::INFINITY,
            Root::Real { dist, .. } | Root::Complex { dist, .. } => *dist,
        }
    }

    pub fn gain(&self) -> f32 {
        match self {
            Root::NoRoot => 1.0,
            Root::Real { gain, .. } | Root::Complex { gain, .. } => *gain,
        }
    }

    pub fn scale_gain(&mut self, k: f32) {
        match self {
            Root::NoRoot => {}
            Root::Real { gain, .. } | Root::Complex { gain, .. } => *gain *= k,
        }
    }

    /// position in the complex plane
    pub fn position(&self) -> Option<Complex32> {
        match self {
            Root::NoRoot => None,
            Root::Real { value, .. } => Some(Complex32::new(*value, 0.0)),
            Root::Complex { value, .. } => Some(*value),
        }
    }

    /// modulus of the root itself
    pub fn modulus(&self) -> f32 {
        self.position().map_or(0.0, |p| p.norm())
    }

    /// squared euclidean distance in the complex plane
    pub fn square_dist(&self, other: &Root) -> f32 {
        match (self.position(), other.position()) {
            (Some(a), Some(b)) => (a - b).norm_sqr(),
            _ => f32::INFINITY,
        }
    }
}

/// Solve q0.x^2 + q1.x + q2 = 0.
///
/// The gain is split as (q0, 1) so the two gains multiply to the leading
/// coefficient. A first-order quad (q0 == 0) yields one real root carrying
/// q1 as gain and a `NoRoot` in the second slot.
pub fn quad_roots(quad: &Quad) -> Result<[Root; 2]> {
    let (a, b, c) = (quad.q0, quad.q1, quad.q2);
    let delta = b * b - 4.0 * a * c;

    if delta < 0.0 {
        // a can't be zero here
        let re = -b / (2.0 * a);
        let im = (-delta).sqrt() / (2.0 * a);
        // modulus from the product of roots, more stable than |re + j.im|
        let dist = ((c / a).sqrt() - 1.0).abs();
        Ok([
            Root::Complex {
                value: Complex32::new(re, im),
                gain: a,
                dist,
            },
            Root::Complex {
                value: Complex32::new(re, -im),
                gain: 1.0,
                dist,
            },
        ])
    } else if a != 0.0 {
        let sqrt_delta = delta.sqrt();
        Ok([
            Root::real((-b + sqrt_delta) / (2.0 * a), a),
            Root::real((-b - sqrt_delta) / (2.0 * a), 1.0),
        ])
    } else if b != 0.0 {
        Ok([Root::real(-c / b, b), Root::NoRoot])
    } else {
        Err(Error::Degenerate("constant polynomial has no roots"))
    }
}

/// Rebuild a quad from two roots. This is the one place where a real root
/// paired with a complex one is refused.
pub fn quad_from_roots(r1: &Root, r2: &Root) -> Result<Quad> {
    match (r1, r2) {
        (Root::NoRoot, Root::NoRoot) => Ok(Quad::unity()),
        (Root::Real { value, gain, .. }, Root::NoRoot)
        | (Root::NoRoot, Root::Real { value, gain, .. }) => {
            Ok(Quad::new(*gain, -gain * value, 0.0))
        }
        (
            Root::Real {
                value: v1,
                gain: g1,
                ..
            },
            Root::Real {
                value: v2,
                gain: g2,
                ..
            },
        ) => {
            let g = g1 * g2;
            Ok(Quad::new(g, -g * (v1 + v2), g * v1 * v2))
        }
        (
            Root::Complex {
                value: z1,
                gain: g1,
                ..
            },
            Root::Complex {
                value: z2,
                gain: g2,
                ..
            },
        ) => {
            let mismatch = (z1.re - z2.re).abs() + (z1.im + z2.im).abs();
            if mismatch > CONJUGATE_TOLERANCE {
                return Err(Error::config(format!(
                    "complex roots {} and {} are not conjugate",
                    z1, z2
                )));
            }
            let g = g1 * g2;
            Ok(Quad::new(
                g,
                -g * (z1.re + z2.re),
                g * (z1.re * z2.re - z1.im * z2.im),
            ))
        }
        _ => Err(Error::config("real root paired with a complex root")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_quad_close(a: &Quad, b: &Quad) {
        assert_approx_eq::assert_approx_eq!(a.q0, b.q0, 1e-5);
        assert_approx_eq::assert_approx_eq!(a.q1, b.q1, 1e-5);
        assert_approx_eq::assert_approx_eq!(a.q2, b.q2, 1e-5);
    }

    #[test]
    fn test_roots_round_trip() {
        let quads = [
            Quad::new(1.0, -0.5, -0.5),
            Quad::new(2.0, 3.0, 1.0),
            Quad::new(1.0, -1.2, 0.5),
            Quad::new(0.5, 0.1, 0.8),
            Quad::new(1.0, -2.0, 1.0),
            Quad::new(-1.5, 0.3, 0.6),
        ];
        for q in quads.iter() {
            let [r1, r2] = quad_roots(q).unwrap();
            assert_quad_close(&quad_from_roots(&r1, &r2).unwrap(), q);
            // order doesn't matter
            assert_quad_close(&quad_from_roots(&r2, &r1).unwrap(), q);
        }
    }

    #[test]
    fn test_complex_pair() {
        // poles at 0.6 +/- 0.8j, on the unit circle
        let [r1, r2] = quad_roots(&Quad::new(1.0, -1.2, 1.0)).unwrap();
        assert!(r1.is_complex() && r2.is_complex());
        let p = r1.position().unwrap();
        assert_approx_eq::assert_approx_eq!(p.re, 0.6, 1e-6);
        assert_approx_eq::assert_approx_eq!(p.im, 0.8, 1e-6);
        assert_eq!(r2.position().unwrap(), p.conj());
        assert_approx_eq::assert_approx_eq!(r1.dist(), 0.0, 1e-6);
        assert_eq!(r1.dist(), r2.dist());
        assert_eq!(r1.gain() * r2.gain(), 1.0);
    }

    #[test]
    fn test_gain_split() {
        let [r1, r2] = quad_roots(&Quad::new(3.0, 0.0, -0.75)).unwrap();
        assert_eq!(r1.gain(), 3.0);
        assert_eq!(r2.gain(), 1.0);
        assert_approx_eq::assert_approx_eq!(r1.modulus(), 0.5, 1e-6);
        assert_approx_eq::assert_approx_eq!(r1.dist(), 0.5, 1e-6);
    }

    #[test]
    fn test_first_order() {
        let [r1, r2] = quad_roots(&Quad::new(0.0, 2.0, 1.0)).unwrap();
        assert_eq!(r2, Root::NoRoot);
        match r1 {
            Root::Real { value, gain, .. } => {
                assert_eq!(value, -0.5);
                assert_eq!(gain, 2.0);
            }
            _ => panic!("expected a real root"),
        }
        assert_quad_close(
            &quad_from_roots(&Root::NoRoot, &r1).unwrap(),
            &Quad::new(2.0, 1.0, 0.0),
        );
    }

    #[test]
    fn test_constant_is_degenerate() {
        assert!(matches!(
            quad_roots(&Quad::new(0.0, 0.0, 1.0)),
            Err(Error::Degenerate(_))
        ));
        assert_eq!(
            quad_from_roots(&Root::NoRoot, &Root::NoRoot).unwrap(),
            Quad::unity()
        );
    }

    #[test]
    fn test_mixed_pairing_rejected() {
        let [c, _] = quad_roots(&Quad::new(1.0, 0.0, 0.25)).unwrap();
        let r = Root::real(0.3, 1.0);
        assert!(matches!(quad_from_roots(&c, &r), Err(Error::Config(_))));
        assert!(matches!(
            quad_from_roots(&Root::NoRoot, &c),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_non_conjugates_rejected() {
        let [a, _] = quad_roots(&Quad::new(1.0, 0.0, 0.25)).unwrap();
        let [b, _] = quad_roots(&Quad::new(1.0, 0.2, 0.25)).unwrap();
        assert!(matches!(quad_from_roots(&a, &b), Err(Error::Config(_))));
        // same root twice isn't a conjugate pair either
        assert!(matches!(quad_from_roots(&a, &a), Err(Error::Config(_))));
    }
}
