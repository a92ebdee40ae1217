//! Parity classification and reflection of half-domain solutions into the full
//! domain.

use ndarray as nd;
use serde::{ Deserialize, Serialize };
use crate::trajectory::Trajectory;

/// Parity of a solution in an even potential.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parity {
    /// `ψ(-u) = ψ(u)`
    Even,
    /// `ψ(-u) = -ψ(u)`
    Odd,
}

impl Parity {
    /// Classify from the value of the wavefunction at `u = 0`.
    ///
    /// This is an exact comparison against zero, which is only sound because
    /// `psi0` is an initial condition chosen by the caller. Values computed by
    /// an integrator should never be classified this way.
    pub fn classify(psi0: f64) -> Self {
        if psi0 == 0.0 { Self::Odd } else { Self::Even }
    }

    /// Canonical initial conditions `(ψ(0), ψ'(0))`: `(1, 0)` for even states
    /// and `(0, 1)` for odd states.
    pub fn initial_conditions(self) -> (f64, f64) {
        match self {
            Self::Even => (1.0, 0.0),
            Self::Odd => (0.0, 1.0),
        }
    }

    /// Return `true` if `self` is `Even`.
    pub fn is_even(self) -> bool { matches!(self, Self::Even) }

    /// Return `true` if `self` is `Odd`.
    pub fn is_odd(self) -> bool { matches!(self, Self::Odd) }

    // signs applied to (ψ, ψ') under u → -u
    fn reflection_signs(self) -> (f64, f64) {
        match self {
            Self::Even => (1.0, -1.0),
            Self::Odd => (-1.0, 1.0),
        }
    }
}

/// Reflect a half-domain trajectory over `u = 0`, classifying its parity from
/// the first point.
///
/// The output has `2n - 1` points for an input of `n`, ordered so that `u`
/// increases monotonically: the reversed, reflected half (excluding `u = 0`)
/// followed by the original.
///
/// ```
/// use xshoot::{ integrate, parity::mirror };
///
/// let half = integrate(|_| -1.0, 0.0, 1.0, 0.1, 10).unwrap();
/// let full = mirror(&half);
/// assert_eq!(full.len(), 21);
/// assert_eq!(full.first().psi, -half.last().psi);
/// ```
pub fn mirror(half: &Trajectory) -> Trajectory {
    mirror_with(half, Parity::classify(half.first().psi))
}

/// Like [`mirror`], but with an explicitly specified parity.
pub fn mirror_with(half: &Trajectory, parity: Parity) -> Trajectory {
    let (s_psi, s_dpsi) = parity.reflection_signs();
    let n = half.len();
    let reflected = |a: &nd::Array1<f64>, s: f64| -> nd::Array1<f64> {
        a.iter().skip(1).rev()
            .map(|ak| s * ak)
            .chain(a.iter().copied())
            .collect()
    };
    let u = reflected(half.get_u(), -1.0);
    let psi = reflected(half.get_psi(), s_psi);
    let dpsi = reflected(half.get_dpsi(), s_dpsi);
    debug_assert_eq!(u.len(), 2 * n - 1);
    Trajectory::from_arrays(u, psi, dpsi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrate;

    #[test]
    fn classification() {
        assert_eq!(Parity::classify(0.0), Parity::Odd);
        assert_eq!(Parity::classify(-0.0), Parity::Odd);
        assert_eq!(Parity::classify(1e-300), Parity::Even);
        assert_eq!(Parity::classify(-1.0), Parity::Even);
        assert_eq!(Parity::Even.initial_conditions(), (1.0, 0.0));
        assert_eq!(Parity::Odd.initial_conditions(), (0.0, 1.0));
    }

    #[test]
    fn mirrored_ordering_and_symmetry() {
        let half = integrate(|u| u * u - 1.0, 1.0, 0.0, 0.05, 40).unwrap();
        let full = mirror(&half);
        let u = full.get_u();
        assert_eq!(full.len(), 81);
        assert!(u.iter().zip(u.iter().skip(1)).all(|(a, b)| a < b));
        assert_eq!(full.point(40).unwrap(), half.first());
        for k in 0..=40 {
            let l = full.point(40 - k).unwrap();
            let r = full.point(40 + k).unwrap();
            assert_eq!(l.u, -r.u);
            assert_eq!(l.psi, r.psi);
            assert_eq!(l.dpsi, -r.dpsi);
        }
    }

    #[test]
    fn odd_reflection() {
        let half = integrate(|_| -4.0, 0.0, 1.0, 0.1, 5).unwrap();
        let full = mirror(&half);
        for k in 0..=5 {
            let l = full.point(5 - k).unwrap();
            let r = full.point(5 + k).unwrap();
            assert_eq!(l.psi, -r.psi);
            assert_eq!(l.dpsi, r.dpsi);
        }
    }

    #[test]
    fn single_point() {
        let half = integrate(|_| 0.0, 1.0, 0.0, 0.1, 0).unwrap();
        assert_eq!(mirror(&half), half);
    }
}
