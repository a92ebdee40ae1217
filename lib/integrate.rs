//! Fixed-step integrators for linear second-order equations of the form
//! ```text
//! ψ''(u) = f(u) ψ(u)
//! ```
//! starting from `u = 0`, where `f` is the effective coefficient for a single
//! trial energy (see [`potential::Schrodinger`][crate::potential::Schrodinger]
//! for the TISE form).
//!
//! Every integrator fails with [`XError::InvalidStep`] for a non-positive
//! step and with [`XError::NumericOverflow`] as soon as a non-finite value is
//! produced; runaway growth that stays finite is returned as-is.

use ndarray as nd;
use serde::{ Deserialize, Serialize };
use tracing::trace;
use crate::{
    error::{ XError, XResult },
    trajectory::Trajectory,
};

/// Common interface to fixed-step integration schemes.
///
/// Implementors produce a [`Trajectory`] of `steps + 1` points on the grid
/// `u[k] = k * du` whose first point is exactly `(0, psi0, dpsi0)`.
pub trait Integrator {
    /// Integrate `ψ'' = f(u) ψ` over `steps` steps of size `du`.
    fn integrate<F>(&self, f: F, psi0: f64, dpsi0: f64, du: f64, steps: usize)
        -> XResult<Trajectory>
    where F: Fn(f64) -> f64;

    /// Like [`Self::integrate`], but return only the final `(ψ, ψ')` pair.
    fn endpoint<F>(&self, f: F, psi0: f64, dpsi0: f64, du: f64, steps: usize)
        -> XResult<(f64, f64)>
    where F: Fn(f64) -> f64
    {
        let last = self.integrate(f, psi0, dpsi0, du, steps)?.last();
        Ok((last.psi, last.dpsi))
    }
}

/// Explicit first-order (forward Euler) scheme:
/// ```text
/// ψ'[i + 1] = ψ'[i] + δu f(u[i]) ψ[i]
/// ψ[i + 1]  = ψ[i]  + δu ψ'[i]
/// ```
///
/// Global error is *O*(*δu*). The scheme is not energy-conserving and will
/// amplify oscillatory solutions when *δu* is too coarse.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Euler;

impl Integrator for Euler {
    fn integrate<F>(&self, f: F, psi0: f64, dpsi0: f64, du: f64, steps: usize)
        -> XResult<Trajectory>
    where F: Fn(f64) -> f64
    {
        check_grid(du, steps)?;
        trace!(scheme = "euler", du, steps, "integrate");
        let u = grid(du, steps);
        let mut psi: nd::Array1<f64> = nd::Array1::zeros(steps + 1);
        let mut dpsi: nd::Array1<f64> = nd::Array1::zeros(steps + 1);
        psi[0] = psi0;
        dpsi[0] = dpsi0;
        let mut q: f64 = psi0;
        let mut dq: f64 = dpsi0;
        for k in 0..steps {
            let dq_next = dq + du * f(u[k]) * q;
            let q_next = q + du * dq;
            check_finite(k + 1, u[k + 1], q_next, dq_next)?;
            q = q_next;
            dq = dq_next;
            psi[k + 1] = q;
            dpsi[k + 1] = dq;
        }
        Ok(Trajectory::from_arrays(u, psi, dpsi))
    }
}

/// Numerov's three-point scheme:
/// ```text
/// (1 - a f[i + 1]) ψ[i + 1] = 2 (1 + 5 a f[i]) ψ[i] - (1 - a f[i - 1]) ψ[i - 1]
/// a = δu² / 12
/// ```
///
/// Global error is *O*(*δu*⁴). The first step is seeded from a third-order
/// Taylor expansion about `u = 0`; derivatives are reconstructed afterward
/// using central differences (one-sided at the last point).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Numerov;

impl Integrator for Numerov {
    fn integrate<F>(&self, f: F, psi0: f64, dpsi0: f64, du: f64, steps: usize)
        -> XResult<Trajectory>
    where F: Fn(f64) -> f64
    {
        check_grid(du, steps)?;
        trace!(scheme = "numerov", du, steps, "integrate");
        let a = du.powi(2) / 12.0;
        let u = grid(du, steps);
        let fu: nd::Array1<f64> = u.mapv(&f);
        let mut psi: nd::Array1<f64> = nd::Array1::zeros(steps + 1);
        let mut dpsi: nd::Array1<f64> = nd::Array1::zeros(steps + 1);
        psi[0] = psi0;
        dpsi[0] = dpsi0;
        if steps == 0 {
            return Ok(Trajectory::from_arrays(u, psi, dpsi));
        }
        psi[1] = psi0
            + du * dpsi0
            + du.powi(2) / 2.0 * fu[0] * psi0
            + du.powi(3) / 6.0 * fu[0] * dpsi0;
        check_finite(1, u[1], psi[1], 0.0)?;
        for k in 1..steps {
            let q_next = (
                2.0 * (1.0 + 5.0 * a * fu[k]) * psi[k]
                - (1.0 - a * fu[k - 1]) * psi[k - 1]
            ) / (1.0 - a * fu[k + 1]);
            check_finite(k + 1, u[k + 1], q_next, 0.0)?;
            psi[k + 1] = q_next;
        }
        for k in 1..steps {
            dpsi[k] = (psi[k + 1] - psi[k - 1]) / (2.0 * du);
        }
        dpsi[steps]
            = (psi[steps] - psi[steps - 1]) / du
            + du / 2.0 * fu[steps] * psi[steps];
        check_finite(steps, u[steps], psi[steps], dpsi[steps])?;
        Ok(Trajectory::from_arrays(u, psi, dpsi))
    }
}

/// Runtime selector over the available integrators.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// Use [`Euler`].
    #[default]
    Euler,
    /// Use [`Numerov`].
    Numerov,
}

impl Scheme {
    /// Return `true` if `self` is `Euler`.
    pub fn is_euler(&self) -> bool { matches!(self, Self::Euler) }

    /// Return `true` if `self` is `Numerov`.
    pub fn is_numerov(&self) -> bool { matches!(self, Self::Numerov) }
}

impl Integrator for Scheme {
    fn integrate<F>(&self, f: F, psi0: f64, dpsi0: f64, du: f64, steps: usize)
        -> XResult<Trajectory>
    where F: Fn(f64) -> f64
    {
        match self {
            Self::Euler => Euler.integrate(f, psi0, dpsi0, du, steps),
            Self::Numerov => Numerov.integrate(f, psi0, dpsi0, du, steps),
        }
    }
}

/// Integrate `ψ'' = f(u) ψ` from `(0, psi0, dpsi0)` over `steps` steps of size
/// `du` using the [forward Euler scheme][Euler].
///
/// ```
/// use xshoot::integrate;
///
/// // ψ'' = -ψ, ψ(0) = 0, ψ'(0) = 1
/// let traj = integrate(|_| -1.0, 0.0, 1.0, 1e-4, 10000).unwrap();
/// assert_eq!(traj.len(), 10001);
/// assert!((traj.last().psi - 1.0_f64.sin()).abs() < 1e-3);
/// ```
pub fn integrate<F>(f: F, psi0: f64, dpsi0: f64, du: f64, steps: usize)
    -> XResult<Trajectory>
where F: Fn(f64) -> f64
{
    Euler.integrate(f, psi0, dpsi0, du, steps)
}

/// Compute the number of steps of size `du` needed to cover `[0, extent]`.
///
/// If `extent / du` is within a relative `1e-9` of an integer, that integer is
/// returned; otherwise the count is rounded down so that the last grid point
/// falls short of `extent`.
pub fn grid_steps(extent: f64, du: f64) -> XResult<usize> {
    XError::check_step(du, extent)?;
    let ratio = extent / du;
    if !ratio.is_finite() || ratio >= usize::MAX as f64 {
        return Err(XError::InvalidStep { step: du, extent });
    }
    let nearest = ratio.round();
    if (ratio - nearest).abs() <= 1e-9 * nearest.max(1.0) {
        Ok(nearest as usize)
    } else {
        tracing::debug!(
            extent, du, "extent is not a whole number of steps; truncating grid");
        Ok(ratio.floor() as usize)
    }
}

// the grid holds `steps + 1` points
fn check_grid(du: f64, steps: usize) -> XResult<()> {
    XError::check_step(du, steps as f64 * du)?;
    (steps < usize::MAX)
        .then_some(())
        .ok_or(XError::InvalidStep { step: du, extent: steps as f64 * du })
}

// uniform grid; computed by multiplication to avoid accumulating rounding
fn grid(du: f64, steps: usize) -> nd::Array1<f64> {
    (0..=steps).map(|k| k as f64 * du).collect()
}

fn check_finite(index: usize, u: f64, psi: f64, dpsi: f64) -> XResult<()> {
    (psi.is_finite() && dpsi.is_finite())
        .then_some(())
        .ok_or(XError::NumericOverflow { index, u })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euler_first_steps_by_hand() {
        let traj = Euler.integrate(|u| u + 1.0, 1.0, 0.5, 0.1, 2).unwrap();
        // k = 0: dψ = 0.5 + 0.1 * 1.0 * 1.0 = 0.6, ψ = 1.0 + 0.1 * 0.5 = 1.05
        // k = 1: dψ = 0.6 + 0.1 * 1.1 * 1.05 = 0.7155, ψ = 1.05 + 0.06 = 1.11
        let p1 = traj.point(1).unwrap();
        let p2 = traj.point(2).unwrap();
        assert!((p1.psi - 1.05).abs() < 1e-14);
        assert!((p1.dpsi - 0.6).abs() < 1e-14);
        assert!((p2.psi - 1.11).abs() < 1e-14);
        assert!((p2.dpsi - 0.7155).abs() < 1e-14);
        assert!((p2.u - 0.2).abs() < 1e-15);
    }

    #[test]
    fn zero_steps_is_initial_point() {
        for scheme in [Scheme::Euler, Scheme::Numerov] {
            let traj = scheme.integrate(|_| 1.0, 0.3, -0.2, 0.01, 0).unwrap();
            assert_eq!(traj.len(), 1);
            assert_eq!(traj.first().psi, 0.3);
            assert_eq!(traj.first().dpsi, -0.2);
        }
    }

    #[test]
    fn rejects_bad_step() {
        assert!(matches!(
            integrate(|_| 0.0, 1.0, 0.0, 0.0, 10),
            Err(XError::InvalidStep { .. })
        ));
        assert!(matches!(
            Numerov.integrate(|_| 0.0, 1.0, 0.0, -0.1, 10),
            Err(XError::InvalidStep { .. })
        ));
    }

    #[test]
    fn overflow_is_reported() {
        let res = integrate(|_| 1e300, 1.0, 1.0, 1.0, 10);
        assert!(matches!(res, Err(XError::NumericOverflow { .. })));
        let res = Numerov.integrate(|_| -1e300, 1.0, 1.0, 1.0, 10);
        assert!(matches!(res, Err(XError::NumericOverflow { .. })));
    }

    #[test]
    fn numerov_cosine() {
        // ψ'' = -ψ, ψ(0) = 1, ψ'(0) = 0 ⇒ ψ = cos(u)
        let traj = Numerov.integrate(|_| -1.0, 1.0, 0.0, 1e-2, 300).unwrap();
        for p in traj.iter() {
            assert!((p.psi - p.u.cos()).abs() < 1e-6);
        }
        assert!((traj.last().dpsi + 3.0_f64.sin()).abs() < 1e-3);
        let (psi, _) = Numerov.endpoint(|_| -1.0, 1.0, 0.0, 1e-2, 300).unwrap();
        assert_eq!(psi, traj.last().psi);
    }

    #[test]
    fn euler_is_first_order() {
        // error at u = 1 for ψ'' = -ψ should roughly halve with the step size
        let err = |du: f64| {
            let n = grid_steps(1.0, du).unwrap();
            let last = integrate(|_| -1.0, 1.0, 0.0, du, n).unwrap().last();
            (last.psi - 1.0_f64.cos()).abs()
        };
        let ratio = err(1e-3) / err(5e-4);
        assert!((1.8..2.2).contains(&ratio), "ratio = {ratio}");
    }

    #[test]
    fn step_counts() {
        assert_eq!(grid_steps(1.5, 1e-4).unwrap(), 15000);
        assert_eq!(grid_steps(3.9, 1e-4).unwrap(), 39000);
        assert_eq!(grid_steps(1.0, 0.3).unwrap(), 3);
        assert_eq!(grid_steps(0.0, 0.1).unwrap(), 0);
        assert!(grid_steps(1.0, 0.0).is_err());
    }

    #[test]
    fn unrepresentable_step_counts_are_rejected() {
        assert!(matches!(
            grid_steps(1e300, 1e-300),
            Err(XError::InvalidStep { .. })
        ));
        assert!(matches!(
            grid_steps(f64::MAX, f64::MIN_POSITIVE),
            Err(XError::InvalidStep { .. })
        ));
        assert!(matches!(
            Euler.integrate(|_| 0.0, 1.0, 0.0, 1e-300, usize::MAX),
            Err(XError::InvalidStep { .. })
        ));
        assert!(matches!(
            Numerov.integrate(|_| 0.0, 1.0, 0.0, 1e-300, usize::MAX),
            Err(XError::InvalidStep { .. })
        ));
    }

    #[test]
    fn scheme_serde_names() {
        let s: Scheme = serde_json::from_str("\"numerov\"").unwrap();
        assert!(s.is_numerov());
        assert_eq!(serde_json::to_string(&Scheme::Euler).unwrap(), "\"euler\"");
        assert!(Scheme::default().is_euler());
    }
}
