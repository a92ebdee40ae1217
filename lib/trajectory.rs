//! Sampled solutions on a uniform coordinate grid.

use ndarray as nd;
use crate::Arr1;

/// A single sample `(u, ψ, ψ')` of an integrated solution.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridPoint {
    /// Coordinate
    pub u: f64,
    /// Wavefunction
    pub psi: f64,
    /// First derivative of the wavefunction
    pub dpsi: f64,
}

/// An ordered sequence of [`GridPoint`]s with strictly increasing, uniformly
/// spaced coordinates.
///
/// Trajectories are only produced by an [`Integrator`][crate::Integrator] or
/// by [mirroring][crate::parity::mirror] another trajectory, and cannot be
/// modified afterward.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    // coordinate array
    u: nd::Array1<f64>,
    // wavefunction array
    psi: nd::Array1<f64>,
    // derivative array
    dpsi: nd::Array1<f64>,
}

impl Trajectory {
    // arrays are assumed to have equal, non-zero length
    pub(crate) fn from_arrays(
        u: nd::Array1<f64>,
        psi: nd::Array1<f64>,
        dpsi: nd::Array1<f64>,
    ) -> Self
    {
        debug_assert!(u.len() == psi.len() && u.len() == dpsi.len());
        debug_assert!(!u.is_empty());
        Self { u, psi, dpsi }
    }

    /// Get a reference to the coordinate array.
    pub fn get_u(&self) -> &nd::Array1<f64> { &self.u }

    /// Get a reference to the wavefunction array.
    pub fn get_psi(&self) -> &nd::Array1<f64> { &self.psi }

    /// Get a reference to the wavefunction derivative array.
    pub fn get_dpsi(&self) -> &nd::Array1<f64> { &self.dpsi }

    /// Get the number of grid points.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.u.len() }

    /// Get the `k`-th grid point, if it exists.
    pub fn point(&self, k: usize) -> Option<GridPoint> {
        (k < self.len())
            .then(|| GridPoint { u: self.u[k], psi: self.psi[k], dpsi: self.dpsi[k] })
    }

    /// Get the first grid point.
    pub fn first(&self) -> GridPoint {
        GridPoint { u: self.u[0], psi: self.psi[0], dpsi: self.dpsi[0] }
    }

    /// Get the last grid point.
    pub fn last(&self) -> GridPoint {
        let n = self.len() - 1;
        GridPoint { u: self.u[n], psi: self.psi[n], dpsi: self.dpsi[n] }
    }

    /// Iterate over all grid points in order of increasing coordinate.
    pub fn iter(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.u.iter().zip(&self.psi).zip(&self.dpsi)
            .map(|((&u, &psi), &dpsi)| GridPoint { u, psi, dpsi })
    }

    /// Return the largest absolute value of the wavefunction.
    pub fn max_abs_psi(&self) -> f64 {
        self.psi.iter().fold(0.0, |acc, psi| acc.max(psi.abs()))
    }

    /// Count the sign changes of the wavefunction inside the classically
    /// allowed region, where `f(u) < 0` for a coefficient function as passed
    /// to an [`Integrator`][crate::Integrator].
    ///
    /// Exact zeros are skipped, so a node sitting on a grid point is counted
    /// once. Crossings in forbidden regions (e.g. the blow-up tail near the
    /// edge of a near-converged solution) are ignored.
    pub fn node_count<F>(&self, f: F) -> usize
    where F: Fn(f64) -> f64
    {
        let mut last_sign: Option<bool> = None;
        let mut nodes: usize = 0;
        for (&u, &psi) in self.u.iter().zip(&self.psi) {
            if psi == 0.0 { continue; }
            let sign = psi > 0.0;
            if f(u) < 0.0 && last_sign.is_some_and(|s| s != sign) {
                nodes += 1;
            }
            last_sign = Some(sign);
        }
        nodes
    }

    /// Return `true` if every value in the trajectory is finite.
    pub fn is_finite(&self) -> bool {
        is_finite_arr(&self.psi) && is_finite_arr(&self.dpsi)
    }
}

fn is_finite_arr<S>(a: &Arr1<S>) -> bool
where S: nd::Data<Elem = f64>
{
    a.iter().all(|x| x.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trajectory {
        let u = nd::Array1::linspace(0.0, 3.0, 4);
        let psi = nd::array![1.0, -0.5, 0.0, 2.0];
        let dpsi = nd::array![0.0, 1.0, 2.0, 3.0];
        Trajectory::from_arrays(u, psi, dpsi)
    }

    #[test]
    fn accessors() {
        let traj = sample();
        assert_eq!(traj.len(), 4);
        assert_eq!(traj.first(), GridPoint { u: 0.0, psi: 1.0, dpsi: 0.0 });
        assert_eq!(traj.last(), GridPoint { u: 3.0, psi: 2.0, dpsi: 3.0 });
        assert_eq!(traj.point(1).map(|p| p.psi), Some(-0.5));
        assert!(traj.point(4).is_none());
        assert_eq!(traj.iter().count(), 4);
        assert_eq!(traj.max_abs_psi(), 2.0);
        assert!(traj.is_finite());
    }

    #[test]
    fn nodes_skip_zeros_and_forbidden_regions() {
        let traj = sample();
        // everywhere allowed: + → - → (0) → +
        assert_eq!(traj.node_count(|_| -1.0), 2);
        // forbidden past u = 1.5
        assert_eq!(traj.node_count(|u| if u < 1.5 { -1.0 } else { 1.0 }), 1);
        // everywhere forbidden
        assert_eq!(traj.node_count(|_| 1.0), 0);
    }
}
