//! Functions to compute bound-state solutions to the one-dimensional,
//! time-independent Schrödinger equation (TISE) for even potentials via the
//! shooting method.
//!
//! For a trial energy *ε*, the equation is integrated outward from `u = 0`
//! with caller-chosen initial conditions, and the value of the wavefunction at
//! the far edge of the domain, *ρ*(*ε*) = *ψ*(*u*<sub>f</sub>), is used as a
//! residual. Bound states decay at large *u*, so eigenvalues are roots of *ρ*;
//! as *ε* crosses an eigenvalue, a new node enters the wavefunction and the
//! divergent tail changes sign, which lets eigenvalues be isolated by
//! bisection.

use std::cmp;
use ndarray as nd;
use tracing::{ debug, warn };
use crate::{
    Arr1,
    error::{ XError, XResult },
    integrate::{ grid_steps, Euler, Integrator },
    parity::{ mirror_with, Parity },
    potential::{ Potential, Schrodinger },
    trajectory::Trajectory,
};

/// A single eigenstate search: potential, scale factor, initial conditions,
/// and grid.
///
/// Problems are validated on construction and not modified by any solver.
#[derive(Clone, Debug)]
pub struct ShootingProblem<P> {
    // coefficient function
    eq: Schrodinger<P>,
    // ψ(0)
    psi0: f64,
    // ψ'(0)
    dpsi0: f64,
    // domain extent
    u_f: f64,
    // grid spacing
    du: f64,
    // number of steps
    steps: usize,
}

impl<P: Potential> ShootingProblem<P> {
    /// Create a new `ShootingProblem` for the equation
    /// ```text
    /// ψ'' = -β (ε - V(u)) ψ
    /// ```
    /// integrated from `(ψ(0), ψ'(0)) = init` over `[0, u_f]` in steps of `du`.
    ///
    /// Fails with [`XError::InvalidStep`] unless `du > 0` and `u_f > 0`, and
    /// with [`XError::BadBeta`] unless `beta > 0`.
    pub fn new(potential: P, beta: f64, init: (f64, f64), u_f: f64, du: f64)
        -> XResult<Self>
    {
        XError::check_beta(beta)?;
        XError::check_step(du, u_f)?;
        if u_f <= 0.0 {
            return Err(XError::InvalidStep { step: du, extent: u_f });
        }
        let steps = grid_steps(u_f, du)?;
        Ok(Self {
            eq: Schrodinger::new(potential, beta),
            psi0: init.0,
            dpsi0: init.1,
            u_f,
            du,
            steps,
        })
    }

    /// Like [`Self::new`], using the [canonical initial
    /// conditions][Parity::initial_conditions] for `parity`.
    pub fn with_parity(
        potential: P,
        beta: f64,
        parity: Parity,
        u_f: f64,
        du: f64,
    ) -> XResult<Self>
    {
        Self::new(potential, beta, parity.initial_conditions(), u_f, du)
    }

    /// Get a reference to the coefficient function.
    pub fn equation(&self) -> &Schrodinger<P> { &self.eq }

    /// Get the initial conditions `(ψ(0), ψ'(0))`.
    pub fn init(&self) -> (f64, f64) { (self.psi0, self.dpsi0) }

    /// Get the domain extent.
    pub fn get_u_f(&self) -> f64 { self.u_f }

    /// Get the grid spacing.
    pub fn get_du(&self) -> f64 { self.du }

    /// Get the number of integration steps.
    pub fn steps(&self) -> usize { self.steps }

    /// Get the parity of solutions, classified from `ψ(0)`.
    pub fn parity(&self) -> Parity { Parity::classify(self.psi0) }

    /// Integrate the half-domain solution for trial energy `e` with the
    /// [default integrator][Euler].
    pub fn trajectory(&self, e: f64) -> XResult<Trajectory> {
        self.trajectory_with(&Euler, e)
    }

    /// Integrate the half-domain solution for trial energy `e`.
    pub fn trajectory_with<I>(&self, integrator: &I, e: f64)
        -> XResult<Trajectory>
    where I: Integrator
    {
        integrator.integrate(
            self.eq.at(e), self.psi0, self.dpsi0, self.du, self.steps)
    }

    /// Compute the edge residual *ρ*(*ε*) = *ψ*(*u*<sub>f</sub>) with the
    /// [default integrator][Euler].
    pub fn residual(&self, e: f64) -> XResult<f64> {
        self.residual_with(&Euler, e)
    }

    /// Compute the edge residual *ρ*(*ε*) = *ψ*(*u*<sub>f</sub>).
    pub fn residual_with<I>(&self, integrator: &I, e: f64) -> XResult<f64>
    where I: Integrator
    {
        integrator.endpoint(
            self.eq.at(e), self.psi0, self.dpsi0, self.du, self.steps)
            .map(|(psi, _)| psi)
    }

    /// Count the nodes of a solution over the full domain, restricted to the
    /// classically allowed region.
    ///
    /// For a solution found by this problem, this identifies the excitation
    /// level: 0 for the ground state, 1 for the first excited state, etc.
    pub fn node_count(&self, sol: &Eigenresult) -> usize {
        let f = self.eq.at(sol.e);
        sol.full().node_count(|u| f(u.abs()))
    }

    // validate a root of the residual and package it
    fn finish(&self, e: f64, trajectory: Trajectory, iterations: usize)
        -> XResult<Eigenresult>
    {
        let edge = trajectory.last();
        let f_edge = self.eq.coefficient(edge.u, e);
        if f_edge <= 0.0 {
            return Err(XError::Unbound { e, f_edge });
        }
        Ok(Eigenresult {
            e,
            residual: edge.psi,
            parity: self.parity(),
            trajectory,
            converged: true,
            iterations,
        })
    }
}

impl<P: Potential + Clone> ShootingProblem<P> {
    /// Create a copy of `self` with a different grid spacing.
    pub fn with_step(&self, du: f64) -> XResult<Self> {
        let (potential, beta) = (self.eq.potential().clone(), self.eq.beta());
        Self::new(potential, beta, self.init(), self.u_f, du)
    }
}

/// A single solution to the TISE found by a shooting search.
#[derive(Clone, Debug)]
pub struct Eigenresult {
    /// Energy
    pub e: f64,
    /// Edge residual *ψ*(*u*<sub>f</sub>) at `e`
    pub residual: f64,
    /// Parity classification of the initial conditions
    pub parity: Parity,
    /// Half-domain solution at `e`
    pub trajectory: Trajectory,
    /// `false` if the iteration budget ran out first
    pub converged: bool,
    /// Number of residual evaluations made after the initial bracket
    pub iterations: usize,
}

impl Eigenresult {
    /// Compare two `Eigenresult`s by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<cmp::Ordering> {
        self.e.partial_cmp(&other.e)
    }

    /// Reflect the half-domain solution into the full domain according to its
    /// parity.
    pub fn full(&self) -> Trajectory {
        mirror_with(&self.trajectory, self.parity)
    }
}

#[derive(Copy, Clone, Debug)]
struct Bounds<T>(T, T);

impl Bounds<f64> {
    fn midpoint(self) -> f64 { (self.0 + self.1) / 2.0 }

    fn diff(self) -> f64 { self.1 - self.0 }
}

impl<T: PartialOrd> Bounds<T> {
    fn from_ord(xx: (T, T)) -> Self {
        if xx.0 > xx.1 { Self(xx.1, xx.0) } else { Self(xx.0, xx.1) }
    }
}

/// Find the eigenvalue inside an energy bracket by bisection on the edge
/// residual, using the [default integrator][Euler].
///
/// See [`find_eigenvalue_with`].
pub fn find_eigenvalue<P>(
    problem: &ShootingProblem<P>,
    bracket: (f64, f64),
    epsilon: f64,
    maxiters: usize,
) -> XResult<Eigenresult>
where P: Potential
{
    find_eigenvalue_with(&Euler, problem, bracket, epsilon, maxiters)
}

/// Find the eigenvalue inside an energy bracket by bisection on the edge
/// residual *ρ*(*ε*) = *ψ*(*u*<sub>f</sub>).
///
/// The residual must change sign over `bracket` (bounds may be given in either
/// order), otherwise [`XError::NoSignChange`] is returned. The bracket is then
/// halved, keeping the half over which the sign changes, until either
/// `|ρ| < epsilon` or the bracket is narrower than `epsilon`, for at most
/// `maxiters` evaluations. The midpoint energy and its trajectory are
/// returned.
///
/// If the iteration budget runs out, [`XError::NotConverged`] is returned with
/// the last midpoint as a best estimate. If the root lies at an energy for
/// which the domain edge is classically allowed, the solution there oscillates
/// instead of decaying and [`XError::Unbound`] is returned.
pub fn find_eigenvalue_with<I, P>(
    integrator: &I,
    problem: &ShootingProblem<P>,
    bracket: (f64, f64),
    epsilon: f64,
    maxiters: usize,
) -> XResult<Eigenresult>
where
    I: Integrator,
    P: Potential,
{
    XError::check_epsilon(epsilon)?;
    XError::check_maxiters(maxiters)?;
    XError::check_bracket(bracket)?;

    let mut eb: Bounds<f64> = Bounds::from_ord(bracket);
    let lo = problem.trajectory_with(integrator, eb.0)?;
    let mut rho_lo: f64 = lo.last().psi;
    if rho_lo == 0.0 { return problem.finish(eb.0, lo, 0); }
    let hi = problem.trajectory_with(integrator, eb.1)?;
    let rho_hi: f64 = hi.last().psi;
    if rho_hi == 0.0 { return problem.finish(eb.1, hi, 0); }
    if (rho_lo > 0.0) == (rho_hi > 0.0) {
        return Err(XError::NoSignChange { lo: eb.0, hi: eb.1, rho_lo, rho_hi });
    }

    let mut k: usize = 0;
    loop {
        k += 1;
        let e = eb.midpoint();
        let traj = problem.trajectory_with(integrator, e)?;
        let rho = traj.last().psi;
        debug!(iter = k, e, rho, width = eb.diff(), "bisection step");
        if rho == 0.0 || rho.abs() < epsilon || eb.diff() < epsilon {
            return problem.finish(e, traj, k);
        }
        if k >= maxiters {
            warn!(
                maxiters, e, rho, width = eb.diff(),
                "solve::find_eigenvalue: energy convergence reached maxiters"
            );
            let best = Eigenresult {
                e,
                residual: rho,
                parity: problem.parity(),
                trajectory: traj,
                converged: false,
                iterations: k,
            };
            return Err(XError::NotConverged(Box::new(best)));
        }
        if (rho > 0.0) == (rho_lo > 0.0) {
            eb.0 = e;
            rho_lo = rho;
        } else {
            eb.1 = e;
        }
    }
}

/// Calculate the edge residual for a set of energies using the [default
/// integrator][Euler].
pub fn shoot<P, S>(problem: &ShootingProblem<P>, E: &Arr1<S>)
    -> XResult<nd::Array1<f64>>
where
    P: Potential,
    S: nd::Data<Elem = f64>,
{
    shoot_with(&Euler, problem, E)
}

/// Calculate the edge residual for a set of energies.
pub fn shoot_with<I, P, S>(
    integrator: &I,
    problem: &ShootingProblem<P>,
    E: &Arr1<S>,
) -> XResult<nd::Array1<f64>>
where
    I: Integrator,
    P: Potential,
    S: nd::Data<Elem = f64>,
{
    E.iter()
        .map(|&e| problem.residual_with(integrator, e))
        .collect::<XResult<Vec<f64>>>()
        .map(nd::Array1::from)
}

/// Locate all adjacent pairs in an (ascending) energy grid over which the edge
/// residual changes sign, using the [default integrator][Euler].
///
/// See [`scan_brackets_with`].
pub fn scan_brackets<P, S>(problem: &ShootingProblem<P>, E: &Arr1<S>)
    -> XResult<Vec<(f64, f64)>>
where
    P: Potential,
    S: nd::Data<Elem = f64>,
{
    scan_brackets_with(&Euler, problem, E)
}

/// Locate all adjacent pairs in an (ascending) energy grid over which the edge
/// residual changes sign.
///
/// A grid energy at which the residual is exactly zero is returned as a
/// degenerate bracket `(e, e)`.
pub fn scan_brackets_with<I, P, S>(
    integrator: &I,
    problem: &ShootingProblem<P>,
    E: &Arr1<S>,
) -> XResult<Vec<(f64, f64)>>
where
    I: Integrator,
    P: Potential,
    S: nd::Data<Elem = f64>,
{
    let rho = shoot_with(integrator, problem, E)?;
    let mut brackets: Vec<(f64, f64)> = Vec::new();
    for (k, (&ek, &rk)) in E.iter().zip(&rho).enumerate() {
        if rk == 0.0 {
            brackets.push((ek, ek));
        } else if let (Some(&ekp1), Some(&rkp1)) = (E.get(k + 1), rho.get(k + 1)) {
            if rkp1 != 0.0 && (rk > 0.0) != (rkp1 > 0.0) {
                brackets.push((ek, ekp1));
            }
        }
    }
    Ok(brackets)
}

/// Find all eigenvalues bracketed by an energy grid using the [default
/// integrator][Euler].
///
/// See [`find_eigenvalues_with`].
pub fn find_eigenvalues<P, S>(
    problem: &ShootingProblem<P>,
    E: &Arr1<S>,
    epsilon: f64,
    maxiters: usize,
) -> XResult<Vec<Eigenresult>>
where
    P: Potential,
    S: nd::Data<Elem = f64>,
{
    find_eigenvalues_with(&Euler, problem, E, epsilon, maxiters)
}

/// Find all eigenvalues bracketed by an energy grid via [`scan_brackets_with`]
/// followed by [`find_eigenvalue_with`] on each bracket.
///
/// Roots belonging to unbound states are dropped. Brackets that exhaust the
/// iteration budget are kept with `converged = false`. Solutions are returned
/// in order of increasing energy.
pub fn find_eigenvalues_with<I, P, S>(
    integrator: &I,
    problem: &ShootingProblem<P>,
    E: &Arr1<S>,
    epsilon: f64,
    maxiters: usize,
) -> XResult<Vec<Eigenresult>>
where
    I: Integrator,
    P: Potential,
    S: nd::Data<Elem = f64>,
{
    XError::check_epsilon(epsilon)?;
    XError::check_maxiters(maxiters)?;
    let brackets = scan_brackets_with(integrator, problem, E)?;
    let mut sols: Vec<Eigenresult> = Vec::with_capacity(brackets.len());
    for bracket in brackets {
        match find_eigenvalue_with(integrator, problem, bracket, epsilon, maxiters) {
            Ok(sol) => { sols.push(sol); },
            Err(XError::NotConverged(best)) => {
                warn!(
                    lo = bracket.0, hi = bracket.1, e = best.e,
                    "solve::find_eigenvalues: keeping unconverged solution"
                );
                sols.push(*best);
            },
            Err(XError::Unbound { e, f_edge }) => {
                debug!(e, f_edge, "solve::find_eigenvalues: dropping unbound root");
            },
            Err(err) => { return Err(err); },
        }
    }
    sols.sort_by(|l, r| l.cmp_energy(r).unwrap_or(cmp::Ordering::Equal));
    Ok(sols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ integrate::Numerov, potential::{ FiniteWell, Harmonic } };

    fn well_ground() -> ShootingProblem<FiniteWell> {
        ShootingProblem::with_parity(
            FiniteWell::default(), 64.0, Parity::Even, 1.5, 1e-4).unwrap()
    }

    #[test]
    fn problem_validation() {
        let w = FiniteWell::default();
        assert!(matches!(
            ShootingProblem::new(w, 64.0, (1.0, 0.0), 1.5, 0.0),
            Err(XError::InvalidStep { .. })
        ));
        assert!(matches!(
            ShootingProblem::new(w, 64.0, (1.0, 0.0), 0.0, 1e-3),
            Err(XError::InvalidStep { .. })
        ));
        assert!(matches!(
            ShootingProblem::new(w, 0.0, (1.0, 0.0), 1.5, 1e-3),
            Err(XError::BadBeta(_))
        ));
        assert!(matches!(
            ShootingProblem::new(w, 64.0, (1.0, 0.0), 1e300, 1e-300),
            Err(XError::InvalidStep { .. })
        ));
        let p = ShootingProblem::new(w, 64.0, (0.0, 1.0), 2.0, 1e-3).unwrap();
        assert_eq!(p.steps(), 2000);
        assert_eq!(p.parity(), Parity::Odd);
        assert_eq!(p.with_step(5e-4).unwrap().steps(), 4000);
    }

    #[test]
    fn search_parameter_validation() {
        let p = well_ground();
        assert!(matches!(
            find_eigenvalue(&p, (0.05, 0.15), 0.0, 100),
            Err(XError::BadEpsilon(_))
        ));
        assert!(matches!(
            find_eigenvalue(&p, (0.05, 0.15), 1e-5, 0),
            Err(XError::BadMaxiters(0))
        ));
        assert!(matches!(
            find_eigenvalue(&p, (f64::NAN, 0.15), 1e-5, 100),
            Err(XError::BadBracket(..))
        ));
    }

    #[test]
    fn bracket_order_is_irrelevant() {
        let p = well_ground();
        let a = find_eigenvalue(&p, (0.05, 0.15), 1e-5, 100).unwrap();
        let b = find_eigenvalue(&p, (0.15, 0.05), 1e-5, 100).unwrap();
        assert_eq!(a.e, b.e);
        assert!(a.converged);
        assert_eq!(a.parity, Parity::Even);
        assert_eq!(a.trajectory.first().psi, 1.0);
    }

    #[test]
    fn no_sign_change() {
        let p = well_ground();
        let err = find_eigenvalue(&p, (0.15, 0.3), 1e-5, 100).unwrap_err();
        match err {
            XError::NoSignChange { lo, hi, rho_lo, rho_hi } => {
                assert_eq!((lo, hi), (0.15, 0.3));
                assert!(rho_lo * rho_hi > 0.0);
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn budget_exhaustion_keeps_best_estimate() {
        let p = well_ground();
        let err = find_eigenvalue(&p, (0.05, 0.15), 1e-12, 3).unwrap_err();
        assert!(err.is_convergence_failure());
        let best = err.partial().unwrap();
        assert!(!best.converged);
        assert_eq!(best.iterations, 3);
        assert!((best.e - 0.098).abs() < 0.1 / 8.0);
    }

    #[test]
    fn unconverged_brackets_are_kept() {
        let p = ShootingProblem::with_parity(
            FiniteWell::default(), 64.0, Parity::Even, 1.5, 1e-3).unwrap();
        let E = nd::Array1::linspace(0.01, 0.99, 50);
        let sols = find_eigenvalues(&p, &E, 1e-12, 2).unwrap();
        assert!(!sols.is_empty());
        assert!(sols.iter().all(|s| !s.converged && s.iterations == 2));
        assert!(sols.windows(2).all(|w| w[0].e <= w[1].e));
    }

    #[test]
    fn ground_state_has_no_nodes() {
        let p = well_ground();
        let sol = find_eigenvalue(&p, (0.05, 0.15), 1e-5, 100).unwrap();
        assert_eq!(p.node_count(&sol), 0);
        let odd = ShootingProblem::with_parity(
            FiniteWell::default(), 64.0, Parity::Odd, 2.0, 1e-4).unwrap();
        let sol = find_eigenvalue(&odd, (0.3, 0.5), 1e-5, 100).unwrap();
        assert_eq!(odd.node_count(&sol), 1);
    }

    #[test]
    fn harmonic_spectrum_by_scanning() {
        let even = ShootingProblem::with_parity(
            Harmonic, 1.0, Parity::Even, 5.0, 1e-2).unwrap();
        let odd = ShootingProblem::with_parity(
            Harmonic, 1.0, Parity::Odd, 5.0, 1e-2).unwrap();
        let E: nd::Array1<f64> = nd::Array1::linspace(0.5, 10.0, 200);

        let sols = find_eigenvalues_with(&Numerov, &even, &E, 1e-8, 200).unwrap();
        let e: Vec<f64> = sols.iter().map(|s| s.e).collect();
        assert_eq!(e.len(), 3);
        for (computed, expected) in e.iter().zip([1.0, 5.0, 9.0]) {
            assert!((computed - expected).abs() < 1e-3, "{computed} vs {expected}");
        }
        let nodes: Vec<usize> = sols.iter().map(|s| even.node_count(s)).collect();
        assert_eq!(nodes, vec![0, 2, 4]);

        let sols = find_eigenvalues_with(&Numerov, &odd, &E, 1e-8, 200).unwrap();
        let e: Vec<f64> = sols.iter().map(|s| s.e).collect();
        assert_eq!(e.len(), 2);
        assert!((e[0] - 3.0).abs() < 1e-3);
        assert!((e[1] - 7.0).abs() < 1e-3);
    }
}
