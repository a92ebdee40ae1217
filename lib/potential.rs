//! Dimensionless potentials and their conversion to the coefficient function
//! expected by an [`Integrator`][crate::Integrator].
//!
//! Any `Fn(f64) -> f64` can be used as a [`Potential`]. Results for the
//! full domain are only meaningful for even potentials, `V(u) = V(-u)`, since
//! only the half-domain `u ≥ 0` is ever sampled.

use serde::{ Deserialize, Serialize };

/// A real-valued potential in dimensionless units.
pub trait Potential {
    /// Evaluate the potential at coordinate `u`.
    fn value(&self, u: f64) -> f64;
}

impl<F> Potential for F
where F: Fn(f64) -> f64
{
    fn value(&self, u: f64) -> f64 { self(u) }
}

/// Square well of depth `depth` and half-width `half_width`, with its floor at
/// zero:
/// ```text
/// V(u) = 0      |u| ≤ half_width
///        depth  otherwise
/// ```
///
/// The default is the unit-depth well with coordinates measured in units of
/// the full well width (`half_width = 0.5`, `depth = 1`), for which states with
/// energies above 1 are unbound.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FiniteWell {
    pub half_width: f64,
    pub depth: f64,
}

impl Default for FiniteWell {
    fn default() -> Self { Self { half_width: 0.5, depth: 1.0 } }
}

impl Potential for FiniteWell {
    fn value(&self, u: f64) -> f64 {
        if u.abs() <= self.half_width { 0.0 } else { self.depth }
    }
}

/// Harmonic potential `V(u) = u²`.
///
/// With `β = 1`, bound states have energies `2n + 1`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Harmonic;

impl Potential for Harmonic {
    fn value(&self, u: f64) -> f64 { u * u }
}

/// Constant potential `V(u) = level`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Flat {
    pub level: f64,
}

impl Potential for Flat {
    fn value(&self, _u: f64) -> f64 { self.level }
}

/// Wraps a [`Potential`] and a scale factor `β` into the TISE coefficient
/// ```text
/// f(u; ε) = -β (ε - V(u))
/// ```
/// so that `ψ'' = f(u; ε) ψ`.
#[derive(Copy, Clone, Debug)]
pub struct Schrodinger<P> {
    potential: P,
    beta: f64,
}

impl<P: Potential> Schrodinger<P> {
    /// Create a new adapter. `beta` is not validated here; see
    /// [`ShootingProblem::new`][crate::solve::ShootingProblem::new].
    pub fn new(potential: P, beta: f64) -> Self { Self { potential, beta } }

    /// Get a reference to the underlying potential.
    pub fn potential(&self) -> &P { &self.potential }

    /// Get the scale factor.
    pub fn beta(&self) -> f64 { self.beta }

    /// Evaluate the coefficient at a single point.
    pub fn coefficient(&self, u: f64, e: f64) -> f64 {
        -self.beta * (e - self.potential.value(u))
    }

    /// Fix the trial energy, returning the coefficient as a function of `u`
    /// only.
    pub fn at(&self, e: f64) -> impl Fn(f64) -> f64 + '_ {
        move |u| self.coefficient(u, e)
    }

    /// Return `true` if `u` lies in the classically forbidden region for
    /// energy `e`, i.e. where solutions grow or decay instead of oscillating.
    pub fn is_forbidden(&self, u: f64, e: f64) -> bool {
        self.coefficient(u, e) > 0.0
    }
}
