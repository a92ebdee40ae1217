#![allow(non_upper_case_globals)]

//! Convenience functions and constructs to handle minutiae associated with
//! conversion to and from naturalized units.
//!
//! Nothing in the solvers reads from this module; it only helps callers derive
//! the dimensionless constants (e.g. `β`) that define a
//! [`ShootingProblem`][crate::solve::ShootingProblem].
//!
//! Concrete physical constants are taken from NIST.

use std::f64::consts::PI;

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// elementary charge (C)
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// A collection of natural unit scaling factors relative to some base unit
/// system.
///
/// For a particle of mass *m* and a length scale *a*, the natural energy unit
/// is *ħ*²/2 *m* *a*², in which the TISE becomes
/// ```text
/// ψ''(u) = -(E - V(u)) ψ(u)
/// ```
/// with `u = x / a`. See [`docs`][crate::docs#units] for more information.
#[derive(Copy, Clone, Debug)]
pub struct Units {
    /// Particle mass.
    pub m: f64,
    /// Base length scale.
    pub a: f64,
    /// Associated energy scale.
    pub e: f64,
}

impl Units {
    /// Construct from a mass and length scale given in meters/kilograms/seconds
    /// (MKS) units.
    pub fn from_mks(mass: f64, a: f64) -> Self {
        let e_unit = hbar.powi(2) / 2.0 / mass / a.powi(2);
        Self { m: mass, a, e: e_unit }
    }

    /// Construct for a harmonic trap of angular frequency `omega` (MKS), using
    /// the ground-state length √(*ħ*/*m* *ω*) as the length scale.
    ///
    /// In these units the potential is `u²` and the energy unit is *ħω*/2, so
    /// that eigenvalues fall at `2n + 1`.
    pub fn harmonic(mass: f64, omega: f64) -> Self {
        Self::from_mks(mass, (hbar / mass / omega).sqrt())
    }

    /// Scale factor `β` for a finite well of depth `depth` (J) when
    /// coordinates are measured in units of `self.a` and energies in units of
    /// `depth`.
    pub fn well_beta(&self, depth: f64) -> f64 {
        self.to_nat_energy(depth)
    }

    /// Convert a quantity with dimensions of length in the base unit system to
    /// natural units.
    pub fn to_nat_length<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.a.recip()
    }

    /// Convert a dimensionless quantity to one with length units in the base
    /// unit system.
    pub fn from_nat_length<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.a
    }

    /// Convert a quantity with dimensions of energy in the base unit system to
    /// natural units.
    pub fn to_nat_energy<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.e.recip()
    }

    /// Convert a dimensionless quantity to one with energy units in the base
    /// unit system.
    pub fn from_nat_energy<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.e
    }
}
