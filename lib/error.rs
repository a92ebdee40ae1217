//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use thiserror::Error;
use crate::solve::Eigenresult;

pub type XResult<T> = Result<T, XError>;

/// Returned from integrator and shooting solver functions.
#[derive(Debug, Error)]
pub enum XError {
    /// Returned when grid parameters cannot describe a uniform grid starting
    /// at `u = 0`.
    #[error("invalid grid: step must be finite and greater than 0 and extent must be finite and non-negative; got step {step} over extent {extent}")]
    InvalidStep { step: f64, extent: f64 },

    /// Returned when a non-positive `epsilon` value is encountered.
    #[error("epsilon values must be greater than 0; got {0}")]
    BadEpsilon(f64),

    /// Returned when a non-positive `maxiters` value is encountered.
    #[error("maxiters must be greater than 0; got {0}")]
    BadMaxiters(usize),

    /// Returned when a non-positive or non-finite scale factor is encountered.
    #[error("beta must be finite and greater than 0; got {0}")]
    BadBeta(f64),

    /// Returned when an energy bracket has a non-finite bound.
    #[error("energy bracket bounds must be finite; got ({0}, {1})")]
    BadBracket(f64, f64),

    /// Returned when the edge residual has the same sign at both ends of an
    /// energy bracket, i.e. the bracket contains no (isolated) eigenvalue.
    #[error("solve::find_eigenvalue: residual does not change sign over [{lo}, {hi}]; got {rho_lo:e} and {rho_hi:e}")]
    NoSignChange { lo: f64, hi: f64, rho_lo: f64, rho_hi: f64 },

    /// Returned when the iteration budget is exhausted before the tolerance is
    /// met. Holds the best estimate found so far.
    #[error("solve::find_eigenvalue: no convergence after {} iterations; best estimate e = {}", .0.iterations, .0.e)]
    NotConverged(Box<Eigenresult>),

    /// Returned when the residual root lies at an energy for which the edge of
    /// the domain is classically allowed, so the solution oscillates there
    /// instead of decaying.
    #[error("solve::find_eigenvalue: e = {e} does not decay at the domain edge (f(u_f) = {f_edge:e}); state is unbound")]
    Unbound { e: f64, f_edge: f64 },

    /// Returned when integration produces a non-finite value.
    #[error("integration overflowed at grid index {index} (u = {u})")]
    NumericOverflow { index: usize, u: f64 },
}

impl XError {
    pub(crate) fn check_step(step: f64, extent: f64) -> Result<(), Self> {
        (step.is_finite() && step > 0.0 && extent.is_finite() && extent >= 0.0)
            .then_some(())
            .ok_or(Self::InvalidStep { step, extent })
    }

    pub(crate) fn check_epsilon(epsilon: f64) -> Result<(), Self> {
        (epsilon > 0.0).then_some(()).ok_or(Self::BadEpsilon(epsilon))
    }

    pub(crate) fn check_maxiters(maxiters: usize) -> Result<(), Self> {
        (maxiters != 0).then_some(()).ok_or(Self::BadMaxiters(maxiters))
    }

    pub(crate) fn check_beta(beta: f64) -> Result<(), Self> {
        (beta.is_finite() && beta > 0.0)
            .then_some(())
            .ok_or(Self::BadBeta(beta))
    }

    pub(crate) fn check_bracket(bracket: (f64, f64)) -> Result<(), Self> {
        (bracket.0.is_finite() && bracket.1.is_finite())
            .then_some(())
            .ok_or(Self::BadBracket(bracket.0, bracket.1))
    }

    /// Return `true` if `self` reports a search that ran but did not settle on
    /// a bound state (`NotConverged` or `Unbound`).
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, Self::NotConverged(_) | Self::Unbound { .. })
    }

    /// Return the best available estimate if `self` is `NotConverged`.
    pub fn partial(&self) -> Option<&Eigenresult> {
        match self {
            Self::NotConverged(best) => Some(best.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_checks() {
        assert!(XError::check_step(1e-3, 1.0).is_ok());
        assert!(XError::check_step(1e-3, 0.0).is_ok());
        assert!(matches!(
            XError::check_step(0.0, 1.0),
            Err(XError::InvalidStep { .. })
        ));
        assert!(XError::check_step(-1e-3, 1.0).is_err());
        assert!(XError::check_step(f64::NAN, 1.0).is_err());
        assert!(XError::check_step(1e-3, -1.0).is_err());
    }

    #[test]
    fn parameter_checks() {
        assert!(XError::check_epsilon(0.0).is_err());
        assert!(XError::check_maxiters(0).is_err());
        assert!(XError::check_beta(-64.0).is_err());
        assert!(XError::check_beta(f64::INFINITY).is_err());
        assert!(XError::check_bracket((0.0, f64::NAN)).is_err());
        assert!(XError::check_bracket((0.5, 0.1)).is_ok());
    }
}
