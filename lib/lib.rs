#![allow(non_snake_case)]

//! Provides functions and higher-level constructs for automated solution of the
//! one-dimensional, time-independent Schrödinger equation for symmetric
//! potentials via the shooting method.
//!
//! A trial energy *ε* fixes the coefficient of the equation ψ'' = f(u) ψ, which
//! is integrated outward from the center of the potential as an initial value
//! problem over the half-domain \[0, *u*<sub>f</sub>\]. The energy is then
//! refined by bisection on the value of the wavefunction at the far edge until
//! it vanishes, and the converged half-domain solution is mirrored into the
//! full domain according to its parity.
//!
//! Provides implementations for the following numerical routines:
//! - Integrators:
//!     - Forward Euler (default)
//!     - Numerov[^1]
//! - Eigenvalue search:
//!     - Bisection on the edge value of the wavefunction
//!     - Sign-change scanning over an energy grid for bracket discovery
//!
//! ```
//! use xshoot::{ potential::FiniteWell, solve::{ self, ShootingProblem } };
//!
//! let problem = ShootingProblem::new(
//!     FiniteWell::default(), 64.0, (1.0, 0.0), 1.5, 1e-4).unwrap();
//! let sol = solve::find_eigenvalue(&problem, (0.05, 0.15), 1e-5, 100).unwrap();
//! assert!((sol.e - 0.097993).abs() < 2e-5);
//! ```
//!
//! See [`docs`] for theoretical background.
//!
//! [^1]: B. Numerov, "Note on the numerical integration of d2x/dt2 = f(x,t)."
//! Astronomische Nachrichten **230** 19 (1927).

pub mod error;
pub mod trajectory;
pub mod integrate;
pub mod potential;
pub mod parity;
pub mod solve;
pub mod config;
pub mod units;

pub mod docs;

pub(crate) const DEF_EPSILON: f64 = 1e-6;
pub(crate) const DEF_MAXITERS: usize = 1000;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;

pub use error::{ XError, XResult };
pub use integrate::{ integrate, Euler, Integrator, Numerov, Scheme };
pub use parity::Parity;
pub use solve::{ find_eigenvalue, Eigenresult, ShootingProblem };
pub use trajectory::{ GridPoint, Trajectory };
