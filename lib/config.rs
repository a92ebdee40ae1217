//! Serializable descriptions of shooting problems and searches.
//!
//! All constants that define a problem are explicit here; nothing is read from
//! the environment.
//!
//! ```
//! use xshoot::config::{ ProblemConfig, SolverConfig };
//!
//! let problem: ProblemConfig = serde_json::from_str(r#"{
//!     "potential": { "kind": "harmonic" },
//!     "init": [1.0, 0.0],
//!     "u_f": 3.9,
//!     "du": 1e-3,
//!     "scheme": "numerov"
//! }"#).unwrap();
//! let search: SolverConfig = serde_json::from_str(r#"{
//!     "bracket": [0.9, 1.1]
//! }"#).unwrap();
//! let sol = search.solve(&problem).unwrap();
//! assert!((sol.e - 1.0).abs() < 1e-4);
//! ```

use serde::{ Deserialize, Serialize };
use tracing::debug;
use crate::{
    error::XResult,
    integrate::Scheme,
    potential::{ Flat, FiniteWell, Harmonic, Potential },
    solve::{ find_eigenvalue_with, Eigenresult, ShootingProblem },
    DEF_EPSILON,
    DEF_MAXITERS,
};

/// Potential selector.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PotentialConfig {
    /// [`FiniteWell`]; fields default to the unit-depth, unit-width well.
    FiniteWell {
        #[serde(default = "def_half_width")]
        half_width: f64,
        #[serde(default = "def_depth")]
        depth: f64,
    },
    /// [`Harmonic`]
    Harmonic,
    /// [`Flat`]
    Flat {
        #[serde(default)]
        level: f64,
    },
}

fn def_half_width() -> f64 { FiniteWell::default().half_width }

fn def_depth() -> f64 { FiniteWell::default().depth }

fn def_beta() -> f64 { 1.0 }

fn def_epsilon() -> f64 { DEF_EPSILON }

fn def_maxiters() -> usize { DEF_MAXITERS }

impl Potential for PotentialConfig {
    fn value(&self, u: f64) -> f64 {
        match *self {
            Self::FiniteWell { half_width, depth }
                => FiniteWell { half_width, depth }.value(u),
            Self::Harmonic => Harmonic.value(u),
            Self::Flat { level } => Flat { level }.value(u),
        }
    }
}

/// A shooting problem as data.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProblemConfig {
    /// Potential
    pub potential: PotentialConfig,
    /// Scale factor β (default: `1`)
    #[serde(default = "def_beta")]
    pub beta: f64,
    /// Initial conditions `(ψ(0), ψ'(0))`
    pub init: (f64, f64),
    /// Domain extent
    pub u_f: f64,
    /// Grid spacing
    pub du: f64,
    /// Integration scheme (default: Euler)
    #[serde(default)]
    pub scheme: Scheme,
}

impl ProblemConfig {
    /// Validate and convert to a [`ShootingProblem`].
    pub fn build(&self) -> XResult<ShootingProblem<PotentialConfig>> {
        ShootingProblem::new(self.potential, self.beta, self.init, self.u_f, self.du)
    }
}

/// Parameters for a single bracketed search.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Energy bracket
    pub bracket: (f64, f64),
    /// Desired accuracy bound (default: `1e-6`)
    #[serde(default = "def_epsilon")]
    pub epsilon: f64,
    /// Maximum number of iterations (default: `1000`)
    #[serde(default = "def_maxiters")]
    pub maxiters: usize,
}

impl SolverConfig {
    /// Create a new `SolverConfig` with default accuracy and iteration bounds.
    pub fn new(bracket: (f64, f64)) -> Self {
        Self { bracket, epsilon: DEF_EPSILON, maxiters: DEF_MAXITERS }
    }

    /// Build `problem` and run the search with its selected scheme.
    pub fn solve(&self, problem: &ProblemConfig) -> XResult<Eigenresult> {
        debug!(?problem, search = ?self, "solving from config");
        let shooting = problem.build()?;
        find_eigenvalue_with(
            &problem.scheme, &shooting, self.bracket, self.epsilon, self.maxiters)
    }
}
