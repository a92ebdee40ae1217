use tracing_subscriber::EnvFilter;
use xshoot::{
    potential::FiniteWell,
    solve::{ self, ShootingProblem },
    units,
    Parity,
    XError,
};

// bound states of an electron in a finite square well, plus a look at what
// happens above the well

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    const WIDTH: f64 = 1e-9; // m
    const DEPTH: f64 = 2.4 * units::e; // J

    // coordinates in units of the well width, energies in units of its depth
    let uu = units::Units::from_mks(units::me, WIDTH);
    let beta = uu.well_beta(DEPTH);
    println!("beta = {:.3}", beta);

    let well = FiniteWell::default();
    let ground = ShootingProblem::with_parity(well, beta, Parity::Even, 1.5, 1e-4)?;
    let excited = ShootingProblem::with_parity(well, beta, Parity::Odd, 2.0, 1e-4)?;
    let energies = ndarray::Array1::linspace(1e-3, 0.999, 200);
    for problem in [&ground, &excited] {
        for sol in solve::find_eigenvalues(problem, &energies, 1e-7, 1000)? {
            println!(
                "{:?}: e = {:.6} ({:.4} eV), nodes = {}",
                sol.parity,
                sol.e,
                sol.e * DEPTH / units::e,
                problem.node_count(&sol),
            );
        }
    }

    // above the well there is nothing to find
    match solve::find_eigenvalue(&ground, (2.0, 4.0), 1e-7, 1000) {
        Err(err @ (XError::NoSignChange { .. } | XError::Unbound { .. })) => {
            println!("above the well: {}", err);
        },
        Err(err) => { return Err(err.into()); },
        Ok(sol) => { println!("unexpected bound state at e = {}", sol.e); },
    }
    Ok(())
}
