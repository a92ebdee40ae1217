use std::f64::consts::PI;
use ndarray as nd;
use tracing_subscriber::EnvFilter;
use xshoot::{
    potential::Harmonic,
    solve::{ self, ShootingProblem },
    units,
    Numerov,
    Parity,
};

// solve for eigenstates of the quantum harmonic oscillator

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    const MASS: f64 = 2.8384644058191703e-25; // ¹⁷¹Yb; kg
    const TRAP_FREQ: f64 = 2.0 * PI * 30e3; // s⁻¹
    const TARGET_N: usize = 5; // target number of nodes

    // natural units based on the ground-state length, normalizing:
    // * state energies to (2n + 1)
    // * turning points to ±√(2n + 1)
    let uu = units::Units::harmonic(MASS, TRAP_FREQ);
    let e = |n: usize| 2.0 * n as f64 + 1.0;

    // solve for the target solution
    let parity = if TARGET_N % 2 == 0 { Parity::Even } else { Parity::Odd };
    let problem = ShootingProblem::with_parity(Harmonic, 1.0, parity, 6.0, 1e-4)?;
    let bounds = (e(TARGET_N) - 0.5, e(TARGET_N) + 0.5);
    let sol = solve::find_eigenvalue(&problem, bounds, 1e-6, 1000)?;
    println!("expected: {:.6}", e(TARGET_N));
    println!("computed: {:.6}", sol.e);
    println!("nodes:    {}", problem.node_count(&sol));
    println!(
        "energy:   {:.6e} J (ħω(n + 1/2) = {:.6e} J)",
        uu.from_nat_energy(sol.e),
        units::hbar * TRAP_FREQ * (TARGET_N as f64 + 0.5),
    );

    // do the same for the lowest few states of each parity with Numerov's
    // method, discovering brackets automatically
    let energies: nd::Array1<f64> = nd::Array1::linspace(0.5, 12.0, 500);
    for parity in [Parity::Even, Parity::Odd] {
        let problem = ShootingProblem::with_parity(Harmonic, 1.0, parity, 6.0, 1e-3)?;
        let sols = solve::find_eigenvalues_with(&Numerov, &problem, &energies, 1e-9, 1000)?;
        for sol in sols.iter() {
            println!(
                "{:?}: e = {:.8}, nodes = {}, converged = {}",
                parity, sol.e, problem.node_count(sol), sol.converged,
            );
        }
    }
    Ok(())
}
