//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Integration](#integration)
//! - [Eigenvalue search](#eigenvalue-search)
//! - [Parity](#parity)
//! - [Units](#units)
//!
//! # Background
//! Solution of the one-dimensional time-independent Schrödinger equation (TISE)
//! amounts to solving equations of the form
//! ```text
//! ∂²ψ
//! --- = f(u) ψ(u)
//! ∂u²
//! ```
//! where, in the particular case of the TISE in dimensionless units, one takes
//! ```text
//! f(u) = -β (ε - V(u))
//! ```
//! with *V*(*u*) a potential, *ε* a trial energy, and *β* a scale factor that
//! collects the mass, length, and energy scales of the problem (see
//! [Units](#units)). Only particular values of *ε* admit solutions that decay
//! on both sides of the potential; these are the bound-state eigenvalues.
//!
//! Where *f*(*u*) < 0 the solution oscillates (the classically allowed region)
//! and where *f*(*u*) > 0 it is a combination of growing and decaying
//! exponentials (the classically forbidden region). For a generic trial energy
//! the growing component dominates far from the center of the potential.
//!
//! # Integration
//! Solutions are integrated outward from *u* = 0 on a uniform grid
//! ```text
//! u[i] = i δu, i ∊ {0, ..., N}
//! ```
//! as an initial value problem in (*ψ*, *ψ*'). The default scheme is the
//! explicit forward Euler update
//! ```text
//! ψ'[i + 1] = ψ'[i] + δu f(u[i]) ψ[i]
//! ψ[i + 1]  = ψ[i]  + δu ψ'[i]
//! ```
//! which has a local truncation error of *O*(*δu*²) and a global error of
//! *O*(*δu*). It does not conserve the "energy" of oscillatory solutions: each
//! step in an allowed region with *f* = -*k*² multiplies the amplitude by
//! about √(1 + *k*² *δu*²), so an unbound trial solution integrated over a long
//! window with a coarse grid grows without bound even though the exact
//! solution is a bounded oscillation.
//!
//! Numerov's method[^1] is provided as a higher-order alternative:
//! ```text
//!      δu²                             5 δu²                   δu²
//! (1 - --- f[i + 1]) ψ[i + 1] = 2 (1 + ----- f[i]) ψ[i] - (1 - --- f[i - 1]) ψ[i - 1]
//!      12                               12                     12
//! ```
//! with a global error of *O*(*δu*⁴). Being a three-point scheme, it is
//! started with a Taylor expansion about *u* = 0 and derivatives are recovered
//! by finite differences afterward.
//!
//! # Eigenvalue search
//! For a bound state, *ψ* must vanish far from the potential. Taking a domain
//! \[0, *u*<sub>f</sub>\] with *u*<sub>f</sub> deep in the forbidden region,
//! the residual
//! ```text
//! ρ(ε) = ψ(u_f; ε)
//! ```
//! is dominated by the growing exponential, whose sign flips each time *ε*
//! crosses an eigenvalue (at which point another node enters the allowed
//! region). An energy bracket \[*ε*<sub>lo</sub>, *ε*<sub>hi</sub>\] over which
//! *ρ* changes sign therefore contains an eigenvalue, which is isolated by
//! bisection until either |*ρ*| or the bracket width falls below a tolerance.
//! Brackets can be found automatically by evaluating *ρ* over a grid of
//! energies and collecting sign changes.
//!
//! A root of *ρ* is only a bound state if the domain edge is classically
//! forbidden, *f*(*u*<sub>f</sub>) > 0. Above the asymptotic value of the
//! potential, *ψ* oscillates out to the edge and *ρ* has many roots that
//! merely place a node at *u*<sub>f</sub>; such roots are rejected as unbound.
//!
//! # Parity
//! In an even potential *V*(*u*) = *V*(-*u*), eigenstates are either even or
//! odd. Even states are found from (*ψ*(0), *ψ*'(0)) = (1, 0) and odd states
//! from (0, 1); the overall scale is irrelevant since the equation is linear.
//! The full-domain solution follows by reflection:
//! ```text
//! even: ψ(-u) =  ψ(u), ψ'(-u) = -ψ'(u)
//! odd:  ψ(-u) = -ψ(u), ψ'(-u) =  ψ'(u)
//! ```
//!
//! # Units
//! Starting from the usual expression of the TISE,
//! ```text
//!    ħ² ∂²
//! - --- --- ψ(x) + V(x) ψ(x) = E ψ(x)
//!   2 m ∂x²
//! ```
//! choose a length scale *a* and an energy scale *V*<sub>0</sub>, and change
//! variables to *u* ≡ *x* / *a* and *ε* ≡ *E* / *V*<sub>0</sub>. This gives
//! ```text
//! ∂²ψ
//! --- = -β (ε - V(a u) / V₀) ψ(u)
//! ∂u²
//!
//!     2 m a² V₀
//! β = ---------
//!        ħ²
//! ```
//! i.e. *β* is *V*<sub>0</sub> measured in the natural energy unit
//! *ħ*²/2 *m* *a*². For a square well it is natural to take *a* as the well
//! width and *V*<sub>0</sub> as its depth, so that the well occupies
//! |*u*| ≤ 1/2 and states with *ε* > 1 are unbound. For a harmonic trap of
//! frequency *ω*, taking *a* = √(*ħ*/*m* *ω*) and *V*<sub>0</sub> equal to the
//! natural energy unit *ħω*/2 gives *β* = 1 and *V*(*u*) = *u*², with
//! eigenvalues *ε* = 2*n* + 1.
//!
//! Items in [`units`][crate::units] are provided to handle the minutiae
//! associated with conversion to and from naturalized units.
//!
//! [^1]: B. Numerov, "Note on the numerical integration of d2x/dt2 = f(x,t)."
//! Astronomische Nachrichten **230** 19 (1927).
