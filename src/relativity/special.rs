//! Special-relativistic conversions between momentum, velocity fraction,
//! Lorentz factor and total energy for a body of rest mass `m`.
//!
//! Natural units throughout: momentum in MeV/c, mass in MeV/c², energy in MeV.

use crate::error::{BetheError, BetheResult};

/// Lorentz factor γ = 1 / sqrt(1 - β²)
pub fn gamma_from_beta(beta: f64) -> BetheResult<f64> {
    if !(0.0..1.0).contains(&beta) {
        return Err(BetheError::Domain {
            quantity: "beta",
            value: beta,
            constraint: "0 <= beta < 1",
        });
    }
    Ok(1.0 / (1.0 - beta * beta).sqrt())
}

/// β = p / sqrt(p² + m²)
pub fn beta_from_momentum_and_mass(p: f64, m: f64) -> f64 {
    p / energy_from_momentum_and_mass(p, m)
}

/// p = m·β·γ, the inverse of [`beta_from_momentum_and_mass`].
pub fn momentum_from_beta_and_mass(beta: f64, m: f64) -> BetheResult<f64> {
    let gamma = gamma_from_beta(beta)?;
    Ok(m * beta * gamma)
}

/// p = sqrt(E² - m²); energies below the rest mass are unphysical.
pub fn momentum_from_energy_and_mass(e: f64, m: f64) -> BetheResult<f64> {
    if e.is_nan() || e < m {
        return Err(BetheError::Domain {
            quantity: "energy",
            value: e,
            constraint: "E >= rest mass",
        });
    }
    Ok(((e - m) * (e + m)).sqrt())
}

/// E = sqrt(p² + m²), without overflowing for large p.
pub fn energy_from_momentum_and_mass(p: f64, m: f64) -> f64 {
    p.hypot(m)
}
