//! Projectile kinematic state.
//!
//! Momentum is the only stored kinematic quantity. Beta, gamma and energy
//! are recomputed from it on every read, and the beta/energy setters convert
//! back to momentum before storing.

use std::fmt;

use crate::error::{BetheError, BetheResult};
use crate::relativity::special::{
    beta_from_momentum_and_mass, energy_from_momentum_and_mass, gamma_from_beta,
    momentum_from_beta_and_mass, momentum_from_energy_and_mass,
};
use crate::stopping::Projectile;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    name: String,
    /// MeV/c²
    rest_mass: f64,
    /// Units of the elementary charge
    charge: f64,
    /// MeV/c
    momentum: f64,
}

impl Particle {
    /// Creates a particle at rest. The rest mass must be finite and > 0.
    pub fn new(
        name: impl Into<String>,
        rest_mass: impl Into<f64>,
        charge: impl Into<f64>,
    ) -> BetheResult<Self> {
        let rest_mass = rest_mass.into();
        if !(rest_mass.is_finite() && rest_mass > 0.0) {
            return Err(BetheError::Validation {
                field: "rest mass",
                value: rest_mass,
                constraint: "a finite value > 0",
            });
        }
        let charge = charge.into();
        if !charge.is_finite() {
            return Err(BetheError::Validation {
                field: "charge",
                value: charge,
                constraint: "a finite value",
            });
        }
        Ok(Self {
            name: name.into(),
            rest_mass,
            charge,
            momentum: 0.0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rest_mass(&self) -> f64 {
        self.rest_mass
    }

    pub fn charge(&self) -> f64 {
        self.charge
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn set_momentum(&mut self, p: f64) -> BetheResult<()> {
        if p.is_nan() || p < 0.0 || p.is_infinite() {
            return Err(BetheError::Validation {
                field: "momentum",
                value: p,
                constraint: "a finite value >= 0",
            });
        }
        self.momentum = p;
        Ok(())
    }

    pub fn beta(&self) -> f64 {
        beta_from_momentum_and_mass(self.momentum, self.rest_mass)
    }

    pub fn set_beta(&mut self, beta: f64) -> BetheResult<()> {
        let p = momentum_from_beta_and_mass(beta, self.rest_mass)?;
        self.set_momentum(p)
    }

    /// Fails only when beta rounds to 1 at extreme momenta.
    pub fn gamma(&self) -> BetheResult<f64> {
        gamma_from_beta(self.beta())
    }

    /// βγ, equal to p / M.
    pub fn beta_gamma(&self) -> f64 {
        self.momentum / self.rest_mass
    }

    pub fn energy(&self) -> f64 {
        energy_from_momentum_and_mass(self.momentum, self.rest_mass)
    }

    pub fn set_energy(&mut self, e: f64) -> BetheResult<()> {
        let p = momentum_from_energy_and_mass(e, self.rest_mass)?;
        self.set_momentum(p)
    }
}

impl Projectile for Particle {
    fn rest_mass(&self) -> f64 {
        self.rest_mass
    }

    fn charge(&self) -> f64 {
        self.charge
    }

    fn beta(&self) -> f64 {
        Particle::beta(self)
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Particle name: {}", self.name)?;
        writeln!(f, "Mass = {} MeV/c^2", self.rest_mass)?;
        writeln!(f, "Charge = {}", self.charge)?;
        writeln!(f, "Momentum = {:.2} MeV/c", self.momentum)?;
        write!(f, "Energy = {:.2} MeV", self.energy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proton() -> Particle {
        Particle::new("p", 938, 1).unwrap()
    }

    #[test]
    fn starts_at_rest() {
        let p = proton();
        assert_eq!(p.momentum(), 0.0);
        assert_eq!(p.beta(), 0.0);
        assert_eq!(p.energy(), 938.0);
        assert_eq!(p.gamma().unwrap(), 1.0);
    }

    #[test]
    fn rejects_non_positive_rest_mass() {
        assert!(Particle::new("x", 0.0, 1.0).unwrap_err().is_validation());
        assert!(Particle::new("x", -1.0, 1.0).unwrap_err().is_validation());
        assert!(Particle::new("x", f64::NAN, 1.0).unwrap_err().is_validation());
    }

    #[test]
    fn negative_charge_is_allowed() {
        let pbar = Particle::new("pbar", 938, -1).unwrap();
        assert_eq!(pbar.charge(), -1.0);
    }

    #[test]
    fn negative_momentum_is_rejected_and_state_kept() {
        let mut p = proton();
        p.set_momentum(600.0).unwrap();
        let err = p.set_momentum(-1.0).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(p.momentum(), 600.0);
        assert!(p.set_momentum(f64::NAN).is_err());
        assert!(p.set_momentum(f64::INFINITY).is_err());
    }

    #[test]
    fn set_beta_zero_means_rest() {
        let mut p = proton();
        p.set_momentum(123.0).unwrap();
        p.set_beta(0.0).unwrap();
        assert_eq!(p.momentum(), 0.0);
        assert_eq!(p.energy(), p.rest_mass());
    }

    #[test]
    fn set_beta_at_or_above_one_fails() {
        let mut p = proton();
        p.set_momentum(42.0).unwrap();
        assert!(p.set_beta(1.0).unwrap_err().is_domain());
        assert!(p.set_beta(1.2).unwrap_err().is_domain());
        assert!(p.set_beta(-0.5).unwrap_err().is_domain());
        assert_eq!(p.momentum(), 42.0);
    }

    #[test]
    fn set_beta_updates_every_view() {
        let mut p = proton();
        p.set_beta(0.6).unwrap();
        assert!((p.momentum() - 938.0 * 0.75).abs() < 1e-9);
        assert!((p.beta() - 0.6).abs() < 1e-12);
        assert!((p.gamma().unwrap() - 1.25).abs() < 1e-12);
        assert!((p.energy() - 938.0 * 1.25).abs() < 1e-9);
    }

    #[test]
    fn set_energy_round_trips() {
        let mut p = proton();
        p.set_energy(1500.0).unwrap();
        assert!((p.energy() - 1500.0).abs() < 1e-9);
        assert!(p.set_energy(900.0).unwrap_err().is_domain());
    }

    #[test]
    fn beta_gamma_is_momentum_over_mass() {
        let mut p = proton();
        p.set_momentum(1876.0).unwrap();
        assert_eq!(p.beta_gamma(), 2.0);
        let eta = p.beta() * p.gamma().unwrap();
        assert!((eta - 2.0).abs() < 1e-12);
    }

    #[test]
    fn huge_momentum_keeps_beta_increasing() {
        let mut p = proton();
        p.set_momentum(1e12).unwrap();
        let beta_small = p.beta();
        p.set_momentum(1e200).unwrap();
        assert!(p.energy().is_finite());
        assert!(p.beta() >= beta_small);
        assert!(p.beta() > 0.999);
    }

    #[test]
    fn display_reports_momentum_and_energy() {
        let mut p = proton();
        p.set_momentum(600.0).unwrap();
        let text = p.to_string();
        assert!(text.contains("Particle name: p"));
        assert!(text.contains("Momentum = 600.00 MeV/c"));
        assert!(text.contains("Energy = 1113.48 MeV"));
    }
}
