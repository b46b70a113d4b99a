//! Bethe-Bloch mean stopping power.
//!
//! The evaluator only accepts values implementing [`Projectile`] and
//! [`Absorber`], so passing the wrong kind of entity is a compile error.

use std::f64::consts::PI;

use crate::constants::PhysicalConstants;
use crate::error::{BetheError, BetheResult};
use crate::relativity::special::gamma_from_beta;

/// A charged body moving through an absorber.
pub trait Projectile {
    /// MeV/c²
    fn rest_mass(&self) -> f64;
    /// Units of the elementary charge
    fn charge(&self) -> f64;
    fn beta(&self) -> f64;
}

/// Atomic data of an absorbing medium.
pub trait Absorber {
    fn atomic_number(&self) -> f64;
    /// g/mol
    fn atomic_mass(&self) -> f64;
    /// MeV
    fn mean_ionization_energy(&self) -> f64;
    /// g/cm³
    fn density(&self) -> f64;
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StoppingPowerEvaluator {
    constants: PhysicalConstants,
}

impl StoppingPowerEvaluator {
    pub fn new(constants: PhysicalConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// k = 2π·N_A·r_e²·m_e·c²
    pub fn prefactor(&self) -> f64 {
        let k = &self.constants;
        2.0 * PI * k.avogadro * k.electron_radius.powi(2) * k.electron_mass() * k.c_squared()
    }

    /// Maximum kinetic energy transferable to a free electron in a single
    /// collision (MeV).
    pub fn max_energy_transfer<P: Projectile>(&self, projectile: &P) -> BetheResult<f64> {
        let beta = projectile.beta();
        let gamma = gamma_from_beta(beta)?;
        Ok(self.w_max(beta * gamma, projectile.rest_mass()))
    }

    fn w_max(&self, eta: f64, rest_mass: f64) -> f64 {
        let m_e = self.constants.electron_mass();
        let s = m_e / rest_mass;
        (2.0 * m_e * self.constants.c_squared() * eta.powi(2))
            / (1.0 + 2.0 * s * (1.0 + eta.powi(2)).sqrt() + s.powi(2))
    }

    /// Mean mass stopping power (MeV·cm²/g). Density is not applied; see
    /// [`Self::evaluate_linear`].
    pub fn evaluate<P: Projectile, A: Absorber>(
        &self,
        projectile: &P,
        absorber: &A,
    ) -> BetheResult<f64> {
        let beta = projectile.beta();
        if beta.is_nan() || beta <= 0.0 {
            return Err(BetheError::Domain {
                quantity: "beta",
                value: beta,
                constraint: "0 < beta < 1",
            });
        }
        let gamma = gamma_from_beta(beta)?;

        let m_e = self.constants.electron_mass();
        let v = beta * self.constants.speed_of_light;
        let eta = beta * gamma;
        let w_max = self.w_max(eta, projectile.rest_mass());

        let i = absorber.mean_ionization_energy();
        let log_arg = (2.0 * m_e * gamma.powi(2) * v.powi(2) * w_max) / i.powi(2);
        if !(log_arg.is_finite() && log_arg > 0.0) {
            return Err(BetheError::Domain {
                quantity: "logarithm argument",
                value: log_arg,
                constraint: "a finite value > 0",
            });
        }

        let bracket = log_arg.ln() - 2.0 * beta.powi(2);
        log::trace!(
            "beta={beta} gamma={gamma} eta={eta} w_max={w_max} log_arg={log_arg} bracket={bracket}"
        );
        // Below this velocity the formula predicts energy gain.
        if bracket <= 0.0 {
            return Err(BetheError::Domain {
                quantity: "Bethe bracket ln(...) - 2 beta^2",
                value: bracket,
                constraint: "a value > 0 (projectile too slow for Bethe-Bloch)",
            });
        }

        let z = projectile.charge();
        Ok(self.prefactor()
            * (absorber.atomic_number() / absorber.atomic_mass())
            * (z / beta).powi(2)
            * bracket)
    }

    /// Linear stopping power (MeV/cm): [`Self::evaluate`] scaled by density.
    pub fn evaluate_linear<P: Projectile, A: Absorber>(
        &self,
        projectile: &P,
        absorber: &A,
    ) -> BetheResult<f64> {
        Ok(self.evaluate(projectile, absorber)? * absorber.density())
    }
}
