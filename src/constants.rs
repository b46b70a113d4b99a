//! Physical constants shared by the kinematics and stopping-power code.
//!
//! Units follow the usual energy-loss bookkeeping: masses and momenta in MeV
//! (c = 1 inside the kinematics), lengths in cm, with the speed of light kept
//! in m/s for the velocity term of the Bethe-Bloch logarithm.

/// Immutable set of constants handed to the stopping-power evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Avogadro's number (mol⁻¹)
    pub avogadro: f64,
    /// Speed of light (m/s)
    pub speed_of_light: f64,
    /// Classical electron radius (cm)
    pub electron_radius: f64,
    /// Electron rest energy (MeV)
    pub electron_rest_energy: f64,
}

impl PhysicalConstants {
    pub const STANDARD: PhysicalConstants = PhysicalConstants {
        avogadro: AVOGADRO,
        speed_of_light: C,
        electron_radius: ELECTRON_RADIUS,
        electron_rest_energy: ELECTRON_REST_ENERGY,
    };

    /// Electron mass in MeV/c², with c in m/s.
    pub fn electron_mass(&self) -> f64 {
        self.electron_rest_energy / self.c_squared()
    }

    pub fn c_squared(&self) -> f64 {
        self.speed_of_light * self.speed_of_light
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::STANDARD
    }
}

pub const AVOGADRO: f64 = 6.022e23;
pub const C: f64 = 3e8;
pub const ELECTRON_RADIUS: f64 = 2.817e-13;
pub const ELECTRON_REST_ENERGY: f64 = 0.511;
