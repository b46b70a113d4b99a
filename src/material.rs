//! Absorber media.

use std::fmt;

use crate::error::{BetheError, BetheResult};
use crate::stopping::Absorber;

/// Immutable atomic description of an absorber.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    name: String,
    atomic_mass: f64,
    atomic_number: f64,
    density: f64,
    mean_ionization_energy: f64,
}

impl Material {
    /// Builds a material from its atomic mass A (g/mol), atomic number Z,
    /// density (g/cm³) and mean ionization energy I (MeV).
    ///
    /// Every field must be finite and strictly positive.
    pub fn new(
        name: impl Into<String>,
        atomic_mass: impl Into<f64>,
        atomic_number: impl Into<f64>,
        density: impl Into<f64>,
        mean_ionization_energy: impl Into<f64>,
    ) -> BetheResult<Self> {
        Ok(Self {
            name: name.into(),
            atomic_mass: positive("atomic mass", atomic_mass.into())?,
            atomic_number: positive("atomic number", atomic_number.into())?,
            density: positive("density", density.into())?,
            mean_ionization_energy: positive(
                "mean ionization energy",
                mean_ionization_energy.into(),
            )?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn atomic_mass(&self) -> f64 {
        self.atomic_mass
    }

    pub fn atomic_number(&self) -> f64 {
        self.atomic_number
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn mean_ionization_energy(&self) -> f64 {
        self.mean_ionization_energy
    }
}

fn positive(field: &'static str, value: f64) -> BetheResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(BetheError::Validation {
            field,
            value,
            constraint: "a finite value > 0",
        })
    }
}

impl Absorber for Material {
    fn atomic_number(&self) -> f64 {
        self.atomic_number
    }

    fn atomic_mass(&self) -> f64 {
        self.atomic_mass
    }

    fn mean_ionization_energy(&self) -> f64 {
        self.mean_ionization_energy
    }

    fn density(&self) -> f64 {
        self.density
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Material name: {}", self.name)?;
        writeln!(f, "Atomic mass = {}", self.atomic_mass)?;
        writeln!(f, "Atomic number (Z) = {}", self.atomic_number)?;
        writeln!(f, "Density = {:.2} g/cm^3", self.density)?;
        write!(f, "Ionization energy = {} MeV", self.mean_ionization_energy)
    }
}
