//! Bethe-Bloch ionization energy loss for charged particles in matter,
//! with the relativistic kinematics that drive it.

pub mod constants;
pub mod error;
pub mod material;
pub mod metrics;
pub mod particle;
pub mod relativity;
pub mod stopping;

pub use constants::PhysicalConstants;
pub use error::{BetheError, BetheResult};
pub use material::Material;
pub use particle::Particle;
pub use stopping::{Absorber, Projectile, StoppingPowerEvaluator};
