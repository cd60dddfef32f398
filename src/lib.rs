//! Lamina Solver - mechanics of fiber-reinforced composite plies
//!
//! This library derives the elastic behavior of a single composite ply from
//! its fiber and matrix constituents and solves its stress/strain state,
//! supporting:
//! - Micromechanics (rule of mixtures, Halpin-Tsai)
//! - 3D and plane-stress compliance/stiffness matrices
//! - In-plane rotation of ply matrices by fiber angle
//! - Stress/strain solves with a geometrically constrained direction and
//!   thermal/moisture strains
//!
//! ## Example
//! ```rust
//! use lamina_solver::prelude::*;
//!
//! let fiber = Material::orthotropic(
//!     [233e9, 23.1e9, 23.1e9],
//!     [0.4, 0.2, 0.2],
//!     [8.27e9, 8.96e9, 8.96e9],
//! ).unwrap();
//! let matrix = Material::isotropic(4.62e9, 0.36).unwrap();
//!
//! // Homogenize at 61% fiber volume, hexagonal packing
//! let def = LaminaDefinition::from_constituents(fiber, matrix, 0.61)
//!     .with_thickness(1.5e-4)
//!     .with_orientation(30.0);
//! let lamina = Lamina::new(def).unwrap();
//!
//! // Transverse load with the ply restrained through its thickness
//! let stress = StressTensor::uniaxial(2, 125e6).unwrap();
//! let state = lamina
//!     .solve_boundary_conditions(&stress, Direction::Three, &[], &SolverOptions::default())
//!     .unwrap();
//! assert_eq!(state.strain[2], 0.0);
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod micromechanics;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{Direction, SolverOptions};
    pub use crate::elements::{Lamina, LaminaDefinition, Laminate, Material, Property};
    pub use crate::error::{LaminaError, LaminaResult};
    pub use crate::loads::{NonMechanicalStrain, StressTensor};
    pub use crate::math::{Mat3, Mat6, Vec3, Vec6};
    pub use crate::micromechanics::{homogenize, ArrayGeometry};
    pub use crate::results::StressStrainState;
}
