//! Applied stress states and non-mechanical strains

mod hygrothermal;
mod stress_tensor;

pub use hygrothermal::NonMechanicalStrain;
pub use stress_tensor::StressTensor;
